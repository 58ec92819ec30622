//! Message command - one turn against a workspace.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use assistant_client::{Context as DialogContext, MessageRequest, MessageResponse};
use clap::Args;
use console::Style;

use super::Context;
use super::connect::connect;

/// Arguments for the message command.
#[derive(Args, Debug)]
pub struct MessageArgs {
    /// User text (omit to open a new conversation)
    pub text: Option<String>,

    /// Continue from a context saved with --save-context
    #[arg(long, value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Write the returned context to a file for the next turn
    #[arg(long, value_name = "FILE")]
    pub save_context: Option<PathBuf>,

    /// Include details for every visited dialog node
    #[arg(long)]
    pub nodes: bool,

    /// Return all intent candidates, not just the top one
    #[arg(long)]
    pub alternate_intents: bool,
}

/// Run the message command.
pub async fn run(args: MessageArgs, ctx: &Context) -> Result<()> {
    let conn = connect(ctx)?;
    let workspace = conn.workspace()?;
    let dim = Style::new().dim();

    let mut request = MessageRequest::new();
    if let Some(text) = &args.text {
        request = request.with_text(text);
    }
    if args.alternate_intents {
        request = request.with_alternate_intents(true);
    }
    if let Some(path) = &args.context {
        request = request.with_context(read_context(path)?);
    }

    if ctx.verbose {
        println!(
            "{}",
            dim.apply_to(format!(
                "Sending to: {} (workspace {})",
                conn.client.service_url(),
                workspace
            ))
        );
    }

    let options = assistant_client::MessageOptions {
        nodes_visited_details: args.nodes,
    };
    let response = conn.client.message().send(workspace, &request, &options).await?;

    if let Some(path) = &args.save_context {
        let json = serde_json::to_string_pretty(&response.context)?;
        std::fs::write(path, json)
            .with_context(|| format!("cannot write context to {}", path.display()))?;
    }

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&response, ctx.verbose);
    }

    Ok(())
}

pub fn read_context(path: &Path) -> Result<DialogContext> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read context from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a context", path.display()))
}

/// Print a turn's output, with recognition details when verbose.
pub fn print_response(response: &MessageResponse, verbose: bool) {
    let dim = Style::new().dim();

    for line in &response.output.text {
        println!("{}", line);
    }

    if !verbose {
        return;
    }

    for intent in &response.intents {
        println!(
            "{}",
            dim.apply_to(format!("#{} ({:.2})", intent.intent, intent.confidence))
        );
    }
    let input = response
        .input
        .as_ref()
        .and_then(|i| i.text.as_deref())
        .unwrap_or_default();
    for entity in &response.entities {
        let matched = entity.matched_text(input).unwrap_or("?");
        println!(
            "{}",
            dim.apply_to(format!(
                "@{}:{} \"{}\" [{}, {})",
                entity.entity, entity.value, matched, entity.location[0], entity.location[1]
            ))
        );
    }
    if let Some(nodes) = &response.output.nodes_visited {
        println!("{}", dim.apply_to(format!("nodes: {}", nodes.join(" → "))));
    }
    for log in &response.output.log_messages {
        println!("{}", dim.apply_to(format!("[{:?}] {}", log.level, log.msg)));
    }
    if let Some(id) = response.context.conversation_id() {
        println!("{}", dim.apply_to(format!("conversation: {}", id)));
    }
}
