//! Chat command - interactive conversation REPL.

use std::path::PathBuf;

use anyhow::Result;
use assistant_client::Conversation;
use clap::Args;

use super::Context;
use super::connect::connect;
use super::message::read_context;
use super::repl::Repl;

/// Arguments for the chat command.
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Resume from a context saved with `message --save-context` or `/save`
    #[arg(short, long, value_name = "FILE")]
    pub resume: Option<PathBuf>,

    /// Include details for every visited dialog node
    #[arg(long)]
    pub nodes: bool,
}

/// Run the chat command (REPL).
pub async fn run(args: ChatArgs, ctx: &Context) -> Result<()> {
    let conn = connect(ctx)?;
    let workspace = conn.workspace()?.to_string();

    let conversation = match &args.resume {
        Some(path) => Conversation::resume(conn.client.clone(), &workspace, read_context(path)?),
        None => conn.client.conversation(&workspace),
    }
    .with_nodes_visited_details(args.nodes);

    let mut repl = Repl::new(conversation, ctx.verbose)?;
    repl.run().await
}
