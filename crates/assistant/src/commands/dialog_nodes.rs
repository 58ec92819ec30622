//! Dialog nodes command - inspect the dialog tree.

use anyhow::Result;
use assistant_client::{DialogNode, GetQuery, UpdateDialogNode};
use clap::{Args, Subcommand};
use console::Style;

use super::connect::connect;
use super::{Context, ListArgs, or_dash, print_header, print_pagination, truncate};

/// Arguments for the dialog-nodes command.
#[derive(Args, Debug)]
pub struct DialogNodesArgs {
    #[command(subcommand)]
    pub command: DialogNodesCommand,
}

#[derive(Subcommand, Debug)]
pub enum DialogNodesCommand {
    /// List dialog nodes
    List(ListArgs),

    /// Show a dialog node
    Show {
        /// Dialog node ID
        id: String,
    },

    /// Enable or disable a dialog node
    Toggle {
        /// Dialog node ID
        id: String,

        /// Disable instead of enable
        #[arg(long)]
        disable: bool,
    },

    /// Delete a dialog node
    Delete {
        /// Dialog node ID
        id: String,
    },
}

/// Run the dialog-nodes command.
pub async fn run(args: DialogNodesArgs, ctx: &Context) -> Result<()> {
    let conn = connect(ctx)?;
    let ws = conn.workspace()?;
    let api = conn.client.dialog_nodes();
    let dim = Style::new().dim();
    let green = Style::new().green();

    match args.command {
        DialogNodesCommand::List(list) => {
            let page = api.list(ws, &list.query()).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            print_header("Dialog nodes");
            if page.dialog_nodes.is_empty() {
                println!("{}", dim.apply_to("No dialog nodes found"));
            }
            for node in &page.dialog_nodes {
                println!(
                    "{:<32} {:<28} {}",
                    node.dialog_node_id,
                    truncate(node.title.as_deref().unwrap_or(""), 28),
                    dim.apply_to(truncate(node.conditions.as_deref().unwrap_or(""), 30))
                );
            }
            print_pagination(&page.pagination, page.dialog_nodes.len());
        }
        DialogNodesCommand::Show { id } => {
            let node = api
                .get(
                    ws,
                    &id,
                    &GetQuery {
                        include_audit: true,
                        ..Default::default()
                    },
                )
                .await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&node)?);
                return Ok(());
            }
            print_node(&node);
        }
        DialogNodesCommand::Toggle { id, disable } => {
            let request = UpdateDialogNode {
                new_disabled: Some(disable),
                ..Default::default()
            };
            let node = api.update(ws, &id, &request).await?;
            let state = if disable { "disabled" } else { "enabled" };
            println!(
                "{} Dialog node {}: {}",
                green.apply_to("✓"),
                state,
                node.dialog_node_id
            );
        }
        DialogNodesCommand::Delete { id } => {
            api.delete(ws, &id).await?;
            println!("{} Dialog node deleted: {}", green.apply_to("✓"), id);
        }
    }

    Ok(())
}

fn print_node(node: &DialogNode) {
    let dim = Style::new().dim();
    print_header(&node.dialog_node_id);
    println!("Title:      {}", or_dash(node.title.as_deref()));
    println!("Type:       {}", or_dash(node.node_type.as_deref()));
    println!("Conditions: {}", or_dash(node.conditions.as_deref()));
    println!("Parent:     {}", or_dash(node.parent.as_deref()));
    println!("After:      {}", or_dash(node.previous_sibling.as_deref()));
    if let Some(next) = &node.next_step {
        println!(
            "Next step:  {} {}",
            next.behavior,
            or_dash(next.dialog_node.as_deref())
        );
    }
    if node.disabled == Some(true) {
        println!("{}", dim.apply_to("(disabled)"));
    }
    if let Some(output) = &node.output {
        println!();
        println!(
            "{}",
            serde_json::to_string_pretty(output).unwrap_or_else(|_| output.to_string())
        );
    }
}
