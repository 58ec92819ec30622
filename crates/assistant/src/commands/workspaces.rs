//! Workspaces command - workspace management.

use anyhow::Result;
use assistant_client::{CreateWorkspace, GetQuery, UpdateWorkspace};
use clap::{Args, Subcommand};
use console::Style;

use super::connect::connect;
use super::{Context, ListArgs, or_dash, print_header, print_pagination, truncate};

/// Arguments for the workspaces command.
#[derive(Args, Debug)]
pub struct WorkspacesArgs {
    #[command(subcommand)]
    pub command: WorkspacesCommand,
}

#[derive(Subcommand, Debug)]
pub enum WorkspacesCommand {
    /// List workspaces
    List(ListArgs),

    /// Show a workspace (defaults to the selected one)
    Show {
        /// Workspace ID
        id: Option<String>,

        /// Include intents, entities and dialog nodes
        #[arg(long)]
        export: bool,
    },

    /// Create a workspace
    Create {
        /// Workspace name
        name: String,

        /// Language code
        #[arg(long, default_value = "en")]
        language: String,

        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Rename or re-describe a workspace
    Update {
        /// Workspace ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a workspace
    Delete {
        /// Workspace ID
        id: String,
    },
}

/// Run the workspaces command.
pub async fn run(args: WorkspacesArgs, ctx: &Context) -> Result<()> {
    let conn = connect(ctx)?;
    let api = conn.client.workspaces();
    let dim = Style::new().dim();
    let green = Style::new().green();

    match args.command {
        WorkspacesCommand::List(list) => {
            let page = api.list(&list.query()).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            print_header("Workspaces");
            if page.workspaces.is_empty() {
                println!("{}", dim.apply_to("No workspaces found"));
            }
            for ws in &page.workspaces {
                println!(
                    "{:<38} {:<4} {}",
                    ws.workspace_id,
                    ws.language,
                    truncate(&ws.name, 40)
                );
            }
            print_pagination(&page.pagination, page.workspaces.len());
        }
        WorkspacesCommand::Show { id, export } => {
            let id = match id {
                Some(id) => id,
                None => conn.workspace()?.to_string(),
            };
            let query = GetQuery {
                export,
                include_audit: true,
            };
            let ws = api.get(&id, &query).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&ws)?);
                return Ok(());
            }

            print_header(&ws.name);
            println!("ID:          {}", ws.workspace_id);
            println!("Language:    {}", ws.language);
            println!("Status:      {}", or_dash(ws.status.as_deref()));
            println!("Description: {}", or_dash(ws.description.as_deref()));
            println!("Updated:     {}", or_dash(ws.updated.as_deref()));
            if let Some(intents) = &ws.intents {
                println!("Intents:     {}", intents.len());
            }
            if let Some(entities) = &ws.entities {
                println!("Entities:    {}", entities.len());
            }
            if let Some(nodes) = &ws.dialog_nodes {
                println!("Nodes:       {}", nodes.len());
            }
        }
        WorkspacesCommand::Create {
            name,
            language,
            description,
        } => {
            let mut request = CreateWorkspace::new(name, language);
            request.description = description;
            let ws = api.create(&request).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&ws)?);
            } else {
                println!(
                    "{} Workspace created: {}",
                    green.apply_to("✓"),
                    dim.apply_to(&ws.workspace_id)
                );
            }
        }
        WorkspacesCommand::Update {
            id,
            name,
            description,
        } => {
            let request = UpdateWorkspace {
                name,
                description,
                ..Default::default()
            };
            let ws = api.update(&id, &request, false).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&ws)?);
            } else {
                println!("{} Workspace updated: {}", green.apply_to("✓"), ws.name);
            }
        }
        WorkspacesCommand::Delete { id } => {
            api.delete(&id).await?;
            println!("{} Workspace deleted: {}", green.apply_to("✓"), id);
        }
    }

    Ok(())
}
