//! Assistant - command-line client for the Assistant conversation service
//!
//! Main entry point for the `assistant` CLI.

use anyhow::Result;
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};

mod commands;

use commands::{chat, config, dialog_nodes, entities, intents, logs, message, workspaces};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Assistant - talk to and manage conversation workspaces
#[derive(Parser)]
#[command(name = "assistant")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Profile from the profiles file (default: current profile)
    #[arg(short, long, global = true, env = "ASSISTANT_PROFILE")]
    pub profile: Option<String>,

    /// Service URL, overriding the profile
    #[arg(long, global = true, env = "ASSISTANT_SERVICE_URL")]
    pub service_url: Option<String>,

    /// API version date, overriding the profile
    #[arg(long, global = true, env = "ASSISTANT_API_VERSION")]
    pub api_version: Option<String>,

    /// API key, overriding the profile's auth
    #[arg(long, global = true, env = "ASSISTANT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Workspace ID, overriding the profile's default workspace
    #[arg(short, long, global = true, env = "ASSISTANT_WORKSPACE")]
    pub workspace: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a single message turn
    Message(message::MessageArgs),

    /// Enter an interactive conversation (REPL)
    Chat(chat::ChatArgs),

    /// Workspace management
    Workspaces(workspaces::WorkspacesArgs),

    /// Intent and example management
    Intents(intents::IntentsArgs),

    /// Entity and value management
    Entities(entities::EntitiesArgs),

    /// Dialog node inspection
    DialogNodes(dialog_nodes::DialogNodesArgs),

    /// Message log queries
    Logs(logs::LogsArgs),

    /// Profile management
    Config(config::ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Console (human-readable) + rotating JSON file
    let filter = if cli.verbose {
        "assistant=debug,assistant_client=debug,assistant_config=debug,info"
    } else {
        "assistant=info,assistant_client=info,assistant_config=info,warn"
    };

    let log_dir = assistant_config::log_dir().unwrap_or_else(|| std::path::PathBuf::from("logs"));
    let file_appender = tracing_appender::rolling::daily(&log_dir, "assistant.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "assistant=trace,assistant_client=trace,assistant_config=trace,info",
                )),
        )
        .init();

    let command_line = commands::CommandLineFlags {
        service_url: typed(&matches, "service_url", &cli.service_url),
        api_version: typed(&matches, "api_version", &cli.api_version),
        workspace: typed(&matches, "workspace", &cli.workspace),
    };

    let ctx = commands::Context {
        profile: cli.profile,
        service_url: cli.service_url,
        api_version: cli.api_version,
        api_key: cli.api_key,
        workspace: cli.workspace,
        json_output: cli.json,
        verbose: cli.verbose,
        command_line,
    };

    match cli.command {
        Commands::Message(args) => message::run(args, &ctx).await,
        Commands::Chat(args) => chat::run(args, &ctx).await,
        Commands::Workspaces(args) => workspaces::run(args, &ctx).await,
        Commands::Intents(args) => intents::run(args, &ctx).await,
        Commands::Entities(args) => entities::run(args, &ctx).await,
        Commands::DialogNodes(args) => dialog_nodes::run(args, &ctx).await,
        Commands::Logs(args) => logs::run(args, &ctx).await,
        Commands::Config(args) => config::run(args, &ctx).await,
    }
}

/// A global flag's value, only when it was typed rather than read from the environment.
fn typed(matches: &ArgMatches, id: &str, value: &Option<String>) -> Option<String> {
    let mut matches = matches;
    while let Some((_, sub)) = matches.subcommand() {
        matches = sub;
    }
    match matches.value_source(id) {
        Some(ValueSource::CommandLine) => value.clone(),
        _ => None,
    }
}
