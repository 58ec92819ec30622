//! Logs command - message log queries.

use anyhow::Result;
use assistant_client::{Log, LogCollection, LogQuery};
use clap::{Args, Subcommand};
use console::Style;

use super::connect::connect;
use super::{Context, print_header, truncate};

/// Arguments for the logs command.
#[derive(Args, Debug)]
pub struct LogsArgs {
    #[command(subcommand)]
    pub command: LogsCommand,
}

/// Query flags for log listings.
#[derive(Args, Debug, Clone)]
pub struct LogFilterArgs {
    /// Filter expression, e.g. `response.intents:intent::hello`
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Maximum logs per page
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Sort attribute
    #[arg(long, default_value = "-request_timestamp")]
    pub sort: String,

    /// Continue from a cursor printed by a previous page
    #[arg(long)]
    pub cursor: Option<String>,
}

impl LogFilterArgs {
    fn query(&self) -> LogQuery {
        LogQuery {
            filter: self.filter.clone(),
            sort: Some(self.sort.clone()),
            page_limit: self.limit,
            cursor: self.cursor.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum LogsCommand {
    /// List logs of the selected workspace
    List(LogFilterArgs),

    /// List logs across workspaces (requires --filter)
    All(LogFilterArgs),
}

/// Run the logs command.
pub async fn run(args: LogsArgs, ctx: &Context) -> Result<()> {
    let conn = connect(ctx)?;

    let logs = match &args.command {
        LogsCommand::List(filter) => {
            conn.client
                .logs()
                .list(conn.workspace()?, &filter.query())
                .await?
        }
        LogsCommand::All(filter) => conn.client.logs().list_all(&filter.query()).await?,
    };

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&logs)?);
    } else {
        print_logs(&logs);
    }

    Ok(())
}

fn print_logs(logs: &LogCollection) {
    let dim = Style::new().dim();
    print_header("Logs");

    if logs.logs.is_empty() {
        println!("{}", dim.apply_to("No logs found"));
    }
    for log in &logs.logs {
        print_log(log);
    }

    if let Some(cursor) = &logs.pagination.next_cursor {
        println!();
        println!(
            "{}",
            dim.apply_to(format!("More available: --cursor {}", cursor))
        );
    }
}

fn print_log(log: &Log) {
    let dim = Style::new().dim();
    let input = log
        .request
        .input
        .as_ref()
        .and_then(|i| i.text.as_deref())
        .unwrap_or("");
    let intent = log
        .response
        .top_intent()
        .map(|i| format!("#{} ({:.2})", i.intent, i.confidence))
        .unwrap_or_else(|| "-".to_string());

    println!(
        "{} {}",
        dim.apply_to(&log.request_timestamp),
        truncate(input, 50)
    );
    println!(
        "    {} {}",
        dim.apply_to(intent),
        truncate(&log.response.text(), 60)
    );
}
