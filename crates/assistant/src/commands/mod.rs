//! CLI command handlers.

pub mod chat;
pub mod config;
pub mod connect;
pub mod dialog_nodes;
pub mod entities;
pub mod intents;
pub mod logs;
pub mod message;
pub mod repl;
pub mod workspaces;

use assistant_client::{ListQuery, Pagination};
use clap::Args;
use console::Style;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Profile name to use instead of the current one.
    pub profile: Option<String>,
    /// Service URL override.
    pub service_url: Option<String>,
    /// API version override.
    pub api_version: Option<String>,
    /// API key override.
    pub api_key: Option<String>,
    /// Workspace override.
    pub workspace: Option<String>,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
    /// Connection flags typed on the command line, ignoring `ASSISTANT_*`.
    pub command_line: CommandLineFlags,
}

/// The subset of connection flags given explicitly as arguments.
#[derive(Debug, Clone, Default)]
pub struct CommandLineFlags {
    pub service_url: Option<String>,
    pub api_version: Option<String>,
    pub workspace: Option<String>,
}

/// Pagination flags shared by list commands.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Maximum items per page
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Include total and matched counts
    #[arg(long)]
    pub count: bool,

    /// Sort attribute (prefix with - for descending)
    #[arg(long)]
    pub sort: Option<String>,

    /// Continue from a cursor printed by a previous page
    #[arg(long)]
    pub cursor: Option<String>,
}

impl ListArgs {
    /// Build the list query.
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page_limit: self.limit,
            include_count: self.count,
            sort: self.sort.clone(),
            cursor: self.cursor.clone(),
            ..Default::default()
        }
    }
}

/// Print a section header.
pub fn print_header(title: &str) {
    let dim = Style::new().dim();
    println!("{}", console::style(title).bold());
    println!("{}", dim.apply_to("─".repeat(50)));
}

/// Print the footer of a paginated listing.
pub fn print_pagination(pagination: &Pagination, shown: usize) {
    let dim = Style::new().dim();
    if let Some(total) = pagination.total {
        println!();
        println!("{}", dim.apply_to(format!("{} of {} shown", shown, total)));
    }
    if let Some(cursor) = &pagination.next_cursor {
        println!(
            "{}",
            dim.apply_to(format!("More available: --cursor {}", cursor))
        );
    }
}

/// Print an optional value as a dimmed dash when absent.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Truncate a single-line rendering of `s` to `max_len` characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let s = s.replace('\n', " ");
    if s.chars().count() <= max_len {
        s
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
