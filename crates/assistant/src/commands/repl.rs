//! REPL (Read-Eval-Print Loop) implementation for interactive conversations.

use anyhow::Result;
use assistant_client::Conversation;
use console::{Style, Term, style};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use serde_json::Value;

use super::message::print_response;

/// REPL state and configuration.
pub struct Repl {
    conversation: Conversation,
    editor: Editor<(), DefaultHistory>,
    term: Term,
    verbose: bool,
}

impl Repl {
    /// Create a new REPL instance.
    pub fn new(conversation: Conversation, verbose: bool) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();

        let editor = Editor::with_config(config)?;

        Ok(Self {
            conversation,
            editor,
            term: Term::stdout(),
            verbose,
        })
    }

    /// Run the REPL loop.
    pub async fn run(&mut self) -> Result<()> {
        self.print_welcome();

        if self.conversation.is_active() {
            self.print_dim("Resumed conversation");
        } else {
            self.open().await;
        }

        loop {
            let prompt = self.format_prompt();

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        match self.handle_slash_command(line).await {
                            Ok(ControlFlow::Continue) => continue,
                            Ok(ControlFlow::Exit) => break,
                            Err(e) => {
                                self.print_error(&format!("Command error: {}", e));
                                continue;
                            }
                        }
                    }

                    self.send_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!();
                    self.print_dim("(Interrupted - type /quit to exit)");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(e) => {
                    self.print_error(&format!("Input error: {}", e));
                    break;
                }
            }
        }

        self.print_dim("Goodbye!");
        Ok(())
    }

    /// Open a new conversation and print the greeting.
    async fn open(&mut self) {
        let result = tokio::select! {
            result = self.conversation.open(None) => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };

        match result {
            Some(Ok(response)) => {
                print_response(&response, self.verbose);
                println!();
            }
            Some(Err(e)) => self.print_error(&e.to_string()),
            None => self.print_dim("(Cancelled)"),
        }
    }

    /// Send one turn. Ctrl+C abandons the turn and keeps the last context.
    async fn send_message(&mut self, text: &str) {
        let result = tokio::select! {
            result = self.conversation.turn(text) => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };

        match result {
            Some(Ok(response)) => {
                print_response(&response, self.verbose);
                println!();
            }
            Some(Err(e)) => {
                self.print_error(&e.to_string());
                self.print_dim("(Context unchanged; the turn can be retried)");
            }
            None => {
                println!();
                self.print_dim("(Cancelled; context unchanged)");
            }
        }
    }

    /// Handle a slash command.
    async fn handle_slash_command(&mut self, input: &str) -> Result<ControlFlow> {
        let rest = input[1..].trim();
        let (cmd, arg) = match rest.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (rest, ""),
        };

        match cmd {
            "quit" | "q" | "exit" => {
                return Ok(ControlFlow::Exit);
            }
            "help" | "h" | "?" => {
                self.print_help();
            }
            "clear" | "cls" => {
                self.term.clear_screen()?;
            }
            "new" => {
                self.conversation.reset();
                self.print_dim("Started new conversation");
                self.open().await;
            }
            "id" => match self.conversation.conversation_id() {
                Some(id) => println!("Conversation: {}", id),
                None => self.print_dim("No active conversation (will open on next message)"),
            },
            "context" => match self.conversation.context() {
                Some(context) => println!("{}", serde_json::to_string_pretty(context)?),
                None => self.print_dim("No context yet"),
            },
            "set" if !arg.is_empty() => {
                let (key, value) = parse_assignment(arg)?;
                self.conversation.set_extension(key, value)?;
                self.print_dim(&format!("Set {} for the next turn", key));
            }
            "unset" if !arg.is_empty() => match self.conversation.remove_extension(arg) {
                Some(_) => self.print_dim(&format!("Removed {}", arg)),
                None => self.print_dim(&format!("{} is not set", arg)),
            },
            "save" if !arg.is_empty() => match self.conversation.context() {
                Some(context) => {
                    std::fs::write(arg, serde_json::to_string_pretty(context)?)?;
                    let green = Style::new().green();
                    println!("{} Context saved to {}", green.apply_to("✓"), arg);
                }
                None => self.print_dim("No context yet"),
            },
            "verbose" => {
                self.verbose = !self.verbose;
                self.print_dim(if self.verbose {
                    "Showing intents, entities and nodes"
                } else {
                    "Showing response text only"
                });
            }
            "" => {
                self.print_dim("Type /help for available commands");
            }
            _ => {
                self.print_error(&format!("Unknown command: /{}", cmd));
                self.print_dim("Type /help for available commands");
            }
        }

        Ok(ControlFlow::Continue)
    }

    fn print_welcome(&self) {
        let dim = Style::new().dim();
        println!();
        println!("{}", style("Assistant Chat").bold().cyan());
        println!("{}", dim.apply_to("─".repeat(40)));
        println!(
            "{}",
            dim.apply_to(format!("Workspace: {}", self.conversation.workspace_id()))
        );
        println!(
            "{}",
            dim.apply_to("Use /help for commands, Ctrl+D to exit.")
        );
        println!();
    }

    fn print_help(&self) {
        let dim = Style::new().dim();
        println!();
        println!("{}", style("Available Commands").bold());
        println!("{}", dim.apply_to("─".repeat(40)));
        println!("  {}  - Exit the REPL", style("/quit, /q").cyan());
        println!("  {}  - Show this help", style("/help, /h, /?").cyan());
        println!("  {}  - Clear the screen", style("/clear").cyan());
        println!("  {}  - Start a new conversation", style("/new").cyan());
        println!("  {}  - Show the conversation ID", style("/id").cyan());
        println!("  {}  - Print the current context", style("/context").cyan());
        println!(
            "  {}  - Set a context variable (JSON or text)",
            style("/set <key>=<value>").cyan()
        );
        println!("  {}  - Remove a context variable", style("/unset <key>").cyan());
        println!("  {}  - Save the context to a file", style("/save <file>").cyan());
        println!("  {}  - Toggle recognition details", style("/verbose").cyan());
        println!();
        println!("{}", dim.apply_to("Keyboard shortcuts:"));
        println!("  {} - Cancel the turn in flight", dim.apply_to("Ctrl+C"));
        println!("  {} - Exit the REPL", dim.apply_to("Ctrl+D"));
        println!();
    }

    fn format_prompt(&self) -> String {
        format!("{} ", style("you>").cyan().bold())
    }

    fn print_dim(&self, msg: &str) {
        let dim = Style::new().dim();
        println!("{}", dim.apply_to(msg));
    }

    fn print_error(&self, msg: &str) {
        let red = Style::new().red();
        println!("{} {}", red.apply_to("Error:"), msg);
    }
}

/// Control flow for the REPL.
pub enum ControlFlow {
    Continue,
    Exit,
}

/// Parse `key=value`; the value is read as JSON when it parses, else as text.
fn parse_assignment(arg: &str) -> Result<(&str, Value)> {
    let (key, raw) = arg
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected <key>=<value>"))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("missing key before '='");
    }
    let raw = raw.trim();
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key, value))
}
