//! Intents command - intents, examples and counterexamples.

use anyhow::Result;
use assistant_client::{CreateExample, CreateIntent, GetQuery, UpdateIntent};
use clap::{Args, Subcommand};
use console::Style;

use super::connect::connect;
use super::{Context, ListArgs, or_dash, print_header, print_pagination, truncate};

/// Arguments for the intents command.
#[derive(Args, Debug)]
pub struct IntentsArgs {
    #[command(subcommand)]
    pub command: IntentsCommand,
}

#[derive(Subcommand, Debug)]
pub enum IntentsCommand {
    /// List intents
    List(ListArgs),

    /// Show an intent and its examples
    Show {
        /// Intent name
        intent: String,
    },

    /// Create an intent
    Create {
        /// Intent name
        intent: String,

        /// Description
        #[arg(short, long)]
        description: Option<String>,

        /// Example utterances
        #[arg(short, long = "example")]
        examples: Vec<String>,
    },

    /// Rename an intent or change its description
    Update {
        /// Intent name
        intent: String,

        /// New name
        #[arg(long)]
        rename: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete an intent
    Delete {
        /// Intent name
        intent: String,
    },

    /// Add an example utterance to an intent
    AddExample {
        /// Intent name
        intent: String,
        /// Example text
        text: String,
    },

    /// Remove an example utterance from an intent
    RemoveExample {
        /// Intent name
        intent: String,
        /// Example text
        text: String,
    },

    /// List counterexamples
    Counterexamples(ListArgs),

    /// Mark an utterance as matching no intent
    AddCounterexample {
        /// Utterance text
        text: String,
    },

    /// Remove a counterexample
    RemoveCounterexample {
        /// Utterance text
        text: String,
    },
}

/// Run the intents command.
pub async fn run(args: IntentsArgs, ctx: &Context) -> Result<()> {
    let conn = connect(ctx)?;
    let ws = conn.workspace()?;
    let client = &conn.client;
    let dim = Style::new().dim();
    let green = Style::new().green();

    match args.command {
        IntentsCommand::List(list) => {
            let page = client.intents().list(ws, &list.query()).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            print_header("Intents");
            if page.intents.is_empty() {
                println!("{}", dim.apply_to("No intents found"));
            }
            for intent in &page.intents {
                println!(
                    "#{:<30} {}",
                    intent.intent,
                    dim.apply_to(truncate(intent.description.as_deref().unwrap_or(""), 45))
                );
            }
            print_pagination(&page.pagination, page.intents.len());
        }
        IntentsCommand::Show { intent } => {
            let intent = client.intents().get(ws, &intent, &GetQuery::full()).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&intent)?);
                return Ok(());
            }

            print_header(&format!("#{}", intent.intent));
            println!("Description: {}", or_dash(intent.description.as_deref()));
            println!("Updated:     {}", or_dash(intent.updated.as_deref()));
            println!();
            let examples = intent.examples.unwrap_or_default();
            if examples.is_empty() {
                println!("{}", dim.apply_to("No examples"));
            }
            for example in &examples {
                println!("  {}", example.text);
            }
        }
        IntentsCommand::Create {
            intent,
            description,
            examples,
        } => {
            let request = CreateIntent {
                intent,
                description,
                examples: examples.into_iter().map(CreateExample::new).collect(),
            };
            let created = client.intents().create(ws, &request).await?;
            println!(
                "{} Intent created: #{}",
                green.apply_to("✓"),
                created.intent
            );
        }
        IntentsCommand::Update {
            intent,
            rename,
            description,
        } => {
            let request = UpdateIntent {
                new_intent: rename,
                new_description: description,
                new_examples: None,
            };
            let updated = client.intents().update(ws, &intent, &request).await?;
            println!(
                "{} Intent updated: #{}",
                green.apply_to("✓"),
                updated.intent
            );
        }
        IntentsCommand::Delete { intent } => {
            client.intents().delete(ws, &intent).await?;
            println!("{} Intent deleted: #{}", green.apply_to("✓"), intent);
        }
        IntentsCommand::AddExample { intent, text } => {
            client
                .examples()
                .create(ws, &intent, &CreateExample::new(&text))
                .await?;
            println!("{} Example added to #{}", green.apply_to("✓"), intent);
        }
        IntentsCommand::RemoveExample { intent, text } => {
            client.examples().delete(ws, &intent, &text).await?;
            println!("{} Example removed from #{}", green.apply_to("✓"), intent);
        }
        IntentsCommand::Counterexamples(list) => {
            let page = client.counterexamples().list(ws, &list.query()).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            print_header("Counterexamples");
            if page.counterexamples.is_empty() {
                println!("{}", dim.apply_to("No counterexamples found"));
            }
            for counterexample in &page.counterexamples {
                println!("  {}", counterexample.text);
            }
            print_pagination(&page.pagination, page.counterexamples.len());
        }
        IntentsCommand::AddCounterexample { text } => {
            client.counterexamples().create(ws, &text).await?;
            println!("{} Counterexample added", green.apply_to("✓"));
        }
        IntentsCommand::RemoveCounterexample { text } => {
            client.counterexamples().delete(ws, &text).await?;
            println!("{} Counterexample removed", green.apply_to("✓"));
        }
    }

    Ok(())
}
