//! Entities command - entities, values and synonyms.

use anyhow::Result;
use assistant_client::{CreateEntity, CreateValue, GetQuery, UpdateEntity};
use clap::{Args, Subcommand};
use console::Style;

use super::connect::connect;
use super::{Context, ListArgs, or_dash, print_header, print_pagination};

/// Arguments for the entities command.
#[derive(Args, Debug)]
pub struct EntitiesArgs {
    #[command(subcommand)]
    pub command: EntitiesCommand,
}

#[derive(Subcommand, Debug)]
pub enum EntitiesCommand {
    /// List entities
    List(ListArgs),

    /// Show an entity with its values and synonyms
    Show {
        /// Entity name
        entity: String,
    },

    /// Create an entity
    Create {
        /// Entity name
        entity: String,

        /// Description
        #[arg(short, long)]
        description: Option<String>,

        /// Values to create with the entity
        #[arg(long = "value")]
        values: Vec<String>,

        /// Enable fuzzy matching
        #[arg(long)]
        fuzzy: bool,
    },

    /// Change an entity's description or fuzzy matching
    Update {
        /// Entity name
        entity: String,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// Enable or disable fuzzy matching
        #[arg(long)]
        fuzzy: Option<bool>,
    },

    /// Delete an entity
    Delete {
        /// Entity name
        entity: String,
    },

    /// List the values of an entity
    Values {
        /// Entity name
        entity: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Add a value to an entity
    AddValue {
        /// Entity name
        entity: String,
        /// Value text
        value: String,
        /// Synonyms for the value
        #[arg(short, long = "synonym")]
        synonyms: Vec<String>,
    },

    /// Remove a value from an entity
    RemoveValue {
        /// Entity name
        entity: String,
        /// Value text
        value: String,
    },

    /// Add a synonym to a value
    AddSynonym {
        /// Entity name
        entity: String,
        /// Value text
        value: String,
        /// Synonym text
        synonym: String,
    },

    /// Remove a synonym from a value
    RemoveSynonym {
        /// Entity name
        entity: String,
        /// Value text
        value: String,
        /// Synonym text
        synonym: String,
    },
}

/// Run the entities command.
pub async fn run(args: EntitiesArgs, ctx: &Context) -> Result<()> {
    let conn = connect(ctx)?;
    let ws = conn.workspace()?;
    let client = &conn.client;
    let dim = Style::new().dim();
    let green = Style::new().green();

    match args.command {
        EntitiesCommand::List(list) => {
            let page = client.entities().list(ws, &list.query()).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            print_header("Entities");
            if page.entities.is_empty() {
                println!("{}", dim.apply_to("No entities found"));
            }
            for entity in &page.entities {
                let fuzzy = if entity.fuzzy_match == Some(true) {
                    " (fuzzy)"
                } else {
                    ""
                };
                println!("@{}{}", entity.entity, dim.apply_to(fuzzy));
            }
            print_pagination(&page.pagination, page.entities.len());
        }
        EntitiesCommand::Show { entity } => {
            let entity = client.entities().get(ws, &entity, &GetQuery::full()).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&entity)?);
                return Ok(());
            }

            print_header(&format!("@{}", entity.entity));
            println!("Description: {}", or_dash(entity.description.as_deref()));
            println!("Updated:     {}", or_dash(entity.updated.as_deref()));
            println!();
            for value in entity.values.unwrap_or_default() {
                let alternatives = value
                    .synonyms
                    .or(value.patterns)
                    .unwrap_or_default()
                    .join(", ");
                println!("  {:<24} {}", value.value, dim.apply_to(alternatives));
            }
        }
        EntitiesCommand::Create {
            entity,
            description,
            values,
            fuzzy,
        } => {
            let request = CreateEntity {
                entity,
                description,
                values: values.into_iter().map(CreateValue::new).collect(),
                fuzzy_match: fuzzy.then_some(true),
                ..Default::default()
            };
            let created = client.entities().create(ws, &request).await?;
            println!(
                "{} Entity created: @{}",
                green.apply_to("✓"),
                created.entity
            );
        }
        EntitiesCommand::Update {
            entity,
            description,
            fuzzy,
        } => {
            let request = UpdateEntity {
                new_description: description,
                new_fuzzy_match: fuzzy,
                ..Default::default()
            };
            let updated = client.entities().update(ws, &entity, &request).await?;
            println!(
                "{} Entity updated: @{}",
                green.apply_to("✓"),
                updated.entity
            );
        }
        EntitiesCommand::Delete { entity } => {
            client.entities().delete(ws, &entity).await?;
            println!("{} Entity deleted: @{}", green.apply_to("✓"), entity);
        }
        EntitiesCommand::Values { entity, list } => {
            let page = client.values().list(ws, &entity, &list.query()).await?;
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            print_header(&format!("@{} values", entity));
            for value in &page.values {
                println!("  {}", value.value);
            }
            print_pagination(&page.pagination, page.values.len());
        }
        EntitiesCommand::AddValue {
            entity,
            value,
            synonyms,
        } => {
            let request = CreateValue {
                synonyms,
                ..CreateValue::new(value)
            };
            let created = client.values().create(ws, &entity, &request).await?;
            println!(
                "{} Value added: @{}:{}",
                green.apply_to("✓"),
                entity,
                created.value
            );
        }
        EntitiesCommand::RemoveValue { entity, value } => {
            client.values().delete(ws, &entity, &value).await?;
            println!(
                "{} Value removed: @{}:{}",
                green.apply_to("✓"),
                entity,
                value
            );
        }
        EntitiesCommand::AddSynonym {
            entity,
            value,
            synonym,
        } => {
            client
                .synonyms()
                .create(ws, &entity, &value, &synonym)
                .await?;
            println!(
                "{} Synonym added to @{}:{}",
                green.apply_to("✓"),
                entity,
                value
            );
        }
        EntitiesCommand::RemoveSynonym {
            entity,
            value,
            synonym,
        } => {
            client
                .synonyms()
                .delete(ws, &entity, &value, &synonym)
                .await?;
            println!(
                "{} Synonym removed from @{}:{}",
                green.apply_to("✓"),
                entity,
                value
            );
        }
    }

    Ok(())
}
