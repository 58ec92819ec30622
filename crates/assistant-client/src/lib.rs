//! HTTP client SDK for the Assistant conversation service.
//!
//! This crate provides a typed client for the service's message endpoint
//! and its workspace management API.
//!
//! # Example
//!
//! ```no_run
//! use assistant_client::{AssistantClient, Result};
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = AssistantClient::builder()
//!     .service_url("https://gateway.watsonplatform.net/assistant/api")
//!     .version("2018-02-16")
//!     .api_key("secret")
//!     .build()?;
//!
//! // Hold a conversation
//! let mut conversation = client.conversation("my-workspace");
//! let greeting = conversation.open(None).await?;
//! println!("{}", greeting.text());
//!
//! let reply = conversation.send("Turn on the lights").await?;
//! if let Some(intent) = reply.top_intent() {
//!     println!("#{} ({:.2})", intent.intent, intent.confidence);
//! }
//!
//! // Manage the workspace
//! let intents = client.intents().list("my-workspace", &Default::default()).await?;
//! println!("{} intents", intents.intents.len());
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Message**: Single turns and stateful [`Conversation`]s
//! - **Workspaces**: Create, list, update, delete workspaces
//! - **Intents**, **Examples**, **Counterexamples**: Training data
//! - **Entities**, **Values**, **Synonyms**: Entity definitions
//! - **Dialog nodes**: The dialog tree
//! - **Logs**: Message exchange history

pub mod api;
pub mod client;
pub mod conversation;
pub mod error;
pub mod message;
pub mod types;

pub use client::{AssistantClient, ClientBuilder, Credentials, DEFAULT_SERVICE_URL};
pub use conversation::{Conversation, ConversationState};
pub use error::{Error, Result};
pub use message::*;
pub use types::*;

// Re-export API types that are commonly used with query methods
pub use api::{GetQuery, ListQuery, LogQuery, MessageOptions};
