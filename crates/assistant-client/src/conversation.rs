//! Stateful multi-turn conversations.
//!
//! The service owns all dialog state. The client's only job is to carry the
//! [`Context`] from each response into the next request, untouched except for
//! extension keys the caller adds in between. [`Conversation`] does that
//! bookkeeping:
//!
//! ```text
//! NotStarted ──open()──▶ Active ──send()──▶ Active ──send()──▶ ...
//! ```
//!
//! A turn that fails (transport error, service error, bad body, timeout) or
//! whose future is dropped before completion leaves the conversation exactly
//! as it was. Turns are not retried: resubmitting a turn advances the dialog
//! again.
//!
//! # Example
//!
//! ```no_run
//! use assistant_client::AssistantClient;
//!
//! # async fn example() -> assistant_client::Result<()> {
//! let client = AssistantClient::builder().version("2018-02-16").build()?;
//! let mut conversation = client.conversation("my-workspace");
//!
//! let greeting = conversation.open(None).await?;
//! println!("{}", greeting.text());
//!
//! conversation.set_extension("user_tier", "gold")?;
//! let reply = conversation.send("Turn on the radio.").await?;
//! println!("{}", reply.text());
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

use crate::api::MessageOptions;
use crate::client::AssistantClient;
use crate::error::{Error, Result};
use crate::message::{Context, MessageRequest, MessageResponse};

/// Where a conversation is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConversationState {
    /// No turn has succeeded yet.
    #[default]
    NotStarted,
    /// At least one turn succeeded; holds the context for the next turn.
    Active {
        /// Context returned by the last successful turn.
        context: Context,
    },
}

/// A conversation with one workspace, threading context between turns.
///
/// Turn methods take `&mut self`, so two turns of the same conversation can
/// never be in flight at once.
pub struct Conversation {
    client: AssistantClient,
    workspace_id: String,
    options: MessageOptions,
    state: ConversationState,
}

impl Conversation {
    /// Create a conversation that has not been opened yet.
    pub fn new(client: AssistantClient, workspace_id: impl Into<String>) -> Self {
        Self {
            client,
            workspace_id: workspace_id.into(),
            options: MessageOptions::default(),
            state: ConversationState::NotStarted,
        }
    }

    /// Resume a conversation from a context saved earlier.
    pub fn resume(
        client: AssistantClient,
        workspace_id: impl Into<String>,
        context: Context,
    ) -> Self {
        Self {
            state: ConversationState::Active { context },
            ..Self::new(client, workspace_id)
        }
    }

    /// Ask for per-node detail records on every turn.
    pub fn with_nodes_visited_details(mut self, enabled: bool) -> Self {
        self.options.nodes_visited_details = enabled;
        self
    }

    /// Workspace this conversation talks to.
    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Whether a turn has succeeded.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ConversationState::Active { .. })
    }

    /// Context that will be sent with the next turn.
    pub fn context(&self) -> Option<&Context> {
        match &self.state {
            ConversationState::Active { context } => Some(context),
            ConversationState::NotStarted => None,
        }
    }

    /// Mutable access to the held context.
    ///
    /// Only extensions can change through it; the conversation id and the
    /// system part stay as the service sent them.
    pub fn context_mut(&mut self) -> Option<&mut Context> {
        match &mut self.state {
            ConversationState::Active { context } => Some(context),
            ConversationState::NotStarted => None,
        }
    }

    /// Conversation identifier assigned by the service.
    pub fn conversation_id(&self) -> Option<&str> {
        self.context().and_then(Context::conversation_id)
    }

    /// Set an extension key to send with the next turn.
    pub fn set_extension(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>> {
        self.context_mut()
            .ok_or(Error::ConversationNotStarted)?
            .set_extension(key, value)
    }

    /// Remove an extension key before the next turn.
    pub fn remove_extension(&mut self, key: &str) -> Option<Value> {
        self.context_mut()?.remove_extension(key)
    }

    /// Open a new conversation.
    ///
    /// Any previously held context is replaced only if the turn succeeds.
    /// The service must assign a non-empty conversation id; a response
    /// without one is rejected as [`Error::Decoding`].
    pub async fn open(&mut self, text: Option<&str>) -> Result<MessageResponse> {
        let mut request = MessageRequest::new();
        if let Some(text) = text {
            request = request.with_text(text);
        }

        let response = self
            .client
            .message()
            .send(&self.workspace_id, &request, &self.options)
            .await?;

        match response.context.conversation_id() {
            Some(id) if !id.is_empty() => {}
            _ => {
                return Err(Error::Decoding(serde::de::Error::custom(
                    "opening turn returned a context without a conversation_id",
                )));
            }
        }

        tracing::debug!(
            workspace_id = %self.workspace_id,
            conversation_id = response.context.conversation_id().unwrap_or_default(),
            "conversation opened"
        );

        self.state = ConversationState::Active {
            context: response.context.clone(),
        };
        Ok(response)
    }

    /// Continue the conversation with user text.
    pub async fn send(&mut self, text: impl Into<String>) -> Result<MessageResponse> {
        self.send_request(MessageRequest::new().with_text(text))
            .await
    }

    /// Continue the conversation with a full request.
    ///
    /// Use this to replay intents, entities, or output from an earlier turn.
    /// The held context always replaces any context set on `request`.
    pub async fn send_request(&mut self, mut request: MessageRequest) -> Result<MessageResponse> {
        let context = self.context().ok_or(Error::ConversationNotStarted)?;
        let previous_id = context.conversation_id().map(str::to_owned);
        request.context = Some(context.clone());

        let response = self
            .client
            .message()
            .send(&self.workspace_id, &request, &self.options)
            .await?;

        let returned_id = response.context.conversation_id();
        if previous_id.as_deref() != returned_id {
            tracing::warn!(
                workspace_id = %self.workspace_id,
                previous = previous_id.as_deref().unwrap_or_default(),
                returned = returned_id.unwrap_or_default(),
                "service changed the conversation id"
            );
        }

        self.state = ConversationState::Active {
            context: response.context.clone(),
        };
        Ok(response)
    }

    /// Open the conversation if needed, otherwise continue it.
    pub async fn turn(&mut self, text: &str) -> Result<MessageResponse> {
        if self.is_active() {
            self.send(text).await
        } else {
            self.open(Some(text)).await
        }
    }

    /// Drop back to `NotStarted`, returning the last context.
    pub fn reset(&mut self) -> Option<Context> {
        match std::mem::take(&mut self.state) {
            ConversationState::Active { context } => Some(context),
            ConversationState::NotStarted => None,
        }
    }

    /// End the conversation, returning the last context.
    pub fn finish(mut self) -> Option<Context> {
        self.reset()
    }
}
