//! Message API.

use crate::client::AssistantClient;
use crate::error::Result;
use crate::message::{Context, MessageRequest, MessageResponse};

/// Query options for a message call.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MessageOptions {
    /// Return a detail record for every visited dialog node.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub nodes_visited_details: bool,
}

/// Message API client.
///
/// Each call is one independent turn; the API keeps no state between calls.
/// Threading the context is up to the caller (or use
/// [`Conversation`](crate::Conversation)). Issuing two turns of the same
/// conversation in parallel is a caller error: the service decides which one
/// lands first and the second may act on stale dialog state.
pub struct MessageApi {
    client: AssistantClient,
}

impl MessageApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// Send one turn to a workspace.
    pub async fn send(
        &self,
        workspace_id: &str,
        request: &MessageRequest,
        options: &MessageOptions,
    ) -> Result<MessageResponse> {
        self.client
            .post_with_query(&["workspaces", workspace_id, "message"], options, request)
            .await
    }

    /// Start a new conversation.
    pub async fn open_turn(
        &self,
        workspace_id: &str,
        text: Option<&str>,
        nodes_visited_details: bool,
    ) -> Result<MessageResponse> {
        let mut request = MessageRequest::new();
        if let Some(text) = text {
            request = request.with_text(text);
        }
        let options = MessageOptions {
            nodes_visited_details,
        };
        self.send(workspace_id, &request, &options).await
    }

    /// Continue a conversation from the context of the previous turn.
    pub async fn continue_turn(
        &self,
        workspace_id: &str,
        context: &Context,
        text: impl Into<String>,
    ) -> Result<MessageResponse> {
        let request = MessageRequest::new()
            .with_text(text)
            .with_context(context.clone());
        self.send(workspace_id, &request, &MessageOptions::default())
            .await
    }
}
