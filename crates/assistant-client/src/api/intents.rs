//! Intents API.

use crate::api::{GetQuery, ListQuery};
use crate::client::AssistantClient;
use crate::error::Result;
use crate::types::{CreateIntent, Intent, IntentCollection, UpdateIntent};

/// Intents API client.
pub struct IntentsApi {
    client: AssistantClient,
}

impl IntentsApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the intents of a workspace.
    pub async fn list(&self, workspace_id: &str, query: &ListQuery) -> Result<IntentCollection> {
        self.client
            .get_with_query(&["workspaces", workspace_id, "intents"], query)
            .await
    }

    /// Get an intent.
    pub async fn get(&self, workspace_id: &str, intent: &str, query: &GetQuery) -> Result<Intent> {
        self.client
            .get_with_query(&["workspaces", workspace_id, "intents", intent], query)
            .await
    }

    /// Create an intent.
    pub async fn create(&self, workspace_id: &str, request: &CreateIntent) -> Result<Intent> {
        self.client
            .post(&["workspaces", workspace_id, "intents"], request)
            .await
    }

    /// Create an intent from a name and example texts.
    pub async fn create_simple(
        &self,
        workspace_id: &str,
        intent: &str,
        examples: &[&str],
    ) -> Result<Intent> {
        let request = examples
            .iter()
            .fold(CreateIntent::new(intent), |req, text| req.with_example(*text));
        self.create(workspace_id, &request).await
    }

    /// Update an intent.
    pub async fn update(
        &self,
        workspace_id: &str,
        intent: &str,
        request: &UpdateIntent,
    ) -> Result<Intent> {
        self.client
            .post(&["workspaces", workspace_id, "intents", intent], request)
            .await
    }

    /// Delete an intent.
    pub async fn delete(&self, workspace_id: &str, intent: &str) -> Result<()> {
        self.client
            .delete(&["workspaces", workspace_id, "intents", intent])
            .await
    }
}
