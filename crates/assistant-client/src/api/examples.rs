//! Intent examples API.

use crate::api::{GetQuery, ListQuery};
use crate::client::AssistantClient;
use crate::error::Result;
use crate::types::{CreateExample, Example, ExampleCollection, UpdateExample};

/// Intent examples API client.
pub struct ExamplesApi {
    client: AssistantClient,
}

impl ExamplesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the examples of an intent.
    pub async fn list(
        &self,
        workspace_id: &str,
        intent: &str,
        query: &ListQuery,
    ) -> Result<ExampleCollection> {
        self.client
            .get_with_query(&["workspaces", workspace_id, "intents", intent, "examples"], query)
            .await
    }

    /// Get an example by its text.
    pub async fn get(
        &self,
        workspace_id: &str,
        intent: &str,
        text: &str,
        query: &GetQuery,
    ) -> Result<Example> {
        self.client
            .get_with_query(
                &["workspaces", workspace_id, "intents", intent, "examples", text],
                query,
            )
            .await
    }

    /// Add an example to an intent.
    pub async fn create(
        &self,
        workspace_id: &str,
        intent: &str,
        request: &CreateExample,
    ) -> Result<Example> {
        self.client
            .post(&["workspaces", workspace_id, "intents", intent, "examples"], request)
            .await
    }

    /// Update an example.
    pub async fn update(
        &self,
        workspace_id: &str,
        intent: &str,
        text: &str,
        request: &UpdateExample,
    ) -> Result<Example> {
        self.client
            .post(
                &["workspaces", workspace_id, "intents", intent, "examples", text],
                request,
            )
            .await
    }

    /// Delete an example.
    pub async fn delete(&self, workspace_id: &str, intent: &str, text: &str) -> Result<()> {
        self.client
            .delete(&["workspaces", workspace_id, "intents", intent, "examples", text])
            .await
    }
}
