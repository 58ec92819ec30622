//! Counterexamples API.

use crate::api::{GetQuery, ListQuery};
use crate::client::AssistantClient;
use crate::error::Result;
use crate::types::{
    Counterexample, CounterexampleCollection, CreateCounterexample, UpdateCounterexample,
};

/// Counterexamples API client.
pub struct CounterexamplesApi {
    client: AssistantClient,
}

impl CounterexamplesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the counterexamples of a workspace.
    pub async fn list(
        &self,
        workspace_id: &str,
        query: &ListQuery,
    ) -> Result<CounterexampleCollection> {
        self.client
            .get_with_query(&["workspaces", workspace_id, "counterexamples"], query)
            .await
    }

    /// Get a counterexample by its text.
    pub async fn get(
        &self,
        workspace_id: &str,
        text: &str,
        query: &GetQuery,
    ) -> Result<Counterexample> {
        self.client
            .get_with_query(&["workspaces", workspace_id, "counterexamples", text], query)
            .await
    }

    /// Create a counterexample.
    pub async fn create(&self, workspace_id: &str, text: &str) -> Result<Counterexample> {
        self.client
            .post(
                &["workspaces", workspace_id, "counterexamples"],
                &CreateCounterexample::new(text),
            )
            .await
    }

    /// Update a counterexample.
    pub async fn update(
        &self,
        workspace_id: &str,
        text: &str,
        request: &UpdateCounterexample,
    ) -> Result<Counterexample> {
        self.client
            .post(&["workspaces", workspace_id, "counterexamples", text], request)
            .await
    }

    /// Delete a counterexample.
    pub async fn delete(&self, workspace_id: &str, text: &str) -> Result<()> {
        self.client
            .delete(&["workspaces", workspace_id, "counterexamples", text])
            .await
    }
}
