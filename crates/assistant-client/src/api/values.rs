//! Entity values API.

use crate::api::{GetQuery, ListQuery};
use crate::client::AssistantClient;
use crate::error::Result;
use crate::types::{CreateValue, EntityValue, UpdateValue, ValueCollection};

/// Entity values API client.
pub struct ValuesApi {
    client: AssistantClient,
}

impl ValuesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the values of an entity.
    pub async fn list(
        &self,
        workspace_id: &str,
        entity: &str,
        query: &ListQuery,
    ) -> Result<ValueCollection> {
        self.client
            .get_with_query(&["workspaces", workspace_id, "entities", entity, "values"], query)
            .await
    }

    /// Get a value.
    pub async fn get(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        query: &GetQuery,
    ) -> Result<EntityValue> {
        self.client
            .get_with_query(
                &["workspaces", workspace_id, "entities", entity, "values", value],
                query,
            )
            .await
    }

    /// Add a value to an entity.
    pub async fn create(
        &self,
        workspace_id: &str,
        entity: &str,
        request: &CreateValue,
    ) -> Result<EntityValue> {
        self.client
            .post(&["workspaces", workspace_id, "entities", entity, "values"], request)
            .await
    }

    /// Update a value.
    pub async fn update(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        request: &UpdateValue,
    ) -> Result<EntityValue> {
        self.client
            .post(
                &["workspaces", workspace_id, "entities", entity, "values", value],
                request,
            )
            .await
    }

    /// Delete a value.
    pub async fn delete(&self, workspace_id: &str, entity: &str, value: &str) -> Result<()> {
        self.client
            .delete(&["workspaces", workspace_id, "entities", entity, "values", value])
            .await
    }
}
