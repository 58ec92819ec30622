//! Entities API.

use crate::api::{GetQuery, ListQuery};
use crate::client::AssistantClient;
use crate::error::Result;
use crate::types::{CreateEntity, Entity, EntityCollection, UpdateEntity};

/// Entities API client.
pub struct EntitiesApi {
    client: AssistantClient,
}

impl EntitiesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the entities of a workspace.
    pub async fn list(&self, workspace_id: &str, query: &ListQuery) -> Result<EntityCollection> {
        self.client
            .get_with_query(&["workspaces", workspace_id, "entities"], query)
            .await
    }

    /// Get an entity.
    pub async fn get(&self, workspace_id: &str, entity: &str, query: &GetQuery) -> Result<Entity> {
        self.client
            .get_with_query(&["workspaces", workspace_id, "entities", entity], query)
            .await
    }

    /// Create an entity.
    pub async fn create(&self, workspace_id: &str, request: &CreateEntity) -> Result<Entity> {
        self.client
            .post(&["workspaces", workspace_id, "entities"], request)
            .await
    }

    /// Update an entity.
    pub async fn update(
        &self,
        workspace_id: &str,
        entity: &str,
        request: &UpdateEntity,
    ) -> Result<Entity> {
        self.client
            .post(&["workspaces", workspace_id, "entities", entity], request)
            .await
    }

    /// Delete an entity.
    pub async fn delete(&self, workspace_id: &str, entity: &str) -> Result<()> {
        self.client
            .delete(&["workspaces", workspace_id, "entities", entity])
            .await
    }
}
