//! Workspaces API.

use crate::api::{GetQuery, ListQuery, WriteQuery};
use crate::client::AssistantClient;
use crate::error::Result;
use crate::types::{CreateWorkspace, UpdateWorkspace, Workspace, WorkspaceCollection};

/// Workspaces API client.
pub struct WorkspacesApi {
    client: AssistantClient,
}

impl WorkspacesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List workspaces.
    pub async fn list(&self, query: &ListQuery) -> Result<WorkspaceCollection> {
        self.client.get_with_query(&["workspaces"], query).await
    }

    /// Get a workspace by ID.
    pub async fn get(&self, workspace_id: &str, query: &GetQuery) -> Result<Workspace> {
        self.client
            .get_with_query(&["workspaces", workspace_id], query)
            .await
    }

    /// Create a workspace.
    pub async fn create(&self, request: &CreateWorkspace) -> Result<Workspace> {
        self.client.post(&["workspaces"], request).await
    }

    /// Update a workspace.
    ///
    /// With `append`, collections in `request` are merged into the existing
    /// content instead of replacing it.
    pub async fn update(
        &self,
        workspace_id: &str,
        request: &UpdateWorkspace,
        append: bool,
    ) -> Result<Workspace> {
        self.client
            .post_with_query(&["workspaces", workspace_id], &WriteQuery { append }, request)
            .await
    }

    /// Delete a workspace.
    pub async fn delete(&self, workspace_id: &str) -> Result<()> {
        self.client.delete(&["workspaces", workspace_id]).await
    }
}
