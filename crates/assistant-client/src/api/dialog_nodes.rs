//! Dialog nodes API.

use crate::api::{GetQuery, ListQuery};
use crate::client::AssistantClient;
use crate::error::Result;
use crate::types::{CreateDialogNode, DialogNode, DialogNodeCollection, UpdateDialogNode};

/// Dialog nodes API client.
pub struct DialogNodesApi {
    client: AssistantClient,
}

impl DialogNodesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the dialog nodes of a workspace.
    pub async fn list(
        &self,
        workspace_id: &str,
        query: &ListQuery,
    ) -> Result<DialogNodeCollection> {
        self.client
            .get_with_query(&["workspaces", workspace_id, "dialog_nodes"], query)
            .await
    }

    /// Get a dialog node.
    pub async fn get(
        &self,
        workspace_id: &str,
        dialog_node: &str,
        query: &GetQuery,
    ) -> Result<DialogNode> {
        self.client
            .get_with_query(&["workspaces", workspace_id, "dialog_nodes", dialog_node], query)
            .await
    }

    /// Create a dialog node.
    pub async fn create(
        &self,
        workspace_id: &str,
        request: &CreateDialogNode,
    ) -> Result<DialogNode> {
        self.client
            .post(&["workspaces", workspace_id, "dialog_nodes"], request)
            .await
    }

    /// Update a dialog node.
    pub async fn update(
        &self,
        workspace_id: &str,
        dialog_node: &str,
        request: &UpdateDialogNode,
    ) -> Result<DialogNode> {
        self.client
            .post(&["workspaces", workspace_id, "dialog_nodes", dialog_node], request)
            .await
    }

    /// Delete a dialog node.
    pub async fn delete(&self, workspace_id: &str, dialog_node: &str) -> Result<()> {
        self.client
            .delete(&["workspaces", workspace_id, "dialog_nodes", dialog_node])
            .await
    }
}
