//! Logs API.

use crate::client::AssistantClient;
use crate::error::{Error, Result};
use crate::types::LogCollection;

/// Query parameters for listing logs.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct LogQuery {
    /// Filter expression, e.g. `workspace_id::abc,language::en`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Sort attribute; prefix with `-` for descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Maximum number of logs in one page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<u32>,
    /// Cursor of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl LogQuery {
    /// Filter logs.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sort logs.
    pub fn sort(mut self, attribute: impl Into<String>) -> Self {
        self.sort = Some(attribute.into());
        self
    }

    /// Limit the page size.
    pub fn page_limit(mut self, limit: u32) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// Continue from a cursor.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// Logs API client.
pub struct LogsApi {
    client: AssistantClient,
}

impl LogsApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the message logs of one workspace.
    pub async fn list(&self, workspace_id: &str, query: &LogQuery) -> Result<LogCollection> {
        self.client
            .get_with_query(&["workspaces", workspace_id, "logs"], query)
            .await
    }

    /// List message logs across workspaces.
    ///
    /// The service requires a filter naming at least a workspace or
    /// language, so a query without one is rejected locally.
    pub async fn list_all(&self, query: &LogQuery) -> Result<LogCollection> {
        if query.filter.as_deref().is_none_or(|f| f.trim().is_empty()) {
            return Err(Error::Config(
                "listing logs across workspaces requires a filter".to_string(),
            ));
        }
        self.client.get_with_query(&["logs"], query).await
    }
}
