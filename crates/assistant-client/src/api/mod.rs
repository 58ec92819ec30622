//! API endpoint implementations.

mod counterexamples;
mod dialog_nodes;
mod entities;
mod examples;
mod intents;
mod logs;
mod message;
mod synonyms;
mod values;
mod workspaces;

pub use counterexamples::CounterexamplesApi;
pub use dialog_nodes::DialogNodesApi;
pub use entities::EntitiesApi;
pub use examples::ExamplesApi;
pub use intents::IntentsApi;
pub use logs::{LogQuery, LogsApi};
pub use message::{MessageApi, MessageOptions};
pub use synonyms::SynonymsApi;
pub use values::ValuesApi;
pub use workspaces::WorkspacesApi;

/// Query parameters shared by list endpoints.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ListQuery {
    /// Maximum number of items in one page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<u32>,
    /// Ask for `total` and `matched` in the pagination block.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_count: bool,
    /// Sort attribute; prefix with `-` for descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Cursor of the page to fetch, from a previous `next_cursor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Include `created` and `updated` timestamps.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_audit: bool,
    /// Include nested content (examples of intents, values of entities, ...).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub export: bool,
}

impl ListQuery {
    /// Limit the page size.
    pub fn page_limit(mut self, limit: u32) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// Request total and matched counts.
    pub fn include_count(mut self) -> Self {
        self.include_count = true;
        self
    }

    /// Request audit timestamps.
    pub fn include_audit(mut self) -> Self {
        self.include_audit = true;
        self
    }

    /// Request nested content.
    pub fn export(mut self) -> Self {
        self.export = true;
        self
    }

    /// Sort by an attribute.
    pub fn sort(mut self, attribute: impl Into<String>) -> Self {
        self.sort = Some(attribute.into());
        self
    }

    /// Continue from a cursor.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// Query parameters for fetching a single resource.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct GetQuery {
    /// Include nested content.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub export: bool,
    /// Include `created` and `updated` timestamps.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_audit: bool,
}

impl GetQuery {
    /// Nested content and audit timestamps.
    pub fn full() -> Self {
        Self {
            export: true,
            include_audit: true,
        }
    }
}

/// Query parameters for create and update calls.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub(crate) struct WriteQuery {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub append: bool,
}
