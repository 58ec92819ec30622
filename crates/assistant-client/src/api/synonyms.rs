//! Value synonyms API.

use crate::api::{GetQuery, ListQuery};
use crate::client::AssistantClient;
use crate::error::Result;
use crate::types::{Synonym, SynonymCollection};

#[derive(serde::Serialize)]
struct SynonymBody<'a> {
    synonym: &'a str,
}

/// Value synonyms API client.
pub struct SynonymsApi {
    client: AssistantClient,
}

impl SynonymsApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the synonyms of an entity value.
    pub async fn list(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        query: &ListQuery,
    ) -> Result<SynonymCollection> {
        self.client
            .get_with_query(
                &["workspaces", workspace_id, "entities", entity, "values", value, "synonyms"],
                query,
            )
            .await
    }

    /// Get a synonym.
    pub async fn get(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &str,
        query: &GetQuery,
    ) -> Result<Synonym> {
        self.client
            .get_with_query(
                &[
                    "workspaces", workspace_id, "entities", entity, "values", value, "synonyms",
                    synonym,
                ],
                query,
            )
            .await
    }

    /// Add a synonym to an entity value.
    pub async fn create(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &str,
    ) -> Result<Synonym> {
        self.client
            .post(
                &["workspaces", workspace_id, "entities", entity, "values", value, "synonyms"],
                &SynonymBody { synonym },
            )
            .await
    }

    /// Rename a synonym.
    pub async fn update(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &str,
        new_synonym: &str,
    ) -> Result<Synonym> {
        self.client
            .post(
                &[
                    "workspaces", workspace_id, "entities", entity, "values", value, "synonyms",
                    synonym,
                ],
                &SynonymBody {
                    synonym: new_synonym,
                },
            )
            .await
    }

    /// Delete a synonym.
    pub async fn delete(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &str,
    ) -> Result<()> {
        self.client
            .delete(&[
                "workspaces", workspace_id, "entities", entity, "values", value, "synonyms",
                synonym,
            ])
            .await
    }
}
