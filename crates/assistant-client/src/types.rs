//! Request and response types for workspace resources.
//!
//! These types mirror the service's API contract. Timestamps are kept as the
//! ISO 8601 strings the service sends and are only present when
//! `include_audit` was requested.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::message::{DialogNodeAction, MessageRequest, MessageResponse};

// ─────────────────────────────────────────────────────────────────────────────
// Pagination
// ─────────────────────────────────────────────────────────────────────────────

/// Pagination block of a resource collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// URL that fetches the current page again.
    pub refresh_url: String,
    /// URL of the next page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    /// Total number of items (only with `include_count`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Number of items matching the query (only with `include_count`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<u64>,
    /// Cursor for the current page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_cursor: Option<String>,
    /// Cursor for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl Pagination {
    /// Whether another page exists.
    pub fn has_more(&self) -> bool {
        self.next_url.is_some() || self.next_cursor.is_some()
    }
}

/// Pagination block of a log collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogPagination {
    /// URL of the next page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    /// Number of logs matching the filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<u64>,
    /// Cursor for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Workspaces
// ─────────────────────────────────────────────────────────────────────────────

/// A workspace: the container of intents, entities and the dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    /// Workspace ID.
    pub workspace_id: String,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Language code (e.g. `en`).
    pub language: String,
    /// Arbitrary metadata.
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    /// Whether the service may use training data to improve itself.
    #[serde(default)]
    pub learning_opt_out: bool,
    /// Global workspace settings.
    #[serde(default)]
    pub system_settings: Option<Value>,
    /// Training status (`Available`, `Training`, ...).
    #[serde(default)]
    pub status: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated: Option<String>,
    /// Intents (only with `export`).
    #[serde(default)]
    pub intents: Option<Vec<Intent>>,
    /// Entities (only with `export`).
    #[serde(default)]
    pub entities: Option<Vec<Entity>>,
    /// Dialog nodes (only with `export`).
    #[serde(default)]
    pub dialog_nodes: Option<Vec<DialogNode>>,
    /// Counterexamples (only with `export`).
    #[serde(default)]
    pub counterexamples: Option<Vec<Counterexample>>,
}

/// Request to create a workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateWorkspace {
    /// Name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Intents to create with the workspace.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intents: Vec<CreateIntent>,
    /// Entities to create with the workspace.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<CreateEntity>,
    /// Dialog nodes to create with the workspace.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dialog_nodes: Vec<CreateDialogNode>,
    /// Counterexamples to create with the workspace.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counterexamples: Vec<CreateCounterexample>,
    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
    /// Opt out of service learning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,
    /// Global workspace settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<Value>,
}

impl CreateWorkspace {
    /// Create a workspace request with a name and language.
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            language: Some(language.into()),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request to update a workspace.
///
/// Collections that are set replace the existing content unless the update
/// is sent with `append`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorkspace {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Intents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<CreateIntent>>,
    /// Entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<CreateEntity>>,
    /// Dialog nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_nodes: Option<Vec<CreateDialogNode>>,
    /// Counterexamples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterexamples: Option<Vec<CreateCounterexample>>,
    /// Metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Opt out of service learning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,
    /// Global workspace settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<Value>,
}

/// Response for list workspaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceCollection {
    /// Workspaces in this page.
    pub workspaces: Vec<Workspace>,
    /// Pagination.
    pub pagination: Pagination,
}

// ─────────────────────────────────────────────────────────────────────────────
// Intents, examples, counterexamples
// ─────────────────────────────────────────────────────────────────────────────

/// An intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Intent name.
    pub intent: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated: Option<String>,
    /// Examples (only with `export`).
    #[serde(default)]
    pub examples: Option<Vec<Example>>,
}

/// Request to create an intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIntent {
    /// Intent name.
    pub intent: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Examples.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<CreateExample>,
}

impl CreateIntent {
    /// Create an intent request.
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            description: None,
            examples: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an example utterance.
    pub fn with_example(mut self, text: impl Into<String>) -> Self {
        self.examples.push(CreateExample::new(text));
        self
    }
}

/// Request to update an intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateIntent {
    /// New intent name.
    #[serde(rename = "intent", default, skip_serializing_if = "Option::is_none")]
    pub new_intent: Option<String>,
    /// New description.
    #[serde(rename = "description", default, skip_serializing_if = "Option::is_none")]
    pub new_description: Option<String>,
    /// Replacement examples.
    #[serde(rename = "examples", default, skip_serializing_if = "Option::is_none")]
    pub new_examples: Option<Vec<CreateExample>>,
}

/// Response for list intents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentCollection {
    /// Intents in this page.
    pub intents: Vec<Intent>,
    /// Pagination.
    pub pagination: Pagination,
}

/// A user utterance that trains an intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Example text.
    pub text: String,
    /// Entity mentions annotated in the text.
    #[serde(default)]
    pub mentions: Option<Vec<Mention>>,
    /// Creation time.
    #[serde(default)]
    pub created: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated: Option<String>,
}

/// Request to create an example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExample {
    /// Example text.
    pub text: String,
    /// Entity mentions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<Mention>,
}

impl CreateExample {
    /// Create an example from text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mentions: Vec::new(),
        }
    }
}

/// Request to update an example.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateExample {
    /// New text.
    #[serde(rename = "text", default, skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
    /// Replacement mentions.
    #[serde(rename = "mentions", default, skip_serializing_if = "Option::is_none")]
    pub new_mentions: Option<Vec<Mention>>,
}

/// An entity mention inside an example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Entity name.
    pub entity: String,
    /// Half-open character span.
    pub location: [usize; 2],
}

/// Response for list examples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleCollection {
    /// Examples in this page.
    pub examples: Vec<Example>,
    /// Pagination.
    pub pagination: Pagination,
}

/// An utterance marked as matching no intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterexample {
    /// Counterexample text.
    pub text: String,
    /// Creation time.
    #[serde(default)]
    pub created: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated: Option<String>,
}

/// Request to create a counterexample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCounterexample {
    /// Counterexample text.
    pub text: String,
}

impl CreateCounterexample {
    /// Create a counterexample from text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Request to update a counterexample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCounterexample {
    /// New text.
    #[serde(rename = "text", default, skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
}

/// Response for list counterexamples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterexampleCollection {
    /// Counterexamples in this page.
    pub counterexamples: Vec<Counterexample>,
    /// Pagination.
    pub pagination: Pagination,
}

// ─────────────────────────────────────────────────────────────────────────────
// Entities, values, synonyms
// ─────────────────────────────────────────────────────────────────────────────

/// An entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name.
    pub entity: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Arbitrary metadata.
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    /// Whether fuzzy matching is enabled.
    #[serde(default)]
    pub fuzzy_match: Option<bool>,
    /// Creation time.
    #[serde(default)]
    pub created: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated: Option<String>,
    /// Values (only with `export`).
    #[serde(default)]
    pub values: Option<Vec<EntityValue>>,
}

/// Request to create an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEntity {
    /// Entity name.
    pub entity: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<CreateValue>,
    /// Whether fuzzy matching is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
}

impl CreateEntity {
    /// Create an entity request.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a value.
    pub fn with_value(mut self, value: CreateValue) -> Self {
        self.values.push(value);
        self
    }
}

/// Request to update an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateEntity {
    /// New entity name.
    #[serde(rename = "entity", default, skip_serializing_if = "Option::is_none")]
    pub new_entity: Option<String>,
    /// New description.
    #[serde(rename = "description", default, skip_serializing_if = "Option::is_none")]
    pub new_description: Option<String>,
    /// New metadata.
    #[serde(rename = "metadata", default, skip_serializing_if = "Option::is_none")]
    pub new_metadata: Option<Map<String, Value>>,
    /// New fuzzy matching setting.
    #[serde(rename = "fuzzy_match", default, skip_serializing_if = "Option::is_none")]
    pub new_fuzzy_match: Option<bool>,
    /// Replacement values.
    #[serde(rename = "values", default, skip_serializing_if = "Option::is_none")]
    pub new_values: Option<Vec<CreateValue>>,
}

/// Response for list entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityCollection {
    /// Entities in this page.
    pub entities: Vec<Entity>,
    /// Pagination.
    pub pagination: Pagination,
}

/// How an entity value is matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Matched by the value text and its synonyms.
    #[default]
    Synonyms,
    /// Matched by regular expression patterns.
    Patterns,
}

/// A value of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityValue {
    /// Value text.
    pub value: String,
    /// Arbitrary metadata.
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    /// Match type.
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
    /// Synonyms (only with `export`).
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
    /// Patterns (only with `export`).
    #[serde(default)]
    pub patterns: Option<Vec<String>>,
    /// Creation time.
    #[serde(default)]
    pub created: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated: Option<String>,
}

/// Request to create a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateValue {
    /// Value text.
    pub value: String,
    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Match type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    /// Synonyms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    /// Patterns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
}

impl CreateValue {
    /// Create a value request.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Add a synonym.
    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonyms.push(synonym.into());
        self
    }

    /// Set metadata.
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Request to update a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateValue {
    /// New value text.
    #[serde(rename = "value", default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    /// New metadata.
    #[serde(rename = "metadata", default, skip_serializing_if = "Option::is_none")]
    pub new_metadata: Option<Map<String, Value>>,
    /// New match type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub new_type: Option<ValueType>,
    /// Replacement synonyms.
    #[serde(rename = "synonyms", default, skip_serializing_if = "Option::is_none")]
    pub new_synonyms: Option<Vec<String>>,
    /// Replacement patterns.
    #[serde(rename = "patterns", default, skip_serializing_if = "Option::is_none")]
    pub new_patterns: Option<Vec<String>>,
}

/// Response for list values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueCollection {
    /// Values in this page.
    pub values: Vec<EntityValue>,
    /// Pagination.
    pub pagination: Pagination,
}

/// A synonym of an entity value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synonym {
    /// Synonym text.
    pub synonym: String,
    /// Creation time.
    #[serde(default)]
    pub created: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated: Option<String>,
}

/// Response for list synonyms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymCollection {
    /// Synonyms in this page.
    pub synonyms: Vec<Synonym>,
    /// Pagination.
    pub pagination: Pagination,
}

// ─────────────────────────────────────────────────────────────────────────────
// Dialog nodes
// ─────────────────────────────────────────────────────────────────────────────

/// A node of the dialog tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNode {
    /// Node ID.
    #[serde(rename = "dialog_node")]
    pub dialog_node_id: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Condition expression (e.g. `#order_pizza`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    /// Parent node ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Previous sibling node ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<String>,
    /// Output produced by the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    /// Context written by the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Where dialog goes after this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<DialogNodeNextStep>,
    /// Actions run by the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    /// Node title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Node type (`standard`, `frame`, `slot`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    /// Event that triggers the node, for handler nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    /// Context variable filled by a slot node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    /// Whether digressions may enter the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_in: Option<String>,
    /// Whether digressions may leave the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out: Option<String>,
    /// Whether digressions may leave while slots are being filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out_slots: Option<String>,
    /// Label shown to end users for disambiguation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    /// Whether the node is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// Request to create a dialog node.
pub type CreateDialogNode = DialogNode;

impl DialogNode {
    /// Create a node with only an ID.
    pub fn new(dialog_node_id: impl Into<String>) -> Self {
        Self {
            dialog_node_id: dialog_node_id.into(),
            description: None,
            conditions: None,
            parent: None,
            previous_sibling: None,
            output: None,
            context: None,
            metadata: None,
            next_step: None,
            actions: None,
            title: None,
            node_type: None,
            event_name: None,
            variable: None,
            digress_in: None,
            digress_out: None,
            digress_out_slots: None,
            user_label: None,
            disabled: None,
            created: None,
            updated: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the condition.
    pub fn with_conditions(mut self, conditions: impl Into<String>) -> Self {
        self.conditions = Some(conditions.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Request to update a dialog node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDialogNode {
    /// New node ID.
    #[serde(rename = "dialog_node", default, skip_serializing_if = "Option::is_none")]
    pub new_dialog_node: Option<String>,
    /// New description.
    #[serde(rename = "description", default, skip_serializing_if = "Option::is_none")]
    pub new_description: Option<String>,
    /// New condition.
    #[serde(rename = "conditions", default, skip_serializing_if = "Option::is_none")]
    pub new_conditions: Option<String>,
    /// New parent.
    #[serde(rename = "parent", default, skip_serializing_if = "Option::is_none")]
    pub new_parent: Option<String>,
    /// New previous sibling.
    #[serde(rename = "previous_sibling", default, skip_serializing_if = "Option::is_none")]
    pub new_previous_sibling: Option<String>,
    /// New output.
    #[serde(rename = "output", default, skip_serializing_if = "Option::is_none")]
    pub new_output: Option<Value>,
    /// New context.
    #[serde(rename = "context", default, skip_serializing_if = "Option::is_none")]
    pub new_context: Option<Map<String, Value>>,
    /// New metadata.
    #[serde(rename = "metadata", default, skip_serializing_if = "Option::is_none")]
    pub new_metadata: Option<Map<String, Value>>,
    /// New next step.
    #[serde(rename = "next_step", default, skip_serializing_if = "Option::is_none")]
    pub new_next_step: Option<DialogNodeNextStep>,
    /// New title.
    #[serde(rename = "title", default, skip_serializing_if = "Option::is_none")]
    pub new_title: Option<String>,
    /// New node type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub new_type: Option<String>,
    /// New actions.
    #[serde(rename = "actions", default, skip_serializing_if = "Option::is_none")]
    pub new_actions: Option<Vec<DialogNodeAction>>,
    /// New disabled flag.
    #[serde(rename = "disabled", default, skip_serializing_if = "Option::is_none")]
    pub new_disabled: Option<bool>,
}

/// Where the dialog goes after a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeNextStep {
    /// `get_user_input`, `skip_user_input`, `jump_to`, ...
    pub behavior: String,
    /// Target node for `jump_to`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    /// Which part of the target node to evaluate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// Response for list dialog nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogNodeCollection {
    /// Dialog nodes in this page.
    pub dialog_nodes: Vec<DialogNode>,
    /// Pagination.
    pub pagination: Pagination,
}

// ─────────────────────────────────────────────────────────────────────────────
// Logs
// ─────────────────────────────────────────────────────────────────────────────

/// A logged message exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    /// Log ID.
    pub log_id: String,
    /// Request as received.
    pub request: MessageRequest,
    /// Response as sent.
    pub response: MessageResponse,
    /// When the request arrived.
    pub request_timestamp: String,
    /// When the response was sent.
    pub response_timestamp: String,
    /// Workspace that handled the request.
    #[serde(default)]
    pub workspace_id: Option<String>,
    /// Workspace language.
    #[serde(default)]
    pub language: Option<String>,
}

/// Response for list logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogCollection {
    /// Logs in this page.
    pub logs: Vec<Log>,
    /// Pagination.
    pub pagination: LogPagination,
}
