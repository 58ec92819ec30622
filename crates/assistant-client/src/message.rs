//! Wire types for a single conversation turn.
//!
//! A turn is a [`MessageRequest`] posted to a workspace and answered with a
//! [`MessageResponse`]. The response's [`Context`] is the only state that
//! carries a conversation from one turn to the next.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Context keys that belong to the wire structure rather than the extension map.
const STRUCTURAL_KEYS: [&str; 2] = ["conversation_id", "system"];

// ─────────────────────────────────────────────────────────────────────────────
// Context
// ─────────────────────────────────────────────────────────────────────────────

/// Conversation state returned by the service on every turn.
///
/// The context must be sent back on the next turn exactly as received, plus
/// any extension keys the caller chose to add. Extension values are plain JSON
/// (string, boolean, number, object, array, null).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Conversation identifier, assigned by the service on the first turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conversation_id: Option<String>,

    /// Service-managed dialog bookkeeping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    system: Option<SystemContext>,

    /// Caller- and service-defined extension keys.
    #[serde(flatten)]
    extensions: Map<String, Value>,
}

impl Context {
    /// Conversation identifier, if one has been assigned.
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    /// Service-managed bookkeeping, forwarded untouched.
    pub fn system(&self) -> Option<&SystemContext> {
        self.system.as_ref()
    }

    /// Look up an extension value.
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    /// All extension values.
    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    /// Set an extension value, returning the previous one.
    ///
    /// `conversation_id` and `system` are part of the context structure and
    /// are rejected with [`Error::ReservedContextKey`].
    pub fn set_extension(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>> {
        let key = key.into();
        if STRUCTURAL_KEYS.contains(&key.as_str()) {
            return Err(Error::ReservedContextKey(key));
        }
        Ok(self.extensions.insert(key, value.into()))
    }

    /// Remove an extension value.
    pub fn remove_extension(&mut self, key: &str) -> Option<Value> {
        self.extensions.remove(key)
    }
}

/// Opaque service-managed part of the context.
///
/// Callers cannot build one; it only ever comes from a response and is
/// forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemContext(Map<String, Value>);

impl SystemContext {
    /// Whether the service sent any bookkeeping fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of bookkeeping fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

/// User input for a turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageInput {
    /// Text of the user utterance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Additional input properties echoed by the service.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MessageInput {
    /// Input with just text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            extra: Map::new(),
        }
    }
}

/// Body of a message call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    /// User input. Absent on the opening turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,

    /// Ask the service to return every intent candidate, not just the top one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,

    /// Context from the previous turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Entities to treat as already recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,

    /// Intents to treat as already recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,

    /// Output from the previous turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputData>,
}

impl MessageRequest {
    /// Create an empty request (an opening turn).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.input = Some(MessageInput::text(text));
        self
    }

    /// Set the full input.
    pub fn with_input(mut self, input: MessageInput) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the context to continue from.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Replay previously recognized intents.
    pub fn with_intents(mut self, intents: Vec<RuntimeIntent>) -> Self {
        self.intents = Some(intents);
        self
    }

    /// Replay previously recognized entities.
    pub fn with_entities(mut self, entities: Vec<RuntimeEntity>) -> Self {
        self.entities = Some(entities);
        self
    }

    /// Replay previous output.
    pub fn with_output(mut self, output: OutputData) -> Self {
        self.output = Some(output);
        self
    }

    /// Request alternate intents.
    pub fn with_alternate_intents(mut self, alternate: bool) -> Self {
        self.alternate_intents = Some(alternate);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────────────────────────────────────

/// Result of a message call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Input as the service saw it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,

    /// Recognized intents, best first.
    #[serde(default)]
    pub intents: Vec<RuntimeIntent>,

    /// Recognized entities.
    #[serde(default)]
    pub entities: Vec<RuntimeEntity>,

    /// Whether alternate intents were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,

    /// Context to send with the next turn.
    pub context: Context,

    /// Dialog output.
    pub output: OutputData,

    /// Client actions requested by the dialog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<DialogNodeAction>,
}

impl MessageResponse {
    /// Highest-confidence intent, if any.
    pub fn top_intent(&self) -> Option<&RuntimeIntent> {
        self.intents
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }

    /// Response text joined into one string, one line per element.
    pub fn text(&self) -> String {
        self.output.text.join("\n")
    }
}

/// An intent recognized in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeIntent {
    /// Intent name.
    pub intent: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Additional properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RuntimeIntent {
    /// Create an intent with a confidence score.
    pub fn new(intent: impl Into<String>, confidence: f64) -> Self {
        Self {
            intent: intent.into(),
            confidence,
            extra: Map::new(),
        }
    }
}

/// An entity recognized in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntity {
    /// Entity name.
    pub entity: String,
    /// Half-open `[start, end)` character span into the input text.
    pub location: [usize; 2],
    /// Entity value that matched.
    pub value: String,
    /// Match confidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Value metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Capture groups for pattern values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<CaptureGroup>>,
    /// Additional properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RuntimeEntity {
    /// Create an entity match.
    pub fn new(entity: impl Into<String>, value: impl Into<String>, location: [usize; 2]) -> Self {
        Self {
            entity: entity.into(),
            location,
            value: value.into(),
            confidence: None,
            metadata: None,
            groups: None,
            extra: Map::new(),
        }
    }

    /// Character span of the match.
    pub fn span(&self) -> Range<usize> {
        self.location[0]..self.location[1]
    }

    /// Whether the span is non-empty and fits in an input of `len` characters.
    pub fn span_within(&self, len: usize) -> bool {
        let [start, end] = self.location;
        start < end && end <= len
    }

    /// The slice of `input` covered by the span, if it is valid.
    pub fn matched_text<'a>(&self, input: &'a str) -> Option<&'a str> {
        let [start, end] = self.location;
        if start >= end {
            return None;
        }
        let mut boundaries = input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()));
        let from = boundaries.nth(start)?;
        let to = boundaries.nth(end - start - 1)?;
        Some(&input[from..to])
    }
}

/// A capture group within a pattern entity match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureGroup {
    /// Group name.
    pub group: String,
    /// Span of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<[usize; 2]>,
    /// Additional properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Output of the dialog for a turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputData {
    /// Diagnostic messages from dialog evaluation.
    #[serde(default)]
    pub log_messages: Vec<LogMessage>,

    /// Response text, rendered in order.
    #[serde(default)]
    pub text: Vec<String>,

    /// Dialog node ids visited during this turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_visited: Option<Vec<String>>,

    /// Details of visited nodes, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_visited_details: Option<Vec<DialogNodeVisitedDetails>>,

    /// Additional output properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Severity of a dialog log message.
///
/// Levels this crate does not know are kept as sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Other(String),
}

impl From<String> for LogLevel {
    fn from(level: String) -> Self {
        match level.as_str() {
            "info" => LogLevel::Info,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Other(level),
        }
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Info => "info".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Error => "error".to_string(),
            LogLevel::Other(level) => level,
        }
    }
}

/// A dialog log message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
    /// Severity.
    pub level: LogLevel,
    /// Message text.
    pub msg: String,
}

/// Detail record for a visited dialog node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeVisitedDetails {
    /// Node id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    /// Node title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Condition that triggered the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    /// Additional properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An action the dialog asks the client (or a server-side function) to run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeAction {
    /// Action name.
    pub name: String,
    /// Action type (`client`, `server`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    /// Action parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    /// Context variable that receives the result.
    pub result_variable: String,
    /// Context variable holding credentials for the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}
