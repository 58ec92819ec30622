//! Client error types.

use thiserror::Error;

/// Client error type.
///
/// Every call resolves to exactly one of a decoded result or one of these
/// variants. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced an HTTP response (connect, DNS, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured service URL cannot be used to build a request.
    #[error("invalid service URL '{url}': {reason}")]
    BadUrl {
        /// The URL as configured.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The service answered with a non-success status.
    #[error("service error ({status}): {message}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Error message reported by the service.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decoding(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Attempted to write a structural context key as an extension.
    #[error("'{0}' is managed by the service and cannot be set as a context extension")]
    ReservedContextKey(String),

    /// A continuation turn was requested before the conversation was opened.
    #[error("conversation has not been started")]
    ConversationNotStarted,
}

impl Error {
    /// HTTP status of a service error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Service { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Service { status: 401 | 403, .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Service { status: 429, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Service { status, .. } if *status >= 500)
    }

    /// Check if the request failed before reaching the service.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if this is a malformed endpoint error.
    pub fn is_bad_url(&self) -> bool {
        matches!(self, Error::BadUrl { .. })
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the service.
///
/// The service reports `{"error": "...", "code": 404}`, sometimes with an
/// `errors` array of field-level details.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable message in the body.
    pub(crate) fn message(&self) -> Option<String> {
        self.error
            .clone()
            .or_else(|| self.errors.iter().find_map(|e| e.message.clone()))
    }
}
