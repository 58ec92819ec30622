//! Configuration error types.

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading, saving, or resolving profiles.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a config or secret file.
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    /// Failed to write a config file.
    #[error("failed to write config file '{path}': {source}")]
    WriteFile {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse or serialize YAML.
    #[error("failed to parse YAML config: {0}")]
    ParseYaml(String),

    /// Profile not found.
    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    /// A credential named by a profile could not be found.
    #[error("no {what} found for profile '{profile}'; set {hint}")]
    MissingSecret {
        profile: String,
        what: &'static str,
        hint: String,
    },

    /// Other error.
    #[error("{0}")]
    Other(String),
}
