//! Named service profiles.
//!
//! A kubeconfig-style file listing the service instances a user talks to:
//!
//! ```yaml
//! current-profile: dev
//!
//! profiles:
//!   - name: dev
//!     service-url: http://localhost:8080/assistant/api
//!     workspace: car-dashboard
//!   - name: prod
//!     service-url: https://gateway.watsonplatform.net/assistant/api
//!     version: 2018-02-16
//!     workspace: 9978a49e-ea89-4493-b33d-82298d3db20d
//!     auth:
//!       type: api-key
//!       key-file: ~/.config/assistant/keys/prod.key
//!     headers:
//!       X-Watson-Learning-Opt-Out: "true"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths::{expand_path, profiles_path};
use crate::{ConfigError, Result};

/// API version date used when a profile does not name one.
pub const DEFAULT_VERSION: &str = "2018-02-16";

/// Request timeout used when a profile does not name one (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ─────────────────────────────────────────────────────────────────────────────
// Profiles file
// ─────────────────────────────────────────────────────────────────────────────

/// Root of the profiles file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProfilesConfig {
    /// Name of the profile used when none is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_profile: Option<String>,

    /// Named profiles.
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl ProfilesConfig {
    /// Parse from a YAML string.
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        serde_yaml::from_str(yaml_str).map_err(|e| ConfigError::ParseYaml(e.to_string()))
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::ParseYaml(e.to_string()))
    }

    /// The current profile, if set and present.
    pub fn current(&self) -> Option<&Profile> {
        self.current_profile
            .as_deref()
            .and_then(|name| self.get(name))
    }

    /// Get a profile by name.
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Select a profile: the named one, else the current one.
    ///
    /// Naming a profile that does not exist is an error; having no current
    /// profile is not.
    pub fn select(&self, name: Option<&str>) -> Result<Option<&Profile>> {
        match name {
            Some(name) => self
                .get(name)
                .map(Some)
                .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string())),
            None => Ok(self.current()),
        }
    }

    /// Add or replace a profile.
    pub fn set(&mut self, profile: Profile) {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    /// Remove a profile, clearing the current profile if it was this one.
    pub fn remove(&mut self, name: &str) -> Option<Profile> {
        let pos = self.profiles.iter().position(|p| p.name == name)?;
        if self.current_profile.as_deref() == Some(name) {
            self.current_profile = None;
        }
        Some(self.profiles.remove(pos))
    }

    /// Make a profile current.
    pub fn use_profile(&mut self, name: &str) -> Result<()> {
        if self.get(name).is_none() {
            return Err(ConfigError::ProfileNotFound(name.to_string()));
        }
        self.current_profile = Some(name.to_string());
        Ok(())
    }

    /// All profile names, in file order.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────────────────────────

/// One service instance and how to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Profile {
    /// Unique profile name.
    pub name: String,

    /// Service URL, without the `/v1` suffix.
    pub service_url: String,

    /// API version date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Default workspace for message and resource commands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,

    /// Authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Extra headers sent with every request.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl Profile {
    /// Create a profile with a name and service URL.
    pub fn new(name: impl Into<String>, service_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service_url: service_url.into(),
            version: None,
            workspace: None,
            auth: None,
            timeout: None,
            headers: BTreeMap::new(),
        }
    }

    /// Set the API version date.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the default workspace.
    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    /// Set the auth configuration.
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// API version date, falling back to [`DEFAULT_VERSION`].
    pub fn effective_version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }

    /// Timeout, falling back to [`DEFAULT_TIMEOUT_SECS`].
    pub fn effective_timeout(&self) -> u64 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Resolve the profile's credentials.
    pub fn credentials(&self) -> Result<Option<ResolvedAuth>> {
        match &self.auth {
            Some(auth) => auth.resolve(&self.name),
            None => Ok(None),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Authentication
// ─────────────────────────────────────────────────────────────────────────────

/// How a profile authenticates.
///
/// Secrets are never stored inline; each variant names a file or an
/// environment variable to read them from. Files win over variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AuthConfig {
    /// No authentication.
    None,

    /// API key, sent as basic auth with the user name `apikey`.
    #[serde(rename_all = "kebab-case")]
    ApiKey {
        /// File containing the key.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key_file: Option<PathBuf>,
        /// Environment variable containing the key.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key_env: Option<String>,
    },

    /// Service username and password.
    #[serde(rename_all = "kebab-case")]
    Basic {
        /// User name.
        username: String,
        /// File containing the password.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password_file: Option<PathBuf>,
        /// Environment variable containing the password.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password_env: Option<String>,
    },

    /// Pre-issued bearer token.
    #[serde(rename_all = "kebab-case")]
    Bearer {
        /// File containing the token.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token_file: Option<PathBuf>,
        /// Environment variable containing the token.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token_env: Option<String>,
    },
}

/// Credentials read from wherever a profile points.
#[derive(Clone, PartialEq, Eq)]
pub enum ResolvedAuth {
    /// API key.
    ApiKey(String),
    /// Username and password.
    Basic { username: String, password: String },
    /// Bearer token.
    Bearer(String),
}

impl std::fmt::Debug for ResolvedAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedAuth::ApiKey(_) => f.write_str("ApiKey(***)"),
            ResolvedAuth::Basic { username, .. } => {
                write!(f, "Basic {{ username: {:?}, password: *** }}", username)
            }
            ResolvedAuth::Bearer(_) => f.write_str("Bearer(***)"),
        }
    }
}

impl AuthConfig {
    /// API key read from a file.
    pub fn api_key_file(path: impl Into<PathBuf>) -> Self {
        Self::ApiKey {
            key_file: Some(path.into()),
            key_env: None,
        }
    }

    /// API key read from an environment variable.
    pub fn api_key_env(var: impl Into<String>) -> Self {
        Self::ApiKey {
            key_file: None,
            key_env: Some(var.into()),
        }
    }

    /// Basic auth with the password read from an environment variable.
    pub fn basic_env(username: impl Into<String>, var: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password_file: None,
            password_env: Some(var.into()),
        }
    }

    /// Bearer token read from an environment variable.
    pub fn bearer_env(var: impl Into<String>) -> Self {
        Self::Bearer {
            token_file: None,
            token_env: Some(var.into()),
        }
    }

    /// Read the secret this config points at.
    ///
    /// Fails with [`ConfigError::MissingSecret`] when neither the file nor
    /// the variable yields a value.
    pub fn resolve(&self, profile: &str) -> Result<Option<ResolvedAuth>> {
        match self {
            AuthConfig::None => Ok(None),

            AuthConfig::ApiKey { key_file, key_env } => {
                read_secret(key_file.as_deref(), key_env.as_deref())?
                    .map(|key| Some(ResolvedAuth::ApiKey(key)))
                    .ok_or_else(|| missing(profile, "API key", key_file, key_env, "key"))
            }

            AuthConfig::Basic {
                username,
                password_file,
                password_env,
            } => read_secret(password_file.as_deref(), password_env.as_deref())?
                .map(|password| {
                    Some(ResolvedAuth::Basic {
                        username: username.clone(),
                        password,
                    })
                })
                .ok_or_else(|| {
                    missing(profile, "password", password_file, password_env, "password")
                }),

            AuthConfig::Bearer {
                token_file,
                token_env,
            } => read_secret(token_file.as_deref(), token_env.as_deref())?
                .map(|token| Some(ResolvedAuth::Bearer(token)))
                .ok_or_else(|| missing(profile, "bearer token", token_file, token_env, "token")),
        }
    }
}

/// Read a secret from a file, then an environment variable.
fn read_secret(file: Option<&Path>, env: Option<&str>) -> Result<Option<String>> {
    if let Some(path) = file {
        let expanded = expand_path(path);
        if expanded.exists() {
            let secret = std::fs::read_to_string(&expanded).map_err(|e| ConfigError::ReadFile {
                path: expanded.display().to_string(),
                source: e,
            })?;
            let secret = secret.trim();
            if !secret.is_empty() {
                return Ok(Some(secret.to_string()));
            }
        } else {
            tracing::debug!(path = %expanded.display(), "secret file does not exist");
        }
    }

    if let Some(var) = env
        && let Ok(secret) = std::env::var(var)
        && !secret.is_empty()
    {
        return Ok(Some(secret));
    }

    Ok(None)
}

fn missing(
    profile: &str,
    what: &'static str,
    file: &Option<PathBuf>,
    env: &Option<String>,
    field: &str,
) -> ConfigError {
    let hint = match (file, env) {
        (Some(file), Some(env)) => format!("{} or ${}", file.display(), env),
        (Some(file), None) => file.display().to_string(),
        (None, Some(env)) => format!("${}", env),
        (None, None) => format!("{field}-file or {field}-env in the profile"),
    };
    ConfigError::MissingSecret {
        profile: profile.to_string(),
        what,
        hint,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading / Saving
// ─────────────────────────────────────────────────────────────────────────────

/// Load the profiles file from the config directory.
///
/// Returns an empty config if the file doesn't exist.
pub fn load_profiles() -> Result<ProfilesConfig> {
    load_profiles_from(profiles_path().as_deref())
}

/// Load profiles from a specific path.
pub fn load_profiles_from(path: Option<&Path>) -> Result<ProfilesConfig> {
    let Some(path) = path else {
        return Ok(ProfilesConfig::default());
    };

    if !path.exists() {
        return Ok(ProfilesConfig::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;

    ProfilesConfig::from_yaml(&contents)
}

/// Save the profiles file to the config directory.
pub fn save_profiles(config: &ProfilesConfig) -> Result<PathBuf> {
    let path = profiles_path()
        .ok_or_else(|| ConfigError::Other("Could not determine config directory".to_string()))?;
    save_profiles_to(config, &path)?;
    Ok(path)
}

/// Save profiles to a specific path.
pub fn save_profiles_to(config: &ProfilesConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let contents = config.to_yaml()?;
    std::fs::write(path, contents).map_err(|e| ConfigError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
