//! Configuration for Assistant service clients.
//!
//! A YAML profiles file (kubeconfig-style):
//! - Named profiles (service URL, API version, default workspace, auth)
//! - `current-profile` for default selection
//! - Credentials read from files or environment variables, never stored inline
//!
//! The file lives at `$ASSISTANT_CONFIG_DIR/profiles.yaml`, or under the
//! platform config directory when the variable is unset.

pub mod error;
pub mod paths;
pub mod profiles;

pub use error::{ConfigError, Result};
pub use paths::{CONFIG_DIR_ENV, config_dir, log_dir, profiles_path};
pub use profiles::{
    AuthConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_VERSION, Profile, ProfilesConfig, ResolvedAuth,
    load_profiles, load_profiles_from, save_profiles, save_profiles_to,
};
