//! Well-known file locations.

use std::path::PathBuf;

/// Application name used for the platform config directory.
const APP_NAME: &str = "assistant";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "ASSISTANT_CONFIG_DIR";

/// Profiles file name inside the config directory.
pub(crate) const PROFILES_FILE: &str = "profiles.yaml";

/// Log directory name inside the config directory.
const LOG_DIR: &str = "logs";

/// Get the config directory.
///
/// Checks `ASSISTANT_CONFIG_DIR` first, then falls back to the platform
/// default (`~/.config/assistant` on Linux).
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Get the path to the profiles file.
pub fn profiles_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(PROFILES_FILE))
}

/// Get the directory for rolling log files.
pub fn log_dir() -> Option<PathBuf> {
    config_dir().map(|d| d.join(LOG_DIR))
}

/// Expand `~/` to the home directory.
pub(crate) fn expand_path(path: &std::path::Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|s| s.strip_prefix("~/"))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
