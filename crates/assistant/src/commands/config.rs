//! Config command - profile management.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;

use assistant_config::{AuthConfig, Profile, ProfilesConfig};

use super::{CommandLineFlags, Context};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the profiles file path
    Path,

    /// Show the current profile name
    CurrentProfile,

    /// List available profiles
    GetProfiles,

    /// Show one profile (default: the current one)
    Show {
        /// Profile name
        name: Option<String>,
    },

    /// Switch to a different profile
    UseProfile {
        /// Profile name to switch to
        name: String,
    },

    /// Create or update a profile
    ///
    /// The service URL, API version and workspace come from the global
    /// --service-url, --api-version and --workspace flags as typed; their
    /// environment variables are ignored here.
    SetProfile {
        /// Profile name
        name: String,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Extra header sent with every request, as NAME=VALUE
        #[arg(long = "header", value_name = "NAME=VALUE")]
        headers: Vec<String>,

        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Delete a profile
    DeleteProfile {
        /// Profile name to delete
        name: String,
    },
}

/// Where a profile reads its credentials from.
#[derive(Args, Debug, Default)]
pub struct AuthArgs {
    /// Read the API key from this environment variable
    #[arg(long, group = "auth-source")]
    pub api_key_env: Option<String>,

    /// Read the API key from this file
    #[arg(long, group = "auth-source")]
    pub api_key_file: Option<PathBuf>,

    /// Read a bearer token from this environment variable
    #[arg(long, group = "auth-source")]
    pub bearer_env: Option<String>,

    /// Read a bearer token from this file
    #[arg(long, group = "auth-source")]
    pub bearer_file: Option<PathBuf>,

    /// Basic auth user name (with --password-env or --password-file)
    #[arg(long, group = "auth-source")]
    pub username: Option<String>,

    /// Read the basic auth password from this environment variable
    #[arg(long, requires = "username")]
    pub password_env: Option<String>,

    /// Read the basic auth password from this file
    #[arg(long, requires = "username")]
    pub password_file: Option<PathBuf>,

    /// Remove any authentication from the profile
    #[arg(long, group = "auth-source")]
    pub no_auth: bool,
}

impl AuthArgs {
    /// The auth config these flags describe. `None` leaves a profile's auth untouched.
    fn to_auth(&self) -> Option<AuthConfig> {
        if self.no_auth {
            return Some(AuthConfig::None);
        }
        if self.api_key_env.is_some() || self.api_key_file.is_some() {
            return Some(AuthConfig::ApiKey {
                key_file: self.api_key_file.clone(),
                key_env: self.api_key_env.clone(),
            });
        }
        if self.bearer_env.is_some() || self.bearer_file.is_some() {
            return Some(AuthConfig::Bearer {
                token_file: self.bearer_file.clone(),
                token_env: self.bearer_env.clone(),
            });
        }
        self.username.as_ref().map(|username| AuthConfig::Basic {
            username: username.clone(),
            password_file: self.password_file.clone(),
            password_env: self.password_env.clone(),
        })
    }
}

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Path => cmd_path(),
        ConfigCommand::CurrentProfile => cmd_current_profile(),
        ConfigCommand::GetProfiles => cmd_get_profiles(ctx),
        ConfigCommand::Show { name } => cmd_show(name.as_deref(), ctx),
        ConfigCommand::UseProfile { name } => cmd_use_profile(&name),
        ConfigCommand::SetProfile {
            name,
            timeout,
            headers,
            auth,
        } => cmd_set_profile(&name, timeout, &headers, &auth, ctx),
        ConfigCommand::DeleteProfile { name } => cmd_delete_profile(&name),
    }
}

fn cmd_path() -> Result<()> {
    match assistant_config::profiles_path() {
        Some(path) => println!("{}", path.display()),
        None => eprintln!("Could not determine config directory"),
    }
    Ok(())
}

fn cmd_current_profile() -> Result<()> {
    let config = assistant_config::load_profiles()?;

    match &config.current_profile {
        Some(name) => println!("{}", name),
        None => {
            println!("No current profile set. Use 'assistant config use-profile <name>' to set one.")
        }
    }

    Ok(())
}

fn cmd_get_profiles(ctx: &Context) -> Result<()> {
    let config = assistant_config::load_profiles()?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if config.profiles.is_empty() {
        println!("No profiles configured.");
        println!();
        println!("Create one with:");
        println!(
            "  assistant config set-profile dev --service-url=https://... --api-key-env=ASSISTANT_KEY"
        );
        return Ok(());
    }

    let current = config.current_profile.as_deref();

    println!("CURRENT   NAME            WORKSPACE                             SERVICE");
    for profile in &config.profiles {
        let marker = if current == Some(profile.name.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{}         {:<15} {:<37} {}",
            marker,
            profile.name,
            profile.workspace.as_deref().unwrap_or("-"),
            profile.service_url
        );
    }

    Ok(())
}

fn cmd_show(name: Option<&str>, ctx: &Context) -> Result<()> {
    let config = assistant_config::load_profiles()?;
    let profile = config
        .select(name)?
        .ok_or_else(|| anyhow::anyhow!("No current profile set"))?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    let dim = Style::new().dim();
    super::print_header(&profile.name);
    println!("Service:   {}", profile.service_url);
    println!("Version:   {}", profile.effective_version());
    println!("Workspace: {}", super::or_dash(profile.workspace.as_deref()));
    println!("Timeout:   {}s", profile.effective_timeout());
    println!("Auth:      {}", describe_auth(profile.auth.as_ref()));
    for (header, value) in &profile.headers {
        println!("{}", dim.apply_to(format!("Header:    {}: {}", header, value)));
    }

    Ok(())
}

fn cmd_use_profile(name: &str) -> Result<()> {
    let mut config = assistant_config::load_profiles()?;

    config.use_profile(name)?;
    assistant_config::save_profiles(&config)?;

    println!("Switched to profile \"{}\".", name);

    Ok(())
}

fn cmd_set_profile(
    name: &str,
    timeout: Option<u64>,
    headers: &[String],
    auth: &AuthArgs,
    ctx: &Context,
) -> Result<()> {
    let mut config = assistant_config::load_profiles()?;
    let headers = parse_headers(headers)?;

    let created = apply_profile(
        &mut config,
        name,
        timeout,
        headers,
        auth.to_auth(),
        &ctx.command_line,
    )?;
    if created {
        println!("Profile \"{}\" created.", name);
    } else {
        println!("Profile \"{}\" modified.", name);
    }

    // The first profile becomes current
    let became_current = config.current_profile.is_none() && config.profiles.len() == 1;
    if became_current {
        config.current_profile = Some(name.to_string());
    }

    let path = assistant_config::save_profiles(&config)?;
    tracing::debug!(path = %path.display(), profile = name, "Saved profiles");

    if became_current {
        println!("Profile \"{}\" set as current profile.", name);
    }

    Ok(())
}

/// Create or update `name` in `config`. Returns whether it was created.
///
/// Only flags typed on the command line are written; `ASSISTANT_*` variables
/// that feed the same flags never end up in the profiles file.
fn apply_profile(
    config: &mut ProfilesConfig,
    name: &str,
    timeout: Option<u64>,
    headers: Vec<(String, String)>,
    auth: Option<AuthConfig>,
    flags: &CommandLineFlags,
) -> Result<bool> {
    let existing = config.profiles.iter_mut().find(|p| p.name == name);

    let created = existing.is_none();
    match existing {
        Some(profile) => {
            if let Some(url) = &flags.service_url {
                profile.service_url = url.clone();
            }
            if let Some(version) = &flags.api_version {
                profile.version = Some(version.clone());
            }
            if let Some(workspace) = &flags.workspace {
                profile.workspace = Some(workspace.clone());
            }
            if let Some(t) = timeout {
                profile.timeout = Some(t);
            }
            if let Some(auth) = auth {
                profile.auth = Some(auth);
            }
            profile.headers.extend(headers);
        }
        None => {
            let service_url = flags.service_url.clone().ok_or_else(|| {
                anyhow::anyhow!("--service-url is required when creating a new profile")
            })?;

            let mut profile = Profile::new(name, service_url);
            if let Some(version) = &flags.api_version {
                profile = profile.with_version(version.clone());
            }
            if let Some(workspace) = &flags.workspace {
                profile = profile.with_workspace(workspace.clone());
            }
            if let Some(t) = timeout {
                profile = profile.with_timeout(t);
            }
            if let Some(auth) = auth {
                profile = profile.with_auth(auth);
            }
            for (header, value) in headers {
                profile = profile.with_header(header, value);
            }
            config.set(profile);
        }
    }

    Ok(created)
}

fn cmd_delete_profile(name: &str) -> Result<()> {
    let mut config = assistant_config::load_profiles()?;

    match config.remove(name) {
        Some(_) => {
            assistant_config::save_profiles(&config)?;
            println!("Profile \"{}\" deleted.", name);
            if config.current_profile.is_none() {
                println!(
                    "Note: No current profile. Use 'assistant config use-profile <name>' to set one."
                );
            }
        }
        None => {
            println!("Profile \"{}\" not found.", name);
        }
    }

    Ok(())
}

fn parse_headers(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|h| {
            let (name, value) = h
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("invalid header '{}', expected NAME=VALUE", h))?;
            let name = name.trim();
            if name.is_empty() {
                anyhow::bail!("invalid header '{}', missing name", h);
            }
            Ok((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

fn describe_auth(auth: Option<&AuthConfig>) -> String {
    fn source(file: &Option<PathBuf>, env: &Option<String>) -> String {
        match (file, env) {
            (Some(f), Some(e)) => format!("file {} or ${}", f.display(), e),
            (Some(f), None) => format!("file {}", f.display()),
            (None, Some(e)) => format!("${}", e),
            (None, None) => "(no source)".to_string(),
        }
    }

    match auth {
        None | Some(AuthConfig::None) => "none".to_string(),
        Some(AuthConfig::ApiKey { key_file, key_env }) => {
            format!("api key from {}", source(key_file, key_env))
        }
        Some(AuthConfig::Basic {
            username,
            password_file,
            password_env,
        }) => format!(
            "basic as {}, password from {}",
            username,
            source(password_file, password_env)
        ),
        Some(AuthConfig::Bearer {
            token_file,
            token_env,
        }) => format!("bearer token from {}", source(token_file, token_env)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(service_url: Option<&str>, workspace: Option<&str>) -> CommandLineFlags {
        CommandLineFlags {
            service_url: service_url.map(String::from),
            api_version: None,
            workspace: workspace.map(String::from),
        }
    }

    #[test]
    fn test_apply_profile_creates() {
        let mut config = ProfilesConfig::default();
        let auth = AuthArgs {
            api_key_env: Some("KEY".to_string()),
            ..Default::default()
        };

        let created = apply_profile(
            &mut config,
            "dev",
            Some(5),
            vec![("X-Trace".to_string(), "1".to_string())],
            auth.to_auth(),
            &flags(Some("http://localhost:9000"), Some("ws-1")),
        )
        .unwrap();

        assert!(created);
        let profile = config.get("dev").unwrap();
        assert_eq!(profile.service_url, "http://localhost:9000");
        assert_eq!(profile.workspace.as_deref(), Some("ws-1"));
        assert_eq!(profile.timeout, Some(5));
        assert_eq!(profile.auth, Some(AuthConfig::api_key_env("KEY")));
        assert_eq!(profile.headers.get("X-Trace").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_apply_profile_requires_url_for_new() {
        let mut config = ProfilesConfig::default();
        let err = apply_profile(&mut config, "dev", None, vec![], None, &flags(None, None))
            .unwrap_err();
        assert!(err.to_string().contains("--service-url"));
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn test_apply_profile_updates_only_given_fields() {
        let mut config = ProfilesConfig::default();
        config.set(
            Profile::new("dev", "http://old")
                .with_workspace("ws-1")
                .with_auth(AuthConfig::bearer_env("TOKEN")),
        );

        let created = apply_profile(
            &mut config,
            "dev",
            None,
            vec![],
            None,
            &flags(Some("http://new"), None),
        )
        .unwrap();

        assert!(!created);
        let profile = config.get("dev").unwrap();
        assert_eq!(profile.service_url, "http://new");
        assert_eq!(profile.workspace.as_deref(), Some("ws-1"));
        assert_eq!(profile.auth, Some(AuthConfig::bearer_env("TOKEN")));
    }

    #[test]
    fn test_auth_args_basic() {
        let auth = AuthArgs {
            username: Some("admin".to_string()),
            password_env: Some("PW".to_string()),
            ..Default::default()
        };
        assert_eq!(auth.to_auth(), Some(AuthConfig::basic_env("admin", "PW")));
        assert_eq!(AuthArgs::default().to_auth(), None);
    }

    #[test]
    fn test_parse_headers() {
        let headers = parse_headers(&["X-Opt-Out = true".to_string()]).unwrap();
        assert_eq!(headers, vec![("X-Opt-Out".to_string(), "true".to_string())]);
        assert!(parse_headers(&["novalue".to_string()]).is_err());
        assert!(parse_headers(&["=v".to_string()]).is_err());
    }

    #[test]
    fn test_describe_auth() {
        assert_eq!(describe_auth(None), "none");
        assert_eq!(
            describe_auth(Some(&AuthConfig::api_key_env("KEY"))),
            "api key from $KEY"
        );
    }
}
