//! Building a client from the selected profile and CLI overrides.

use std::time::Duration;

use anyhow::{Context as _, Result};
use assistant_client::{AssistantClient, Credentials, DEFAULT_SERVICE_URL};
use assistant_config::{DEFAULT_TIMEOUT_SECS, DEFAULT_VERSION, Profile, ResolvedAuth};

use super::Context;

/// A configured client plus the workspace commands default to.
pub struct Connection {
    pub client: AssistantClient,
    workspace: Option<String>,
}

impl Connection {
    /// The workspace to act on.
    pub fn workspace(&self) -> Result<&str> {
        self.workspace.as_deref().ok_or_else(|| {
            anyhow::anyhow!("no workspace selected; pass --workspace or set one in the profile")
        })
    }
}

/// Connect using the profiles file and CLI overrides.
pub fn connect(ctx: &Context) -> Result<Connection> {
    let profiles = assistant_config::load_profiles()?;
    let profile = profiles.select(ctx.profile.as_deref())?;
    build(ctx, profile)
}

/// Build a connection from an optional profile; flags win over the profile.
pub fn build(ctx: &Context, profile: Option<&Profile>) -> Result<Connection> {
    let service_url = ctx
        .service_url
        .clone()
        .or_else(|| profile.map(|p| p.service_url.clone()))
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

    let version = ctx
        .api_version
        .clone()
        .or_else(|| profile.map(|p| p.effective_version().to_string()))
        .unwrap_or_else(|| DEFAULT_VERSION.to_string());

    let timeout = profile.map_or(DEFAULT_TIMEOUT_SECS, Profile::effective_timeout);

    let credentials = match &ctx.api_key {
        Some(key) => Some(Credentials::ApiKey(key.clone())),
        None => match profile {
            Some(profile) => profile.credentials()?.map(into_credentials),
            None => None,
        },
    };

    let mut builder = AssistantClient::builder()
        .service_url(&service_url)
        .version(version)
        .credentials(credentials)
        .timeout(Duration::from_secs(timeout));

    if let Some(profile) = profile {
        for (name, value) in &profile.headers {
            builder = builder.header(name, value);
        }
    }

    let client = builder
        .build()
        .with_context(|| format!("cannot configure client for {}", service_url))?;

    tracing::debug!(
        service_url = %service_url,
        profile = profile.map(|p| p.name.as_str()).unwrap_or("<none>"),
        "client configured"
    );

    Ok(Connection {
        client,
        workspace: ctx
            .workspace
            .clone()
            .or_else(|| profile.and_then(|p| p.workspace.clone())),
    })
}

fn into_credentials(auth: ResolvedAuth) -> Credentials {
    match auth {
        ResolvedAuth::ApiKey(key) => Credentials::ApiKey(key),
        ResolvedAuth::Basic { username, password } => Credentials::Basic { username, password },
        ResolvedAuth::Bearer(token) => Credentials::Bearer(token),
    }
}
