//! Main client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};
use url::Url;

use crate::api::{
    CounterexamplesApi, DialogNodesApi, EntitiesApi, ExamplesApi, IntentsApi, LogsApi, MessageApi,
    SynonymsApi, ValuesApi, WorkspacesApi,
};
use crate::conversation::Conversation;
use crate::error::{Error, ErrorResponse, Result};

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Public endpoint used when no service URL is configured.
pub const DEFAULT_SERVICE_URL: &str = "https://gateway.watsonplatform.net/assistant/api";

/// API major version segment prepended to every path.
const API_PREFIX: &str = "v1";

/// Assistant API client.
///
/// Provides typed access to the message endpoint and every workspace
/// resource. Cloning is cheap; clones share the connection pool.
///
/// # Example
///
/// ```no_run
/// use assistant_client::AssistantClient;
///
/// # async fn example() -> assistant_client::Result<()> {
/// let client = AssistantClient::builder()
///     .version("2018-02-16")
///     .api_key("secret")
///     .build()?;
///
/// let workspaces = client.workspaces().list(&Default::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AssistantClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
#[derive(Clone)]
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Service URL exactly as configured; validated on every request.
    pub(crate) service_url: String,
    /// API version date sent as the `version` query parameter.
    pub(crate) version: String,
    /// Credentials applied to every request.
    pub(crate) credentials: Option<Credentials>,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

/// Credentials for authenticating against the service.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// API key, sent as basic auth with the user name `apikey`.
    ApiKey(String),
    /// Service username and password.
    Basic { username: String, password: String },
    /// Pre-issued bearer token.
    Bearer(String),
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.write_str("ApiKey(***)"),
            Credentials::Basic { username, .. } => {
                write!(f, "Basic {{ username: {:?}, password: *** }}", username)
            }
            Credentials::Bearer(_) => f.write_str("Bearer(***)"),
        }
    }
}

impl AssistantClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the service URL as configured.
    pub fn service_url(&self) -> &str {
        &self.inner.service_url
    }

    /// Get the API version date.
    pub fn version(&self) -> &str {
        &self.inner.version
    }

    /// Return a client pointed at a different service URL.
    ///
    /// The URL is not checked here. Every call made through the returned
    /// client validates it first and fails with [`Error::BadUrl`] without
    /// touching the network when it is malformed.
    pub fn with_service_url(&self, service_url: impl Into<String>) -> Self {
        let mut inner = (*self.inner).clone();
        inner.service_url = service_url.into();
        Self {
            inner: Arc::new(inner),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the message API.
    pub fn message(&self) -> MessageApi {
        MessageApi::new(self.clone())
    }

    /// Start a stateful conversation against a workspace.
    pub fn conversation(&self, workspace_id: impl Into<String>) -> Conversation {
        Conversation::new(self.clone(), workspace_id)
    }

    /// Access the workspaces API.
    pub fn workspaces(&self) -> WorkspacesApi {
        WorkspacesApi::new(self.clone())
    }

    /// Access the intents API.
    pub fn intents(&self) -> IntentsApi {
        IntentsApi::new(self.clone())
    }

    /// Access the intent examples API.
    pub fn examples(&self) -> ExamplesApi {
        ExamplesApi::new(self.clone())
    }

    /// Access the counterexamples API.
    pub fn counterexamples(&self) -> CounterexamplesApi {
        CounterexamplesApi::new(self.clone())
    }

    /// Access the entities API.
    pub fn entities(&self) -> EntitiesApi {
        EntitiesApi::new(self.clone())
    }

    /// Access the entity values API.
    pub fn values(&self) -> ValuesApi {
        ValuesApi::new(self.clone())
    }

    /// Access the value synonyms API.
    pub fn synonyms(&self) -> SynonymsApi {
        SynonymsApi::new(self.clone())
    }

    /// Access the dialog nodes API.
    pub fn dialog_nodes(&self) -> DialogNodesApi {
        DialogNodesApi::new(self.clone())
    }

    /// Access the logs API.
    pub fn logs(&self) -> LogsApi {
        LogsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL from path segments.
    ///
    /// Each segment is percent-encoded on its own, so identifiers containing
    /// spaces or slashes (example texts, synonyms) stay a single segment.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = parse_service_url(&self.inner.service_url)?;
        url.path_segments_mut()
            .map_err(|_| Error::BadUrl {
                url: self.inner.service_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .push(API_PREFIX)
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("version", &self.inner.version);
        Ok(url)
    }

    /// Start a request with auth and timeout applied.
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        let request = self
            .inner
            .http
            .request(method, url)
            .timeout(self.inner.timeout);

        Ok(match &self.inner.credentials {
            Some(Credentials::ApiKey(key)) => request.basic_auth("apikey", Some(key)),
            Some(Credentials::Basic { username, password }) => {
                request.basic_auth(username, Some(password))
            }
            Some(Credentials::Bearer(token)) => request.bearer_auth(token),
            None => request,
        })
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let request = self.request(Method::GET, segments)?.query(query);
        self.execute(request).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let request = self.request(Method::POST, segments)?.json(body);
        self.execute(request).await
    }

    /// Make a POST request with query parameters.
    pub(crate) async fn post_with_query<T, B, Q>(
        &self,
        segments: &[&str],
        query: &Q,
        body: &B,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
        Q: serde::Serialize + ?Sized,
    {
        let request = self.request(Method::POST, segments)?.query(query).json(body);
        self.execute(request).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<()> {
        let request = self.request(Method::DELETE, segments)?;
        let (status, body) = self.send(request).await?;

        if !status.is_success() {
            return Err(service_error(status.as_u16(), &body));
        }

        Ok(())
    }

    /// Send a request and decode a JSON body.
    async fn execute<T: serde::de::DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let (status, body) = self.send(request).await?;

        if status.is_success() {
            Ok(serde_json::from_slice(&body)?)
        } else {
            Err(service_error(status.as_u16(), &body))
        }
    }

    /// Send a request and read the whole body.
    async fn send(&self, request: RequestBuilder) -> Result<(reqwest::StatusCode, Vec<u8>)> {
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.inner.http.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(%method, %path, status = status.as_u16(), bytes = body.len(), "assistant request");

        Ok((status, body.to_vec()))
    }
}

/// Parse and sanity-check a service URL.
fn parse_service_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::BadUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::BadUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(Error::BadUrl {
            url: raw.to_string(),
            reason: "URL has no host".to_string(),
        });
    }

    Ok(url)
}

/// Build a service error from a failed response.
fn service_error(status: u16, body: &[u8]) -> Error {
    let message = serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.message())
        .unwrap_or_else(|| format!("HTTP {}", status));

    Error::Service {
        status,
        message,
        body: String::from_utf8_lossy(body).into_owned(),
    }
}

/// Builder for creating an AssistantClient.
#[derive(Debug)]
pub struct ClientBuilder {
    service_url: Option<String>,
    version: Option<String>,
    credentials: Option<Credentials>,
    headers: Vec<(String, String)>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            service_url: None,
            version: None,
            credentials: None,
            headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the service URL (defaults to [`DEFAULT_SERVICE_URL`]).
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Set the API version date, e.g. `2018-02-16`.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Authenticate with an API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::ApiKey(key.into()));
        self
    }

    /// Authenticate with a service username and password.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Basic {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Authenticate with a bearer token.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Bearer(token.into()));
        self
    }

    /// Set credentials directly.
    pub fn credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AssistantClient> {
        let version = self
            .version
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::Config("version is required".to_string()))?;

        let service_url = self
            .service_url
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        parse_service_url(&service_url)?;

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::Config(format!("Invalid header name '{}'", name)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::Config(format!("Invalid value for header '{}'", name)))?;
            headers.insert(name, value);
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("assistant-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(AssistantClient {
            inner: Arc::new(ClientInner {
                http,
                service_url,
                version,
                credentials: self.credentials,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
