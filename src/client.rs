use std::fmt;
use std::time::Duration;

use http::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{Method, StatusCode};
use log::{debug, trace};
use reqwest::Client as ReqwestClient;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::{
    AuthHandler, DeviceHandler, DeviceManifestHandler, EventHandler, FreeBusyHandler,
    LocationHandler, MeHandler, OrganizationHandler, SpaceHandler, UserHandler,
};
use crate::models::Envelope;
use crate::query::QueryParams;
use crate::{RobinError, RobinResult};

/// Production endpoint of the Robin API.
pub const DEFAULT_BASE_URL: &str = "https://api.robinpowered.com/v1.0/";

/// Placeholder for requests without a body.
pub(crate) const NO_BODY: Option<&()> = None;

/// Builder for [`RobinClient`].
///
/// Everything is validated in [`build`](Self::build); the resulting client is
/// immutable.
#[derive(Default)]
pub struct RobinClientBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl RobinClientBuilder {
    /// Sets the API key. Keys are generated in the Robin dashboard.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Reads the API key from an environment variable.
    ///
    /// An unset variable leaves the key unset, which `build()` reports.
    pub fn api_key_from_env(mut self, var_name: &str) -> Self {
        match std::env::var(var_name) {
            Ok(key) => self.api_key = Some(SecretString::from(key)),
            Err(e) => debug!("API key variable '{var_name}' not readable: {e}"),
        }
        self
    }

    /// Overrides the API base URL. Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets a per-request timeout. No timeout is applied unless one is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for proxies or custom TLS).
    ///
    /// The timeout and user agent options are not applied to a custom client.
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> RobinResult<RobinClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| RobinError::Configuration("API key is required".into()))?;

        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(base_url)
            .map_err(|e| RobinError::Configuration(format!("Invalid base URL: {e}")))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(RobinError::Configuration(format!(
                "Invalid base URL: '{base_url}' is not an http(s) URL"
            )));
        }

        let mut auth_header =
            HeaderValue::from_str(&format!("Access-Token {}", api_key.expose_secret().trim()))
                .map_err(|_| {
                    RobinError::Configuration("API key contains invalid header characters".into())
                })?;
        auth_header.set_sensitive(true);

        let http_client = match self.http_client {
            Some(custom_client) => custom_client,
            None => {
                let user_agent = self
                    .user_agent
                    .as_deref()
                    .unwrap_or(concat!("robin-client/", env!("CARGO_PKG_VERSION")));
                let mut builder = ReqwestClient::builder().user_agent(user_agent);
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(|e| {
                    RobinError::Configuration(format!("Failed to create HTTP client: {e}"))
                })?
            }
        };

        Ok(RobinClient {
            base_url: ensure_trailing_slash(base_url),
            auth_header,
            http_client,
        })
    }
}

/// Client for the Robin API.
///
/// Holds only immutable configuration, so it can be cloned freely and shared
/// between tasks. Every call is a single HTTP round trip; nothing is retried
/// or cached.
#[derive(Clone)]
pub struct RobinClient {
    base_url: Url,
    auth_header: HeaderValue,
    http_client: ReqwestClient,
}

impl fmt::Debug for RobinClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RobinClient")
            .field("base_url", &self.base_url.as_str())
            .field("auth_header", &"Access-Token [REDACTED]")
            .finish()
    }
}

impl RobinClient {
    pub fn builder() -> RobinClientBuilder {
        RobinClientBuilder::default()
    }

    /// Creates a client for the production API with default settings.
    pub fn new(api_key: impl Into<String>) -> RobinResult<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// The base URL every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Makes a request and returns the envelope's `data` decoded as `R`.
    ///
    /// This is what every typed endpoint goes through; it is public for
    /// endpoints that have no dedicated method yet.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method to use.
    /// * `endpoint` - Path relative to the base URL, e.g. `"spaces/7/events"`.
    ///   Must not contain a query string; pass parameters in `query`.
    /// * `query` - Query parameters.
    /// * `body` - Optional JSON request body.
    ///
    /// # Errors
    ///
    /// - [`RobinError::Api`] for non-success responses with an envelope body.
    /// - [`RobinError::MalformedResponse`] when a body does not have the
    ///   expected shape, including success responses without `data`.
    /// - [`RobinError::Transport`] when no response was received.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use robin_client::{QueryParams, RobinClient, RobinError};
    /// # use robin_client::models::Location;
    /// # use http::Method;
    /// # async fn example(client: &RobinClient) -> Result<(), RobinError> {
    /// let mut query = QueryParams::new();
    /// query.push_opt("query", Some("hq")).push_paging(1, 10);
    ///
    /// let locations: Vec<Location> = client
    ///     .request(Method::GET, "organizations/acme/locations", &query, None::<&()>)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request<B, R>(
        &self,
        method: Method,
        endpoint: &str,
        query: &QueryParams,
        body: Option<&B>,
    ) -> RobinResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let (status, text) = self.send(method, endpoint, query, body).await?;

        let envelope: Envelope<R> =
            serde_json::from_str(&text).map_err(|e| RobinError::MalformedResponse {
                status,
                reason: format!("response body could not be decoded: {e}"),
                body: text.clone(),
            })?;

        envelope.data.ok_or_else(|| RobinError::MalformedResponse {
            status,
            reason: "response envelope has no data".into(),
            body: text,
        })
    }

    /// Makes a request whose success response carries nothing of interest.
    ///
    /// Any success status completes the call, with or without a body.
    pub async fn request_empty<B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &QueryParams,
        body: Option<&B>,
    ) -> RobinResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, endpoint, query, body).await.map(|_| ())
    }

    /// Makes a request and returns the envelope's `data` as untyped JSON.
    ///
    /// Returns [`Value::Null`] when the response has no body or no `data`.
    ///
    /// # Warning
    ///
    /// This bypasses the typed models. Prefer the handler methods (like
    /// `spaces()`, `events()`) when possible.
    pub async fn raw_request<B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &QueryParams,
        body: Option<&B>,
    ) -> RobinResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let (status, text) = self.send(method, endpoint, query, body).await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        let envelope: Envelope<Value> =
            serde_json::from_str(&text).map_err(|e| RobinError::MalformedResponse {
                status,
                reason: format!("response body is not an API envelope: {e}"),
                body: text.clone(),
            })?;
        Ok(envelope.data.unwrap_or(Value::Null))
    }

    /// Performs one round trip. Non-success statuses are translated into errors;
    /// success returns the status and the raw body.
    async fn send<B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &QueryParams,
        body: Option<&B>,
    ) -> RobinResult<(StatusCode, String)>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint, query)?;
        debug!("{method} {url}");

        let mut request = self
            .http_client
            .request(method, url)
            .header(AUTHORIZATION, self.auth_header.clone())
            .header(ACCEPT, "application/json");

        if let Some(data) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(data)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        trace!("{status} {text}");

        if !status.is_success() {
            return Err(RobinError::from_response(status, &text));
        }
        Ok((status, text))
    }

    /// Resolves an endpoint path against the base URL and attaches the query.
    pub(crate) fn endpoint_url(&self, endpoint: &str, query: &QueryParams) -> RobinResult<Url> {
        if endpoint.contains(['?', '#']) {
            return Err(RobinError::InvalidEndpoint(format!(
                "endpoint must not include query or fragment: {endpoint}"
            )));
        }

        let relative = endpoint.trim_start_matches('/');
        // `%2e` counts as a dot when the URL is parsed, so encoding can't help here.
        if relative.split('/').any(|segment| {
            matches!(
                segment.to_ascii_lowercase().as_str(),
                "" | "." | ".." | "%2e" | "%2e%2e" | ".%2e" | "%2e."
            )
        }) {
            return Err(RobinError::InvalidEndpoint(format!(
                "endpoint has an empty or dot path segment: {endpoint}"
            )));
        }

        let mut url = self
            .base_url
            .join(relative)
            .map_err(|e| RobinError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

        if !query.is_empty() {
            let rendered = query.to_query_string();
            url.set_query(Some(rendered.trim_start_matches('?')));
        }
        Ok(url)
    }

    /// Details about the access token in use.
    pub fn auth(&self) -> AuthHandler<'_> {
        AuthHandler::new(self)
    }

    /// Organizations and everything scoped to one.
    pub fn organizations(&self) -> OrganizationHandler<'_> {
        OrganizationHandler::new(self)
    }

    pub fn users(&self) -> UserHandler<'_> {
        UserHandler::new(self)
    }

    /// The user the access token belongs to.
    pub fn me(&self) -> MeHandler<'_> {
        MeHandler::new(self)
    }

    pub fn locations(&self) -> LocationHandler<'_> {
        LocationHandler::new(self)
    }

    pub fn spaces(&self) -> SpaceHandler<'_> {
        SpaceHandler::new(self)
    }

    pub fn events(&self) -> EventHandler<'_> {
        EventHandler::new(self)
    }

    pub fn devices(&self) -> DeviceHandler<'_> {
        DeviceHandler::new(self)
    }

    pub fn device_manifests(&self) -> DeviceManifestHandler<'_> {
        DeviceManifestHandler::new(self)
    }

    /// Space availability search.
    pub fn free_busy(&self) -> FreeBusyHandler<'_> {
        FreeBusyHandler::new(self)
    }
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_owned();
        path.push('/');
        url.set_path(&path);
    }
    url
}
