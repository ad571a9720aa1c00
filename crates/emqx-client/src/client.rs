//! Main client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::Instrument;

use crate::api::{
    ClusterApi, ConnectionsApi, ListenersApi, MetricsApi, MqttApi, NodesApi, PluginsApi,
    RoutesApi, SessionsApi, SubscriptionsApi,
};
use crate::error::{Error, Result};
use crate::path::ApiPath;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for an [`EmqxClient`].
///
/// An empty `base_url` or a zero `timeout` falls back to
/// [`DEFAULT_BASE_URL`] / [`DEFAULT_TIMEOUT`] when the client is created.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Management API base URL.
    pub base_url: String,
    /// Application ID.
    pub app_id: String,
    /// Application secret.
    pub app_secret: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config with credentials and default base URL and timeout.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            ..Self::default()
        }
    }

    /// Fill unset values with defaults.
    fn normalized(mut self) -> Self {
        if self.base_url.is_empty() {
            self.base_url = DEFAULT_BASE_URL.to_string();
        }
        if self.timeout.is_zero() {
            self.timeout = DEFAULT_TIMEOUT;
        }
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Build the `Authorization` value for HTTP Basic auth.
pub(crate) fn basic_auth(app_id: &str, app_secret: &str) -> Result<HeaderValue> {
    let encoded = STANDARD.encode(format!("{}:{}", app_id, app_secret));
    let mut value = HeaderValue::try_from(format!("Basic {}", encoded))
        .map_err(|e| Error::Config(format!("invalid authorization header: {}", e)))?;
    value.set_sensitive(true);
    Ok(value)
}

/// EMQX management API client.
///
/// Holds one credential and one base URL for its whole lifetime. Cloning is
/// cheap and clones share the same connection pool.
///
/// # Example
///
/// ```no_run
/// use emqx_client::EmqxClient;
///
/// # async fn example() -> emqx_client::Result<()> {
/// let client = EmqxClient::builder()
///     .base_url("http://localhost:8080")
///     .credentials("admin", "public")
///     .build()?;
///
/// let brokers = client.cluster().list().await?;
/// for broker in brokers.data {
///     println!("{} {}", broker.node, broker.node_status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EmqxClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client, owned by this instance.
    http: reqwest::Client,
    /// Base URL for API requests.
    base_url: String,
    /// Precomputed `Authorization` header value.
    authorization: HeaderValue,
    /// Request timeout.
    timeout: Duration,
}

impl fmt::Debug for EmqxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmqxClient")
            .field("base_url", &self.inner.base_url)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl EmqxClient {
    /// Create a client from a config, applying defaults for unset values.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.normalized();
        let authorization = basic_auth(&config.app_id, &config.app_secret)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("emqx-client/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "created EMQX client");

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.base_url,
                authorization,
                timeout: config.timeout,
            }),
        })
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the cluster/broker API.
    pub fn cluster(&self) -> ClusterApi {
        ClusterApi::new(self.clone())
    }

    /// Access the node statistics API.
    pub fn nodes(&self) -> NodesApi {
        NodesApi::new(self.clone())
    }

    /// Access the connections API.
    pub fn connections(&self) -> ConnectionsApi {
        ConnectionsApi::new(self.clone())
    }

    /// Access the sessions API.
    pub fn sessions(&self) -> SessionsApi {
        SessionsApi::new(self.clone())
    }

    /// Access the subscriptions API.
    pub fn subscriptions(&self) -> SubscriptionsApi {
        SubscriptionsApi::new(self.clone())
    }

    /// Access the routes API.
    pub fn routes(&self) -> RoutesApi {
        RoutesApi::new(self.clone())
    }

    /// Access the publish/subscribe actions.
    pub fn mqtt(&self) -> MqttApi {
        MqttApi::new(self.clone())
    }

    /// Access the plugins API.
    pub fn plugins(&self) -> PluginsApi {
        PluginsApi::new(self.clone())
    }

    /// Access the listeners API.
    pub fn listeners(&self) -> ListenersApi {
        ListenersApi::new(self.clone())
    }

    /// Access the metrics API.
    pub fn metrics(&self) -> MetricsApi {
        MetricsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: ApiPath) -> Result<T> {
        self.execute(Method::GET, &path, None).await
    }

    /// Make a PUT request without a body.
    pub(crate) async fn put<T: DeserializeOwned>(&self, path: ApiPath) -> Result<T> {
        self.execute(Method::PUT, &path, None).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: ApiPath, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)?;
        self.execute(Method::POST, &path, Some(payload)).await
    }

    /// Send one request and decode the response body into `T`.
    ///
    /// The HTTP status is not consulted: any body that decodes into `T` is a
    /// success, any body that does not is returned as [`Error::Decode`]
    /// carrying the raw text.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &ApiPath,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let span = tracing::debug_span!("emqx_request", %method, %path);
        self.send_and_decode(method, path, body).instrument(span).await
    }

    async fn send_and_decode<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &ApiPath,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let url = path.resolve(&self.inner.base_url)?;
        tracing::debug!(url = %url, "sending request");

        let mut request = self
            .inner
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.inner.authorization.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = text.len(), "received response");

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(source) => {
                tracing::warn!(status = status.as_u16(), error = %source, "response body did not decode");
                Err(Error::Decode { body: text, source })
            }
        }
    }
}

/// Builder for creating an EmqxClient.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the management API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the application ID and secret.
    pub fn credentials(mut self, app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        self.config.app_id = app_id.into();
        self.config.app_secret = app_secret.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<EmqxClient> {
        EmqxClient::new(self.config)
    }
}
