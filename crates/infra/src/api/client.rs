//! API client with session-aware request/response handling
//!
//! Every call goes through two hooks: the bearer token from the
//! [`TokenStore`] is attached on the way out, and a 401 on the way back
//! clears the store and notifies the [`UnauthorizedHandler`]. Calls are sent
//! once; there is no retry or queuing.

use std::sync::Arc;
use std::time::Duration;

use jobboard_domain::constants::{DEFAULT_API_BASE_URL, HEALTH_CHECK_TIMEOUT_SECS};
use jobboard_domain::ApiConfig;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::errors::ApiError;
use super::request::ApiRequest;
use super::token_store::TokenStore;
use super::unauthorized::{SharedUnauthorizedHandler, UnauthorizedHandler};
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base URL including the version prefix (e.g. "http://localhost:5000/api/v1")
    pub base_url: String,
    /// Overall request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_string(), timeout: None, user_agent: None }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout_seconds.map(Duration::from_secs),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Session-aware JSON API client
///
/// Shared by every service through `Arc<ApiClient>`.
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    base_url: String,
    token_store: TokenStore,
    on_unauthorized: Option<SharedUnauthorizedHandler>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    ///
    /// * `config` - Client configuration
    /// * `token_store` - Session the client reads and clears
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base URL is invalid or the
    /// HttpClient cannot be created
    pub fn new(config: ApiClientConfig, token_store: TokenStore) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{}': {e}", config.base_url)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "Unsupported base URL scheme '{}'",
                base_url.scheme()
            )));
        }

        let mut builder = HttpClient::builder().timeout(config.timeout);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http_client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;

        Ok(Self {
            http_client: Arc::new(http_client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token_store,
            on_unauthorized: None,
        })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Session store used by the request hooks
    pub fn token_store(&self) -> &TokenStore {
        &self.token_store
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and decode the JSON response
    ///
    /// # Errors
    ///
    /// Any non-2xx status, transport failure or undecodable body. A 401 has
    /// already cleared the session when it is returned.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let url = self.url_for(&request.path);

        let mut builder = self.http_client.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        match self.token_store.token().await {
            Some(token) if !token.is_empty() => {
                builder = builder.bearer_auth(token);
            }
            _ => debug!("No session token, sending unauthenticated request"),
        }

        let response = self.http_client.send(builder).await.map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            // Clear before the body read so a dropped future cannot skip it
            if status == StatusCode::UNAUTHORIZED {
                self.handle_unauthorized().await;
            }
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &url, &body);
            warn!(status = %status, error = %err, "API request failed");
            return Err(err);
        }

        // 204/205 have no body by RFC; an empty 200 is treated the same way
        let body = if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            String::new()
        } else {
            response
                .text()
                .await
                .map_err(|e| ApiError::Decode(format!("Failed to read response body: {e}")))?
        };

        let result: T = if body.trim().is_empty() {
            serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "Empty response ({}), but response type cannot be deserialized from null",
                    status.as_u16()
                ))
            })?
        } else {
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?
        };

        debug!(status = %status, "API request successful");
        Ok(result)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::get(path)).await
    }

    /// GET with query pairs; pairs are sent in order, unset filters should
    /// simply be left out
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        self.execute(ApiRequest::get(path).with_query(query)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(ApiRequest::post(path).with_json(body)?).await
    }

    /// POST without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::post(path)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(ApiRequest::put(path).with_json(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::delete(path)).await
    }

    /// Health check for API
    ///
    /// Unauthenticated probe of `GET /health` bounded by a short timeout.
    ///
    /// # Returns
    ///
    /// `true` if API is reachable and healthy, `false` on a non-2xx status
    ///
    /// # Errors
    ///
    /// Returns error if the API cannot be reached
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<bool, ApiError> {
        let url = self.url_for("/health");
        let timeout = Duration::from_secs(HEALTH_CHECK_TIMEOUT_SECS);

        debug!(url = %url, "Health check");

        let request = self.http_client.request(Method::GET, &url);
        let response =
            tokio::time::timeout(timeout, self.http_client.send(request)).await.map_err(|_| {
                warn!("Health check timeout");
                ApiError::Timeout(format!("Health check exceeded {timeout:?}"))
            })?;

        match response {
            Ok(resp) if resp.status().is_success() => {
                info!("API is healthy");
                Ok(true)
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "API returned non-success status");
                Ok(false)
            }
            Err(e) => {
                warn!(error = %e, "Health check failed");
                Err(ApiError::from(e))
            }
        }
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn handle_unauthorized(&self) {
        warn!("Received 401, clearing session");
        self.token_store.clear().await;
        if let Some(handler) = &self.on_unauthorized {
            handler.on_unauthorized();
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_unauthorized_handler", &self.on_unauthorized.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    token_store: Option<TokenStore>,
    on_unauthorized: Option<SharedUnauthorizedHandler>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the session store
    pub fn token_store(mut self, token_store: TokenStore) -> Self {
        self.token_store = Some(token_store);
        self
    }

    /// Hook called after a 401 has cleared the session
    pub fn on_unauthorized<H>(mut self, handler: H) -> Self
    where
        H: UnauthorizedHandler + 'static,
    {
        self.on_unauthorized = Some(Arc::new(handler));
        self
    }

    /// Same as [`Self::on_unauthorized`] for an already shared handler
    pub fn unauthorized_handler(mut self, handler: Option<SharedUnauthorizedHandler>) -> Self {
        self.on_unauthorized = handler;
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the token store is missing or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let token_store =
            self.token_store.ok_or_else(|| ApiError::Config("Token store not set".to_string()))?;

        let mut client = ApiClient::new(config, token_store)?;
        client.on_unauthorized = self.on_unauthorized;
        Ok(client)
    }
}
