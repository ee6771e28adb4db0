//! Wicket HTTP client
//!
//! Single choke point for every call to the backend. Requests are
//! reified as [`ApiRequest`] values carrying their own `retried` flag,
//! so the at-most-one-retry rule holds per logical request even when
//! several requests hit a 401 concurrently.

pub mod auth;
pub mod error;

use std::sync::Arc;

use error::ClientError;
use reqwest::{Client, ClientBuilder, Method, Response, StatusCode, header};
use serde_json::Value as JsonValue;

use crate::token_store::{ACCESS_TOKEN, MemoryTokenStore, REFRESH_TOKEN, TokenStore};
use crate::types::RefreshResponse;

/// Hook invoked when a refresh cycle fails and the session is over
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// A logical request: everything needed to dispatch it, plus the flag
/// recording whether the refresh-and-retry cycle has already run for it
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<JsonValue>,
    retried: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            retried: false,
        }
    }

    /// Attach a JSON body
    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach an already-built JSON body
    pub fn body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Wicket API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the token store backing this client
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Execute a request, running the refresh-and-retry cycle on a 401,
    /// and decode the successful response body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ClientError> {
        let response = self.send_with_refresh(request).await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Execute a request whose success carries no meaningful body
    pub async fn execute_empty(&self, request: ApiRequest) -> Result<(), ClientError> {
        let response = self.send_with_refresh(request).await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Dispatch a logical request; on the first 401 refresh the token
    /// pair and re-dispatch exactly once. Every other outcome (success
    /// included) passes through unmodified.
    async fn send_with_refresh(&self, mut request: ApiRequest) -> Result<Response, ClientError> {
        loop {
            let response = self.dispatch(&request).await?;
            if response.status() != StatusCode::UNAUTHORIZED || request.retried {
                return Ok(response);
            }

            request.retried = true;
            tracing::debug!(path = %request.path, "access token rejected, refreshing");
            if let Err(err) = self.refresh_tokens().await {
                tracing::warn!(error = %err, "token refresh failed, session expired");
                if let Some(hook) = &self.on_session_expired {
                    hook();
                }
                return Err(ClientError::SessionExpired(Box::new(err)));
            }
        }
    }

    /// Send one attempt, attaching the currently stored access token
    async fn dispatch(&self, request: &ApiRequest) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.client.request(request.method.clone(), url);

        if let Some(token) = self.store.get(ACCESS_TOKEN) {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }

    /// Exchange the stored refresh token for a new token pair. Both
    /// slots are replaced before the caller gets control back, so the
    /// retried request always sees the fresh pair.
    async fn refresh_tokens(&self) -> Result<(), ClientError> {
        let refresh_token = self
            .store
            .get(REFRESH_TOKEN)
            .ok_or_else(|| ClientError::Configuration("no refresh token stored".into()))?;

        let url = format!("{}/auth/refresh/", self.base_url);
        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, format!("Bearer {refresh_token}"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ClientError::from_status(status, message));
        }

        let tokens: RefreshResponse = response.json().await?;
        self.store.set(ACCESS_TOKEN, &tokens.access_token);
        if let Some(refresh_token) = &tokens.refresh_token {
            self.store.set(REFRESH_TOKEN, refresh_token);
        }
        Ok(())
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    store: Option<Arc<dyn TokenStore>>,
    on_session_expired: Option<SessionExpiredHook>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<std::time::Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the token store; defaults to an in-memory store
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the hook fired when a refresh cycle fails
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    /// Set the request timeout (native targets only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("wicket-client/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
            on_session_expired: self.on_session_expired,
        })
    }
}
