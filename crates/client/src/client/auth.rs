//! Authentication API client methods

use reqwest::Method;

use super::{ApiClient, ApiRequest, error::ClientError};
use crate::token_store::{ACCESS_TOKEN, REFRESH_TOKEN};
use crate::types::{AuthResponse, Credentials, ProfileUpdate, Registration, User};

impl ApiClient {
    /// Log in with username and password. The returned token pair is
    /// persisted to the store before control returns to the caller, so
    /// any subsequent request sees the fresh tokens.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        let request = ApiRequest::new(Method::POST, "/auth/login/").json(credentials)?;
        let response: AuthResponse = self.execute(request).await?;
        self.store_token_pair(&response);
        Ok(response)
    }

    /// Register a new account; same token persistence rule as login
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ClientError> {
        let request = ApiRequest::new(Method::POST, "/auth/register/").json(registration)?;
        let response: AuthResponse = self.execute(request).await?;
        self.store_token_pair(&response);
        Ok(response)
    }

    /// Log out. Both stored tokens are removed whatever the remote call
    /// returned; the security property that matters is that no locally
    /// usable token remains.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = self
            .execute_empty(ApiRequest::new(Method::POST, "/auth/logout/"))
            .await;

        self.token_store().remove(ACCESS_TOKEN);
        self.token_store().remove(REFRESH_TOKEN);

        if let Err(err) = &result {
            tracing::warn!(error = %err, "remote logout failed, local tokens cleared anyway");
        }
        result
    }

    /// Fetch the currently authenticated user
    pub async fn current_user(&self) -> Result<User, ClientError> {
        self.execute(ApiRequest::new(Method::GET, "/auth/user/me/"))
            .await
    }

    /// PATCH the profile with the empty-field-stripped payload. The
    /// server's returned representation is authoritative.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User, ClientError> {
        let request = ApiRequest::new(Method::PATCH, "/auth/user/me/").body(update.into_payload());
        self.execute(request).await
    }

    fn store_token_pair(&self, response: &AuthResponse) {
        self.token_store().set(ACCESS_TOKEN, &response.access_token);
        self.token_store()
            .set(REFRESH_TOKEN, &response.refresh_token);
    }
}
