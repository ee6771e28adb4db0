//! Client configuration and initialization

use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use wicket_client::{ApiClient, ClientError};

use crate::config::{self, AuthConfig};
use crate::token_store::BrowserTokenStore;

/// Global client instance
static CLIENT: Lazy<Mutex<Option<ApiClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the shared API client, building it on first use
pub fn api_client() -> Result<ApiClient, ClientError> {
    let mut client_lock = CLIENT.lock().expect("Failed to acquire client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = ApiClient::builder()
        .base_url(config::api_base_url())
        .token_store(Arc::new(BrowserTokenStore))
        .on_session_expired(redirect_to_login)
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Force navigation to the login page when the refresh cycle fails,
/// unless the user is already on the login or registration page
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        if !path.starts_with(AuthConfig::LOGIN_PATH) && !path.starts_with(AuthConfig::REGISTER_PATH)
        {
            log::info!("session expired, redirecting to login");
            let _ = location.set_href(AuthConfig::LOGIN_PATH);
        }
    }
}
