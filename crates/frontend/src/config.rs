//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Path forced when the session expires
    pub const LOGIN_PATH: &'static str = "/login";

    /// Registration path, exempt from the expired-session redirect
    pub const REGISTER_PATH: &'static str = "/register";

    /// Backend address used when `WICKET_API_URL` is unset at build time
    pub const DEFAULT_API_URL: &'static str = "http://localhost:8000";
}

/// Base URL for the backend auth service
pub fn api_base_url() -> String {
    option_env!("WICKET_API_URL")
        .unwrap_or(AuthConfig::DEFAULT_API_URL)
        .to_string()
}
