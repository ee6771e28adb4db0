//! Wire types shared with the backend auth service
//!
//! User fields are snake_case on the wire; the token fields of the auth
//! and refresh responses are camelCase (`accessToken`/`refreshToken`)
//! per the backend contract.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration request payload; all fields are required for submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
}

/// Server-issued identity record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Response to login and register: the user plus a fresh token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// Response to the refresh endpoint; the refresh token is only rotated
/// when the backend chooses to return one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// Partial profile update, PATCHed to `/auth/user/me/`
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

impl ProfileUpdate {
    /// Build the request body, dropping empty and whitespace-only
    /// fields. Unchanged fields that are re-submitted non-empty are
    /// kept as-is; the server decides what actually changed.
    pub fn into_payload(self) -> JsonValue {
        let mut map = serde_json::Map::new();
        let fields = [
            ("email", self.email),
            ("username", self.username),
            ("first_name", self.first_name),
            ("middle_name", self.middle_name),
            ("last_name", self.last_name),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                if !value.trim().is_empty() {
                    map.insert(key.to_string(), JsonValue::String(value));
                }
            }
        }
        JsonValue::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_payload_drops_empty_fields() {
        let update = ProfileUpdate {
            email: Some("new@x.com".to_string()),
            username: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(update.into_payload(), json!({"email": "new@x.com"}));
    }

    #[test]
    fn profile_payload_drops_whitespace_only_fields() {
        let update = ProfileUpdate {
            first_name: Some("   ".to_string()),
            last_name: Some("Lovelace".to_string()),
            ..Default::default()
        };
        assert_eq!(update.into_payload(), json!({"last_name": "Lovelace"}));
    }

    #[test]
    fn profile_payload_keeps_resubmitted_fields() {
        let update = ProfileUpdate {
            email: Some("a@x.com".to_string()),
            username: Some("alice".to_string()),
            ..Default::default()
        };
        assert_eq!(
            update.into_payload(),
            json!({"email": "a@x.com", "username": "alice"})
        );
    }

    #[test]
    fn auth_response_uses_camel_case_token_fields() {
        let raw = json!({
            "user": {"id": "1", "email": "a@x.com", "username": "alice"},
            "accessToken": "AT1",
            "refreshToken": "RT1"
        });
        let response: AuthResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.access_token, "AT1");
        assert_eq!(response.refresh_token, "RT1");
        assert_eq!(response.user.username, "alice");
        assert_eq!(response.user.first_name, None);
    }

    #[test]
    fn refresh_response_tolerates_missing_refresh_token() {
        let response: RefreshResponse =
            serde_json::from_value(json!({"accessToken": "AT2"})).unwrap();
        assert_eq!(response.access_token, "AT2");
        assert_eq!(response.refresh_token, None);
    }
}
