//! Integration tests for the Wicket API client

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use wicket_client::types::{Credentials, ProfileUpdate, Registration};
use wicket_client::{
    ACCESS_TOKEN, ApiClient, ClientError, MemoryTokenStore, REFRESH_TOKEN, TokenStore,
};

/// Matches requests that carry no Authorization header at all
struct NoAuthHeader;

impl wiremock::Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

fn client_with_store(base_url: &str) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::builder()
        .base_url(base_url)
        .token_store(store.clone())
        .build()
        .unwrap();
    (client, store)
}

fn user_json() -> serde_json::Value {
    json!({"id": "1", "email": "a@x.com", "username": "alice"})
}

#[tokio::test]
async fn test_client_builder() {
    let client = ApiClient::builder()
        .base_url("http://localhost:8000/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8000");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ApiClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_stored_token_attached_as_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/user/me/"))
        .and(header("authorization", "Bearer AT1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&mock_server)
        .await;

    let (client, store) = client_with_store(&mock_server.uri());
    store.set(ACCESS_TOKEN, "AT1");

    let user = client.current_user().await.unwrap();
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_request_without_token_is_unauthenticated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/user/me/"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&mock_server)
        .await;

    let (client, _store) = client_with_store(&mock_server.uri());

    let user = client.current_user().await.unwrap();
    assert_eq!(user.id, "1");
}

#[tokio::test]
async fn test_401_refreshes_and_retries_once() {
    let mock_server = MockServer::start().await;

    // Stale access token is rejected...
    Mock::given(method("GET"))
        .and(path("/auth/user/me/"))
        .and(header("authorization", "Bearer STALE"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .expect(1)
        .mount(&mock_server)
        .await;

    // ...the refresh token is exchanged for a rotated pair...
    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .and(header("authorization", "Bearer RT1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"accessToken": "FRESH", "refreshToken": "RT2"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // ...and the retried request succeeds with the new access token.
    Mock::given(method("GET"))
        .and(path("/auth/user/me/"))
        .and(header("authorization", "Bearer FRESH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, store) = client_with_store(&mock_server.uri());
    store.set(ACCESS_TOKEN, "STALE");
    store.set(REFRESH_TOKEN, "RT1");

    // The caller observes the retried response, not the 401.
    let user = client.current_user().await.unwrap();
    assert_eq!(user.username, "alice");

    // Both slots were replaced before the retry was dispatched.
    assert_eq!(store.get(ACCESS_TOKEN), Some("FRESH".to_string()));
    assert_eq!(store.get(REFRESH_TOKEN), Some("RT2".to_string()));
}

#[tokio::test]
async fn test_second_401_is_terminal() {
    let mock_server = MockServer::start().await;

    // The protected route rejects every token it is shown: exactly two
    // attempts are allowed, never a third.
    Mock::given(method("GET"))
        .and(path("/auth/user/me/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "AT2"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, store) = client_with_store(&mock_server.uri());
    store.set(ACCESS_TOKEN, "AT1");
    store.set(REFRESH_TOKEN, "RT1");

    let result = client.current_user().await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn test_refresh_failure_expires_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/user/me/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("refresh token expired"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set(ACCESS_TOKEN, "AT1");
    store.set(REFRESH_TOKEN, "RT1");

    let expired_calls = Arc::new(AtomicUsize::new(0));
    let counter = expired_calls.clone();
    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(store)
        .on_session_expired(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    // The refresh error is what the caller sees, not the original 401.
    let result = client.current_user().await;
    assert!(matches!(result, Err(ClientError::SessionExpired(_))));
    assert_eq!(expired_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_401_without_refresh_token_expires_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/user/me/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, store) = client_with_store(&mock_server.uri());
    store.set(ACCESS_TOKEN, "AT1");

    let result = client.current_user().await;
    assert!(matches!(result, Err(ClientError::SessionExpired(_))));
}

#[tokio::test]
async fn test_login_persists_token_pair() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(body_json(
            json!({"username": "alice", "password": "secret123"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_json(),
            "accessToken": "AT1",
            "refreshToken": "RT1"
        })))
        .mount(&mock_server)
        .await;

    let (client, store) = client_with_store(&mock_server.uri());

    let credentials = Credentials {
        username: "alice".to_string(),
        password: "secret123".to_string(),
    };
    let response = client.login(&credentials).await.unwrap();

    assert_eq!(response.user.username, "alice");
    assert_eq!(store.get(ACCESS_TOKEN), Some("AT1".to_string()));
    assert_eq!(store.get(REFRESH_TOKEN), Some("RT1".to_string()));
}

#[tokio::test]
async fn test_register_persists_token_pair() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_json(),
            "accessToken": "AT1",
            "refreshToken": "RT1"
        })))
        .mount(&mock_server)
        .await;

    let (client, store) = client_with_store(&mock_server.uri());

    let registration = Registration {
        email: "a@x.com".to_string(),
        username: "alice".to_string(),
        password: "secret123".to_string(),
        first_name: "Ada".to_string(),
        middle_name: "A".to_string(),
        last_name: "Lovelace".to_string(),
    };
    let response = client.register(&registration).await.unwrap();

    assert_eq!(response.user.id, "1");
    assert_eq!(store.get(ACCESS_TOKEN), Some("AT1".to_string()));
    assert_eq!(store.get(REFRESH_TOKEN), Some("RT1".to_string()));
}

#[tokio::test]
async fn test_logout_clears_tokens_even_when_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let (client, store) = client_with_store(&mock_server.uri());
    store.set(ACCESS_TOKEN, "AT1");
    store.set(REFRESH_TOKEN, "RT1");

    let result = client.logout().await;
    assert!(result.is_err());
    assert_eq!(store.get(ACCESS_TOKEN), None);
    assert_eq!(store.get(REFRESH_TOKEN), None);
}

#[tokio::test]
async fn test_logout_clears_tokens_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let (client, store) = client_with_store(&mock_server.uri());
    store.set(ACCESS_TOKEN, "AT1");
    store.set(REFRESH_TOKEN, "RT1");

    client.logout().await.unwrap();
    assert_eq!(store.get(ACCESS_TOKEN), None);
    assert_eq!(store.get(REFRESH_TOKEN), None);
}

#[tokio::test]
async fn test_update_profile_strips_empty_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/auth/user/me/"))
        .and(body_json(json!({"email": "new@x.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"id": "1", "email": "new@x.com", "username": "alice"}),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, store) = client_with_store(&mock_server.uri());
    store.set(ACCESS_TOKEN, "AT1");

    let update = ProfileUpdate {
        username: Some(String::new()),
        email: Some("new@x.com".to_string()),
        ..Default::default()
    };
    let user = client.update_profile(update).await.unwrap();
    assert_eq!(user.email, "new@x.com");
}

#[tokio::test]
async fn test_validation_error_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("username taken"))
        .mount(&mock_server)
        .await;

    let (client, _store) = client_with_store(&mock_server.uri());

    let registration = Registration {
        email: "a@x.com".to_string(),
        username: "alice".to_string(),
        password: "secret123".to_string(),
        first_name: "Ada".to_string(),
        middle_name: "A".to_string(),
        last_name: "Lovelace".to_string(),
    };
    let result = client.register(&registration).await;
    assert!(matches!(result, Err(ClientError::BadRequest(message)) if message == "username taken"));
}

#[tokio::test]
async fn test_server_error_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/user/me/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let (client, _store) = client_with_store(&mock_server.uri());

    let result = client.current_user().await;
    assert!(matches!(
        result,
        Err(ClientError::ServerError { status: 503, .. })
    ));
}
