//! Session endpoint tests.
//!
//! # Invariants
//! - The `auth_token` cookie set by sign-in is replayed on later requests.
//! - 401 responses surface as `ClientError::Unauthorized` with the engine's text.

mod common;

use common::*;
use secrecy::SecretString;
use sentinel_client::{ClientError, SentinelClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};

fn password(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

#[tokio::test]
async fn test_sign_in_sends_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(body_json(json!({"username": "admin", "password": "hunter22"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "sign-in successful"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::sign_in(
        &client,
        &mock_server.uri(),
        "admin",
        &password("hunter22"),
        None,
    )
    .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_sign_in_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": "invalid username or password"})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::sign_in(&client, &mock_server.uri(), "admin", &password("x"), None)
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.user_message(), "invalid username or password");
}

#[tokio::test]
async fn test_session_cookie_is_replayed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "auth_token=session-abc; Path=/; HttpOnly")
                .set_body_json(json!({"message": "sign-in successful"})),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("cookie", "auth_token=session-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "authenticated"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SentinelClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    client.sign_in("admin", &password("hunter22")).await.unwrap();
    client.check_session().await.unwrap();
}

#[tokio::test]
async fn test_check_session_without_cookie() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": "authentication token required"})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::check_session(&client, &mock_server.uri(), None).await;

    match result {
        Err(ClientError::Unauthorized(message)) => {
            assert_eq!(message, "authentication token required")
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn test_sign_out_returns_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/sign-out"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "sign-out successful"})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let message = endpoints::sign_out(&client, &mock_server.uri(), None)
        .await
        .unwrap();

    assert_eq!(message.as_deref(), Some("sign-out successful"));
}
