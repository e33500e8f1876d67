//! Session and profile side effect tests.

mod common;

use common::*;
use secrecy::SecretString;
use sentinel_tui::app::Screen;
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_sign_in_success_continues_to_monitors() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(body_json(
            serde_json::json!({ "username": "admin", "password": "hunter22!A" }),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "auth_token=abc; Path=/")
                .set_body_json(serde_json::json!({ "message": "Signed in" })),
        )
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::SignIn {
                username: "admin".to_string(),
                password: SecretString::new("hunter22!A".to_string().into()),
            },
            1,
        )
        .await;

    assert!(matches!(
        actions.as_slice(),
        [Action::SignedIn(Ok(())), Action::Navigate(Screen::Monitors)]
    ));
}

#[tokio::test]
async fn test_sign_in_rejected() {
    let mut harness = SideEffectsTestHarness::new().await;
    mock_endpoint(
        &harness.mock_server,
        "POST",
        "/auth",
        serde_json::json!({ "message": "invalid credentials" }),
        401,
    )
    .await;

    let actions = harness
        .handle_and_collect(
            Action::SignIn {
                username: "admin".to_string(),
                password: SecretString::new("wrong".to_string().into()),
            },
            1,
        )
        .await;

    assert_eq!(actions.len(), 1);
    match &actions[0] {
        Action::SignedIn(Err(e)) => assert!(e.is_auth_error()),
        other => panic!("Expected SignedIn(Err), got {other:?}"),
    }
}

#[tokio::test]
async fn test_sign_out() {
    let mut harness = SideEffectsTestHarness::new().await;
    mock_endpoint(
        &harness.mock_server,
        "POST",
        "/auth/sign-out",
        serde_json::json!({ "message": "Signed out" }),
        200,
    )
    .await;

    let actions = harness.handle_and_collect(Action::SignOut, 1).await;

    assert!(matches!(
        actions.as_slice(),
        [Action::SignedOut(Ok(Some(message)))] if message == "Signed out"
    ));
}

#[tokio::test]
async fn test_update_password() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("PATCH"))
        .and(path("/users"))
        .and(body_json(serde_json::json!({ "password": "N3w-passw0rd" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "message": "Profile updated" })),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::UpdatePassword(SecretString::new("N3w-passw0rd".to_string().into())),
            1,
        )
        .await;

    assert!(matches!(
        actions.as_slice(),
        [Action::PasswordUpdated(Ok(_))]
    ));
}
