//! Integration, API key and preference side effect tests.

mod common;

use common::*;
use sentinel_client::{CreateIntegrationParams, IntegrationType};
use sentinel_config::{ColorTheme, PersistedState};
use sentinel_tui::app::Screen;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_search_integrations_sends_query() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/integrations"))
        .and(query_param("search", "ops"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("integrations/list.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::SearchIntegrations {
                ticket: 4,
                query: " ops ".to_string(),
            },
            1,
        )
        .await;

    assert!(matches!(
        actions.as_slice(),
        [Action::IntegrationsSearched { ticket: 4, result: Ok(list) }] if list.len() == 2
    ));
}

#[tokio::test]
async fn test_empty_search_lists_everything() {
    let mut harness = SideEffectsTestHarness::new().await;
    mock_endpoint(
        &harness.mock_server,
        "GET",
        "/integrations",
        load_fixture("integrations/list.json"),
        200,
    )
    .await;

    harness
        .handle_and_collect(
            Action::SearchIntegrations {
                ticket: 1,
                query: String::new(),
            },
            1,
        )
        .await;

    let requests = harness
        .mock_server
        .received_requests()
        .await
        .unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_create_integration_returns_to_list() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/integrations"))
        .and(body_json(serde_json::json!({
            "name": "ops",
            "url": "https://hooks.slack.com/services/T000/B000/XXX",
            "type": "SLACK"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "id": 9, "name": "ops",
                "url": "https://hooks.slack.com/services/T000/B000/XXX",
                "type": "SLACK", "created_at": 0, "updated_at": 0
            }
        })))
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::CreateIntegration(CreateIntegrationParams {
                name: "ops".to_string(),
                url: "https://hooks.slack.com/services/T000/B000/XXX".to_string(),
                kind: IntegrationType::Slack,
            }),
            1,
        )
        .await;

    assert!(matches!(
        actions.as_slice(),
        [
            Action::IntegrationCreated(Ok(())),
            Action::Navigate(Screen::Integrations)
        ]
    ));
}

#[tokio::test]
async fn test_load_tokens_error() {
    let mut harness = SideEffectsTestHarness::new().await;
    mock_endpoint_error(&harness.mock_server, "GET", "/keys", 500).await;

    let actions = harness.handle_and_collect(Action::LoadTokens, 1).await;

    assert!(matches!(actions.as_slice(), [Action::TokensLoaded(Err(_))]));
}

#[tokio::test]
async fn test_create_token() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/keys"))
        .and(body_json(serde_json::json!({ "name": "ci" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "message": "API key created" })),
        )
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::CreateToken {
                name: "ci".to_string(),
            },
            1,
        )
        .await;

    assert!(matches!(
        actions.as_slice(),
        [
            Action::TokenCreated(Ok(Some(_))),
            Action::Navigate(Screen::Tokens)
        ]
    ));
}

#[tokio::test]
async fn test_persist_state_writes_file() {
    let mut harness = SideEffectsTestHarness::new().await;
    let state = PersistedState {
        show_sensitive_info: true,
        theme: ColorTheme::Light,
    };

    let actions = harness
        .handle_and_collect(Action::PersistState(state), 1)
        .await;
    assert!(actions.is_empty());

    harness.task_tracker.close();
    harness.task_tracker.wait().await;

    let reloaded = ConfigManager::new_with_path(harness.state_path())
        .unwrap()
        .load();
    assert_eq!(reloaded, state);
}
