//! Monitor side effect tests: toggling, loading and saving.

mod common;

use common::*;
use sentinel_client::{CreateMonitorParams, HttpMethod};
use sentinel_tui::app::Screen;
use wiremock::matchers::{body_json, method, path};

fn params() -> CreateMonitorParams {
    CreateMonitorParams {
        name: "Billing API".to_string(),
        url: "https://billing.example.com/health".to_string(),
        method: HttpMethod::Get,
        interval: 60,
        threshold: 3,
        timeout: 10,
        integration_id_list: vec![7],
    }
}

#[tokio::test]
async fn test_toggle_monitor_sends_enabled_flag_only() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("PUT"))
        .and(path("/monitors/1"))
        .and(body_json(serde_json::json!({ "enabled": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::ToggleMonitorEnabled {
                id: 1,
                enabled: false,
            },
            1,
        )
        .await;

    assert!(matches!(
        actions.as_slice(),
        [Action::MonitorToggled {
            id: 1,
            enabled: false,
            result: Ok(())
        }]
    ));
}

#[tokio::test]
async fn test_toggle_monitor_failure_reported() {
    let mut harness = SideEffectsTestHarness::new().await;
    mock_endpoint_error(&harness.mock_server, "PUT", "/monitors/1", 500).await;

    let actions = harness
        .handle_and_collect(
            Action::ToggleMonitorEnabled {
                id: 1,
                enabled: true,
            },
            1,
        )
        .await;

    assert!(matches!(
        actions.as_slice(),
        [Action::MonitorToggled {
            id: 1,
            enabled: true,
            result: Err(_)
        }]
    ));
}

#[tokio::test]
async fn test_open_monitor_form_loads_monitor() {
    let mut harness = SideEffectsTestHarness::new().await;
    mock_endpoint(
        &harness.mock_server,
        "GET",
        "/monitors/1",
        load_fixture("monitors/detail.json"),
        200,
    )
    .await;

    let actions = harness
        .handle_and_collect(Action::OpenMonitorForm { id: Some(1) }, 1)
        .await;

    let monitor = actions
        .iter()
        .find_map(|a| match a {
            Action::MonitorLoaded(Ok(m)) => Some(m),
            _ => None,
        })
        .expect("Should send MonitorLoaded(Ok)");
    assert_eq!(monitor.id, 1);
}

#[tokio::test]
async fn test_open_monitor_form_failure_returns_to_list() {
    let mut harness = SideEffectsTestHarness::new().await;
    mock_endpoint_error(&harness.mock_server, "GET", "/monitors/1", 404).await;

    let actions = harness
        .handle_and_collect(Action::OpenMonitorForm { id: Some(1) }, 1)
        .await;

    assert!(matches!(
        actions.as_slice(),
        [
            Action::MonitorLoaded(Err(_)),
            Action::Navigate(Screen::Monitors)
        ]
    ));
}

#[tokio::test]
async fn test_new_monitor_form_makes_no_request() {
    let mut harness = SideEffectsTestHarness::new().await;

    let actions = harness
        .handle_and_collect(Action::OpenMonitorForm { id: None }, 1)
        .await;

    assert!(actions.is_empty());
    let requests = harness.mock_server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_create_monitor() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/monitors"))
        .and(body_json(serde_json::json!({
            "name": "Billing API",
            "url": "https://billing.example.com/health",
            "method": "GET",
            "interval": 60,
            "threshold": 3,
            "timeout": 10,
            "integration_id_list": [7]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("monitors/detail.json")))
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::SubmitMonitor {
                id: None,
                params: params(),
            },
            1,
        )
        .await;

    assert!(matches!(
        actions.as_slice(),
        [
            Action::MonitorSaved {
                created: true,
                result: Ok(())
            },
            Action::Navigate(Screen::Monitors)
        ]
    ));
}

#[tokio::test]
async fn test_update_monitor_failure_stays_on_form() {
    let mut harness = SideEffectsTestHarness::new().await;
    mock_endpoint_error(&harness.mock_server, "PUT", "/monitors/4", 422).await;

    let actions = harness
        .handle_and_collect(
            Action::SubmitMonitor {
                id: Some(4),
                params: params(),
            },
            1,
        )
        .await;

    assert!(matches!(
        actions.as_slice(),
        [Action::MonitorSaved {
            created: false,
            result: Err(_)
        }]
    ));
}
