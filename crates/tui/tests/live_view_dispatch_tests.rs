//! Live view tests driven through `dispatch` and the reducer together.
//!
//! These run on a multi-threaded runtime so poller tasks start on other
//! workers while the dispatching task is still running.

mod common;

use common::*;
use sentinel_config::PersistedState;
use sentinel_tui::app::{App, Screen};
use sentinel_tui::runtime::{Runtime, dispatch};
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use wiremock::matchers::{method, path, query_param};

async fn mount_request_log(server: &MockServer, page: &str) {
    Mock::given(method("GET"))
        .and(path("/requests"))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("requests/page.json")))
        .mount(server)
        .await;
    mock_endpoint(
        server,
        "GET",
        "/requests/metrics",
        load_fixture("requests/metrics.json"),
        200,
    )
    .await;
}

fn requests_app() -> App {
    let mut app = App::new(PersistedState::default(), Some("admin".to_string()));
    app.update(Action::SignedIn(Ok(())));
    app.update(Action::Navigate(Screen::Requests));
    app
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_page_change_initial_snapshot_reaches_app() {
    let server = MockServer::start().await;
    mount_request_log(&server, "2").await;
    let client = create_test_client(&server.uri());
    let state_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_manager = std::sync::Arc::new(Mutex::new(
        ConfigManager::new_with_path(state_dir.path().join("state.json"))
            .expect("Failed to create config manager"),
    ));

    for run in 0..20 {
        let (tx, mut rx) = mpsc::channel::<Action>(64);
        let runtime = Runtime {
            client: client.clone(),
            tx,
            config_manager: config_manager.clone(),
            task_tracker: TaskTracker::new(),
            poll_config: PollConfig::with_interval(Duration::from_secs(600)),
        };
        let mut app = requests_app();

        dispatch(&mut app, &runtime, Action::ChangeRequestsPage(2)).await;

        let mut poller_known = false;
        let mut saw_loading = false;
        let mut settled = false;
        while !settled {
            let action = tokio::time::timeout(Duration::from_secs(5), rx.recv())
                .await
                .expect("Timed out waiting for poll events")
                .expect("Channel closed");
            match &action {
                Action::PollStarted(..) => poller_known = true,
                Action::RequestsPoll(_, event) => {
                    assert!(poller_known, "run {run}: poll event before PollStarted");
                    settled = matches!(event, PollEvent::Settled(FetchKind::Initial));
                }
                _ => {}
            }
            app.update(action);
            saw_loading |= app.requests.is_loading();
        }

        assert!(saw_loading, "run {run}: initial fetch never showed loading");
        assert!(app.requests.is_loaded(), "run {run}: snapshot dropped");
        assert!(!app.requests.is_loading());
        assert_eq!(app.requests_page, 2);
        assert_eq!(app.requests.data().page.logs.len(), 1);
        app.stop_polling();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_page_change_off_screen_starts_no_poller() {
    let server = MockServer::start().await;
    mount_request_log(&server, "2").await;
    let (tx, mut rx) = mpsc::channel::<Action>(64);
    let state_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let runtime = Runtime {
        client: create_test_client(&server.uri()),
        tx,
        config_manager: std::sync::Arc::new(Mutex::new(
            ConfigManager::new_with_path(state_dir.path().join("state.json"))
                .expect("Failed to create config manager"),
        )),
        task_tracker: TaskTracker::new(),
        poll_config: PollConfig::with_interval(Duration::from_secs(600)),
    };
    let mut app = requests_app();
    app.update(Action::Navigate(Screen::Monitors));

    dispatch(&mut app, &runtime, Action::ChangeRequestsPage(2)).await;

    // The side effect still runs; the app refuses the poller it offers.
    let action = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("Timed out waiting for PollStarted")
        .expect("Channel closed");
    let Action::PollStarted(_, handle) = &action else {
        panic!("Expected PollStarted, got {action:?}");
    };
    let handle = handle.clone();
    app.update(action);

    assert!(handle.is_stopped());
    assert!(app.active_poll().is_none());
    assert!(!app.requests.is_loaded());
}
