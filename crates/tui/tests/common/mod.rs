//! Common test utilities for TUI side effects tests.
//!
//! This module provides shared helper functions and types for testing the TUI's
//! async side effect handlers. It uses wiremock to mock the Sentinel engine.
//!
//! # Invariants
//! - Fixtures are loaded from the client's fixtures directory
//! - All mock servers use random available ports to avoid conflicts
//! - Each test gets its own isolated mock server, action channel and state file
//!
//! # What this does NOT handle
//! - TUI rendering or terminal management

// Allow dead code since not all tests use all utilities
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};

/// Load a JSON fixture file from the client's fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir
        .parent()
        .expect("No parent directory")
        .join("client")
        .join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

// Re-export commonly used types for test convenience
pub use sentinel_client::SentinelClient;
pub use sentinel_config::ConfigManager;
pub use sentinel_tui::action::Action;
pub use sentinel_tui::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};
pub use sentinel_tui::sync::{FetchKind, PollConfig, PollEvent};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test harness for side effects testing.
pub struct SideEffectsTestHarness {
    /// The mock engine
    pub mock_server: MockServer,
    /// Receiver for actions sent by the side effect handlers
    pub action_rx: Receiver<Action>,
    /// Sender for actions (clone this to pass to handlers)
    pub action_tx: Sender<Action>,
    /// Shared client pointing to the mock server
    pub client: SharedClient,
    /// Preferences store in a temporary directory
    pub config_manager: Arc<Mutex<ConfigManager>>,
    pub task_tracker: TaskTracker,
    /// Long interval so only the initial fetch runs during a test
    pub poll_config: PollConfig,
    _state_dir: tempfile::TempDir,
}

impl SideEffectsTestHarness {
    /// Create a new test harness with a mock server and fresh channels.
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);

        let client = create_test_client(&mock_server.uri());
        let state_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_manager = Arc::new(Mutex::new(
            ConfigManager::new_with_path(state_dir.path().join("state.json"))
                .expect("Failed to create config manager"),
        ));

        Self {
            mock_server,
            action_rx,
            action_tx,
            client,
            config_manager,
            task_tracker: TaskTracker::new(),
            poll_config: PollConfig::with_interval(Duration::from_secs(600)),
            _state_dir: state_dir,
        }
    }

    /// Path of the harness's preferences file.
    pub fn state_path(&self) -> std::path::PathBuf {
        self._state_dir.path().join("state.json")
    }

    /// Handle an action and collect all resulting actions.
    ///
    /// `handle_side_effects` must return within 100ms (it should only spawn
    /// tasks); actions are then collected until `timeout_secs` elapses.
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        let handle_future = handle_side_effects(
            action,
            self.client.clone(),
            self.action_tx.clone(),
            self.config_manager.clone(),
            self.task_tracker.clone(),
            self.poll_config,
        );
        match tokio::time::timeout(Duration::from_millis(100), handle_future).await {
            Ok(()) => {}
            Err(_) => {
                panic!(
                    "handle_side_effects timed out - it may be blocking on network I/O instead of spawning tasks"
                );
            }
        }

        tokio::task::yield_now().await;

        let mut actions = Vec::new();
        let deadline = tokio::time::Instant::now() + Duration::from_secs(timeout_secs);
        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(Duration::from_millis(100), self.action_rx.recv()).await {
                Ok(Some(action)) => actions.push(action),
                Ok(None) => break,
                Err(_) => tokio::task::yield_now().await,
            }
        }

        actions
    }

    /// Stop every poller handed out in `actions`.
    pub fn stop_pollers(actions: &[Action]) {
        for action in actions {
            if let Action::PollStarted(_, handle) = action {
                handle.stop();
            }
        }
    }
}

/// Create a test client pointing to the mock server.
pub fn create_test_client(mock_uri: &str) -> SharedClient {
    let client = SentinelClient::builder()
        .base_url(mock_uri.to_string())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test client");
    Arc::new(client)
}

/// Mount a JSON response for a specific endpoint.
pub async fn mock_endpoint(
    server: &MockServer,
    method: &str,
    path: &str,
    body: serde_json::Value,
    status: u16,
) {
    use wiremock::matchers::{method as method_matcher, path as path_matcher};

    Mock::given(method_matcher(method))
        .and(path_matcher(path))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount an error response for a specific endpoint.
pub async fn mock_endpoint_error(server: &MockServer, method: &str, path: &str, status: u16) {
    mock_endpoint(
        server,
        method,
        path,
        serde_json::json!({ "message": format!("status {status}") }),
        status,
    )
    .await;
}

/// Accept the session check.
pub async fn mock_session_ok(server: &MockServer) {
    mock_endpoint(
        server,
        "GET",
        "/auth/me",
        serde_json::json!({ "data": { "username": "admin" } }),
        200,
    )
    .await;
}

/// Reject the session check.
pub async fn mock_session_expired(server: &MockServer) {
    mock_endpoint_error(server, "GET", "/auth/me", 401).await;
}
