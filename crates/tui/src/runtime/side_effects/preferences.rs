//! Preference persistence.

use sentinel_config::{ConfigManager, PersistedState};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::TaskTracker;

/// Write preferences to the state file. Failures are logged, not shown.
pub async fn handle_persist_state(
    config_manager: Arc<Mutex<ConfigManager>>,
    task_tracker: TaskTracker,
    state: PersistedState,
) {
    task_tracker.spawn(async move {
        let mut manager = config_manager.lock().await;
        if let Err(e) = manager.save(&state) {
            tracing::warn!(error = %e, "Failed to persist preferences");
        }
    });
}
