//! Monitor side effect handlers.
//!
//! Responsibilities:
//! - Enable and disable monitors.
//! - Load a monitor into the edit form.
//! - Create and update monitors.
//!
//! Does NOT handle:
//! - Listing monitors (the monitors poller does that, see `polling`).
//! - Form validation (done before the action is sent).

use crate::action::Action;
use crate::app::Screen;
use sentinel_client::{CreateMonitorParams, UpdateMonitorParams};
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Handle enabling or disabling a monitor.
pub async fn handle_toggle_monitor(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    id: u64,
    enabled: bool,
) {
    task_tracker.spawn(async move {
        let result = client
            .set_monitor_enabled(id, enabled)
            .await
            .map_err(Arc::new);
        let _ = tx
            .send(Action::MonitorToggled {
                id,
                enabled,
                result,
            })
            .await;
    });
}

/// Handle loading a monitor for editing. A failed load leaves the form.
pub async fn handle_load_monitor(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    id: u64,
) {
    task_tracker.spawn(async move {
        match client.get_monitor(id).await {
            Ok(monitor) => {
                let _ = tx.send(Action::MonitorLoaded(Ok(monitor))).await;
            }
            Err(e) => {
                let _ = tx.send(Action::MonitorLoaded(Err(Arc::new(e)))).await;
                let _ = tx.send(Action::Navigate(Screen::Monitors)).await;
            }
        }
    });
}

/// Handle saving the monitor form.
///
/// `id` is `None` for a new monitor. A successful save returns to the
/// monitors list.
pub async fn handle_submit_monitor(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    id: Option<u64>,
    params: CreateMonitorParams,
) {
    task_tracker.spawn(async move {
        let result = match id {
            None => client.create_monitor(&params).await.map(|_| ()),
            Some(id) => {
                client
                    .update_monitor(id, &UpdateMonitorParams::from(params))
                    .await
            }
        };
        let saved = result.is_ok();
        let _ = tx
            .send(Action::MonitorSaved {
                created: id.is_none(),
                result: result.map_err(Arc::new),
            })
            .await;
        if saved {
            let _ = tx.send(Action::Navigate(Screen::Monitors)).await;
        }
    });
}
