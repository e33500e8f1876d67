//! Live-view poller spawning.
//!
//! Responsibilities:
//! - Build the fetch closure for each live view and start its poller.
//! - Report every new poller to the app through `PollStarted`.
//!
//! Invariants:
//! - `PollStarted` is queued before the poller task exists, so the app
//!   registers the id before the first event from that poller arrives.
//!
//! Does NOT handle:
//! - Stopping pollers (the app owns the handle it accepts).
//! - Applying poll results (see `App::update`).

use crate::action::{Action, RequestsSnapshot};
use crate::app::LiveView;
use crate::sync::{PollConfig, PollHandle, run_poller};
use sentinel_config::constants::DEFAULT_REQUESTS_PER_PAGE;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Run the poller behind `view` under `handle`.
fn run_live_poller(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: &TaskTracker,
    handle: &PollHandle,
    poll_config: PollConfig,
    view: LiveView,
) {
    match view {
        LiveView::Monitors => run_poller(
            task_tracker,
            handle,
            poll_config,
            move || {
                let client = client.clone();
                async move { client.list_monitors().await.map_err(Arc::new) }
            },
            tx,
            Action::MonitorsPoll,
        ),
        LiveView::Events => run_poller(
            task_tracker,
            handle,
            poll_config,
            move || {
                let client = client.clone();
                async move { client.list_attempts().await.map_err(Arc::new) }
            },
            tx,
            Action::EventsPoll,
        ),
        LiveView::Requests { page } => run_poller(
            task_tracker,
            handle,
            poll_config,
            move || {
                let client = client.clone();
                async move {
                    tokio::try_join!(
                        client.list_request_logs(page, DEFAULT_REQUESTS_PER_PAGE),
                        client.get_request_metrics(),
                    )
                    .map(|(page, metrics)| RequestsSnapshot { page, metrics })
                    .map_err(Arc::new)
                }
            },
            tx,
            Action::RequestsPoll,
        ),
    }
}

/// Start a poller for `view` and offer it to the app.
pub async fn start_live_view(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: &TaskTracker,
    poll_config: PollConfig,
    view: LiveView,
) {
    let handle = PollHandle::new();
    if tx.send(Action::PollStarted(view, handle.clone())).await.is_err() {
        return;
    }
    run_live_poller(client, tx, task_tracker, &handle, poll_config, view);
    tracing::debug!(?view, poll_id = handle.id().get(), "Poller started");
}

/// Handle moving the request log to another page.
pub async fn handle_change_requests_page(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    poll_config: PollConfig,
    page: u32,
) {
    if page == 0 {
        return;
    }
    start_live_view(
        client,
        tx,
        &task_tracker,
        poll_config,
        LiveView::Requests { page },
    )
    .await;
}
