//! Integration side effect handlers.
//!
//! Responsibilities:
//! - Load and create alert integrations.
//! - Run the monitor form's integration search.
//!
//! Does NOT handle:
//! - Debouncing (the picker's `SearchDebouncer` decides when to search).

use crate::action::Action;
use crate::app::Screen;
use sentinel_client::CreateIntegrationParams;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Handle loading the integrations list.
pub async fn handle_load_integrations(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    task_tracker.spawn(async move {
        let result = client.list_integrations(None).await.map_err(Arc::new);
        let _ = tx.send(Action::IntegrationsLoaded(result)).await;
    });
}

/// Handle creating an integration. Success returns to the list.
pub async fn handle_create_integration(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    params: CreateIntegrationParams,
) {
    task_tracker.spawn(async move {
        match client.create_integration(&params).await {
            Ok(_) => {
                let _ = tx.send(Action::IntegrationCreated(Ok(()))).await;
                let _ = tx.send(Action::Navigate(Screen::Integrations)).await;
            }
            Err(e) => {
                let _ = tx.send(Action::IntegrationCreated(Err(Arc::new(e)))).await;
            }
        }
    });
}

/// Handle a picker search. An empty query lists everything.
pub async fn handle_search_integrations(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: u64,
    query: String,
) {
    task_tracker.spawn(async move {
        let search = (!query.trim().is_empty()).then_some(query.trim());
        let result = client.list_integrations(search).await.map_err(Arc::new);
        let _ = tx
            .send(Action::IntegrationsSearched { ticket, result })
            .await;
    });
}
