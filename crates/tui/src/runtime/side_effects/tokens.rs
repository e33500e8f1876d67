//! API key side effect handlers.

use crate::action::Action;
use crate::app::Screen;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Handle loading the API key list.
pub async fn handle_load_tokens(client: SharedClient, tx: Sender<Action>, task_tracker: TaskTracker) {
    task_tracker.spawn(async move {
        let result = client.list_api_keys().await.map_err(Arc::new);
        let _ = tx.send(Action::TokensLoaded(result)).await;
    });
}

/// Handle creating an API key. Success returns to the list.
pub async fn handle_create_token(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    name: String,
) {
    task_tracker.spawn(async move {
        match client.create_api_key(&name).await {
            Ok(message) => {
                let _ = tx.send(Action::TokenCreated(Ok(message))).await;
                let _ = tx.send(Action::Navigate(Screen::Tokens)).await;
            }
            Err(e) => {
                let _ = tx.send(Action::TokenCreated(Err(Arc::new(e)))).await;
            }
        }
    });
}
