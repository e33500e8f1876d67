//! Profile side effect handlers.

use crate::action::Action;
use secrecy::SecretString;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Handle changing the signed-in user's password.
pub async fn handle_update_password(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    password: SecretString,
) {
    task_tracker.spawn(async move {
        let result = client.update_password(&password).await.map_err(Arc::new);
        let _ = tx.send(Action::PasswordUpdated(result)).await;
    });
}
