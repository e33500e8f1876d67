//! Session side effect handlers.
//!
//! Responsibilities:
//! - Sign in with username and password.
//! - Sign out.
//!
//! Does NOT handle:
//! - Session checks on navigation (see `navigation`).

use crate::action::Action;
use crate::app::Screen;
use secrecy::SecretString;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Handle a sign-in attempt. Success continues to the monitors list.
pub async fn handle_sign_in(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    username: String,
    password: SecretString,
) {
    task_tracker.spawn(async move {
        match client.sign_in(&username, &password).await {
            Ok(()) => {
                tracing::info!(%username, "Signed in");
                let _ = tx.send(Action::SignedIn(Ok(()))).await;
                let _ = tx.send(Action::Navigate(Screen::Monitors)).await;
            }
            Err(e) => {
                tracing::warn!(%username, error = %e, "Sign in failed");
                let _ = tx.send(Action::SignedIn(Err(Arc::new(e)))).await;
            }
        }
    });
}

/// Handle signing out.
pub async fn handle_sign_out(client: SharedClient, tx: Sender<Action>, task_tracker: TaskTracker) {
    task_tracker.spawn(async move {
        let result = client.sign_out().await.map_err(Arc::new);
        let _ = tx.send(Action::SignedOut(result)).await;
    });
}
