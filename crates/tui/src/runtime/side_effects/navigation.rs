//! Navigation side effects.
//!
//! Responsibilities:
//! - Verify the session before a screen loads its data.
//! - Start the screen's poller or one-shot load once the session holds.
//!
//! Does NOT handle:
//! - Screen state changes (the reducer switches screens immediately).

use crate::action::Action;
use crate::app::Screen;
use crate::sync::PollConfig;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker, polling};

/// Handle entering `screen`.
///
/// The sign-in screen is skipped straight to the monitors list when a
/// session already exists. Any other screen bounces to sign-in when it
/// does not.
pub async fn handle_navigate(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    poll_config: PollConfig,
    screen: Screen,
) {
    let tracker = task_tracker.clone();
    task_tracker.spawn(async move {
        let session = client.check_session().await;
        match (screen, session) {
            (Screen::SignIn, Err(_)) => {}
            (_, Err(e)) => {
                tracing::info!(?screen, error = %e, "Session check failed");
                let _ = tx.send(Action::SessionExpired).await;
            }
            (Screen::SignIn, Ok(())) => {
                let _ = tx.send(Action::Navigate(Screen::Monitors)).await;
            }
            (Screen::Integrations, Ok(())) => {
                let result = client.list_integrations(None).await.map_err(Arc::new);
                let _ = tx.send(Action::IntegrationsLoaded(result)).await;
            }
            (Screen::Tokens, Ok(())) => {
                let result = client.list_api_keys().await.map_err(Arc::new);
                let _ = tx.send(Action::TokensLoaded(result)).await;
            }
            (screen, Ok(())) => {
                if let Some(view) = screen.live_view() {
                    polling::start_live_view(client, tx, &tracker, poll_config, view).await;
                }
            }
        }
    });
}
