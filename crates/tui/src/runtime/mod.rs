//! Runtime plumbing between the event loop and the engine.
//!
//! Responsibilities:
//! - Configuration loading and preference persistence (`config`).
//! - Async side effects for actions (`side_effects`).
//! - Terminal mode management (`terminal`).
//! - Feeding one action through the reducer and then its side effects
//!   (`dispatch`).
//!
//! Does NOT handle:
//! - Input translation (see `App::handle_input`).
//! - Rendering.

pub mod config;
pub mod side_effects;
pub mod terminal;

use std::sync::Arc;

use sentinel_config::ConfigManager;
use tokio::sync::{Mutex, mpsc::Sender};

use crate::action::Action;
use crate::app::App;
use crate::sync::PollConfig;
use side_effects::{SharedClient, TaskTracker, handle_side_effects};

/// Everything side effects need, cloned into each call.
#[derive(Clone)]
pub struct Runtime {
    pub client: SharedClient,
    pub tx: Sender<Action>,
    pub config_manager: Arc<Mutex<ConfigManager>>,
    pub task_tracker: TaskTracker,
    pub poll_config: PollConfig,
}

impl Runtime {
    async fn side_effects(&self, action: Action) {
        handle_side_effects(
            action,
            self.client.clone(),
            self.tx.clone(),
            self.config_manager.clone(),
            self.task_tracker.clone(),
            self.poll_config,
        )
        .await;
    }
}

/// Apply `action` to the app, then run its side effects.
///
/// Preference toggles are followed by a `PersistState` so the state file
/// always matches what is on screen.
pub async fn dispatch(app: &mut App, runtime: &Runtime, action: Action) {
    let persist = matches!(action, Action::ToggleSensitive | Action::ToggleTheme);
    app.update(action.clone());
    runtime.side_effects(action).await;
    if persist {
        runtime
            .side_effects(Action::PersistState(app.persisted_state()))
            .await;
    }
}
