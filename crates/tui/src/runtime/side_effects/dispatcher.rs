//! Side effect dispatcher.
//!
//! This module contains the main `handle_side_effects` function that routes
//! actions to their handler functions in submodules.

use crate::action::Action;
use crate::runtime::side_effects::{
    SharedClient, TaskTracker, auth, integrations, monitors, navigation, polling, preferences,
    profile, tokens,
};
use crate::sync::PollConfig;
use sentinel_config::ConfigManager;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, mpsc::Sender};
use tracing::{Instrument, info_span};

/// Handle side effects (async engine calls) for actions.
///
/// This function spawns background tasks for engine operations and sends
/// results back through the action channel. It handles:
/// - Session checks and data loading behind navigation
/// - Live-view pollers (monitors, events, request logs)
/// - Sign in, sign out and password changes
/// - Monitor, integration and token writes
/// - Debounced integration search
/// - Preference persistence
///
/// # Arguments
///
/// * `action` - The action to handle
/// * `client` - The shared engine client
/// * `tx` - The action channel sender for sending results
/// * `config_manager` - Writes preferences to the state file
/// * `task_tracker` - Tracks spawned tasks so shutdown can wait for them
/// * `poll_config` - Timing for live-view pollers
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    config_manager: Arc<Mutex<ConfigManager>>,
    task_tracker: TaskTracker,
    poll_config: PollConfig,
) {
    let action_name = action_type_name(&action);
    let start = Instant::now();

    let span = info_span!(
        "tui.handle_action",
        action_type = action_name,
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, client, tx, config_manager, task_tracker, poll_config).await;

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Get a safe action name for tracing (no sensitive data).
pub(crate) fn action_type_name(action: &Action) -> &'static str {
    match action {
        Action::Quit => "Quit",
        Action::Tick => "Tick",
        Action::Input(_) => "Input",
        Action::Mouse(_) => "Mouse",
        Action::Resize(_, _) => "Resize",
        Action::Navigate(_) => "Navigate",
        Action::SessionExpired => "SessionExpired",
        Action::PollStarted(_, _) => "PollStarted",
        Action::MonitorsPoll(_, _) => "MonitorsPoll",
        Action::EventsPoll(_, _) => "EventsPoll",
        Action::RequestsPoll(_, _) => "RequestsPoll",
        Action::ChangeRequestsPage(_) => "ChangeRequestsPage",
        Action::SignIn { .. } => "SignIn",
        Action::SignedIn(_) => "SignedIn",
        Action::SignOut => "SignOut",
        Action::SignedOut(_) => "SignedOut",
        Action::UpdatePassword(_) => "UpdatePassword",
        Action::PasswordUpdated(_) => "PasswordUpdated",
        Action::ToggleMonitorEnabled { .. } => "ToggleMonitorEnabled",
        Action::MonitorToggled { .. } => "MonitorToggled",
        Action::OpenMonitorForm { .. } => "OpenMonitorForm",
        Action::MonitorLoaded(_) => "MonitorLoaded",
        Action::SubmitMonitor { .. } => "SubmitMonitor",
        Action::MonitorSaved { .. } => "MonitorSaved",
        Action::LoadIntegrations => "LoadIntegrations",
        Action::IntegrationsLoaded(_) => "IntegrationsLoaded",
        Action::CreateIntegration(_) => "CreateIntegration",
        Action::IntegrationCreated(_) => "IntegrationCreated",
        Action::IntegrationSearchDue { .. } => "IntegrationSearchDue",
        Action::SearchIntegrations { .. } => "SearchIntegrations",
        Action::IntegrationsSearched { .. } => "IntegrationsSearched",
        Action::LoadTokens => "LoadTokens",
        Action::TokensLoaded(_) => "TokensLoaded",
        Action::CreateToken { .. } => "CreateToken",
        Action::TokenCreated(_) => "TokenCreated",
        Action::Notify(_, _) => "Notify",
        Action::ToggleSensitive => "ToggleSensitive",
        Action::ToggleTheme => "ToggleTheme",
        Action::PersistState(_) => "PersistState",
    }
}

async fn handle_action(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    config_manager: Arc<Mutex<ConfigManager>>,
    task_tracker: TaskTracker,
    poll_config: PollConfig,
) {
    match action {
        Action::Navigate(screen) => {
            navigation::handle_navigate(client, tx, task_tracker, poll_config, screen).await;
        }
        Action::ChangeRequestsPage(page) => {
            polling::handle_change_requests_page(client, tx, task_tracker, poll_config, page)
                .await;
        }
        Action::SignIn { username, password } => {
            auth::handle_sign_in(client, tx, task_tracker, username, password).await;
        }
        Action::SignOut => {
            auth::handle_sign_out(client, tx, task_tracker).await;
        }
        Action::UpdatePassword(password) => {
            profile::handle_update_password(client, tx, task_tracker, password).await;
        }
        Action::ToggleMonitorEnabled { id, enabled } => {
            monitors::handle_toggle_monitor(client, tx, task_tracker, id, enabled).await;
        }
        Action::OpenMonitorForm { id: Some(id) } => {
            monitors::handle_load_monitor(client, tx, task_tracker, id).await;
        }
        Action::SubmitMonitor { id, params } => {
            monitors::handle_submit_monitor(client, tx, task_tracker, id, params).await;
        }
        Action::LoadIntegrations => {
            integrations::handle_load_integrations(client, tx, task_tracker).await;
        }
        Action::CreateIntegration(params) => {
            integrations::handle_create_integration(client, tx, task_tracker, params).await;
        }
        Action::SearchIntegrations { ticket, query } => {
            integrations::handle_search_integrations(client, tx, task_tracker, ticket, query)
                .await;
        }
        Action::LoadTokens => {
            tokens::handle_load_tokens(client, tx, task_tracker).await;
        }
        Action::CreateToken { name } => {
            tokens::handle_create_token(client, tx, task_tracker, name).await;
        }
        Action::PersistState(state) => {
            preferences::handle_persist_state(config_manager, task_tracker, state).await;
        }
        _ => {}
    }
}
