//! Action enum definitions for the TUI event system.
//!
//! # Action Categories
//!
//! - **System**: lifecycle, ticks, raw terminal input
//! - **Navigation**: screen changes and the session check behind them
//! - **Live views**: poller lifecycle and poll events
//! - **Auth**: sign in, sign out, password change
//! - **Mutations**: monitor, integration and token writes plus their results
//! - **Picker search**: debounced integration search
//! - **Preferences**: sensitive-info and theme toggles, persistence
//!
//! # Security Note
//!
//! Log actions through `RedactedAction(&action)`, never `?action`.

use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use secrecy::SecretString;
use sentinel_client::{
    ApiKeyConfig, Attempt, ClientError, CreateIntegrationParams, CreateMonitorParams,
    IntegrationConfig, MonitorConfig, RequestLogPage, RequestMetrics,
};
use sentinel_config::PersistedState;

use crate::app::state::{LiveView, Screen};
use crate::sync::{PollEvent, PollHandle, PollId};
use crate::ui::ToastLevel;

/// One polled page of request logs together with the traffic summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestsSnapshot {
    pub page: RequestLogPage,
    pub metrics: RequestMetrics,
}

pub type MonitorEvent = PollEvent<Vec<MonitorConfig>, Arc<ClientError>>;
pub type EventsEvent = PollEvent<Vec<Attempt>, Arc<ClientError>>;
pub type RequestsEvent = PollEvent<RequestsSnapshot, Arc<ClientError>>;

/// Unified action type for the TUI event loop.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    Quit,
    /// Periodic tick for spinner animation and toast expiry.
    Tick,
    Input(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    // Navigation
    /// Enter a screen. The session is verified before its data loads.
    Navigate(Screen),
    /// The session check behind a navigation failed.
    SessionExpired,

    // Live views
    /// A poller was spawned for `view`; the app decides whether to keep it.
    PollStarted(LiveView, PollHandle),
    MonitorsPoll(PollId, MonitorEvent),
    EventsPoll(PollId, EventsEvent),
    RequestsPoll(PollId, RequestsEvent),
    /// Move the request log to another page.
    ChangeRequestsPage(u32),

    // Auth
    SignIn {
        username: String,
        password: SecretString,
    },
    SignedIn(Result<(), Arc<ClientError>>),
    SignOut,
    SignedOut(Result<Option<String>, Arc<ClientError>>),
    UpdatePassword(SecretString),
    PasswordUpdated(Result<Option<String>, Arc<ClientError>>),

    // Monitors
    ToggleMonitorEnabled {
        id: u64,
        enabled: bool,
    },
    MonitorToggled {
        id: u64,
        enabled: bool,
        result: Result<(), Arc<ClientError>>,
    },
    /// Open the monitor form; `Some(id)` edits an existing monitor.
    OpenMonitorForm {
        id: Option<u64>,
    },
    MonitorLoaded(Result<MonitorConfig, Arc<ClientError>>),
    SubmitMonitor {
        id: Option<u64>,
        params: CreateMonitorParams,
    },
    MonitorSaved {
        created: bool,
        result: Result<(), Arc<ClientError>>,
    },

    // Integrations
    LoadIntegrations,
    IntegrationsLoaded(Result<Vec<IntegrationConfig>, Arc<ClientError>>),
    CreateIntegration(CreateIntegrationParams),
    IntegrationCreated(Result<(), Arc<ClientError>>),

    // Picker search
    /// The picker's quiet period elapsed for `ticket`.
    IntegrationSearchDue {
        ticket: u64,
    },
    /// Fired search for the picker; `ticket` comes back with the reply.
    SearchIntegrations {
        ticket: u64,
        query: String,
    },
    IntegrationsSearched {
        ticket: u64,
        result: Result<Vec<IntegrationConfig>, Arc<ClientError>>,
    },

    // Tokens
    LoadTokens,
    TokensLoaded(Result<Vec<ApiKeyConfig>, Arc<ClientError>>),
    CreateToken {
        name: String,
    },
    TokenCreated(Result<Option<String>, Arc<ClientError>>),

    // Notifications
    Notify(ToastLevel, String),

    // Preferences
    ToggleSensitive,
    ToggleTheme,
    /// Write preferences to the state file.
    PersistState(PersistedState),
}
