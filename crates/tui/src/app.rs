//! Application state and rendering.
//!
//! This module contains the main application state, input handling,
//! and rendering logic for the TUI.
//!
//! The module is organized into submodules:
//! - `state`: Screen and live-view identifiers, layout constants
//! - `forms`: Form state and client-side validation
//! - `actions`: Action handling (the reducer)
//! - `input`: Per-screen key handling
//! - `mouse`: Mouse event handling
//! - `render`: Rendering logic
//!
//! Invariants:
//! - At most one poller is active, and it always belongs to the current
//!   screen. Poll events tagged with any other `PollId` are dropped.
//! - Form data never reaches an action until it validates.

pub mod forms;
pub mod state;

mod actions;
pub mod input;
mod mouse;
mod render;

pub use state::{FOOTER_HEIGHT, HEADER_HEIGHT, LiveView, Screen};

use std::collections::HashSet;

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use sentinel_client::{ApiKeyConfig, Attempt, IntegrationConfig, MonitorConfig};
use sentinel_config::{ColorTheme, PersistedState, Theme};
use tokio::sync::mpsc::Sender;

use crate::action::{Action, RequestsSnapshot};
use crate::app::forms::{IntegrationForm, MonitorForm, ProfileForm, SignInForm, TokenForm};
use crate::sync::{LiveState, PollHandle, PollId};
use crate::ui::Toast;

/// The poller the app currently listens to.
#[derive(Debug)]
pub(crate) struct ActivePoll {
    pub view: LiveView,
    pub handle: PollHandle,
}

/// Main application state.
pub struct App {
    pub current_screen: Screen,
    pub theme: Theme,
    pub color_theme: ColorTheme,
    /// Reveal URLs and webhook addresses instead of the mask.
    pub show_sensitive: bool,
    pub toasts: Vec<Toast>,
    pub spinner_frame: u8,
    /// Shown in the header once signed in.
    pub username: Option<String>,
    /// Engine address, shown on the sign-in and profile screens.
    pub base_url: String,

    // Live views
    pub monitors: LiveState<Vec<MonitorConfig>>,
    pub monitors_state: TableState,
    /// Monitors with an enable/disable request in flight.
    pub pending_toggles: HashSet<u64>,
    pub events: LiveState<Vec<Attempt>>,
    pub events_state: TableState,
    /// Pretty-printed response of the attempt being previewed.
    pub event_preview: Option<String>,
    pub requests: LiveState<RequestsSnapshot>,
    pub requests_state: TableState,
    pub requests_page: u32,
    pub(crate) poll: Option<ActivePoll>,

    // One-shot lists
    pub integrations: Option<Vec<IntegrationConfig>>,
    pub integrations_loading: bool,
    pub integrations_state: TableState,
    pub tokens: Option<Vec<ApiKeyConfig>>,
    pub tokens_loading: bool,
    pub tokens_state: TableState,

    // Forms
    pub sign_in: SignInForm,
    pub monitor_form: Option<MonitorForm>,
    pub integration_form: Option<IntegrationForm>,
    pub token_form: Option<TokenForm>,
    pub profile_form: ProfileForm,

    /// Tab bar area from the last frame, used for mouse hit-testing.
    pub(crate) last_tabs_area: Rect,
    action_tx: Option<Sender<Action>>,
}

impl App {
    /// Creates the app on the sign-in screen.
    pub fn new(persisted: PersistedState, username: Option<String>) -> Self {
        Self {
            current_screen: Screen::SignIn,
            theme: Theme::from_color_theme(persisted.theme),
            color_theme: persisted.theme,
            show_sensitive: persisted.show_sensitive_info,
            toasts: Vec::new(),
            spinner_frame: 0,
            username: None,
            base_url: String::new(),
            monitors: LiveState::new(),
            monitors_state: TableState::default(),
            pending_toggles: HashSet::new(),
            events: LiveState::new(),
            events_state: TableState::default(),
            event_preview: None,
            requests: LiveState::new(),
            requests_state: TableState::default(),
            requests_page: 1,
            poll: None,
            integrations: None,
            integrations_loading: false,
            integrations_state: TableState::default(),
            tokens: None,
            tokens_loading: false,
            tokens_state: TableState::default(),
            sign_in: SignInForm::new(username.as_deref()),
            monitor_form: None,
            integration_form: None,
            token_form: None,
            profile_form: ProfileForm::default(),
            last_tabs_area: Rect::default(),
            action_tx: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Gives the app a way to schedule its own delayed actions
    /// (the picker's debounce timer).
    pub fn set_action_sender(&mut self, tx: Sender<Action>) {
        self.action_tx = Some(tx);
    }

    /// Preferences to write to the state file.
    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            show_sensitive_info: self.show_sensitive,
            theme: self.color_theme,
        }
    }

    /// Id of the poller whose events are currently accepted.
    pub fn active_poll(&self) -> Option<PollId> {
        self.poll.as_ref().map(|p| p.handle.id())
    }

    /// Stops the active poller and clears its view's indicators.
    pub fn stop_polling(&mut self) {
        if let Some(active) = self.poll.take() {
            active.handle.stop();
            match active.view {
                LiveView::Monitors => self.monitors.reset_flags(),
                LiveView::Events => self.events.reset_flags(),
                LiveView::Requests { .. } => self.requests.reset_flags(),
            }
        }
    }

    /// Turns a picker's "quiet period elapsed" signal into a search, or
    /// drops it when a newer keystroke superseded it.
    pub fn translate_search_action(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::IntegrationSearchDue { ticket } => {
                let form = self.monitor_form.as_mut()?;
                let query = form.picker.debouncer.fire(ticket)?;
                Some(Action::SearchIntegrations { ticket, query })
            }
            other => Some(other),
        }
    }

    fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Restarts the picker's search with the current query.
    pub(crate) fn schedule_integration_search(&mut self) {
        let Some(tx) = self.action_tx.clone() else {
            tracing::debug!("No action sender, integration search not scheduled");
            return;
        };
        if let Some(form) = self.monitor_form.as_mut() {
            let query = form.picker.query.value().to_string();
            form.picker
                .debouncer
                .on_query_change(query, &tx, |ticket| Action::IntegrationSearchDue { ticket });
        }
    }
}
