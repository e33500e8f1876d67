//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Handle API result actions and turn them into toasts
//! - Handle navigation and poller lifecycle actions
//!
//! Non-responsibilities:
//! - Does NOT create Actions (handled by input handlers)
//! - Does NOT perform async operations
//!
//! This module delegates to domain-specific submodules:
//! - `navigation`: Screen switching, session expiry, sign in/out results
//! - `live`: Poller acceptance and poll events
//! - `mutations`: Monitor, integration, token and password results
//! - `system`: Ticks, notifications, preferences

use crate::action::Action;
use crate::app::App;

mod live;
mod mutations;
mod navigation;
mod system;

impl App {
    /// Pure state mutation based on Action.
    ///
    /// This method delegates to domain-specific handlers based on action type.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Navigate(_)
            | Action::SessionExpired
            | Action::SignIn { .. }
            | Action::SignedIn(_)
            | Action::SignOut
            | Action::SignedOut(_)
            | Action::OpenMonitorForm { .. } => self.handle_navigation_action(action),

            Action::PollStarted(..)
            | Action::MonitorsPoll(..)
            | Action::EventsPoll(..)
            | Action::RequestsPoll(..)
            | Action::ChangeRequestsPage(_) => self.handle_live_action(action),

            Action::ToggleMonitorEnabled { .. }
            | Action::MonitorToggled { .. }
            | Action::MonitorLoaded(_)
            | Action::SubmitMonitor { .. }
            | Action::MonitorSaved { .. }
            | Action::LoadIntegrations
            | Action::IntegrationsLoaded(_)
            | Action::CreateIntegration(_)
            | Action::IntegrationCreated(_)
            | Action::IntegrationsSearched { .. }
            | Action::LoadTokens
            | Action::TokensLoaded(_)
            | Action::CreateToken { .. }
            | Action::TokenCreated(_)
            | Action::UpdatePassword(_)
            | Action::PasswordUpdated(_) => self.handle_mutation_action(action),

            Action::Tick
            | Action::Notify(..)
            | Action::ToggleSensitive
            | Action::ToggleTheme => self.handle_system_action(action),

            // Input and mouse are routed through `handle_input`/`handle_mouse`;
            // the rest only matter to side effects.
            Action::Quit
            | Action::Input(_)
            | Action::Mouse(_)
            | Action::Resize(..)
            | Action::IntegrationSearchDue { .. }
            | Action::SearchIntegrations { .. }
            | Action::PersistState(_) => {}
        }
    }
}
