//! Navigation action handlers for the TUI app.
//!
//! Responsibilities:
//! - Handle screen switching (`Navigate`, `OpenMonitorForm`)
//! - Handle session loss and the sign in/out lifecycle
//!
//! Entering any screen stops the active poller first; the side effect for
//! `Navigate` verifies the session and starts the new screen's loading.

use sentinel_client::ClientError;

use crate::action::Action;
use crate::app::App;
use crate::app::forms::{IntegrationForm, MonitorForm, ProfileForm, SignInForm, TokenForm};
use crate::app::state::Screen;
use crate::ui::Toast;

impl App {
    /// Handle navigation-related actions.
    pub fn handle_navigation_action(&mut self, action: Action) {
        match action {
            Action::Navigate(screen) => self.enter_screen(screen),
            Action::SessionExpired => {
                tracing::info!("Session is no longer valid, returning to sign in");
                self.reset_session();
            }
            Action::SignIn { .. } => {
                self.sign_in.submitting = true;
            }
            Action::SignedIn(Ok(())) => {
                self.sign_in.submitting = false;
                self.username = Some(self.sign_in.username.value().trim().to_string());
                self.sign_in.password.clear();
            }
            Action::SignedIn(Err(e)) => {
                self.sign_in.submitting = false;
                self.sign_in.password.clear();
                tracing::warn!(error = %e, "Sign in failed");
                self.push_toast(Toast::error(sign_in_failure(&e)));
            }
            Action::SignedOut(Ok(_)) => {
                self.reset_session();
                self.push_toast(Toast::success("Signed out successfully."));
            }
            Action::SignedOut(Err(e)) => {
                tracing::warn!(error = %e, "Sign out failed");
                self.push_toast(Toast::error("Failed to sign out. Please try again."));
            }
            Action::OpenMonitorForm { id } => {
                self.stop_polling();
                self.drop_forms();
                self.monitor_form = Some(match id {
                    Some(id) => MonitorForm::edit(id),
                    None => MonitorForm::create(),
                });
                self.current_screen = Screen::MonitorForm;
                self.schedule_integration_search();
            }
            _ => {}
        }
    }

    fn enter_screen(&mut self, screen: Screen) {
        self.stop_polling();
        self.event_preview = None;
        if screen != Screen::MonitorForm {
            self.drop_forms();
        }

        match screen {
            Screen::Requests => {
                self.requests_page = 1;
                self.requests_state.select(None);
            }
            Screen::Integrations => self.integrations_loading = true,
            Screen::Tokens => self.tokens_loading = true,
            Screen::IntegrationForm => self.integration_form = Some(IntegrationForm::default()),
            Screen::TokenForm => self.token_form = Some(TokenForm::default()),
            Screen::Profile => self.profile_form = ProfileForm::default(),
            Screen::MonitorForm if self.monitor_form.is_none() => {
                self.monitor_form = Some(MonitorForm::create());
                self.current_screen = screen;
                self.schedule_integration_search();
                return;
            }
            _ => {}
        }
        self.current_screen = screen;
    }

    fn drop_forms(&mut self) {
        self.monitor_form = None;
        self.integration_form = None;
        self.token_form = None;
    }

    /// Forgets everything tied to the session and shows the sign-in screen.
    pub(crate) fn reset_session(&mut self) {
        self.stop_polling();
        self.drop_forms();
        self.monitors.clear();
        self.events.clear();
        self.requests.clear();
        self.requests_page = 1;
        self.pending_toggles.clear();
        self.event_preview = None;
        self.integrations = None;
        self.integrations_loading = false;
        self.tokens = None;
        self.tokens_loading = false;
        self.profile_form = ProfileForm::default();

        let username = self
            .username
            .take()
            .unwrap_or_else(|| self.sign_in.username.value().to_string());
        self.sign_in = SignInForm::new(Some(&username));
        self.current_screen = Screen::SignIn;
    }

    /// Returns to sign in when `err` means the session is gone.
    pub(crate) fn expire_session_on(&mut self, err: &ClientError) -> bool {
        if err.is_auth_error() {
            tracing::info!("Request rejected as unauthenticated, returning to sign in");
            self.reset_session();
            true
        } else {
            false
        }
    }
}

fn sign_in_failure(err: &ClientError) -> String {
    if err.is_auth_error() {
        "Failed to sign in. Please check your credentials.".to_string()
    } else {
        format!("Failed to sign in: {}", err.user_message())
    }
}
