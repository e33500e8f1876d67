//! Per-screen input handlers for the TUI app.
//!
//! Responsibilities:
//! - Handle keyboard input for each screen
//! - Validate forms before anything is submitted
//! - Return Actions to be processed by the main loop
//!
//! Non-responsibilities:
//! - Does NOT perform I/O (returns Actions)
//!
//! Forms own the keyboard: single-key shortcuts only apply on list
//! screens, and `Ctrl+C` quits from anywhere.

mod forms;
pub mod helpers;
mod lists;

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;
use crate::app::state::Screen;
use helpers::{is_ctrl, plain_char};

impl App {
    /// Handles one key press, returning the action it triggers.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if is_ctrl(key, 'c') {
            return Some(Action::Quit);
        }

        match self.current_screen {
            Screen::SignIn => return self.handle_sign_in_input(key),
            Screen::MonitorForm => return self.handle_monitor_form_input(key),
            Screen::IntegrationForm => return self.handle_integration_form_input(key),
            Screen::TokenForm => return self.handle_token_form_input(key),
            Screen::Profile => return self.handle_profile_input(key),
            _ => {}
        }

        if self.event_preview.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.event_preview = None;
            }
            return None;
        }

        if let Some(action) = self.handle_global_input(key) {
            return Some(action);
        }

        match self.current_screen {
            Screen::Monitors => self.handle_monitors_input(key),
            Screen::Events => self.handle_events_input(key),
            Screen::Requests => self.handle_requests_input(key),
            Screen::Integrations => self.handle_integrations_input(key),
            Screen::Tokens => self.handle_tokens_input(key),
            _ => None,
        }
    }

    /// Shortcuts shared by every list screen.
    fn handle_global_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Tab => return Some(Action::Navigate(self.current_screen.next())),
            KeyCode::BackTab => return Some(Action::Navigate(self.current_screen.previous())),
            _ => {}
        }

        match plain_char(key)? {
            'q' => Some(Action::Quit),
            's' => Some(Action::ToggleSensitive),
            't' => Some(Action::ToggleTheme),
            'o' => Some(Action::SignOut),
            c => Screen::from_digit(c)
                .filter(|screen| *screen != self.current_screen)
                .map(Action::Navigate),
        }
    }
}
