//! List screen input handlers.
//!
//! Responsibilities:
//! - Row selection on every list
//! - Monitor toggle/edit/create shortcuts
//! - Event response preview
//! - Request log paging
//!
//! Non-responsibilities:
//! - Does NOT handle tab switching or preferences (see `handle_global_input`)

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;
use crate::app::input::helpers::{move_selection, plain_char};
use crate::app::state::Screen;
use crate::sync::pagination::clamp_page;
use crate::ui::format::pretty_json_or_raw;

fn vertical(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => Some(true),
        KeyCode::Up | KeyCode::Char('k') => Some(false),
        _ => None,
    }
}

impl App {
    pub(super) fn handle_monitors_input(&mut self, key: KeyEvent) -> Option<Action> {
        let len = self.monitors.data().len();
        if let Some(down) = vertical(key) {
            move_selection(&mut self.monitors_state, len, down);
            return None;
        }

        let selected = self
            .monitors_state
            .selected()
            .and_then(|i| self.monitors.data().get(i));

        match (key.code, plain_char(key)) {
            (_, Some('n')) => Some(Action::OpenMonitorForm { id: None }),
            (KeyCode::Enter, _) | (_, Some('e')) => {
                selected.map(|m| Action::OpenMonitorForm { id: Some(m.id) })
            }
            (_, Some(' ')) => {
                let monitor = selected?;
                if self.pending_toggles.contains(&monitor.id) {
                    return None;
                }
                Some(Action::ToggleMonitorEnabled {
                    id: monitor.id,
                    enabled: !monitor.enabled,
                })
            }
            _ => None,
        }
    }

    pub(super) fn handle_events_input(&mut self, key: KeyEvent) -> Option<Action> {
        let len = self.events.data().len();
        if let Some(down) = vertical(key) {
            move_selection(&mut self.events_state, len, down);
            return None;
        }

        if key.code == KeyCode::Enter
            && let Some(attempt) = self
                .events_state
                .selected()
                .and_then(|i| self.events.data().get(i))
        {
            self.event_preview = Some(if attempt.is_no_response() {
                "No response".to_string()
            } else {
                pretty_json_or_raw(&attempt.response_text())
            });
        }
        None
    }

    pub(super) fn handle_requests_input(&mut self, key: KeyEvent) -> Option<Action> {
        let len = self.requests.data().page.logs.len();
        if let Some(down) = vertical(key) {
            move_selection(&mut self.requests_state, len, down);
            return None;
        }

        let total = self.requests.data().page.pagination.total_pages;
        let target = match key.code {
            KeyCode::Left | KeyCode::Char('[') => self.requests_page.saturating_sub(1),
            KeyCode::Right | KeyCode::Char(']') => self.requests_page + 1,
            KeyCode::Home => 1,
            KeyCode::End => total,
            _ => return None,
        };

        // Paging is only possible once the page count is known.
        if total == 0 || target == 0 || target > total {
            return None;
        }
        let target = clamp_page(target, total);
        (target != self.requests_page).then_some(Action::ChangeRequestsPage(target))
    }

    pub(super) fn handle_integrations_input(&mut self, key: KeyEvent) -> Option<Action> {
        let len = self.integrations.as_ref().map_or(0, Vec::len);
        if let Some(down) = vertical(key) {
            move_selection(&mut self.integrations_state, len, down);
            return None;
        }
        match plain_char(key)? {
            'n' => Some(Action::Navigate(Screen::IntegrationForm)),
            'r' if !self.integrations_loading => Some(Action::LoadIntegrations),
            _ => None,
        }
    }

    pub(super) fn handle_tokens_input(&mut self, key: KeyEvent) -> Option<Action> {
        let len = self.tokens.as_ref().map_or(0, Vec::len);
        if let Some(down) = vertical(key) {
            move_selection(&mut self.tokens_state, len, down);
            return None;
        }
        match plain_char(key)? {
            'n' => Some(Action::Navigate(Screen::TokenForm)),
            'r' if !self.tokens_loading => Some(Action::LoadTokens),
            _ => None,
        }
    }
}
