//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Scroll wheel moves the selection on list screens
//! - Clicking a tab switches to it
//!
//! Does NOT handle:
//! - Does NOT handle keyboard input
//! - Does NOT render the UI

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::action::Action;
use crate::app::App;
use crate::app::input::helpers::move_selection;
use crate::app::state::Screen;

/// Which tab a click at `column` lands on, given the tab bar's bordered area.
///
/// Mirrors ratatui's `Tabs` layout: one cell of padding on each side of a
/// label and a one-cell divider between labels.
pub(crate) fn tab_at(area: Rect, column: u16, labels: &[String]) -> Option<usize> {
    let mut x = area.x.saturating_add(1);
    for (i, label) in labels.iter().enumerate() {
        let width = label.chars().count() as u16 + 2;
        if column >= x && column < x + width {
            return Some(i);
        }
        x += width + 1;
    }
    None
}

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if self.current_screen.is_form() || self.event_preview.is_some() {
            return None;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.scroll_selection(false);
                None
            }
            MouseEventKind::ScrollDown => {
                self.scroll_selection(true);
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let area = self.last_tabs_area;
                if mouse.row < area.y || mouse.row >= area.y + area.height {
                    return None;
                }
                let screen = tab_at(area, mouse.column, &Screen::tab_labels())
                    .and_then(|i| Screen::TABS.get(i).copied())?;
                (screen != self.current_screen).then_some(Action::Navigate(screen))
            }
            _ => None,
        }
    }

    fn scroll_selection(&mut self, down: bool) {
        match self.current_screen {
            Screen::Monitors => {
                move_selection(&mut self.monitors_state, self.monitors.data().len(), down)
            }
            Screen::Events => {
                move_selection(&mut self.events_state, self.events.data().len(), down)
            }
            Screen::Requests => move_selection(
                &mut self.requests_state,
                self.requests.data().page.logs.len(),
                down,
            ),
            Screen::Integrations => move_selection(
                &mut self.integrations_state,
                self.integrations.as_ref().map_or(0, Vec::len),
                down,
            ),
            Screen::Tokens => move_selection(
                &mut self.tokens_state,
                self.tokens.as_ref().map_or(0, Vec::len),
                down,
            ),
            _ => {}
        }
    }
}
