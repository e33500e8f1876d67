//! System action handlers for the TUI app.
//!
//! Responsibilities:
//! - Handle ticks (toast expiry, spinner animation)
//! - Handle notifications and toast messages
//! - Handle preference toggles (sensitive info, theme)

use sentinel_config::Theme;

use crate::action::Action;
use crate::app::App;
use crate::ui::Toast;

impl App {
    /// Handle system/miscellaneous actions.
    pub fn handle_system_action(&mut self, action: Action) {
        match action {
            Action::Tick => {
                self.toasts.retain(|t| !t.is_expired());
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
            }
            Action::Notify(level, message) => {
                self.toasts.push(Toast::new(message, level));
            }
            Action::ToggleSensitive => {
                self.show_sensitive = !self.show_sensitive;
            }
            Action::ToggleTheme => {
                self.color_theme = self.color_theme.toggled();
                self.theme = Theme::from_color_theme(self.color_theme);
            }
            _ => {}
        }
    }
}
