//! TUI-specific theme helpers and style builders.
//!
//! This module extends `sentinel_config::Theme` with ergonomic helpers
//! for building ratatui `Style` objects consistently across the TUI.

use ratatui::style::{Modifier, Style};
use sentinel_config::Theme;
use sentinel_client::Slot;

/// Spinner characters for animated loading indicator.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
///
/// # Example
///
/// ```
/// use sentinel_tui::ui::theme::spinner_char;
///
/// assert_eq!(spinner_char(0), spinner_char(8));
/// ```
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Get the base text style.
    fn text(&self) -> Style;
    /// Get dimmed text style.
    fn text_dim(&self) -> Style;
    /// Get title style (title color + bold).
    fn title(&self) -> Style;
    /// Get border style.
    fn border(&self) -> Style;
    /// Get border style when focused.
    fn border_focused(&self) -> Style;
    /// Get highlight/selection style.
    fn highlight(&self) -> Style;
    fn success(&self) -> Style;
    fn warning(&self) -> Style;
    fn error(&self) -> Style;
    fn info(&self) -> Style;
    fn disabled(&self) -> Style;
    /// Get table header style.
    fn table_header(&self) -> Style;
    /// Style for one cell of a monitor's health strip.
    fn slot(&self, slot: &Slot) -> Style;
    /// Style for an HTTP status code: 2xx green, 3xx yellow, 4xx/5xx red.
    fn status_code(&self, code: u16) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn slot(&self, slot: &Slot) -> Style {
        let color = if !slot.is_monitoring_enabled {
            self.slot_disabled
        } else if slot.healthy {
            self.slot_healthy
        } else {
            self.slot_unhealthy
        };
        Style::default().fg(color)
    }

    fn status_code(&self, code: u16) -> Style {
        match code {
            200..=299 => self.success(),
            300..=399 => self.warning(),
            _ => self.error(),
        }
    }
}

/// Helper functions for common style patterns.
pub mod helpers {
    use super::*;

    /// Create a style for selected items in a list.
    pub fn selected_style(theme: &Theme) -> Style {
        Style::default()
            .fg(theme.highlight_fg)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Create a muted/secondary text style.
    pub fn muted_style(theme: &Theme) -> Style {
        Style::default().fg(theme.text_dim)
    }
}
