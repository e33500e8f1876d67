//! Empty state widget for list screens.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};
use sentinel_config::Theme;

use crate::ui::theme::ThemeExt;

/// Render an empty state widget.
///
/// # Example
///
/// ```rust,ignore
/// render_empty_state(f, area, "Monitors", "No monitors yet. Press 'n' to create one.", theme);
/// ```
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let placeholder = Paragraph::new(message)
        .style(theme.text_dim())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title),
        )
        .alignment(Alignment::Center);
    f.render_widget(placeholder, area);
}
