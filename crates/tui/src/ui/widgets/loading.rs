//! Loading state widget with an animated spinner.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};
use sentinel_config::Theme;

use crate::ui::theme::{ThemeExt, spinner_char};

/// Render "<spinner> Loading {resource}..." inside a bordered block.
///
/// Only shown for the first fetch of a view; background refreshes keep the
/// list on screen and use the header indicator instead.
pub fn render_loading_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    resource: &str,
    spinner_frame: u8,
    theme: &Theme,
) {
    let spinner = spinner_char(spinner_frame);
    let loading_widget = Paragraph::new(format!("{spinner} Loading {resource}..."))
        .style(theme.info())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title),
        )
        .alignment(Alignment::Center);
    f.render_widget(loading_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_loading_state() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| {
                render_loading_state(f, f.area(), "Events", "events", 0, &theme);
            })
            .unwrap();

        let content = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(content.contains("Events"));
        assert!(content.contains("Loading events..."));
    }
}
