//! Page bar for the request log.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use sentinel_config::Theme;

use crate::sync::PageWindow;
use crate::ui::theme::ThemeExt;

/// Builds `‹ Prev  1 … 4 [5] 6 … 20  Next ›`, with unreachable ends dimmed.
pub fn pagination_line(window: &PageWindow, theme: &Theme) -> Line<'static> {
    let edge = |label: &'static str, enabled: bool| {
        Span::styled(
            label,
            if enabled { theme.text() } else { theme.disabled() },
        )
    };

    let gaps = window.gaps();
    let mut spans = vec![edge("‹ Prev ", window.prev_enabled)];
    for (i, page) in window.pages.iter().enumerate() {
        if *page == window.current {
            spans.push(Span::styled(format!(" [{page}]"), theme.highlight()));
        } else {
            spans.push(Span::styled(format!(" {page}"), theme.text()));
        }
        if gaps.contains(&i) {
            spans.push(Span::styled(" …", theme.text_dim()));
        }
    }
    spans.push(edge("  Next ›", window.next_enabled));
    Line::from(spans)
}

pub fn render_pagination_bar(f: &mut Frame, area: Rect, window: &PageWindow, theme: &Theme) {
    let paragraph = Paragraph::new(pagination_line(window, theme)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_pagination_line_marks_current_and_gaps() {
        let theme = Theme::default();
        let line = pagination_line(&PageWindow::new(5, 20), &theme);
        assert_eq!(text(&line), "‹ Prev  1 … 4 [5] 6 … 20  Next ›");
    }

    #[test]
    fn test_single_page_has_no_gaps() {
        let theme = Theme::default();
        let line = pagination_line(&PageWindow::new(1, 1), &theme);
        assert_eq!(text(&line), "‹ Prev  [1]  Next ›");
    }
}
