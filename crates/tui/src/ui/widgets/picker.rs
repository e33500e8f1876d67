//! Multi-select integration picker.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use sentinel_config::Theme;

use crate::app::forms::IntegrationPicker;
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::input::render_text_field;

fn candidate_line<'a>(label: &'a str, badge: Option<&'a str>, checked: bool, theme: &Theme) -> Line<'a> {
    let mark = if checked { "[x] " } else { "[ ] " };
    let mut spans = vec![
        Span::styled(mark, if checked { theme.success() } else { theme.text_dim() }),
        Span::styled(label, theme.text()),
    ];
    if let Some(badge) = badge {
        spans.push(Span::styled(format!("  {badge}"), theme.info()));
    }
    Line::from(spans)
}

/// Search box on top, candidates below. The title lists what is selected
/// so choices made under an earlier query stay visible.
pub fn render_picker(
    f: &mut Frame,
    area: Rect,
    picker: &IntegrationPicker,
    focused: bool,
    error: Option<&str>,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_text_field(f, chunks[0], &picker.query, focused, error, theme);

    let selected: Vec<&str> = picker
        .selection
        .selected()
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    let mut title = if selected.is_empty() {
        " Nothing selected ".to_string()
    } else {
        format!(" Selected: {} ", selected.join(", "))
    };
    if picker.is_loading() {
        title.push_str("· Searching... ");
    }

    let items: Vec<ListItem> = if picker.candidates.is_empty() && !picker.is_loading() {
        vec![ListItem::new(Line::styled("No integrations found", theme.text_dim()))]
    } else {
        picker
            .candidates
            .iter()
            .map(|option| {
                ListItem::new(candidate_line(
                    &option.label,
                    option.badge.as_deref(),
                    picker.selection.is_selected(&option.value),
                    theme,
                ))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused { theme.border_focused() } else { theme.border() })
                .title(title),
        )
        .highlight_style(theme.highlight());

    let mut state = ListState::default();
    if focused && !picker.candidates.is_empty() {
        state.select(Some(picker.cursor));
    }
    f.render_stateful_widget(list, chunks[1], &mut state);
}
