//! Events screen rendering.
//!
//! Renders recent check attempts, newest first, and the response preview
//! overlay for the selected attempt.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};
use sentinel_client::Attempt;
use sentinel_config::Theme;

use crate::ui::format::{format_timestamp, truncate};
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::{render_empty_state, render_loading_state};

const RESPONSE_PREVIEW_CHARS: usize = 60;

/// Configuration for rendering the events screen.
pub struct EventsRenderConfig<'a> {
    pub loaded: bool,
    pub loading: bool,
    pub refreshing: bool,
    pub events: &'a [Attempt],
    pub preview: Option<&'a str>,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

fn monitor_label(attempt: &Attempt) -> String {
    attempt
        .monitor_config
        .as_ref()
        .map(|m| m.name.clone())
        .unwrap_or_else(|| format!("#{}", attempt.monitor_config_id))
}

fn response_summary(attempt: &Attempt) -> String {
    if attempt.is_no_response() {
        "No response".to_string()
    } else {
        truncate(&attempt.response_text().replace('\n', " "), RESPONSE_PREVIEW_CHARS)
    }
}

/// Render the events screen.
pub fn render_events(f: &mut Frame, area: Rect, config: EventsRenderConfig) {
    let EventsRenderConfig {
        loaded,
        loading,
        refreshing,
        events,
        preview,
        state,
        theme,
        spinner_frame,
    } = config;

    if loading && !loaded {
        render_loading_state(f, area, "Events", "events", spinner_frame, theme);
        return;
    }
    if events.is_empty() {
        render_empty_state(f, area, "Events", "No check attempts recorded yet.", theme);
        return;
    }

    let rows: Vec<Row> = events
        .iter()
        .map(|attempt| {
            let (mark, style) = if attempt.healthy {
                ("✓", theme.success())
            } else {
                ("✗", theme.error())
            };
            let code = if attempt.status_code == 0 {
                Span::styled("-", theme.text_dim())
            } else {
                Span::styled(
                    attempt.status_code.to_string(),
                    theme.status_code(attempt.status_code),
                )
            };
            Row::new(vec![
                Cell::from(Span::styled(mark, style)),
                Cell::from(monitor_label(attempt)),
                Cell::from(code),
                Cell::from(response_summary(attempt)),
                Cell::from(format_timestamp(attempt.created_at)),
            ])
        })
        .collect();

    let title = if refreshing {
        format!(" Events ({}) ⟳ ", events.len())
    } else {
        format!(" Events ({}) ", events.len())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Percentage(22),
            Constraint::Length(6),
            Constraint::Min(20),
            Constraint::Length(19),
        ],
    )
    .header(
        Row::new(vec!["", "Monitor", "Code", "Response", "Time"]).style(theme.table_header()),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.border())
            .title_style(theme.title()),
    )
    .row_highlight_style(theme.highlight())
    .column_spacing(1);

    f.render_stateful_widget(table, area, state);

    if let Some(preview) = preview {
        render_preview(f, area, preview, theme);
    }
}

fn render_preview(f: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let [popup] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(popup);

    f.render_widget(Clear, popup);
    let paragraph = Paragraph::new(text.to_string())
        .style(theme.text())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Response (Esc to close) ")
                .border_style(theme.border_focused())
                .title_style(theme.title()),
        );
    f.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(status_code: u16, response: serde_json::Value) -> Attempt {
        serde_json::from_value(serde_json::json!({
            "id": 1, "monitor_config_id": 4, "healthy": false,
            "status_code": status_code, "response": response, "created_at": 0
        }))
        .unwrap()
    }

    #[test]
    fn test_response_summary() {
        assert_eq!(response_summary(&attempt(0, serde_json::json!(""))), "No response");
        assert_eq!(
            response_summary(&attempt(500, serde_json::json!("line one\nline two"))),
            "line one line two"
        );
    }

    #[test]
    fn test_monitor_label_falls_back_to_id() {
        assert_eq!(monitor_label(&attempt(200, serde_json::json!("ok"))), "#4");
    }
}
