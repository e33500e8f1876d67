//! API tokens screen rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};
use sentinel_client::ApiKeyConfig;
use sentinel_config::Theme;

use crate::sync::redact;
use crate::ui::format::format_timestamp;
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::{render_empty_state, render_loading_state};

/// Configuration for rendering the tokens screen.
pub struct TokensRenderConfig<'a> {
    pub loading: bool,
    pub tokens: Option<&'a [ApiKeyConfig]>,
    pub show_sensitive: bool,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

/// Render the tokens screen. Key values are masked unless sensitive info
/// is shown.
pub fn render_tokens(f: &mut Frame, area: Rect, config: TokensRenderConfig) {
    let TokensRenderConfig {
        loading,
        tokens,
        show_sensitive,
        state,
        theme,
        spinner_frame,
    } = config;

    let tokens = match tokens {
        Some(list) => list,
        None if loading => {
            render_loading_state(f, area, "Tokens", "tokens", spinner_frame, theme);
            return;
        }
        None => {
            render_empty_state(f, area, "Tokens", "Tokens not loaded. Press 'r' to refresh.", theme);
            return;
        }
    };
    if tokens.is_empty() {
        render_empty_state(f, area, "Tokens", "No API tokens yet. Press 'n' to create one.", theme);
        return;
    }

    let rows: Vec<Row> = tokens
        .iter()
        .map(|t| {
            let status = if t.revoked {
                Span::styled("revoked", theme.error())
            } else {
                Span::styled("active", theme.success())
            };
            Row::new(vec![
                Cell::from(t.name.clone()),
                Cell::from(redact(&t.value, show_sensitive).into_owned()),
                Cell::from(status),
                Cell::from(format_timestamp(t.created_at)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Min(30),
            Constraint::Length(8),
            Constraint::Length(19),
        ],
    )
    .header(Row::new(vec!["Name", "Key", "Status", "Created"]).style(theme.table_header()))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Tokens ({}) ", tokens.len()))
            .border_style(theme.border())
            .title_style(theme.title()),
    )
    .row_highlight_style(theme.highlight())
    .column_spacing(1);

    f.render_stateful_widget(table, area, state);
}
