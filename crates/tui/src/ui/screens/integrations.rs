//! Integrations screen rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};
use sentinel_client::IntegrationConfig;
use sentinel_config::Theme;

use crate::sync::redact;
use crate::ui::format::format_timestamp;
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::{render_empty_state, render_loading_state};

/// Configuration for rendering the integrations screen.
pub struct IntegrationsRenderConfig<'a> {
    pub loading: bool,
    pub integrations: Option<&'a [IntegrationConfig]>,
    pub show_sensitive: bool,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

/// Render the integrations screen.
pub fn render_integrations(f: &mut Frame, area: Rect, config: IntegrationsRenderConfig) {
    let IntegrationsRenderConfig {
        loading,
        integrations,
        show_sensitive,
        state,
        theme,
        spinner_frame,
    } = config;

    let integrations = match integrations {
        Some(list) => list,
        None if loading => {
            render_loading_state(f, area, "Integrations", "integrations", spinner_frame, theme);
            return;
        }
        None => {
            render_empty_state(
                f,
                area,
                "Integrations",
                "Integrations not loaded. Press 'r' to refresh.",
                theme,
            );
            return;
        }
    };
    if integrations.is_empty() {
        render_empty_state(
            f,
            area,
            "Integrations",
            "No integrations yet. Press 'n' to add a Slack or Discord webhook.",
            theme,
        );
        return;
    }

    let rows: Vec<Row> = integrations
        .iter()
        .map(|i| {
            Row::new(vec![
                Cell::from(i.name.clone()),
                Cell::from(i.kind.label()),
                Cell::from(redact(&i.url, show_sensitive).into_owned()),
                Cell::from(format_timestamp(i.created_at)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Length(8),
            Constraint::Min(30),
            Constraint::Length(19),
        ],
    )
    .header(Row::new(vec!["Name", "Type", "Webhook URL", "Created"]).style(theme.table_header()))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Integrations ({}) ", integrations.len()))
            .border_style(theme.border())
            .title_style(theme.title()),
    )
    .row_highlight_style(theme.highlight())
    .column_spacing(1);

    f.render_stateful_widget(table, area, state);
}
