//! Monitors screen rendering.
//!
//! Renders every monitor with its health, target, schedule and the recent
//! history strip. URLs are masked unless sensitive info is shown.

use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use sentinel_client::{MonitorConfig, Slot};
use sentinel_config::Theme;
use sentinel_config::constants::MONITOR_SLOT_COUNT;

use crate::sync::redact;
use crate::ui::format::{format_interval, format_timestamp};
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::{render_empty_state, render_loading_state};

/// Configuration for rendering the monitors screen.
pub struct MonitorsRenderConfig<'a> {
    pub loaded: bool,
    pub loading: bool,
    pub refreshing: bool,
    pub monitors: &'a [MonitorConfig],
    pub pending_toggles: &'a HashSet<u64>,
    pub show_sensitive: bool,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

/// The most recent slots, oldest first, one cell each.
fn history_strip<'a>(slots: &[Slot], theme: &Theme) -> Line<'a> {
    let start = slots.len().saturating_sub(MONITOR_SLOT_COUNT);
    Line::from(
        slots[start..]
            .iter()
            .map(|slot| Span::styled("▮", theme.slot(slot)))
            .collect::<Vec<_>>(),
    )
}

fn status_cell<'a>(monitor: &MonitorConfig, theme: &Theme) -> Cell<'a> {
    let (label, style) = match (monitor.enabled, monitor.healthy) {
        (false, _) => ("● Paused", theme.disabled()),
        (true, true) => ("● Up", theme.success()),
        (true, false) => ("● Down", theme.error()),
    };
    Cell::from(Span::styled(label, style))
}

/// Schedule summary for the highlighted monitor.
fn monitor_footer<'a>(monitor: &MonitorConfig, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(" Interval: ", theme.text_dim()),
        Span::styled(format_interval(monitor.interval), theme.text()),
        Span::styled("  Last Ran: ", theme.text_dim()),
        Span::styled(format_timestamp(monitor.last_run), theme.text()),
    ];
    if !monitor.enabled {
        spans.push(Span::styled(
            format!("  (Disabled at {})", format_timestamp(monitor.updated_at)),
            theme.disabled(),
        ));
    }
    Line::from(spans)
}

/// Render the monitors screen.
pub fn render_monitors(f: &mut Frame, area: Rect, config: MonitorsRenderConfig) {
    let MonitorsRenderConfig {
        loaded,
        loading,
        refreshing,
        monitors,
        pending_toggles,
        show_sensitive,
        state,
        theme,
        spinner_frame,
    } = config;

    if loading && !loaded {
        render_loading_state(f, area, "Monitors", "monitors", spinner_frame, theme);
        return;
    }
    if monitors.is_empty() {
        render_empty_state(
            f,
            area,
            "Monitors",
            "No monitors yet. Press 'n' to create one.",
            theme,
        );
        return;
    }

    let rows: Vec<Row> = monitors
        .iter()
        .map(|m| {
            let enabled = if pending_toggles.contains(&m.id) {
                Span::styled("…", theme.warning())
            } else if m.enabled {
                Span::styled("on", theme.success())
            } else {
                Span::styled("off", theme.disabled())
            };
            Row::new(vec![
                status_cell(m, theme),
                Cell::from(m.name.clone()),
                Cell::from(redact(&m.url, show_sensitive).into_owned()),
                Cell::from(m.method.clone()),
                Cell::from(format_interval(m.interval)),
                Cell::from(format_timestamp(m.last_run)),
                Cell::from(enabled),
                Cell::from(history_strip(&m.slots, theme)),
            ])
        })
        .collect();

    let title = if refreshing {
        format!(" Monitors ({}) ⟳ ", monitors.len())
    } else {
        format!(" Monitors ({}) ", monitors.len())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Percentage(18),
            Constraint::Percentage(26),
            Constraint::Length(6),
            Constraint::Length(11),
            Constraint::Length(19),
            Constraint::Length(4),
            Constraint::Min(MONITOR_SLOT_COUNT as u16),
        ],
    )
    .header(
        Row::new(vec![
            "Status", "Name", "URL", "Method", "Every", "Last run", "On", "History",
        ])
        .style(theme.table_header()),
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

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    f.render_stateful_widget(table, chunks[0], state);

    if let Some(monitor) = state.selected().and_then(|i| monitors.get(i)) {
        f.render_widget(Paragraph::new(monitor_footer(monitor, theme)), chunks[1]);
    }
}
