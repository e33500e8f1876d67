//! Requests screen rendering.
//!
//! Renders the traffic summary, one page of captured request logs and the
//! page bar.

use std::collections::BTreeMap;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Sparkline, Table, TableState},
};
use sentinel_client::{DailyTraffic, RequestMetrics};
use sentinel_config::Theme;

use crate::action::RequestsSnapshot;
use crate::sync::PageWindow;
use crate::ui::format::{format_millis, format_timestamp, truncate_user_agent};
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::{render_empty_state, render_loading_state, render_pagination_bar};

/// Configuration for rendering the requests screen.
pub struct RequestsRenderConfig<'a> {
    pub loaded: bool,
    pub loading: bool,
    pub refreshing: bool,
    pub snapshot: &'a RequestsSnapshot,
    pub page: u32,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

/// Requests per time bucket, successful and failed combined, oldest first.
fn traffic_series(traffic: &[DailyTraffic]) -> Vec<u64> {
    let mut buckets: BTreeMap<i64, u64> = BTreeMap::new();
    for point in traffic {
        *buckets.entry(point.time_interval).or_default() += point.count;
    }
    buckets.into_values().collect()
}

fn render_summary(f: &mut Frame, area: Rect, metrics: &RequestMetrics, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Traffic ")
        .border_style(theme.border())
        .title_style(theme.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let error_style = if metrics.error_rate > 0.0 {
        theme.error()
    } else {
        theme.success()
    };
    let line = Line::from(vec![
        Span::styled("Total ", theme.text_dim()),
        Span::styled(metrics.total_requests.to_string(), theme.text()),
        Span::styled("   Error rate ", theme.text_dim()),
        Span::styled(format!("{:.2}%", metrics.error_rate), error_style),
        Span::styled("   Endpoints ", theme.text_dim()),
        Span::styled(metrics.grouped_requests.len().to_string(), theme.text()),
    ]);
    f.render_widget(Paragraph::new(line), chunks[0]);

    let series = traffic_series(&metrics.daily_traffic);
    f.render_widget(Sparkline::default().data(&series).style(theme.info()), chunks[1]);
}

/// Render the requests screen.
pub fn render_requests(f: &mut Frame, area: Rect, config: RequestsRenderConfig) {
    let RequestsRenderConfig {
        loaded,
        loading,
        refreshing,
        snapshot,
        page,
        state,
        theme,
        spinner_frame,
    } = config;

    if loading && !loaded {
        render_loading_state(f, area, "Requests", "requests", spinner_frame, theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_summary(f, chunks[0], &snapshot.metrics, theme);

    let logs = &snapshot.page.logs;
    if logs.is_empty() {
        render_empty_state(f, chunks[1], "Requests", "No requests captured yet.", theme);
    } else {
        let rows: Vec<Row> = logs
            .iter()
            .map(|log| {
                Row::new(vec![
                    Cell::from(format_timestamp(log.timestamp)),
                    Cell::from(log.service_name.clone()),
                    Cell::from(log.method.clone()),
                    Cell::from(log.url.clone()),
                    Cell::from(Span::styled(
                        log.status_code.to_string(),
                        theme.status_code(log.status_code),
                    )),
                    Cell::from(format_millis(log.duration)),
                    Cell::from(log.ip.clone()),
                    Cell::from(truncate_user_agent(&log.user_agent)),
                ])
            })
            .collect();

        let pagination = &snapshot.page.pagination;
        let mut title = format!(
            " Requests ({} total, page {} of {}) ",
            pagination.total_items,
            page,
            pagination.total_pages.max(1)
        );
        if refreshing || loading {
            title.push_str("⟳ ");
        }

        let table = Table::new(
            rows,
            [
                Constraint::Length(19),
                Constraint::Percentage(12),
                Constraint::Length(6),
                Constraint::Min(20),
                Constraint::Length(6),
                Constraint::Length(11),
                Constraint::Length(15),
                Constraint::Percentage(18),
            ],
        )
        .header(
            Row::new(vec![
                "Time", "Service", "Method", "URL", "Status", "Duration", "IP", "User agent",
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

        f.render_stateful_widget(table, chunks[1], state);
    }

    let window = PageWindow::new(page, snapshot.page.pagination.total_pages);
    render_pagination_bar(f, chunks[2], &window, theme);
}
