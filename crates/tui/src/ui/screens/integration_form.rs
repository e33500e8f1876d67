//! New integration form rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use sentinel_client::IntegrationType;
use sentinel_config::Theme;

use crate::app::forms::{IntegrationField, IntegrationForm};
use crate::ui::screens::centered;
use crate::ui::theme::{ThemeExt, spinner_char};
use crate::ui::widgets::render_text_field;

pub fn render_integration_form(
    f: &mut Frame,
    area: Rect,
    form: &IntegrationForm,
    theme: &Theme,
    spinner_frame: u8,
) {
    let area = centered(area, 70, 15);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New integration ")
        .border_style(theme.border())
        .title_style(theme.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    render_text_field(
        f,
        chunks[0],
        &form.name,
        form.focus == IntegrationField::Name,
        form.error(IntegrationField::Name),
        theme,
    );

    let kinds: Vec<Span> = [IntegrationType::Slack, IntegrationType::Discord]
        .into_iter()
        .map(|kind| {
            let style = if kind == form.kind {
                theme.highlight()
            } else {
                theme.text_dim()
            };
            Span::styled(format!(" {} ", kind.label()), style)
        })
        .collect();
    let kind_focused = form.focus == IntegrationField::Kind;
    f.render_widget(
        Paragraph::new(Line::from(kinds)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Type (←/→) ")
                .border_style(if kind_focused { theme.border_focused() } else { theme.border() }),
        ),
        chunks[1],
    );

    render_text_field(
        f,
        chunks[2],
        &form.url,
        form.focus == IntegrationField::Url,
        form.error(IntegrationField::Url),
        theme,
    );

    let status = if form.submitting {
        Line::styled(format!("{} Creating...", spinner_char(spinner_frame)), theme.info())
    } else {
        Line::styled("Tab: next field · Enter: create · Esc: cancel", theme.text_dim())
    };
    f.render_widget(Paragraph::new(status), chunks[3]);
}
