//! New API token form rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use sentinel_config::Theme;

use crate::app::forms::TokenForm;
use crate::ui::screens::centered;
use crate::ui::theme::{ThemeExt, spinner_char};
use crate::ui::widgets::render_text_field;

pub fn render_token_form(
    f: &mut Frame,
    area: Rect,
    form: &TokenForm,
    theme: &Theme,
    spinner_frame: u8,
) {
    let area = centered(area, 60, 8);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New API token ")
        .border_style(theme.border())
        .title_style(theme.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    render_text_field(f, chunks[0], &form.name, !form.submitting, form.error.as_deref(), theme);

    let status = if form.submitting {
        Line::styled(format!("{} Creating...", spinner_char(spinner_frame)), theme.info())
    } else {
        Line::styled("Enter: create · Esc: cancel", theme.text_dim())
    };
    f.render_widget(Paragraph::new(status), chunks[1]);
}
