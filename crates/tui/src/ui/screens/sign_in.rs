//! Sign-in screen rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use sentinel_config::Theme;

use crate::app::forms::{SignInField, SignInForm};
use crate::ui::screens::centered;
use crate::ui::theme::{ThemeExt, spinner_char};
use crate::ui::widgets::render_text_field;

pub fn render_sign_in(
    f: &mut Frame,
    area: Rect,
    form: &SignInForm,
    base_url: &str,
    theme: &Theme,
    spinner_frame: u8,
) {
    let area = centered(area, 60, 12);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sign in to Sentinel ")
        .border_style(theme.border_focused())
        .title_style(theme.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::styled(base_url.to_string(), theme.text_dim())),
        chunks[0],
    );
    let focused = !form.submitting;
    render_text_field(
        f,
        chunks[1],
        &form.username,
        focused && form.focus == SignInField::Username,
        None,
        theme,
    );
    render_text_field(
        f,
        chunks[2],
        &form.password,
        focused && form.focus == SignInField::Password,
        None,
        theme,
    );

    let status = if form.submitting {
        Line::styled(format!("{} Signing in...", spinner_char(spinner_frame)), theme.info())
    } else {
        Line::styled("Enter: sign in · Tab: switch field · Ctrl+C: quit", theme.text_dim())
    };
    f.render_widget(Paragraph::new(status), chunks[3]);
}
