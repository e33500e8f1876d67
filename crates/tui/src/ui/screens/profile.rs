//! Profile screen rendering: account details and password change.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use sentinel_config::Theme;

use crate::app::forms::ProfileForm;
use crate::ui::screens::centered;
use crate::ui::theme::{ThemeExt, spinner_char};
use crate::ui::widgets::render_text_field;

pub struct ProfileRenderConfig<'a> {
    pub form: &'a ProfileForm,
    pub username: Option<&'a str>,
    pub base_url: &'a str,
    pub show_sensitive: bool,
    pub theme_name: &'a str,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

pub fn render_profile(f: &mut Frame, area: Rect, config: ProfileRenderConfig) {
    let ProfileRenderConfig {
        form,
        username,
        base_url,
        show_sensitive,
        theme_name,
        theme,
        spinner_frame,
    } = config;

    let area = centered(area, 70, 14);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Profile ")
        .border_style(theme.border())
        .title_style(theme.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<16}"), theme.text_dim()),
            Span::styled(value, theme.text()),
        ])
    };
    let details = vec![
        row("Signed in as", username.unwrap_or("-").to_string()),
        row("Server", base_url.to_string()),
        row(
            "Sensitive info",
            if show_sensitive { "shown" } else { "hidden" }.to_string(),
        ),
        row("Theme", theme_name.to_string()),
    ];
    f.render_widget(Paragraph::new(details), chunks[0]);

    render_text_field(
        f,
        chunks[1],
        &form.password,
        !form.submitting,
        form.error.as_deref(),
        theme,
    );

    let status = if form.submitting {
        Line::styled(format!("{} Updating...", spinner_char(spinner_frame)), theme.info())
    } else {
        Line::styled(
            "Enter: change password · Tab: next tab · Esc: back to monitors",
            theme.text_dim(),
        )
    };
    f.render_widget(Paragraph::new(status), chunks[2]);
}
