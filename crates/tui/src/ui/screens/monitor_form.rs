//! Create/edit monitor form rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use sentinel_client::HttpMethod;
use sentinel_config::Theme;

use crate::app::forms::{MonitorField, MonitorForm};
use crate::ui::theme::{ThemeExt, spinner_char};
use crate::ui::widgets::{render_loading_state, render_picker, render_text_field};

fn method_selector<'a>(form: &MonitorForm, focused: bool, theme: &Theme) -> Paragraph<'a> {
    let spans: Vec<Span> = HttpMethod::ALL
        .iter()
        .flat_map(|m| {
            let style = if *m == form.method {
                theme.highlight()
            } else {
                theme.text_dim()
            };
            [Span::styled(format!(" {} ", m.as_str()), style), Span::raw(" ")]
        })
        .collect();
    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Method (←/→) ")
            .border_style(if focused { theme.border_focused() } else { theme.border() }),
    )
}

pub fn render_monitor_form(
    f: &mut Frame,
    area: Rect,
    form: &MonitorForm,
    theme: &Theme,
    spinner_frame: u8,
) {
    let title = if form.editing.is_some() {
        "Edit monitor"
    } else {
        "New monitor"
    };
    if form.loading {
        render_loading_state(f, area, title, "monitor", spinner_frame, theme);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(theme.border())
        .title_style(theme.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(halves[0]);

    let text_fields = [
        (MonitorField::Name, &form.name, left[0]),
        (MonitorField::Url, &form.url, left[1]),
        (MonitorField::Interval, &form.interval, left[3]),
        (MonitorField::Timeout, &form.timeout, left[4]),
        (MonitorField::Threshold, &form.threshold, left[5]),
    ];
    for (field, input, chunk) in text_fields {
        render_text_field(f, chunk, input, form.focus == field, form.error(field), theme);
    }
    f.render_widget(
        method_selector(form, form.focus == MonitorField::Method, theme),
        left[2],
    );

    let status = if form.submitting {
        Line::styled(format!("{} Saving...", spinner_char(spinner_frame)), theme.info())
    } else {
        Line::styled(
            "Tab: next field · Enter: save (toggle in list) · Ctrl+S: save · Esc: cancel",
            theme.text_dim(),
        )
    };
    f.render_widget(Paragraph::new(status), left[6]);

    render_picker(
        f,
        halves[1],
        &form.picker,
        form.focus == MonitorField::Integrations,
        form.error(MonitorField::Integrations),
        theme,
    );
}
