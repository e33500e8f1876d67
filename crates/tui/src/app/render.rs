//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main app layout (header with tabs, content, footer)
//! - Dispatch to screen-specific renderers
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for TableState selection and the
//!   tab bar area kept for mouse hit-testing)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;
use crate::app::state::{FOOTER_HEIGHT, HEADER_HEIGHT, Screen};
use crate::ui::screens::{
    events, integration_form, integrations, monitor_form, monitors, profile, requests, sign_in,
    token_form, tokens,
};
use crate::ui::theme::ThemeExt;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_content(f, chunks[1]);
        self.render_footer(f, chunks[2]);

        crate::ui::toast::render_toasts(f, &self.toasts, &self.theme);
    }

    fn render_header(&mut self, f: &mut Frame, area: Rect) {
        let theme = self.theme;
        let mut title = vec![Span::styled(" Sentinel ", theme.title())];
        if let Some(user) = &self.username {
            title.push(Span::styled(format!("· {user} "), theme.text_dim()));
        }
        if self.show_sensitive {
            title.push(Span::styled("· sensitive visible ", theme.warning()));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Line::from(title));

        if self.current_screen == Screen::SignIn {
            f.render_widget(block, area);
            self.last_tabs_area = Rect::default();
            return;
        }

        let selected = self
            .current_screen
            .tab()
            .and_then(|tab| Screen::TABS.iter().position(|t| *t == tab));
        let tabs = Tabs::new(Screen::tab_labels())
            .block(block)
            .style(theme.text_dim())
            .highlight_style(theme.highlight())
            .select(selected);
        f.render_widget(tabs, area);
        self.last_tabs_area = area;
    }

    fn footer_hint(&self) -> &'static str {
        if self.event_preview.is_some() {
            return " Esc:Close preview ";
        }
        match self.current_screen {
            Screen::SignIn => " Enter:Sign in | Tab:Switch field | Ctrl+C:Quit ",
            Screen::Monitors => {
                " n:New | e:Edit | Space:Enable/Disable | s:Sensitive | t:Theme | o:Sign out | q:Quit "
            }
            Screen::Events => " Enter:Preview response | Tab:Next | s:Sensitive | q:Quit ",
            Screen::Requests => " ←/→:Page | Home/End:First/Last | Tab:Next | q:Quit ",
            Screen::Integrations => " n:New | r:Refresh | s:Sensitive | Tab:Next | q:Quit ",
            Screen::Tokens => " n:New | r:Refresh | s:Sensitive | Tab:Next | q:Quit ",
            Screen::MonitorForm | Screen::IntegrationForm | Screen::TokenForm => {
                " Enter:Save | Tab:Next field | Esc:Cancel "
            }
            Screen::Profile => " Enter:Change password | Tab:Next tab | Esc:Back ",
        }
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let footer = Paragraph::new(Line::from(vec![Span::styled(
            self.footer_hint(),
            self.theme.text_dim(),
        )]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border()),
        );
        f.render_widget(footer, area);
    }

    fn render_content(&mut self, f: &mut Frame, area: Rect) {
        let theme = self.theme;
        let spinner_frame = self.spinner_frame;
        match self.current_screen {
            Screen::SignIn => {
                sign_in::render_sign_in(f, area, &self.sign_in, &self.base_url, &theme, spinner_frame)
            }
            Screen::Monitors => monitors::render_monitors(
                f,
                area,
                monitors::MonitorsRenderConfig {
                    loaded: self.monitors.is_loaded(),
                    loading: self.monitors.is_loading(),
                    refreshing: self.monitors.is_refreshing(),
                    monitors: self.monitors.data(),
                    pending_toggles: &self.pending_toggles,
                    show_sensitive: self.show_sensitive,
                    state: &mut self.monitors_state,
                    theme: &theme,
                    spinner_frame,
                },
            ),
            Screen::Events => events::render_events(
                f,
                area,
                events::EventsRenderConfig {
                    loaded: self.events.is_loaded(),
                    loading: self.events.is_loading(),
                    refreshing: self.events.is_refreshing(),
                    events: self.events.data(),
                    preview: self.event_preview.as_deref(),
                    state: &mut self.events_state,
                    theme: &theme,
                    spinner_frame,
                },
            ),
            Screen::Requests => requests::render_requests(
                f,
                area,
                requests::RequestsRenderConfig {
                    loaded: self.requests.is_loaded(),
                    loading: self.requests.is_loading(),
                    refreshing: self.requests.is_refreshing(),
                    snapshot: self.requests.data(),
                    page: self.requests_page,
                    state: &mut self.requests_state,
                    theme: &theme,
                    spinner_frame,
                },
            ),
            Screen::Integrations => integrations::render_integrations(
                f,
                area,
                integrations::IntegrationsRenderConfig {
                    loading: self.integrations_loading,
                    integrations: self.integrations.as_deref(),
                    show_sensitive: self.show_sensitive,
                    state: &mut self.integrations_state,
                    theme: &theme,
                    spinner_frame,
                },
            ),
            Screen::Tokens => tokens::render_tokens(
                f,
                area,
                tokens::TokensRenderConfig {
                    loading: self.tokens_loading,
                    tokens: self.tokens.as_deref(),
                    show_sensitive: self.show_sensitive,
                    state: &mut self.tokens_state,
                    theme: &theme,
                    spinner_frame,
                },
            ),
            Screen::MonitorForm => {
                if let Some(form) = &self.monitor_form {
                    monitor_form::render_monitor_form(f, area, form, &theme, spinner_frame);
                }
            }
            Screen::IntegrationForm => {
                if let Some(form) = &self.integration_form {
                    integration_form::render_integration_form(f, area, form, &theme, spinner_frame);
                }
            }
            Screen::TokenForm => {
                if let Some(form) = &self.token_form {
                    token_form::render_token_form(f, area, form, &theme, spinner_frame);
                }
            }
            Screen::Profile => profile::render_profile(
                f,
                area,
                profile::ProfileRenderConfig {
                    form: &self.profile_form,
                    username: self.username.as_deref(),
                    base_url: &self.base_url,
                    show_sensitive: self.show_sensitive,
                    theme_name: self.color_theme.display_name(),
                    theme: &theme,
                    spinner_frame,
                },
            ),
        }
    }
}
