//! Form screen input handlers.
//!
//! Responsibilities:
//! - Field focus, text editing and selector cycling
//! - Client-side validation on submit; invalid forms return no action
//! - Driving the integration picker's debounced search
//!
//! Non-responsibilities:
//! - Does NOT send anything; submission returns an Action

use crossterm::event::{KeyCode, KeyEvent};
use sentinel_client::HttpMethod;

use crate::action::Action;
use crate::app::App;
use crate::app::forms::{IntegrationField, MonitorField};
use crate::app::input::helpers::is_ctrl;
use crate::app::state::Screen;
use crate::ui::Toast;

const INVALID_FORM: &str = "Please fix the highlighted fields.";

fn previous_method(method: HttpMethod) -> HttpMethod {
    let all = HttpMethod::ALL;
    let i = all.iter().position(|m| *m == method).unwrap_or(0);
    all[(i + all.len() - 1) % all.len()]
}

impl App {
    pub(super) fn handle_sign_in_input(&mut self, key: KeyEvent) -> Option<Action> {
        if self.sign_in.submitting {
            return None;
        }
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.sign_in.toggle_focus();
                None
            }
            KeyCode::Enter => match self.sign_in.credentials() {
                Ok((username, password)) => Some(Action::SignIn { username, password }),
                Err(message) => {
                    self.push_toast(Toast::warning(message));
                    None
                }
            },
            _ => {
                self.sign_in.focused_mut().handle_key(key);
                None
            }
        }
    }

    pub(super) fn handle_monitor_form_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Esc {
            return Some(Action::Navigate(Screen::Monitors));
        }
        let form = self.monitor_form.as_mut()?;
        if form.loading || form.submitting {
            return None;
        }
        if is_ctrl(key, 's') {
            return self.submit_monitor_form();
        }

        match (form.focus, key.code) {
            (_, KeyCode::Tab) => form.focus_next(true),
            (_, KeyCode::BackTab) => form.focus_next(false),
            (MonitorField::Integrations, KeyCode::Down) => form.picker.move_cursor(true),
            (MonitorField::Integrations, KeyCode::Up) => form.picker.move_cursor(false),
            (MonitorField::Integrations, KeyCode::Enter) => {
                form.picker.toggle_highlighted();
                form.errors.retain(|e| e.field != MonitorField::Integrations);
            }
            (_, KeyCode::Down) => form.focus_next(true),
            (_, KeyCode::Up) => form.focus_next(false),
            (_, KeyCode::Enter) => return self.submit_monitor_form(),
            (MonitorField::Method, KeyCode::Left) => form.method = previous_method(form.method),
            (MonitorField::Method, KeyCode::Right | KeyCode::Char(' ')) => {
                form.method = form.method.cycle_next()
            }
            (MonitorField::Method, _) => {}
            (focus, _) => {
                let changed = form
                    .focused_field_mut()
                    .is_some_and(|field| field.handle_key(key));
                if changed {
                    form.errors.retain(|e| e.field != focus);
                    if focus == MonitorField::Integrations {
                        self.schedule_integration_search();
                    }
                }
            }
        }
        None
    }

    fn submit_monitor_form(&mut self) -> Option<Action> {
        let form = self.monitor_form.as_mut()?;
        match form.validate() {
            Ok(params) => {
                form.errors.clear();
                form.submitting = true;
                Some(Action::SubmitMonitor {
                    id: form.editing,
                    params,
                })
            }
            Err(errors) => {
                if let Some(first) = errors.first() {
                    form.focus = first.field;
                }
                form.errors = errors;
                self.push_toast(Toast::error(INVALID_FORM));
                None
            }
        }
    }

    pub(super) fn handle_integration_form_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Esc {
            return Some(Action::Navigate(Screen::Integrations));
        }
        let form = self.integration_form.as_mut()?;
        if form.submitting {
            return None;
        }

        match (form.focus, key.code) {
            (_, KeyCode::Tab | KeyCode::Down) => form.focus_next(true),
            (_, KeyCode::BackTab | KeyCode::Up) => form.focus_next(false),
            (_, KeyCode::Enter) => match form.validate() {
                Ok(params) => {
                    form.errors.clear();
                    form.submitting = true;
                    return Some(Action::CreateIntegration(params));
                }
                Err(errors) => {
                    if let Some(first) = errors.first() {
                        form.focus = first.field;
                    }
                    form.errors = errors;
                    self.push_toast(Toast::error(INVALID_FORM));
                }
            },
            (IntegrationField::Kind, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
                form.kind = form.kind.toggled();
            }
            (IntegrationField::Kind, _) => {}
            (focus, _) => {
                if form
                    .focused_field_mut()
                    .is_some_and(|field| field.handle_key(key))
                {
                    form.errors.retain(|e| e.field != focus);
                }
            }
        }
        None
    }

    pub(super) fn handle_token_form_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Esc {
            return Some(Action::Navigate(Screen::Tokens));
        }
        let form = self.token_form.as_mut()?;
        if form.submitting {
            return None;
        }

        if key.code == KeyCode::Enter {
            return match form.validate() {
                Ok(name) => {
                    form.error = None;
                    form.submitting = true;
                    Some(Action::CreateToken { name })
                }
                Err(message) => {
                    form.error = Some(message);
                    None
                }
            };
        }
        if form.name.handle_key(key) {
            form.error = None;
        }
        None
    }

    pub(super) fn handle_profile_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => return Some(Action::Navigate(Screen::Monitors)),
            KeyCode::Tab => return Some(Action::Navigate(Screen::Profile.next())),
            KeyCode::BackTab => return Some(Action::Navigate(Screen::Profile.previous())),
            _ => {}
        }
        if self.profile_form.submitting {
            return None;
        }

        if key.code == KeyCode::Enter {
            return match self.profile_form.validate() {
                Ok(password) => {
                    self.profile_form.error = None;
                    self.profile_form.submitting = true;
                    Some(Action::UpdatePassword(password))
                }
                Err(message) => {
                    self.profile_form.error = Some(message);
                    None
                }
            };
        }
        if self.profile_form.password.handle_key(key) {
            self.profile_form.error = None;
        }
        None
    }
}
