//! Mutation and one-shot load results.
//!
//! Responsibilities:
//! - Mark forms and rows as in flight when a write is issued.
//! - Turn write results into success or error toasts.
//! - Store one-shot lists (integrations, tokens) and picker search results.

use crate::action::Action;
use crate::app::App;
use crate::app::actions::live::clamp_selection;
use crate::app::forms::ProfileForm;
use crate::ui::Toast;

impl App {
    pub fn handle_mutation_action(&mut self, action: Action) {
        match action {
            // Monitors
            Action::ToggleMonitorEnabled { id, .. } => {
                self.pending_toggles.insert(id);
            }
            Action::MonitorToggled {
                id,
                enabled,
                result,
            } => {
                self.pending_toggles.remove(&id);
                let verb = if enabled { "enable" } else { "disable" };
                match result {
                    Ok(()) => {
                        if let Some(monitor) =
                            self.monitors.data_mut().iter_mut().find(|m| m.id == id)
                        {
                            monitor.enabled = enabled;
                        }
                        self.push_toast(Toast::success(format!("Monitor {verb}d successfully!")));
                    }
                    Err(e) => {
                        tracing::warn!(monitor_id = id, error = %e, "Failed to {verb} monitor");
                        self.push_toast(Toast::error(format!(
                            "Failed to {verb} monitor. Please try again."
                        )));
                    }
                }
            }
            Action::MonitorLoaded(Ok(monitor)) => {
                if let Some(form) = self.monitor_form.as_mut()
                    && form.editing == Some(monitor.id)
                {
                    form.fill(&monitor);
                }
            }
            Action::MonitorLoaded(Err(e)) => {
                if !self.expire_session_on(&e) {
                    tracing::warn!(error = %e, "Failed to fetch monitor");
                    self.push_toast(Toast::error(
                        "Failed to fetch monitor data. Please try again.",
                    ));
                }
            }
            Action::SubmitMonitor { .. } => {
                if let Some(form) = self.monitor_form.as_mut() {
                    form.submitting = true;
                }
            }
            Action::MonitorSaved { created, result } => {
                let verb = if created { "create" } else { "update" };
                match result {
                    Ok(()) => {
                        self.push_toast(Toast::success(format!("Monitor {verb}d successfully!")))
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to {verb} monitor");
                        if let Some(form) = self.monitor_form.as_mut() {
                            form.submitting = false;
                        }
                        self.push_toast(Toast::error(format!(
                            "Failed to {verb} monitor. Please try again."
                        )));
                    }
                }
            }

            // Integrations
            Action::LoadIntegrations => self.integrations_loading = true,
            Action::IntegrationsLoaded(result) => {
                self.integrations_loading = false;
                match result {
                    Ok(list) => {
                        clamp_selection(&mut self.integrations_state, list.len());
                        self.integrations = Some(list);
                    }
                    Err(e) => {
                        if !self.expire_session_on(&e) {
                            self.push_toast(Toast::error(format!(
                                "Failed to load integrations: {}",
                                e.user_message()
                            )));
                        }
                    }
                }
            }
            Action::CreateIntegration(_) => {
                if let Some(form) = self.integration_form.as_mut() {
                    form.submitting = true;
                }
            }
            Action::IntegrationCreated(Ok(())) => {
                self.push_toast(Toast::success("Integration created successfully."));
            }
            Action::IntegrationCreated(Err(e)) => {
                tracing::warn!(error = %e, "Failed to create integration");
                if let Some(form) = self.integration_form.as_mut() {
                    form.submitting = false;
                }
                self.push_toast(Toast::error("Failed to create integration. Please try again."));
            }
            Action::IntegrationsSearched { ticket, result } => {
                let Some(form) = self.monitor_form.as_mut() else {
                    return;
                };
                if !form.picker.debouncer.complete(ticket) {
                    return;
                }
                match result {
                    Ok(list) => form.picker.set_candidates(&list),
                    Err(e) => tracing::debug!(error = %e, "Integration search failed"),
                }
            }

            // Tokens
            Action::LoadTokens => self.tokens_loading = true,
            Action::TokensLoaded(result) => {
                self.tokens_loading = false;
                match result {
                    Ok(list) => {
                        clamp_selection(&mut self.tokens_state, list.len());
                        self.tokens = Some(list);
                    }
                    Err(e) => {
                        if !self.expire_session_on(&e) {
                            self.push_toast(Toast::error(format!(
                                "Failed to load tokens: {}",
                                e.user_message()
                            )));
                        }
                    }
                }
            }
            Action::CreateToken { .. } => {
                if let Some(form) = self.token_form.as_mut() {
                    form.submitting = true;
                }
            }
            Action::TokenCreated(Ok(_)) => {
                self.push_toast(Toast::success("Token created successfully."));
            }
            Action::TokenCreated(Err(e)) => {
                tracing::warn!(error = %e, "Failed to create token");
                if let Some(form) = self.token_form.as_mut() {
                    form.submitting = false;
                }
                self.push_toast(Toast::error("Failed to create token. Please try again."));
            }

            // Profile
            Action::UpdatePassword(_) => self.profile_form.submitting = true,
            Action::PasswordUpdated(Ok(_)) => {
                self.profile_form = ProfileForm::default();
                self.push_toast(Toast::success("Profile updated successfully."));
            }
            Action::PasswordUpdated(Err(e)) => {
                tracing::warn!(error = %e, "Failed to update password");
                self.profile_form.submitting = false;
                self.push_toast(Toast::error("Failed to update profile. Please try again."));
            }
            _ => {}
        }
    }
}
