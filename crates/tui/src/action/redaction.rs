//! Security-focused redaction wrapper for action logging.
//!
//! # Security Invariants
//!
//! - Passwords never reach the log, not even their length.
//! - Payloads that may carry sensitive values (monitor and webhook URLs,
//!   API key values, search text, server messages) are reduced to counts or
//!   sizes.
//! - Simple variants without payloads fall through to `Debug`.

use crate::action::variants::Action;

/// Debug wrapper that hides sensitive action payloads.
///
/// # Example
/// ```ignore
/// tracing::debug!(action = ?RedactedAction(&action), "Handling action");
/// ```
pub struct RedactedAction<'a>(pub &'a Action);

fn outcome<T, E>(result: &Result<T, E>) -> &'static str {
    if result.is_ok() { "Ok" } else { "Err" }
}

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::Input(_) => write!(f, "Input(<key>)"),
            Action::SignIn { username, .. } => {
                write!(f, "SignIn(<{} char user>, <redacted>)", username.chars().count())
            }
            Action::UpdatePassword(_) => write!(f, "UpdatePassword(<redacted>)"),
            Action::SubmitMonitor { id, params } => write!(
                f,
                "SubmitMonitor(id={:?}, <{} integrations>)",
                id,
                params.integration_id_list.len()
            ),
            Action::CreateIntegration(params) => {
                write!(f, "CreateIntegration({})", params.kind.as_str())
            }
            Action::CreateToken { name } => {
                write!(f, "CreateToken(<{} chars>)", name.chars().count())
            }
            Action::SearchIntegrations { ticket, query } => {
                write!(
                    f,
                    "SearchIntegrations(#{ticket}, <{} chars>)",
                    query.chars().count()
                )
            }
            Action::Notify(level, message) => {
                write!(f, "Notify({:?}, <{} chars>)", level, message.len())
            }

            Action::MonitorsPoll(id, event) => {
                write!(f, "MonitorsPoll({}, {})", id.get(), poll_summary(event, Vec::len))
            }
            Action::EventsPoll(id, event) => {
                write!(f, "EventsPoll({}, {})", id.get(), poll_summary(event, Vec::len))
            }
            Action::RequestsPoll(id, event) => write!(
                f,
                "RequestsPoll({}, {})",
                id.get(),
                poll_summary(event, |s| s.page.logs.len())
            ),
            Action::PollStarted(view, handle) => {
                write!(f, "PollStarted({:?}, {})", view, handle.id().get())
            }

            Action::SignedIn(r) => write!(f, "SignedIn({})", outcome(r)),
            Action::SignedOut(r) => write!(f, "SignedOut({})", outcome(r)),
            Action::PasswordUpdated(r) => write!(f, "PasswordUpdated({})", outcome(r)),
            Action::MonitorToggled {
                id,
                enabled,
                result,
            } => write!(
                f,
                "MonitorToggled(id={}, enabled={}, {})",
                id,
                enabled,
                outcome(result)
            ),
            Action::MonitorLoaded(r) => write!(f, "MonitorLoaded({})", outcome(r)),
            Action::MonitorSaved { created, result } => {
                write!(f, "MonitorSaved(created={}, {})", created, outcome(result))
            }
            Action::IntegrationCreated(r) => write!(f, "IntegrationCreated({})", outcome(r)),
            Action::TokenCreated(r) => write!(f, "TokenCreated({})", outcome(r)),
            Action::IntegrationsLoaded(r) => match r {
                Ok(items) => write!(f, "IntegrationsLoaded(<{} items>)", items.len()),
                Err(_) => write!(f, "IntegrationsLoaded(<error>)"),
            },
            Action::IntegrationsSearched { result: r, .. } => match r {
                Ok(items) => write!(f, "IntegrationsSearched(<{} items>)", items.len()),
                Err(_) => write!(f, "IntegrationsSearched(<error>)"),
            },
            Action::TokensLoaded(r) => match r {
                Ok(items) => write!(f, "TokensLoaded(<{} items>)", items.len()),
                Err(_) => write!(f, "TokensLoaded(<error>)"),
            },

            other => write!(f, "{:?}", other),
        }
    }
}

fn poll_summary<T, E>(
    event: &crate::sync::PollEvent<T, E>,
    count: impl Fn(&T) -> usize,
) -> String {
    use crate::sync::PollEvent;
    match event {
        PollEvent::Started(kind) => format!("Started({kind:?})"),
        PollEvent::Fetched(kind, Ok(data)) => format!("Fetched({kind:?}, <{} items>)", count(data)),
        PollEvent::Fetched(kind, Err(_)) => format!("Fetched({kind:?}, <error>)"),
        PollEvent::Settled(kind) => format!("Settled({kind:?})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::{FetchKind, PollEvent};
    use secrecy::SecretString;
    use sentinel_client::{
        CreateIntegrationParams, CreateMonitorParams, HttpMethod, IntegrationType, MonitorConfig,
    };
    use std::sync::Arc;

    fn redacted_debug(action: &Action) -> String {
        format!("{:?}", RedactedAction(action))
    }

    #[test]
    fn test_redact_sign_in_password() {
        let action = Action::SignIn {
            username: "admin".to_string(),
            password: SecretString::from("hunter2-very-secret"),
        };
        let output = redacted_debug(&action);
        assert!(!output.contains("hunter2"));
        assert!(!output.contains("admin"));
        assert!(output.contains("SignIn"));
    }

    #[test]
    fn test_redact_update_password() {
        let output = redacted_debug(&Action::UpdatePassword(SecretString::from("n3w-pa55word")));
        assert_eq!(output, "UpdatePassword(<redacted>)");
    }

    #[test]
    fn test_redact_monitor_url() {
        let action = Action::SubmitMonitor {
            id: Some(3),
            params: CreateMonitorParams {
                name: "billing".into(),
                url: "https://internal.example.com/health?token=abc123".into(),
                method: HttpMethod::Get,
                interval: 30,
                threshold: 3,
                timeout: 5,
                integration_id_list: vec![1, 2],
            },
        };
        let output = redacted_debug(&action);
        assert!(!output.contains("abc123"));
        assert!(!output.contains("internal.example.com"));
        assert!(output.contains("2 integrations"));
    }

    #[test]
    fn test_redact_webhook_url() {
        let action = Action::CreateIntegration(CreateIntegrationParams {
            name: "ops".into(),
            url: "https://hooks.slack.com/services/T000/B000/XXXX".into(),
            kind: IntegrationType::Slack,
        });
        let output = redacted_debug(&action);
        assert!(!output.contains("hooks.slack.com"));
        assert!(output.contains("SLACK"));
    }

    #[test]
    fn test_redact_poll_payload() {
        let monitor: MonitorConfig = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "api", "url": "https://secret.example.com",
            "method": "GET", "interval": 30, "threshold": 3, "timeout": 5, "healthy": true
        }))
        .unwrap();
        let id = crate::sync::PollHandle::new().id();
        let action = Action::MonitorsPoll(id, PollEvent::Fetched(FetchKind::Initial, Ok(vec![monitor])));
        let output = redacted_debug(&action);
        assert!(!output.contains("secret.example.com"));
        assert!(output.contains("<1 items>"));

        let failed = Action::MonitorsPoll(
            id,
            PollEvent::Fetched(
                FetchKind::Background,
                Err(Arc::new(sentinel_client::ClientError::Unauthorized(
                    "token abc".into(),
                ))),
            ),
        );
        assert!(!redacted_debug(&failed).contains("token abc"));
    }

    #[test]
    fn test_simple_actions_fall_through() {
        assert_eq!(redacted_debug(&Action::Quit), "Quit");
        assert_eq!(redacted_debug(&Action::ToggleSensitive), "ToggleSensitive");
    }
}
