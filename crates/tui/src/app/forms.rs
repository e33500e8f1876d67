//! Form state and client-side validation.
//!
//! Responsibilities:
//! - Hold the editable state of every form screen.
//! - Validate input before any request is built; invalid forms never
//!   produce an action.
//! - Own the monitor form's integration picker (debounced search plus
//!   selection).
//!
//! Does NOT handle:
//! - Key routing (see `app::input`) or drawing (see `ui::screens`).

use secrecy::SecretString;
use sentinel_client::{
    CreateIntegrationParams, CreateMonitorParams, HttpMethod, IntegrationConfig, IntegrationType,
    MonitorConfig,
};
use sentinel_config::constants::{
    MIN_PASSWORD_LEN, MONITOR_INTERVAL_MAX_SECS, MONITOR_INTERVAL_MIN_SECS, MONITOR_NAME_MAX_LEN,
    MONITOR_NAME_MIN_LEN, MONITOR_THRESHOLD_MAX, MONITOR_THRESHOLD_MIN, MONITOR_TIMEOUT_MAX_SECS,
    MONITOR_TIMEOUT_MIN_SECS,
};

use crate::sync::{SearchDebouncer, SelectableOption, Selection};
use crate::ui::widgets::TextField;

const DEFAULT_INTERVAL_SECS: u32 = 60;
const DEFAULT_TIMEOUT_SECS: u32 = 10;
const DEFAULT_THRESHOLD: u32 = 3;

/// A validation failure attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError<F> {
    pub field: F,
    pub message: String,
}

impl<F> FieldError<F> {
    fn new(field: F, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn error_for<F: PartialEq>(errors: &[FieldError<F>], field: F) -> Option<&str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

/// Cycles focus through `all`, wrapping at either end.
fn cycle<F: Copy + PartialEq>(all: &[F], current: F, forward: bool) -> F {
    let len = all.len();
    let i = all.iter().position(|f| *f == current).unwrap_or(0);
    let next = if forward { (i + 1) % len } else { (i + len - 1) % len };
    all[next]
}

fn validate_name<F>(field: F, value: &str, errors: &mut Vec<FieldError<F>>) {
    let len = value.trim().chars().count();
    if len == 0 {
        errors.push(FieldError::new(field, "Name is required"));
    } else if len < MONITOR_NAME_MIN_LEN {
        errors.push(FieldError::new(
            field,
            format!("Name must be at least {MONITOR_NAME_MIN_LEN} characters"),
        ));
    } else if len > MONITOR_NAME_MAX_LEN {
        errors.push(FieldError::new(
            field,
            format!("Name must be at most {MONITOR_NAME_MAX_LEN} characters"),
        ));
    }
}

fn validate_url<F>(field: F, label: &str, value: &str, errors: &mut Vec<FieldError<F>>) {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required")));
    } else if url::Url::parse(value).is_err() {
        errors.push(FieldError::new(field, format!("{label} must be valid")));
    }
}

fn parse_bounded<F>(
    field: F,
    value: &str,
    min: u32,
    max: u32,
    messages: (&str, &str, &str),
    errors: &mut Vec<FieldError<F>>,
) -> u32 {
    let (not_a_number, too_small, too_large) = messages;
    match value.trim().parse::<u32>() {
        Ok(n) if n < min => {
            errors.push(FieldError::new(field, too_small));
            n
        }
        Ok(n) if n > max => {
            errors.push(FieldError::new(field, too_large));
            n
        }
        Ok(n) => n,
        Err(_) => {
            errors.push(FieldError::new(field, not_a_number));
            0
        }
    }
}

// =============================================================================
// Sign in
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInField {
    Username,
    Password,
}

#[derive(Debug, Clone)]
pub struct SignInForm {
    pub username: TextField,
    pub password: TextField,
    pub focus: SignInField,
    pub submitting: bool,
}

impl SignInForm {
    pub fn new(username: Option<&str>) -> Self {
        let username = TextField::new("Username").with_value(username.unwrap_or_default());
        let focus = if username.is_empty() {
            SignInField::Username
        } else {
            SignInField::Password
        };
        Self {
            username,
            password: TextField::masked("Password"),
            focus,
            submitting: false,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SignInField::Username => SignInField::Password,
            SignInField::Password => SignInField::Username,
        };
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            SignInField::Username => &mut self.username,
            SignInField::Password => &mut self.password,
        }
    }

    /// Both fields filled in; returns the credentials.
    pub fn credentials(&self) -> Result<(String, SecretString), &'static str> {
        let username = self.username.value().trim();
        if username.is_empty() {
            return Err("Username is required");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        Ok((
            username.to_string(),
            SecretString::from(self.password.value().to_string()),
        ))
    }
}

// =============================================================================
// Monitor form
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorField {
    Name,
    Url,
    Method,
    Interval,
    Timeout,
    Threshold,
    Integrations,
}

impl MonitorField {
    pub const ALL: [MonitorField; 7] = [
        MonitorField::Name,
        MonitorField::Url,
        MonitorField::Method,
        MonitorField::Interval,
        MonitorField::Timeout,
        MonitorField::Threshold,
        MonitorField::Integrations,
    ];
}

/// Search box, candidate list and chosen set for alert integrations.
#[derive(Debug)]
pub struct IntegrationPicker {
    pub query: TextField,
    pub candidates: Vec<SelectableOption>,
    pub selection: Selection,
    pub debouncer: SearchDebouncer,
    /// Highlighted candidate.
    pub cursor: usize,
}

impl Default for IntegrationPicker {
    fn default() -> Self {
        Self {
            query: TextField::new("Alert integrations").with_placeholder("Type to search"),
            candidates: Vec::new(),
            selection: Selection::new(),
            debouncer: SearchDebouncer::default(),
            cursor: 0,
        }
    }
}

impl IntegrationPicker {
    /// Replaces the candidate list. The selection is left untouched.
    pub fn set_candidates(&mut self, integrations: &[IntegrationConfig]) {
        self.candidates = integrations.iter().map(SelectableOption::from).collect();
        self.cursor = self.cursor.min(self.candidates.len().saturating_sub(1));
    }

    pub fn move_cursor(&mut self, down: bool) {
        if self.candidates.is_empty() {
            return;
        }
        self.cursor = if down {
            (self.cursor + 1).min(self.candidates.len() - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    /// Toggles the highlighted candidate; `None` when there is nothing to toggle.
    pub fn toggle_highlighted(&mut self) -> Option<bool> {
        let option = self.candidates.get(self.cursor)?.clone();
        Some(self.selection.toggle(&option))
    }

    pub fn is_loading(&self) -> bool {
        self.debouncer.is_loading()
    }
}

#[derive(Debug)]
pub struct MonitorForm {
    /// `Some(id)` when editing.
    pub editing: Option<u64>,
    pub name: TextField,
    pub url: TextField,
    pub method: HttpMethod,
    pub interval: TextField,
    pub timeout: TextField,
    pub threshold: TextField,
    pub picker: IntegrationPicker,
    pub focus: MonitorField,
    pub errors: Vec<FieldError<MonitorField>>,
    /// The monitor being edited is still being fetched.
    pub loading: bool,
    pub submitting: bool,
}

impl MonitorForm {
    pub fn create() -> Self {
        Self {
            editing: None,
            name: TextField::new("Name").with_placeholder("Production | Healthcheck | Database"),
            url: TextField::new("URL").with_placeholder("https://example.com/health"),
            method: HttpMethod::Get,
            interval: TextField::new("Interval (seconds)")
                .with_value(DEFAULT_INTERVAL_SECS.to_string()),
            timeout: TextField::new("Timeout (seconds)")
                .with_value(DEFAULT_TIMEOUT_SECS.to_string()),
            threshold: TextField::new("Threshold (attempts)")
                .with_value(DEFAULT_THRESHOLD.to_string()),
            picker: IntegrationPicker::default(),
            focus: MonitorField::Name,
            errors: Vec::new(),
            loading: false,
            submitting: false,
        }
    }

    /// A form for `id`, waiting for the monitor to load.
    pub fn edit(id: u64) -> Self {
        Self {
            editing: Some(id),
            loading: true,
            ..Self::create()
        }
    }

    /// Copies a fetched monitor into the fields and pre-selects its
    /// integrations.
    pub fn fill(&mut self, monitor: &MonitorConfig) {
        self.name.set_value(monitor.name.clone());
        self.url.set_value(monitor.url.clone());
        self.method = monitor.method.parse().unwrap_or_default();
        self.interval.set_value(monitor.interval.to_string());
        self.timeout.set_value(monitor.timeout.to_string());
        self.threshold.set_value(monitor.threshold.to_string());
        self.picker.selection =
            Selection::from_options(monitor.integrations.iter().map(SelectableOption::from));
        self.loading = false;
    }

    pub fn focus_next(&mut self, forward: bool) {
        self.focus = cycle(&MonitorField::ALL, self.focus, forward);
    }

    /// The text field under focus; `None` for the method selector.
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            MonitorField::Name => Some(&mut self.name),
            MonitorField::Url => Some(&mut self.url),
            MonitorField::Interval => Some(&mut self.interval),
            MonitorField::Timeout => Some(&mut self.timeout),
            MonitorField::Threshold => Some(&mut self.threshold),
            MonitorField::Integrations => Some(&mut self.picker.query),
            MonitorField::Method => None,
        }
    }

    pub fn error(&self, field: MonitorField) -> Option<&str> {
        error_for(&self.errors, field)
    }

    /// Validates every field. All failures are reported, in field order.
    pub fn validate(&self) -> Result<CreateMonitorParams, Vec<FieldError<MonitorField>>> {
        let mut errors = Vec::new();

        validate_name(MonitorField::Name, self.name.value(), &mut errors);
        validate_url(MonitorField::Url, "URL", self.url.value(), &mut errors);

        let interval = parse_bounded(
            MonitorField::Interval,
            self.interval.value(),
            MONITOR_INTERVAL_MIN_SECS,
            MONITOR_INTERVAL_MAX_SECS,
            (
                "Interval must be a number",
                "Interval must be at least 5 seconds",
                "Interval must be at most 3600 seconds (1 hour)",
            ),
            &mut errors,
        );
        let timeout = parse_bounded(
            MonitorField::Timeout,
            self.timeout.value(),
            MONITOR_TIMEOUT_MIN_SECS,
            MONITOR_TIMEOUT_MAX_SECS,
            (
                "Timeout must be a number",
                "Timeout must be at least 1 second",
                "Timeout must be at most 300 seconds (5 minutes)",
            ),
            &mut errors,
        );
        let threshold = parse_bounded(
            MonitorField::Threshold,
            self.threshold.value(),
            MONITOR_THRESHOLD_MIN,
            MONITOR_THRESHOLD_MAX,
            (
                "Threshold must be a number",
                "Threshold must be at least 1 attempt",
                "Threshold must be at most 10 attempts",
            ),
            &mut errors,
        );

        let integration_id_list = self.picker.selection.numeric_ids();
        if integration_id_list.is_empty() {
            errors.push(FieldError::new(
                MonitorField::Integrations,
                "At least one alert method must be selected",
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateMonitorParams {
            name: self.name.value().trim().to_string(),
            url: self.url.value().trim().to_string(),
            method: self.method,
            interval,
            threshold,
            timeout,
            integration_id_list,
        })
    }
}

// =============================================================================
// Integration form
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationField {
    Name,
    Kind,
    Url,
}

impl IntegrationField {
    pub const ALL: [IntegrationField; 3] = [
        IntegrationField::Name,
        IntegrationField::Kind,
        IntegrationField::Url,
    ];
}

#[derive(Debug, Clone)]
pub struct IntegrationForm {
    pub name: TextField,
    pub kind: IntegrationType,
    pub url: TextField,
    pub focus: IntegrationField,
    pub errors: Vec<FieldError<IntegrationField>>,
    pub submitting: bool,
}

impl Default for IntegrationForm {
    fn default() -> Self {
        Self {
            name: TextField::new("Name").with_placeholder("Ops alerts"),
            kind: IntegrationType::Slack,
            url: TextField::new("Webhook URL")
                .with_placeholder("https://hooks.slack.com/services/..."),
            focus: IntegrationField::Name,
            errors: Vec::new(),
            submitting: false,
        }
    }
}

impl IntegrationForm {
    pub fn focus_next(&mut self, forward: bool) {
        self.focus = cycle(&IntegrationField::ALL, self.focus, forward);
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            IntegrationField::Name => Some(&mut self.name),
            IntegrationField::Url => Some(&mut self.url),
            IntegrationField::Kind => None,
        }
    }

    pub fn error(&self, field: IntegrationField) -> Option<&str> {
        error_for(&self.errors, field)
    }

    pub fn validate(&self) -> Result<CreateIntegrationParams, Vec<FieldError<IntegrationField>>> {
        let mut errors = Vec::new();
        validate_name(IntegrationField::Name, self.name.value(), &mut errors);
        validate_url(IntegrationField::Url, "Webhook URL", self.url.value(), &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreateIntegrationParams {
            name: self.name.value().trim().to_string(),
            url: self.url.value().trim().to_string(),
            kind: self.kind,
        })
    }
}

// =============================================================================
// Token form
// =============================================================================

#[derive(Debug, Clone)]
pub struct TokenForm {
    pub name: TextField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for TokenForm {
    fn default() -> Self {
        Self {
            name: TextField::new("Name").with_placeholder("billing-service"),
            error: None,
            submitting: false,
        }
    }
}

impl TokenForm {
    pub fn validate(&self) -> Result<String, String> {
        let mut errors = Vec::new();
        validate_name((), self.name.value(), &mut errors);
        match errors.into_iter().next() {
            Some(e) => Err(e.message),
            None => Ok(self.name.value().trim().to_string()),
        }
    }
}

// =============================================================================
// Profile form
// =============================================================================

#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub password: TextField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            password: TextField::masked("New password"),
            error: None,
            submitting: false,
        }
    }
}

impl ProfileForm {
    /// Checks the password policy and returns the new password.
    pub fn validate(&self) -> Result<SecretString, String> {
        let password = self.password.value();
        let rules: [(bool, String); 5] = [
            (
                password.chars().count() >= MIN_PASSWORD_LEN,
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            ),
            (
                password.chars().any(|c| c.is_ascii_uppercase()),
                "Password must contain at least one uppercase letter".into(),
            ),
            (
                password.chars().any(|c| c.is_ascii_lowercase()),
                "Password must contain at least one lowercase letter".into(),
            ),
            (
                password.chars().any(|c| c.is_ascii_digit()),
                "Password must contain at least one number".into(),
            ),
            (
                password.chars().any(|c| !c.is_ascii_alphanumeric()),
                "Password must contain at least one special character".into(),
            ),
        ];

        match rules.into_iter().find(|(ok, _)| !ok) {
            Some((_, message)) => Err(message),
            None => Ok(SecretString::from(password.to_string())),
        }
    }
}
