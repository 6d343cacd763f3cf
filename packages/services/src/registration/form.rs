use super::service::RegistrationService;
use crate::validation::RegistrationValidation;
use models::{
    ErrorCode, FieldKey, RegistrationInput, ReportError, UnknownErrorCode, ValidationReport,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

pub const KEY_EMAIL: &str = "KEY_EMAIL";
pub const KEY_PHONE_NUMBER: &str = "KEY_PHONE_NUMBER";
pub const KEY_PASSWORD: &str = "KEY_PASSWORD";
pub const KEY_PASSWORD_CONFIRMATION: &str = "KEY_PASSWORD_CONFIRMATION";
pub const KEY_VALIDATION_DATA: &str = "KEY_VALIDATION_DATA";

/// Persisted form state, keyed by the `KEY_*` identifiers.
pub type SavedState = BTreeMap<String, Value>;

#[derive(Debug)]
pub enum FormStateError {
    Malformed {
        key: &'static str,
        source: serde_json::Error,
    },
    UnknownViewKey(String),
    Code(UnknownErrorCode),
    Report(ReportError),
}

impl FormStateError {
    /// Saved-state key the error was found under.
    pub fn key(&self) -> &'static str {
        match self {
            FormStateError::Malformed { key, .. } => *key,
            FormStateError::UnknownViewKey(_)
            | FormStateError::Code(_)
            | FormStateError::Report(_) => KEY_VALIDATION_DATA,
        }
    }
}

impl From<UnknownErrorCode> for FormStateError {
    fn from(e: UnknownErrorCode) -> Self {
        FormStateError::Code(e)
    }
}

impl From<ReportError> for FormStateError {
    fn from(e: ReportError) -> Self {
        FormStateError::Report(e)
    }
}

impl fmt::Display for FormStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormStateError::Malformed { key, source } => {
                write!(f, "malformed saved state for {key}: {source}")
            }
            FormStateError::UnknownViewKey(view_key) => {
                write!(f, "unknown view key {view_key} in {KEY_VALIDATION_DATA}")
            }
            FormStateError::Code(e) => write!(f, "{e} in {KEY_VALIDATION_DATA}"),
            FormStateError::Report(e) => write!(f, "{e} in {KEY_VALIDATION_DATA}"),
        }
    }
}

impl std::error::Error for FormStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormStateError::Malformed { source, .. } => Some(source),
            FormStateError::UnknownViewKey(_) => None,
            FormStateError::Code(e) => Some(e),
            FormStateError::Report(e) => Some(e),
        }
    }
}

/// Caller-owned field values and the last validation report.
///
/// The validation engine never holds on to this; it only sees the
/// [`RegistrationInput`] produced by [`RegistrationForm::snapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    email: Option<String>,
    phone_number: Option<String>,
    password: Option<String>,
    password_confirmation: Option<String>,
    validation_data: Option<ValidationReport>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) {
        self.phone_number = phone_number;
    }

    pub fn set_password(&mut self, password: Option<String>) {
        self.password = password;
    }

    pub fn set_password_confirmation(&mut self, password_confirmation: Option<String>) {
        self.password_confirmation = password_confirmation;
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn password_confirmation(&self) -> Option<&str> {
        self.password_confirmation.as_deref()
    }

    pub fn validation_data(&self) -> Option<&ValidationReport> {
        self.validation_data.as_ref()
    }

    /// Current values, with unset fields read as empty.
    pub fn snapshot(&self) -> RegistrationInput {
        RegistrationInput {
            email: self.email.clone().unwrap_or_default(),
            phone_number: self.phone_number.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            password_confirmation: self.password_confirmation.clone().unwrap_or_default(),
        }
    }

    /// Replaces the whole report, so fields that became valid are cleared too.
    pub fn apply_report(&mut self, report: ValidationReport) {
        self.validation_data = Some(report);
    }

    pub fn register_with(&mut self, service: &RegistrationService) -> RegistrationValidation {
        let validation = service.on_register(&self.snapshot());
        self.apply_report(validation.report);
        validation
    }

    pub fn to_saved_state(&self) -> SavedState {
        let mut state = SavedState::new();
        let fields = [
            (KEY_EMAIL, &self.email),
            (KEY_PHONE_NUMBER, &self.phone_number),
            (KEY_PASSWORD, &self.password),
            (KEY_PASSWORD_CONFIRMATION, &self.password_confirmation),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                state.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        if let Some(report) = self.validation_data {
            let entries: Value = report
                .entries()
                .into_iter()
                .map(|(field, code)| (field.view_key().to_string(), Value::from(code.code())))
                .collect::<serde_json::Map<String, Value>>()
                .into();
            state.insert(KEY_VALIDATION_DATA.to_string(), entries);
        }
        state
    }

    /// Restores a form saved with [`RegistrationForm::to_saved_state`]. Absent
    /// keys come back unset.
    pub fn from_saved_state(state: &SavedState) -> Result<Self, FormStateError> {
        Ok(Self {
            email: restore(state, KEY_EMAIL)?,
            phone_number: restore(state, KEY_PHONE_NUMBER)?,
            password: restore(state, KEY_PASSWORD)?,
            password_confirmation: restore(state, KEY_PASSWORD_CONFIRMATION)?,
            validation_data: restore_report(state)?,
        })
    }
}

// A missing key and a JSON null both restore as unset.
fn restore<T: DeserializeOwned>(
    state: &SavedState,
    key: &'static str,
) -> Result<Option<T>, FormStateError> {
    match state.get(key) {
        Some(value) => serde_json::from_value::<Option<T>>(value.clone())
            .map_err(|source| FormStateError::Malformed { key, source }),
        None => Ok(None),
    }
}

// Saved as view key -> numeric code, the shape a form client reads back.
fn restore_report(state: &SavedState) -> Result<Option<ValidationReport>, FormStateError> {
    let Some(entries) = restore::<BTreeMap<String, u8>>(state, KEY_VALIDATION_DATA)? else {
        return Ok(None);
    };

    let mut by_field = HashMap::new();
    for (view_key, code) in entries {
        let field = FieldKey::from_view_key(&view_key)
            .ok_or(FormStateError::UnknownViewKey(view_key))?;
        by_field.insert(field, ErrorCode::try_from(code)?);
    }

    Ok(Some(ValidationReport::try_from(by_field)?))
}
