use crate::{ErrorCode, FieldKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Per-field error state of one aggregation.
///
/// Always holds exactly one entry for each of the four form fields, including
/// `ErrorCode::None` for valid ones, so a renderer can clear stale errors.
/// Serialized as a `FieldKey -> ErrorCode` map.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(
    try_from = "HashMap<FieldKey, ErrorCode>",
    into = "HashMap<FieldKey, ErrorCode>"
)]
pub struct ValidationReport {
    email: ErrorCode,
    phone: ErrorCode,
    password: ErrorCode,
    password_confirmation: ErrorCode,
}

impl ValidationReport {
    pub const fn new(
        email: ErrorCode,
        phone: ErrorCode,
        password: ErrorCode,
        password_confirmation: ErrorCode,
    ) -> Self {
        Self {
            email,
            phone,
            password,
            password_confirmation,
        }
    }

    /// Error code for `field`. `FieldKey::None` has no entry and reads as `ErrorCode::None`.
    pub const fn get(&self, field: FieldKey) -> ErrorCode {
        match field {
            FieldKey::Email => self.email,
            FieldKey::Phone => self.phone,
            FieldKey::Password => self.password,
            FieldKey::PasswordConfirmation => self.password_confirmation,
            FieldKey::None => ErrorCode::None,
        }
    }

    /// Entries in validation order.
    pub fn entries(&self) -> [(FieldKey, ErrorCode); 4] {
        FieldKey::FORM_FIELDS.map(|field| (field, self.get(field)))
    }

    pub const fn len(&self) -> usize {
        FieldKey::FORM_FIELDS.len()
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// First failing code in validation order, or `ErrorCode::None`.
    pub fn first_error(&self) -> ErrorCode {
        self.entries()
            .into_iter()
            .map(|(_, code)| code)
            .find(|code| !code.is_none())
            .unwrap_or(ErrorCode::None)
    }

    pub fn is_clear(&self) -> bool {
        self.first_error().is_none()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new(ErrorCode::None, ErrorCode::None, ErrorCode::None, ErrorCode::None)
    }
}

/// A serialized report that does not cover exactly the four form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    MissingField(FieldKey),
    UnexpectedField(FieldKey),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::MissingField(field) => {
                write!(f, "validation report is missing {}", field.view_key())
            }
            ReportError::UnexpectedField(field) => {
                write!(f, "validation report has unexpected entry {}", field.view_key())
            }
        }
    }
}

impl std::error::Error for ReportError {}

impl TryFrom<HashMap<FieldKey, ErrorCode>> for ValidationReport {
    type Error = ReportError;

    fn try_from(entries: HashMap<FieldKey, ErrorCode>) -> Result<Self, Self::Error> {
        if entries.contains_key(&FieldKey::None) {
            return Err(ReportError::UnexpectedField(FieldKey::None));
        }
        let lookup = |field: FieldKey| {
            entries
                .get(&field)
                .copied()
                .ok_or(ReportError::MissingField(field))
        };

        Ok(Self::new(
            lookup(FieldKey::Email)?,
            lookup(FieldKey::Phone)?,
            lookup(FieldKey::Password)?,
            lookup(FieldKey::PasswordConfirmation)?,
        ))
    }
}

impl From<ValidationReport> for HashMap<FieldKey, ErrorCode> {
    fn from(report: ValidationReport) -> Self {
        report.entries().into_iter().collect()
    }
}
