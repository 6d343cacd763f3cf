pub mod error_code;
pub mod field_key;
pub mod registration;
pub mod validation_outcome;
pub mod validation_report;

pub use error_code::{ErrorCode, UnknownErrorCode};
pub use field_key::FieldKey;
pub use registration::{RegistrationInput, RegistrationRecord};
pub use validation_outcome::ValidationOutcome;
pub use validation_report::{ReportError, ValidationReport};
