use super::patterns::{PASSWORD_MIN_LENGTH, PASSWORD_REGEX};
use models::{ErrorCode, FieldKey, ValidationOutcome};

/// Validates a password against the registration rules
///
/// Rules are checked in order and the first failure wins:
/// * empty -> `EmptyPassword`
/// * shorter than [`PASSWORD_MIN_LENGTH`] UTF-16 code units -> `PasswordTooShort`
/// * anything other than ASCII letters and digits -> `InvalidPassword`
///
/// The password itself is returned as the outcome value on every branch.
pub fn validate_password(password: &str) -> ValidationOutcome<String> {
    let error_code = if password.is_empty() {
        ErrorCode::EmptyPassword
    } else if password.encode_utf16().count() < PASSWORD_MIN_LENGTH {
        ErrorCode::PasswordTooShort
    } else if !PASSWORD_REGEX.is_match(password) {
        ErrorCode::InvalidPassword
    } else {
        ErrorCode::None
    };

    ValidationOutcome::new(password.to_string(), FieldKey::Password, error_code)
}

/// Checks the confirmation against the raw password.
///
/// The outcome value is always the primary `password`, never the confirmation.
pub fn validate_password_confirmation(
    password: &str,
    password_confirmation: &str,
) -> ValidationOutcome<String> {
    let error_code = if password_confirmation.is_empty() {
        ErrorCode::EmptyPasswordConfirmation
    } else if password != password_confirmation {
        ErrorCode::PasswordsDoNotMatch
    } else {
        ErrorCode::None
    };

    ValidationOutcome::new(
        password.to_string(),
        FieldKey::PasswordConfirmation,
        error_code,
    )
}
