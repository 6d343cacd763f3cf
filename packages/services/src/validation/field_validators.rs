use super::password::{validate_password, validate_password_confirmation};
use super::patterns::{EMAIL_REGEX, PHONE_REGEX};
use models::{ErrorCode, FieldKey, ValidationOutcome};

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_email(email: &str) -> ValidationOutcome<String> {
        let error_code = if email.is_empty() {
            ErrorCode::EmptyEmail
        } else if !EMAIL_REGEX.is_match(email) {
            ErrorCode::InvalidEmail
        } else {
            ErrorCode::None
        };

        ValidationOutcome::new(email.to_string(), FieldKey::Email, error_code)
    }

    /// On success the value is the number reduced to its digits. On failure the
    /// value is empty; the rejected text is not carried forward.
    pub fn validate_phone_number(phone_number: &str) -> ValidationOutcome<String> {
        if phone_number.is_empty() {
            return ValidationOutcome::new(
                String::new(),
                FieldKey::Phone,
                ErrorCode::EmptyPhoneNumber,
            );
        }

        if !PHONE_REGEX.is_match(phone_number) {
            return ValidationOutcome::new(
                String::new(),
                FieldKey::Phone,
                ErrorCode::InvalidPhoneNumber,
            );
        }

        let digits: String = phone_number.chars().filter(char::is_ascii_digit).collect();
        ValidationOutcome::new(digits, FieldKey::Phone, ErrorCode::None)
    }

    pub fn validate_password(password: &str) -> ValidationOutcome<String> {
        validate_password(password)
    }

    pub fn validate_password_confirmation(
        password: &str,
        password_confirmation: &str,
    ) -> ValidationOutcome<String> {
        validate_password_confirmation(password, password_confirmation)
    }
}
