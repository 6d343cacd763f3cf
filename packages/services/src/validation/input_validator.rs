use super::field_validators::FieldValidator;
use models::{
    ErrorCode, FieldKey, RegistrationInput, RegistrationRecord, ValidationOutcome,
    ValidationReport,
};

/// Combined result of validating every registration field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationValidation {
    /// Fresh error state for all four fields. Callers render every entry, not
    /// only the field that changed.
    pub report: ValidationReport,
    /// Aggregate decision. Its field key is `FieldKey::None` and its value is
    /// only present when every field passed.
    pub overall: ValidationOutcome<Option<RegistrationRecord>>,
}

impl RegistrationValidation {
    pub fn is_valid(&self) -> bool {
        self.overall.is_valid()
    }

    pub fn error_code(&self) -> ErrorCode {
        self.overall.error_code
    }

    pub fn into_record(self) -> Option<RegistrationRecord> {
        self.overall.value
    }
}

pub trait InputValidator {
    fn validate(&self) -> RegistrationValidation;

    fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }
}

impl InputValidator for RegistrationInput {
    fn validate(&self) -> RegistrationValidation {
        validate_all(self)
    }
}

/// Runs the four field validators in order (email, phone, password,
/// confirmation) and folds them into one report and one overall outcome.
///
/// The overall code is the first failing code in that order.
pub fn validate_all(input: &RegistrationInput) -> RegistrationValidation {
    let email = FieldValidator::validate_email(&input.email);
    let phone = FieldValidator::validate_phone_number(&input.phone_number);
    let password = FieldValidator::validate_password(&input.password);
    let confirmation =
        FieldValidator::validate_password_confirmation(&input.password, &input.password_confirmation);

    let report = ValidationReport::new(
        email.error_code,
        phone.error_code,
        password.error_code,
        confirmation.error_code,
    );

    let error_code = [&email, &phone, &password, &confirmation]
        .into_iter()
        .map(|outcome| outcome.error_code)
        .find(|code| !code.is_none())
        .unwrap_or(ErrorCode::None);

    let record = error_code.is_none().then(|| RegistrationRecord {
        email: email.into_value(),
        phone_number: phone.into_value(),
        password: password.into_value(),
    });

    tracing::debug!(error_code = %error_code, "registration input validated");

    RegistrationValidation {
        report,
        overall: ValidationOutcome::new(record, FieldKey::None, error_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(email: &str, phone: &str, password: &str, confirmation: &str) -> RegistrationInput {
        RegistrationInput {
            email: email.to_string(),
            phone_number: phone.to_string(),
            password: password.to_string(),
            password_confirmation: confirmation.to_string(),
        }
    }

    fn valid_input() -> RegistrationInput {
        input("some@valid.email", "(012) 345 - 67 89", "qwerty123456", "qwerty123456")
    }

    #[test]
    fn test_all_empty_reports_every_field() {
        let result = validate_all(&input("", "", "", ""));

        assert_eq!(result.report.get(FieldKey::Email), ErrorCode::EmptyEmail);
        assert_eq!(result.report.get(FieldKey::Phone), ErrorCode::EmptyPhoneNumber);
        assert_eq!(result.report.get(FieldKey::Password), ErrorCode::EmptyPassword);
        assert_eq!(
            result.report.get(FieldKey::PasswordConfirmation),
            ErrorCode::EmptyPasswordConfirmation
        );
        assert_eq!(result.report.len(), 4);
        assert_eq!(result.error_code(), ErrorCode::EmptyEmail);
        assert_eq!(result.overall.field_key, FieldKey::None);
        assert!(result.into_record().is_none());
    }

    #[test]
    fn test_all_valid_builds_normalized_record() {
        let result = validate_all(&valid_input());

        assert!(result.report.is_clear());
        assert!(result.is_valid());
        assert_eq!(
            result.into_record(),
            Some(RegistrationRecord {
                email: "some@valid.email".to_string(),
                phone_number: "0123456789".to_string(),
                password: "qwerty123456".to_string(),
            })
        );
    }

    #[test]
    fn test_overall_code_is_first_failure_in_field_order() {
        let result = validate_all(&input("some@valid.email", "abc", "qwerty", ""));
        assert_eq!(result.error_code(), ErrorCode::InvalidPhoneNumber);
        assert_eq!(result.report.get(FieldKey::Password), ErrorCode::PasswordTooShort);
        assert_eq!(
            result.report.get(FieldKey::PasswordConfirmation),
            ErrorCode::EmptyPasswordConfirmation
        );

        let result = validate_all(&input("some@valid.email", "0123456789", "qwerty123456", "qwerty1234567"));
        assert_eq!(result.error_code(), ErrorCode::PasswordsDoNotMatch);
        assert_eq!(result.report.first_error(), ErrorCode::PasswordsDoNotMatch);
    }

    #[test]
    fn test_confirmation_compares_raw_password() {
        // The password fails its own rules but the confirmation still matches it.
        let result = validate_all(&input("some@valid.email", "0123456789", "@qwerty123456", "@qwerty123456"));
        assert_eq!(result.report.get(FieldKey::Password), ErrorCode::InvalidPassword);
        assert_eq!(result.report.get(FieldKey::PasswordConfirmation), ErrorCode::None);
        assert_eq!(result.error_code(), ErrorCode::InvalidPassword);
    }

    #[test]
    fn test_input_validator_trait() {
        assert!(valid_input().is_valid());
        assert!(!input("some.invalid@email", "0123456789", "qwerty123456", "qwerty123456").is_valid());
        assert_eq!(valid_input().validate(), validate_all(&valid_input()));
    }

    #[test]
    fn test_repeated_validation_is_deterministic() {
        let input = input("x@y", "1", "short", "other");
        assert_eq!(validate_all(&input), validate_all(&input));
    }
}
