pub mod field_validators;
pub mod input_validator;
pub mod password;
pub mod patterns;

// Re-export common types and functions
pub use field_validators::FieldValidator;
pub use input_validator::{validate_all, InputValidator, RegistrationValidation};
pub use password::{validate_password, validate_password_confirmation};
