use serde::{Deserialize, Serialize};

/// Raw snapshot of the four registration fields at validation time.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Normalized output of a fully valid registration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    pub email: String,
    /// Digits only.
    pub phone_number: String,
    pub password: String,
}
