use async_graphql::InputObject;
use models::RegistrationInput;
use services::validation::input_validator::{validate_all, InputValidator, RegistrationValidation};

#[derive(InputObject, Debug, Clone)]
pub struct RegistrationFormInput {
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub password_confirmation: String,
}

impl From<RegistrationFormInput> for RegistrationInput {
    fn from(input: RegistrationFormInput) -> Self {
        RegistrationInput {
            email: input.email,
            phone_number: input.phone_number,
            password: input.password,
            password_confirmation: input.password_confirmation,
        }
    }
}

impl InputValidator for RegistrationFormInput {
    fn validate(&self) -> RegistrationValidation {
        validate_all(&RegistrationInput::from(self.clone()))
    }
}
