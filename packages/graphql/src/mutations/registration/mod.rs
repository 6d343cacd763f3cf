use crate::errors::ValidationErrorType;
use crate::mutations::input_validators::RegistrationFormInput;
use crate::types::registration::RegistrationAccepted;
use async_graphql::{Context, Object, Result, Union};

mod register;

#[derive(Union, Debug)]
pub enum RegistrationMutationResult {
    ValidationError(ValidationErrorType),
    RegistrationAccepted(RegistrationAccepted),
}

#[derive(Default)]
pub struct RegistrationMutation;

#[Object]
impl RegistrationMutation {
    /// Validate the form and, when every field passes, start registration.
    async fn register(
        &self,
        ctx: &Context<'_>,
        input: RegistrationFormInput,
    ) -> Result<RegistrationMutationResult> {
        register::register(ctx, input).await
    }
}
