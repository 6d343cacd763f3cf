use async_graphql::MergedObject;
pub mod input_validators;
mod registration;

pub use registration::RegistrationMutationResult;

#[derive(MergedObject, Default)]
pub struct Mutations(registration::RegistrationMutation);
