use async_graphql::{EmptySubscription, Schema};

pub mod types;
pub mod queries;
pub mod mutations;
pub mod errors;

#[cfg(test)]
pub mod test_helpers;

pub type RegistrationSchema = Schema<queries::Queries, mutations::Mutations, EmptySubscription>;
