use async_graphql::MergedObject;
mod registration;

#[derive(MergedObject, Default)]
pub struct Queries(registration::RegistrationQueries);
