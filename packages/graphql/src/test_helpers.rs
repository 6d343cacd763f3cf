use async_graphql::{EmptySubscription, Schema};
use services::registration::{RegistrationEvents, RegistrationService};
use tokio::runtime::Handle;

use crate::mutations::Mutations;
use crate::queries::Queries;
use crate::RegistrationSchema;

/// Must be called from inside a tokio runtime.
pub fn create_test_schema() -> (RegistrationSchema, RegistrationEvents) {
    let (service, events) = RegistrationService::with_stub(Handle::current());
    let schema = Schema::build(Queries::default(), Mutations::default(), EmptySubscription)
        .data(service)
        .finish();
    (schema, events)
}

pub fn create_test_schema_without_service() -> RegistrationSchema {
    Schema::build(Queries::default(), Mutations::default(), EmptySubscription).finish()
}
