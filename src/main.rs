mod config;
mod setup;

use actix_cors::Cors;
use actix_web::{guard, web, App, HttpResponse, HttpServer};
use async_graphql::{
    http::{playground_source, GraphQLPlaygroundConfig},
    EmptySubscription, Schema,
};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use config::ServerConfig;
use graphql::mutations::Mutations as MutationRoot;
use graphql::queries::Queries as QueryRoot;
use graphql::RegistrationSchema;
use services::registration::{RegistrationEvents, RegistrationService, StubRegistrar};
use setup::set_up_tracing;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

async fn index() -> &'static str {
    "Hello, registration-form!"
}

async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn graphql_request(
    schema: web::Data<RegistrationSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

// Stands in for the client-side confirmation of a finished registration.
async fn observe_registrations(mut events: RegistrationEvents) {
    while events.next().await.is_some() {
        tracing::info!("registration succeeded");
    }
    tracing::debug!("registration events closed");
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    set_up_tracing(config.log_format);

    let (service, events) = RegistrationService::new(
        Arc::new(StubRegistrar),
        tokio::runtime::Handle::current(),
        config.event_buffer,
    );
    actix_web::rt::spawn(observe_registrations(events));

    // Build the Schema
    let schema = Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(service)
        .finish();

    tracing::info!(host = %config.host, port = config.port, "starting server");
    let cors_allowed_origin = config.cors_allowed_origin.clone();
    HttpServer::new(move || {
        let cors = match &cors_allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(schema.clone()))
            .route("/", web::get().to(index))
            .service(web::resource("/graphql").guard(guard::Post()).to(graphql_request))
            .service(web::resource("/graphql").guard(guard::Get()).to(graphql_playground))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
