// src/api/mod.rs
use std::net::SocketAddr;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::header;
use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::generators::PasswordGenerator;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::passwords::generate_password,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::models::PasswordOptions,
            crate::models::GenerationRequest,
            crate::models::GenerationResult,
            crate::api::types::ErrorBody,
            crate::api::types::HealthResponse
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "System status and utilities")
    ),
    info(
        title = "passgen API",
        version = "0.1.0",
        description = "Stateless random password generation",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Bind the HTTP server without running it. Port 0 picks a free port, which
/// is reported in the returned addresses.
pub fn bind_server(config: &Config, generator: PasswordGenerator) -> std::io::Result<(Server, Vec<SocketAddr>)> {
    let generator_data = web::Data::new(generator);

    let mut server = HttpServer::new(move || {
        // The browser form may be served from anywhere
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::new("%a \"%r\" %s %Dms"))
            .app_data(generator_data.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .configure(routes::configure_routes)
    });

    if config.workers > 0 {
        server = server.workers(config.workers);
    }

    let server = server.bind((config.web_address.as_str(), config.web_port))?;
    let addrs = server.addrs();

    Ok((server.run(), addrs))
}

pub async fn start_server(config: &Config, generator: PasswordGenerator) -> std::io::Result<()> {
    let (server, addrs) = bind_server(config, generator)?;
    for addr in &addrs {
        log::info!("🚀 passgen API listening on http://{}", addr);
    }
    server.await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_generator_route() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/passwords"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
