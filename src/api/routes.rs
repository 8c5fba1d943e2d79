// src/api/routes.rs
use actix_web::{error, web, HttpResponse};
use log::warn;

use super::handlers;
use super::types::ErrorBody;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies get the same {message} shape as validation failures
    cfg.app_data(web::JsonConfig::default().limit(4096).error_handler(|err, _req| {
        let message = err.to_string();
        warn!("❌ Malformed request body: {}", message);
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorBody::new(message))).into()
    }));

    // Password generator
    cfg.service(
        web::resource("/passwords")
            .route(web::post().to(handlers::passwords::generate_password))
    );

    // System status
    cfg.route("/health", web::get().to(handlers::system::health));
}
