// src/api/handlers/passwords.rs

use actix_web::{web, HttpResponse, Responder};
use log::{info, warn};

use crate::api::types::ErrorBody;
use crate::generators::{CharacterClass, PasswordGenerator};
use crate::models::{GenerationRequest, GenerationResult};

/// Generate a password
///
/// Draws a password of the requested length from the enabled character classes.
#[utoipa::path(
    post,
    path = "/passwords",
    tag = "Generator",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerationResult),
        (status = 400, description = "No option selected, invalid length or malformed body", body = ErrorBody)
    )
)]
pub async fn generate_password(
    generator: web::Data<PasswordGenerator>,
    generation_req: web::Json<GenerationRequest>,
) -> impl Responder {
    let GenerationRequest { length, options } = generation_req.into_inner();

    let classes: Vec<&str> = CharacterClass::enabled(&options)
        .iter()
        .map(|class| class.name())
        .collect();
    info!("🔐 Password requested: length={}, classes=[{}]", length, classes.join(","));

    match generator.generate(length, &options) {
        Ok(password) => HttpResponse::Ok().json(GenerationResult { password }),
        Err(e) => {
            warn!("❌ Rejected generation request: {}", e);
            HttpResponse::BadRequest().json(ErrorBody::new(e.to_string()))
        }
    }
}
