// src/api/handlers/system.rs
use actix_web::HttpResponse;

use crate::api::error::ApiError;
use crate::api::types::{ConfigResponse, ErrorResponse};
use crate::generators::wordlist;

/// Client configuration
///
/// Returns the passphrase word list so a client-side preview can use the same vocabulary.
#[utoipa::path(
    get,
    path = "/api/config",
    tag = "System",
    responses(
        (status = 200, description = "Word list", body = ConfigResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse)
    )
)]
pub async fn get_config() -> HttpResponse {
    HttpResponse::Ok().json(ConfigResponse {
        word_list: wordlist::word_list().iter().map(|w| w.to_string()).collect(),
    })
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}
