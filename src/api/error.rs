// src/api/error.rs
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::api::types::ErrorResponse;
use crate::generators::{self, GenerationError, ValidationError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Body was not JSON or a field had the wrong type. Detail is logged, not returned.
    #[error("Invalid parameter type")]
    InvalidBody(String),

    #[error("Rate limit exceeded. Please wait before making more requests.")]
    RateLimited { retry_after: u64 },

    #[error("Endpoint not found")]
    NotFound,
}

impl From<generators::Error> for ApiError {
    fn from(e: generators::Error) -> Self {
        match e {
            generators::Error::Validation(e) => ApiError::Validation(e),
            generators::Error::Generation(e) => ApiError::Generation(e),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        let retry_after = match self {
            ApiError::RateLimited { retry_after } => {
                builder.insert_header(("Retry-After", retry_after.to_string()));
                Some(*retry_after)
            }
            _ => None,
        };

        builder.json(ErrorResponse {
            error: self.to_string(),
            retry_after,
        })
    }
}
