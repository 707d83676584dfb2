// src/api/handlers/mod.rs
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;

pub mod generator;
pub mod system;

/// Decode a JSON body regardless of Content-Type. Blank or `null` bodies mean "all defaults".
pub(crate) fn parse_body<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let parsed: Option<T> = serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    Ok(parsed.unwrap_or_default())
}
