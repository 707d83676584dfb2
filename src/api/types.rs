// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::generators::validation::{check_length, check_word_count, parse_capitalize};
use crate::generators::ValidationError;
use crate::models::{PassphraseRequest, PasswordRequest, StrengthLabel};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordGenerationRequest {
    /// Number of characters, 4 to 128 (default 12)
    pub length: Option<i64>,
    /// Include A-Z (default true)
    pub use_uppercase: Option<bool>,
    /// Include a-z (default true)
    pub use_lowercase: Option<bool>,
    /// Include 0-9 (default true)
    pub use_numbers: Option<bool>,
    /// Include ASCII punctuation (default true)
    pub use_symbols: Option<bool>,
    /// Drop 0, O, l, 1 and I from the pool (default false)
    pub exclude_ambiguous: Option<bool>,
}

impl PasswordGenerationRequest {
    pub fn into_request(self) -> Result<PasswordRequest, ValidationError> {
        let defaults = PasswordRequest::default();
        let length = match self.length {
            Some(raw) => check_length(raw)?,
            None => defaults.length,
        };

        Ok(PasswordRequest {
            length,
            include_uppercase: self.use_uppercase.unwrap_or(defaults.include_uppercase),
            include_lowercase: self.use_lowercase.unwrap_or(defaults.include_lowercase),
            include_digits: self.use_numbers.unwrap_or(defaults.include_digits),
            include_symbols: self.use_symbols.unwrap_or(defaults.include_symbols),
            exclude_ambiguous: self.exclude_ambiguous.unwrap_or(defaults.exclude_ambiguous),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    pub password: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PassphraseGenerationRequest {
    /// Number of distinct words, 2 to 20 (default 4)
    pub word_count: Option<i64>,
    /// Placed between words, at most 10 characters (default "-")
    pub separator: Option<String>,
    /// Append a number from 1 to 99 (default true)
    pub add_numbers: Option<bool>,
    /// Append one of !@#$% (default true)
    pub add_symbols: Option<bool>,
    /// One of title, lower, upper (default title)
    pub capitalize: Option<String>,
}

impl PassphraseGenerationRequest {
    pub fn into_request(self) -> Result<PassphraseRequest, ValidationError> {
        let defaults = PassphraseRequest::default();
        let word_count = match self.word_count {
            Some(raw) => check_word_count(raw)?,
            None => defaults.word_count,
        };
        let capitalize = match self.capitalize.as_deref() {
            Some(raw) => parse_capitalize(raw)?,
            None => defaults.capitalize,
        };

        Ok(PassphraseRequest {
            word_count,
            separator: self.separator.unwrap_or(defaults.separator),
            add_numbers: self.add_numbers.unwrap_or(defaults.add_numbers),
            add_symbols: self.add_symbols.unwrap_or(defaults.add_symbols),
            capitalize,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PassphraseGenerationResponse {
    pub passphrase: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    /// The full passphrase vocabulary, in server order
    pub word_list: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StrengthRequest {
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StrengthResponse {
    pub score: u8,
    pub max_score: u8,
    pub label: StrengthLabel,
}

// Field names are snake_case on the wire, unlike the request bodies
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Seconds until the client may retry (rate limiting only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}
