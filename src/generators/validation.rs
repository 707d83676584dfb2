// src/generators/validation.rs
//! Bounds checks for generation requests. Pure functions: the same input
//! always yields the same verdict.

use crate::generators::ValidationError;
use crate::models::{CapitalizeMode, PassphraseRequest, PasswordRequest};

pub const PASSWORD_MIN_LENGTH: usize = 4;
pub const PASSWORD_MAX_LENGTH: usize = 128;

pub const PASSPHRASE_MIN_WORDS: usize = 2;
pub const PASSPHRASE_MAX_WORDS: usize = 20;

pub const SEPARATOR_MAX_CHARS: usize = 10;

pub fn validate_password(request: &PasswordRequest) -> Result<(), ValidationError> {
    check_length(request.length as i64)?;

    if !request.any_class_selected() {
        return Err(ValidationError::NoCharacterClass);
    }

    Ok(())
}

pub fn validate_passphrase(request: &PassphraseRequest) -> Result<(), ValidationError> {
    check_word_count(request.word_count as i64)?;
    check_separator(&request.separator)?;
    Ok(())
}

/// Range check on a raw length, before it is narrowed to `usize`.
pub fn check_length(length: i64) -> Result<usize, ValidationError> {
    in_range(length, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH).ok_or(ValidationError::LengthOutOfRange {
        length,
        min: PASSWORD_MIN_LENGTH,
        max: PASSWORD_MAX_LENGTH,
    })
}

pub fn check_word_count(word_count: i64) -> Result<usize, ValidationError> {
    in_range(word_count, PASSPHRASE_MIN_WORDS, PASSPHRASE_MAX_WORDS).ok_or(ValidationError::WordCountOutOfRange {
        word_count,
        min: PASSPHRASE_MIN_WORDS,
        max: PASSPHRASE_MAX_WORDS,
    })
}

// Counted in chars, not bytes
pub fn check_separator(separator: &str) -> Result<(), ValidationError> {
    let length = separator.chars().count();
    if length > SEPARATOR_MAX_CHARS {
        return Err(ValidationError::SeparatorTooLong { length, max: SEPARATOR_MAX_CHARS });
    }
    Ok(())
}

pub fn parse_capitalize(raw: &str) -> Result<CapitalizeMode, ValidationError> {
    match raw {
        "title" => Ok(CapitalizeMode::Title),
        "lower" => Ok(CapitalizeMode::Lower),
        "upper" => Ok(CapitalizeMode::Upper),
        other => Err(ValidationError::InvalidCapitalizeMode(other.to_string())),
    }
}

fn in_range(value: i64, min: usize, max: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|v| (min..=max).contains(v))
}
