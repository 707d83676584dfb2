// src/generators/error.rs
use thiserror::Error;

/// Caller input rejected before any randomness is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Length must be between {min} and {max} characters")]
    LengthOutOfRange { length: i64, min: usize, max: usize },

    #[error("At least one character type must be selected")]
    NoCharacterClass,

    #[error("Word count must be between {min} and {max}")]
    WordCountOutOfRange { word_count: i64, min: usize, max: usize },

    #[error("Separator must be {max} characters or less")]
    SeparatorTooLong { length: usize, max: usize },

    #[error("Capitalize must be one of: title, lower, upper")]
    InvalidCapitalizeMode(String),
}

impl ValidationError {
    /// Name of the offending request field, as the HTTP API spells it.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::LengthOutOfRange { .. } => "length",
            ValidationError::NoCharacterClass => "characterTypes",
            ValidationError::WordCountOutOfRange { .. } => "wordCount",
            ValidationError::SeparatorTooLong { .. } => "separator",
            ValidationError::InvalidCapitalizeMode(_) => "capitalize",
        }
    }
}

/// An internal precondition did not hold. Only reachable when validation was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("No characters available for password generation")]
    EmptyPool,

    #[error("Word list holds {available} words, cannot pick {requested} distinct ones")]
    NotEnoughWords { requested: usize, available: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

pub type Result<T> = std::result::Result<T, Error>;
