// src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::generators::validation::parse_capitalize;
use crate::generators::ValidationError;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRequest {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl PasswordRequest {
    pub fn any_class_selected(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_digits || self.include_symbols
    }
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

/// How each passphrase word is cased before joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CapitalizeMode {
    /// First letter upper case, the rest lower case
    #[default]
    Title,
    Lower,
    Upper,
}

impl CapitalizeMode {
    pub const ALL: [CapitalizeMode; 3] = [CapitalizeMode::Title, CapitalizeMode::Lower, CapitalizeMode::Upper];

    pub fn as_str(&self) -> &'static str {
        match self {
            CapitalizeMode::Title => "title",
            CapitalizeMode::Lower => "lower",
            CapitalizeMode::Upper => "upper",
        }
    }
}

impl fmt::Display for CapitalizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapitalizeMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_capitalize(s)
    }
}

// Passphrase generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassphraseRequest {
    pub word_count: usize,
    pub separator: String,
    pub add_numbers: bool,
    pub add_symbols: bool,
    pub capitalize: CapitalizeMode,
}

impl Default for PassphraseRequest {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            add_numbers: true,
            add_symbols: true,
            capitalize: CapitalizeMode::Title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => StrengthLabel::Weak,
            4..=5 => StrengthLabel::Medium,
            6..=7 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthAssessment {
    pub score: u8,
    pub label: StrengthLabel,
}

/// A freshly generated password or passphrase. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSecret {
    pub secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<StrengthAssessment>,
}

impl GeneratedSecret {
    pub fn new(secret: String) -> Self {
        Self { secret, strength: None }
    }

    pub fn with_strength(mut self) -> Self {
        self.strength = Some(crate::generators::strength::assess(&self.secret));
        self
    }
}
