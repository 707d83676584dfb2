// src/generators/strength.rs
use crate::generators::pool::PUNCTUATION;
use crate::models::{StrengthAssessment, StrengthLabel};

/// Highest score `score` can return.
pub const MAX_SCORE: u8 = 8;

// Additive criteria: length tier, then one bonus per character class present
pub fn score(password: &str) -> u8 {
    let length = password.chars().count();
    let mut score = match length {
        16.. => 3,
        12..=15 => 2,
        8..=11 => 1,
        _ => 0,
    };

    if password.chars().any(char::is_uppercase) {
        score += 1;
    }
    if password.chars().any(char::is_lowercase) {
        score += 1;
    }
    if password.chars().any(char::is_numeric) {
        score += 1;
    }
    if password.chars().any(|c| PUNCTUATION.contains(c)) {
        score += 2;
    }

    score
}

pub fn assess(password: &str) -> StrengthAssessment {
    let score = score(password);
    StrengthAssessment {
        score,
        label: StrengthLabel::from_score(score),
    }
}
