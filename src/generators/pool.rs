// src/generators/pool.rs
use crate::models::PasswordRequest;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Characters that are easy to confuse with one another when read back.
pub const AMBIGUOUS: &[char] = &['0', 'O', 'l', '1', 'I'];

/// Ordered set of candidate characters for a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Class strings are appended in a fixed order: upper, lower, digits, punctuation.
    pub fn build(
        include_uppercase: bool,
        include_lowercase: bool,
        include_digits: bool,
        include_symbols: bool,
        exclude_ambiguous: bool,
    ) -> Self {
        let classes = [
            (include_uppercase, UPPERCASE),
            (include_lowercase, LOWERCASE),
            (include_digits, DIGITS),
            (include_symbols, PUNCTUATION),
        ];

        let mut chars: Vec<char> = classes
            .iter()
            .filter(|(selected, _)| *selected)
            .flat_map(|(_, class)| class.chars())
            .collect();

        if exclude_ambiguous {
            chars.retain(|c| !AMBIGUOUS.contains(c));
        }

        Self { chars }
    }

    pub fn for_request(request: &PasswordRequest) -> Self {
        Self::build(
            request.include_uppercase,
            request.include_lowercase,
            request.include_digits,
            request.include_symbols,
            request.exclude_ambiguous,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}
