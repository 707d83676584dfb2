// src/generators/passphrase.rs
use rand::seq::index;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::generators::GenerationError;
use crate::models::{CapitalizeMode, PassphraseRequest};

/// Pool for the optional trailing symbol.
pub const SUFFIX_SYMBOLS: &[char] = &['!', '@', '#', '$', '%'];

pub const SUFFIX_NUMBER_MIN: u8 = 1;
pub const SUFFIX_NUMBER_MAX: u8 = 99;

/// Build a passphrase from `words` as described by a validated request.
pub fn generate_passphrase<R>(rng: &mut R, request: &PassphraseRequest, words: &[&str]) -> Result<String, GenerationError>
where
    R: Rng + CryptoRng,
{
    let selected = select_words(rng, words, request.word_count)?;

    let mut passphrase = selected
        .iter()
        .map(|word| capitalize(word, request.capitalize))
        .collect::<Vec<_>>()
        .join(&request.separator);

    if request.add_numbers {
        let number = rng.gen_range(SUFFIX_NUMBER_MIN..=SUFFIX_NUMBER_MAX);
        passphrase.push_str(&number.to_string());
    }

    if request.add_symbols {
        // SUFFIX_SYMBOLS is a non-empty constant
        if let Some(symbol) = SUFFIX_SYMBOLS.choose(rng) {
            passphrase.push(*symbol);
        }
    }

    Ok(passphrase)
}

/// Pick `count` distinct entries, uniformly over all subsets and in random order.
///
/// `index::sample` runs a partial Fisher-Yates (or Floyd's algorithm for
/// sparse picks), so the cost is bounded by `count` rather than by retries.
pub fn select_words<'a, R>(rng: &mut R, words: &[&'a str], count: usize) -> Result<Vec<&'a str>, GenerationError>
where
    R: Rng + CryptoRng,
{
    if count > words.len() {
        return Err(GenerationError::NotEnoughWords {
            requested: count,
            available: words.len(),
        });
    }

    Ok(index::sample(rng, words.len(), count)
        .into_iter()
        .map(|i| words[i])
        .collect())
}

pub fn capitalize(word: &str, mode: CapitalizeMode) -> String {
    match mode {
        CapitalizeMode::Upper => word.to_uppercase(),
        CapitalizeMode::Lower => word.to_lowercase(),
        CapitalizeMode::Title => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::wordlist::{self, WORD_LIST};
    use rand::rngs::OsRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    fn strip_suffix(last: &str) -> &str {
        last.trim_end_matches(SUFFIX_SYMBOLS).trim_end_matches(|c: char| c.is_ascii_digit())
    }

    #[test]
    fn capitalize_modes() {
        assert_eq!(capitalize("dragon", CapitalizeMode::Upper), "DRAGON");
        assert_eq!(capitalize("dragon", CapitalizeMode::Title), "Dragon");
        assert_eq!(capitalize("dragon", CapitalizeMode::Lower), "dragon");
        assert_eq!(capitalize("dRAGON", CapitalizeMode::Title), "Dragon");
        assert_eq!(capitalize("", CapitalizeMode::Title), "");
    }

    #[test]
    fn passphrase_has_distinct_listed_words() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for word_count in [2, 4, 7, 20] {
            let request = PassphraseRequest {
                word_count,
                capitalize: CapitalizeMode::Lower,
                ..PassphraseRequest::default()
            };
            let passphrase = generate_passphrase(&mut rng, &request, WORD_LIST).unwrap();

            let mut parts: Vec<&str> = passphrase.split('-').collect();
            assert_eq!(parts.len(), word_count);
            let last = parts.pop().unwrap();
            parts.push(strip_suffix(last));

            let unique: HashSet<&str> = parts.iter().copied().collect();
            assert_eq!(unique.len(), word_count, "{passphrase}");
            assert!(parts.iter().all(|w| wordlist::contains(w)), "{passphrase}");
        }
    }

    #[test]
    fn suffixes_follow_flags() {
        let plain = PassphraseRequest {
            word_count: 3,
            separator: " ".to_string(),
            add_numbers: false,
            add_symbols: false,
            capitalize: CapitalizeMode::Lower,
        };
        for _ in 0..50 {
            let passphrase = generate_passphrase(&mut OsRng, &plain, WORD_LIST).unwrap();
            assert!(passphrase.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
        }

        let numbered = PassphraseRequest { add_numbers: true, ..plain.clone() };
        for _ in 0..200 {
            let passphrase = generate_passphrase(&mut OsRng, &numbered, WORD_LIST).unwrap();
            let digits: String = passphrase.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
            let digits: String = digits.chars().rev().collect();
            assert!(!digits.starts_with('0'), "{passphrase}");
            let n: u8 = digits.parse().unwrap();
            assert!((1..=99).contains(&n));
        }

        let symbolled = PassphraseRequest { add_symbols: true, ..plain };
        for _ in 0..50 {
            let passphrase = generate_passphrase(&mut OsRng, &symbolled, WORD_LIST).unwrap();
            let last = passphrase.chars().last().unwrap();
            assert!(SUFFIX_SYMBOLS.contains(&last));
        }
    }

    #[test]
    fn separator_is_inserted_verbatim() {
        let request = PassphraseRequest {
            word_count: 3,
            separator: "<*>".to_string(),
            add_numbers: false,
            add_symbols: false,
            capitalize: CapitalizeMode::Upper,
        };
        let passphrase = generate_passphrase(&mut OsRng, &request, WORD_LIST).unwrap();
        let parts: Vec<&str> = passphrase.split("<*>").collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|w| w.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn whole_list_can_be_drawn_without_repeats() {
        let words = ["alpha", "beta", "gamma"];
        let picked = select_words(&mut OsRng, &words, 3).unwrap();
        let unique: HashSet<&str> = picked.into_iter().collect();
        assert_eq!(unique.len(), 3);

        assert_eq!(
            select_words(&mut OsRng, &words, 4),
            Err(GenerationError::NotEnoughWords { requested: 4, available: 3 })
        );
    }

    #[test]
    fn selection_covers_order_and_members() {
        // Every ordered pair from a 3-word list should show up over many draws
        let words = ["a", "b", "c"];
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut seen = HashSet::new();
        for _ in 0..600 {
            seen.insert(select_words(&mut rng, &words, 2).unwrap());
        }
        assert_eq!(seen.len(), 6);
    }
}
