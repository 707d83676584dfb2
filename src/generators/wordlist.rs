// src/generators/wordlist.rs

/// Curated passphrase vocabulary. Lower case, ASCII, no duplicates.
pub static WORD_LIST: &[&str] = &[
    "cat", "dog", "lion", "tiger", "bear", "wolf", "eagle", "shark", "dragon", "phoenix",
    "rabbit", "horse", "elephant", "dolphin", "penguin", "falcon", "panther", "leopard",
    "cheetah", "rhino", "zebra", "giraffe", "monkey", "gorilla", "whale", "octopus",

    "red", "blue", "green", "purple", "orange", "silver", "gold", "crimson", "azure",
    "emerald", "violet", "amber", "coral", "ivory", "jade", "ruby", "topaz", "onyx",

    "ocean", "mountain", "forest", "river", "cloud", "storm", "thunder", "sunset",
    "rainbow", "garden", "meadow", "valley", "canyon", "desert", "glacier", "volcano",
    "spring", "summer", "autumn", "winter", "breeze", "wind", "rain", "snow",

    "table", "chair", "laptop", "phone", "camera", "robot", "rocket", "castle",
    "bridge", "tower", "diamond", "crystal", "mirror", "lamp", "clock", "compass",
    "anchor", "shield", "sword", "arrow", "crown", "throne", "wagon", "ship",

    "jump", "run", "dance", "swim", "fly", "create", "build", "dream", "think",
    "laugh", "smile", "sing", "write", "paint", "climb", "explore", "discover",

    "quick", "brave", "wise", "happy", "strong", "bright", "swift", "bold",
    "calm", "fierce", "gentle", "mighty", "noble", "royal", "silent", "wild",

    "pizza", "coffee", "apple", "bread", "honey", "berry", "mango", "lemon",
    "cherry", "peach", "grape", "melon", "banana", "coconut",

    "cyber", "digital", "quantum", "neural", "binary", "data", "pixel", "byte",
    "code", "network", "signal", "pulse", "matrix", "nexus", "core",

    "magic", "shadow", "light", "star", "moon", "sun", "time", "space", "future",
    "power", "energy", "spirit", "soul", "cosmos", "zenith", "echo", "mystic",
    "legend", "myth", "hero", "quest", "journey", "destiny", "fortune", "glory",

    "city", "town", "village", "island", "temple", "palace", "fortress", "harbor",
    "square", "avenue", "street", "plaza", "market", "academy", "library", "arena",

    "fire", "water", "earth", "metal", "stone", "wood", "ice", "flame", "frost",
    "spark", "blaze", "steam", "smoke", "mist", "fog", "dew", "ash",

    "comet", "meteor", "planet", "galaxy", "nebula", "stellar", "lunar",
    "solar", "astral", "orbit", "eclipse", "aurora", "nova",

    "joy", "peace", "hope", "faith", "truth", "trust", "courage", "honor",
    "grace", "charm", "valor", "pride", "victory", "triumph",
];

pub fn word_list() -> &'static [&'static str] {
    WORD_LIST
}

#[cfg(test)]
pub fn contains(word: &str) -> bool {
    WORD_LIST.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn words_are_unique_lowercase_ascii() {
        let unique: HashSet<&str> = WORD_LIST.iter().copied().collect();
        assert_eq!(unique.len(), WORD_LIST.len());
        assert!(WORD_LIST.len() >= 200);
        for word in WORD_LIST {
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word}");
        }
    }

    #[test]
    fn lookup() {
        assert!(contains("dragon"));
        assert!(!contains("Dragon"));
        assert!(!contains("zzz"));
    }
}
