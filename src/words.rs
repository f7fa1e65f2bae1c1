//! Candidate words for falling asteroids

/// The word bank. All entries are lowercase ASCII; matching against typed
/// input happens after lowercasing at the keyboard boundary.
pub const WORD_BANK: &[&str] = &[
    "code", "type", "fast", "game", "word", "play", "star", "moon", "fire", "wind",
    "water", "earth", "light", "dark", "speed", "power", "magic", "skill", "focus", "quick",
    "react", "node", "java", "python", "html", "css", "debug", "array", "loop", "function",
    "class", "object", "string", "number", "boolean", "variable", "method", "syntax", "logic", "data",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_is_lowercase_ascii() {
        for word in WORD_BANK {
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "bad word: {word}");
        }
    }

    #[test]
    fn test_bank_has_no_duplicates() {
        for (i, word) in WORD_BANK.iter().enumerate() {
            assert!(!WORD_BANK[i + 1..].contains(word), "duplicate word: {word}");
        }
    }
}
