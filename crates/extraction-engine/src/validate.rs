// Structural validation of candidate shareholder records.
// Kept separate from the matching stage so the rules can be exercised
// against hand-built candidates that never occurred in real text.

use lazy_static::lazy_static;
use regex::Regex;

/// Inclusive share-count bounds for a plausible record.
pub const MIN_SHARES: u64 = 10;
pub const MAX_SHARES: u64 = 100_000_000;

/// Longest accepted full name, in characters.
pub const MAX_NAME_LEN: usize = 50;

lazy_static! {
    /// Capitalized word: "Iryna"
    static ref CAPITALIZED_WORD: Regex = Regex::new(r"^[A-Z][a-z]+$").unwrap();
    /// All-caps acronym: "III"
    static ref ACRONYM: Regex = Regex::new(r"^[A-Z]+$").unwrap();
    /// Single initial with period: "J."
    static ref INITIAL: Regex = Regex::new(r"^[A-Z]\.$").unwrap();
}

/// Accepts a candidate iff every structural rule holds. Rejections are
/// silent; the caller decides whether an empty aggregate result warrants a
/// warning.
pub fn is_valid_shareholder(name: &str, shares: u64) -> bool {
    let words: Vec<&str> = name.split_whitespace().collect();

    if words.len() < 2 {
        return false;
    }

    if words.iter().any(|w| w.chars().count() < 2) {
        return false;
    }

    if name.chars().count() > MAX_NAME_LEN {
        return false;
    }

    let proper_capitalization = words
        .iter()
        .all(|w| CAPITALIZED_WORD.is_match(w) || ACRONYM.is_match(w) || INITIAL.is_match(w));
    if !proper_capitalization {
        return false;
    }

    (MIN_SHARES..=MAX_SHARES).contains(&shares)
}
