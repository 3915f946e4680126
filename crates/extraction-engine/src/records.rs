//! Name/share-count pattern matching over a located section

use crate::extractors::numeric::parse_share_count;
use crate::validate;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::ShareholderRecord;

/// Table header words the name pattern can accidentally swallow.
pub const HEADER_WORDS: &[&str] = &[
    "schedule", "vesting", "stock", "plan", "price", "name", "shares",
];

lazy_static! {
    /// 2-3 capitalized-word tokens followed by a share count, e.g.
    /// "Iryna Krutenko 54,000 shares".
    static ref NAME_SHARES_PATTERN: Regex = Regex::new(
        r"([A-Z][a-z]+\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\s+([\d,]+)\s*(?i:shares?)"
    )
    .unwrap();
}

/// Raw (name, shares) pair produced by the matching stage, before
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub shares: u64,
}

/// Matching stage: scans a section for candidate records. Header words are
/// stripped from names and thousands commas from counts here; acceptance is
/// the validator's job. Unparseable counts are dropped silently.
pub fn scan_candidates(section: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for cap in NAME_SHARES_PATTERN.captures_iter(section) {
        let Some(shares) = parse_share_count(&cap[2]) else {
            continue;
        };

        let name = strip_header_words(cap[1].trim());
        if name.is_empty() {
            continue;
        }

        candidates.push(Candidate { name, shares });
    }

    candidates
}

fn strip_header_words(name: &str) -> String {
    name.split_whitespace()
        .filter(|part| !HEADER_WORDS.contains(&part.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full extraction over a located section: match, validate, deduplicate by
/// exact cleaned name. Output order is first-match order in the text.
pub fn extract_from_section(section: &str) -> Vec<ShareholderRecord> {
    let mut shareholders: Vec<ShareholderRecord> = Vec::new();

    for candidate in scan_candidates(section) {
        if !validate::is_valid_shareholder(&candidate.name, candidate.shares) {
            continue;
        }
        if shareholders.iter().any(|s| s.name == candidate.name) {
            continue;
        }
        shareholders.push(ShareholderRecord {
            name: candidate.name,
            shares: candidate.shares,
        });
    }

    shareholders
}
