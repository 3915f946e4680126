//! Locates the shareholder table section within full document text

use lazy_static::lazy_static;
use regex::Regex;

/// Maximum window of text returned after an anchor match, in characters.
const SECTION_WINDOW: usize = 10_000;

lazy_static! {
    /// Anchor phrases marking the start of a shareholder table, in fixed
    /// priority order.
    static ref SECTION_ANCHORS: Vec<Regex> = vec![
        Regex::new(r"(?i)exhibit a").unwrap(),
        Regex::new(r"(?i)schedule a").unwrap(),
        Regex::new(r"(?i)restricted stock purchasers").unwrap(),
    ];
}

/// Returns the original-cased window of up to 10,000 characters starting at
/// the first occurrence of the highest-priority anchor phrase, or `None`
/// when no anchor is present. A match near the document end yields the
/// shorter remainder.
pub fn locate_shareholder_section(text: &str) -> Option<&str> {
    for anchor in SECTION_ANCHORS.iter() {
        if let Some(m) = anchor.find(text) {
            let tail = &text[m.start()..];
            let end = tail
                .char_indices()
                .nth(SECTION_WINDOW)
                .map(|(i, _)| i)
                .unwrap_or(tail.len());
            return Some(&tail[..end]);
        }
    }

    None
}
