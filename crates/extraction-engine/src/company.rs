//! Company name detection from the document header

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Consent-header tokens that typically follow the company name on the
    /// first page of a written consent.
    static ref HEADER_MARKER: Regex = Regex::new(r"(?i)ACTION|CONSENT|BOARD").unwrap();

    /// Recognized legal-entity suffixes.
    static ref LEGAL_SUFFIX: Regex = Regex::new(r"(?i)Inc\.|LLC|Corp\.").unwrap();

    /// Comma immediately preceding a legal suffix, as in "LEXSY, INC."
    static ref COMMA_BEFORE_SUFFIX: Regex = Regex::new(r"(?i),\s*(Inc\.|LLC|Corp\.)").unwrap();
}

/// Best-effort company name detection. Returns `None` when neither the
/// document header nor the first line yields a plausible entity name; the
/// caller surfaces that as a warning, never an error.
pub fn extract_company_name(text: &str) -> Option<String> {
    // Strategy (a): text before the consent-header marker within the first
    // 100 characters.
    let head: String = text.chars().take(100).collect();
    let head = head.trim();
    let before_marker = match HEADER_MARKER.find(head) {
        Some(m) => head[..m.start()].trim(),
        None => head,
    };
    if let Some(name) = accept_candidate(before_marker) {
        return Some(name);
    }

    // Strategy (b): the document's first line.
    let first_line = text.lines().next().unwrap_or("").trim();
    if first_line.chars().count() < 100 {
        if let Some(name) = accept_candidate(first_line) {
            return Some(name);
        }
    }

    None
}

/// Length and suffix rules shared by both strategies, plus the comma
/// normalization.
fn accept_candidate(candidate: &str) -> Option<String> {
    let len = candidate.chars().count();
    if len <= 5 || len >= 50 {
        return None;
    }
    if !LEGAL_SUFFIX.is_match(candidate) {
        return None;
    }

    Some(
        COMMA_BEFORE_SUFFIX
            .replace(candidate, " ${1}")
            .trim()
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_name_before_consent_header() {
        let text = "LEXSY, INC. ACTION BY UNANIMOUS WRITTEN CONSENT OF THE BOARD OF DIRECTORS";
        assert_eq!(extract_company_name(text), Some("LEXSY INC.".to_string()));
    }

    #[test]
    fn test_normalizes_comma_before_suffix() {
        let text = "Acme Widgets, LLC CONSENT OF MEMBERS";
        assert_eq!(
            extract_company_name(text),
            Some("Acme Widgets LLC".to_string())
        );
    }

    #[test]
    fn test_falls_back_to_first_line() {
        let text = "Globex Technologies Inc.\nCertificate of Amended and Restated Bylaws of the corporation as adopted";
        assert_eq!(
            extract_company_name(text),
            Some("Globex Technologies Inc.".to_string())
        );
    }

    #[test]
    fn test_rejects_missing_legal_suffix() {
        let text = "SOME PARTNERSHIP ACTION BY WRITTEN CONSENT";
        assert_eq!(extract_company_name(text), None);
    }

    #[test]
    fn test_rejects_too_short_candidate() {
        // A bare suffix is under the exclusive 5-character lower bound
        let text = "Inc.";
        assert_eq!(extract_company_name(text), None);
    }

    #[test]
    fn test_rejects_overlong_candidate() {
        let text = format!(
            "{} Inc. ACTION BY WRITTEN CONSENT",
            "Very Long Corporate Name Holdings International Group"
        );
        assert_eq!(extract_company_name(&text), None);
    }
}
