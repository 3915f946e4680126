pub mod company;
pub mod extractors;
pub mod format;
pub mod records;
pub mod section;
pub mod validate;

pub use format::format_shareholder_data;

use shared_types::ExtractionResult;

/// Heuristic extraction entry point
pub struct ExtractionEngine;

impl ExtractionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Parses one document's text into a company name, shareholder list,
    /// and confidence warnings. Absence of either is reported through the
    /// warnings, never as an error.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let mut warnings = Vec::new();

        let company_name = company::extract_company_name(text);
        if company_name.is_none() {
            warnings.push(
                "Could not automatically detect company name. Please verify results."
                    .to_string(),
            );
        }

        let shareholders = match section::locate_shareholder_section(text) {
            Some(section) => records::extract_from_section(section),
            None => Vec::new(),
        };

        if shareholders.is_empty() {
            warnings.push(
                "No shareholders found. The document may not contain a 'Restricted Stock Purchasers' table, or the table format is not recognized."
                    .to_string(),
            );

            let lower_text = text.to_lowercase();
            if lower_text.contains("restricted") && lower_text.contains("stock") {
                warnings.push(
                    "Found 'Restricted Stock' text but could not extract data. The table format may be unusual."
                        .to_string(),
                );
            }
        }

        ExtractionResult {
            company_name,
            shareholders,
            warnings,
        }
    }
}

impl Default for ExtractionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Severity, ShareholderRecord};

    #[test]
    fn test_extracts_clean_company_name_from_header() {
        let engine = ExtractionEngine::new();
        let text = "LEXSY, INC. ACTION BY UNANIMOUS WRITTEN CONSENT...";

        let result = engine.parse(text);

        assert_eq!(result.company_name, Some("LEXSY INC.".to_string()));
    }

    #[test]
    fn test_extracts_shareholders_from_exhibit_a_section() {
        let engine = ExtractionEngine::new();
        let text = "EXHIBIT A\nIryna Krutenko 54,000 shares\nElena Ondar 450,000 shares";

        let result = engine.parse(text);

        assert_eq!(
            result.shareholders,
            vec![
                ShareholderRecord {
                    name: "Iryna Krutenko".to_string(),
                    shares: 54000
                },
                ShareholderRecord {
                    name: "Elena Ondar".to_string(),
                    shares: 450000
                },
            ]
        );
    }

    #[test]
    fn test_strips_table_header_words_from_names() {
        let engine = ExtractionEngine::new();
        let text = "EXHIBIT A\nSchedule Iryna Krutenko 54,000 shares";

        let result = engine.parse(text);

        assert_eq!(result.shareholders[0].name, "Iryna Krutenko");
    }

    #[test]
    fn test_rejects_share_counts_below_minimum() {
        let engine = ExtractionEngine::new();
        let text = "EXHIBIT A\nJohn Doe 5 shares\nJane Smith 1000 shares";

        let result = engine.parse(text);

        assert_eq!(
            result.shareholders,
            vec![ShareholderRecord {
                name: "Jane Smith".to_string(),
                shares: 1000
            }]
        );
    }

    #[test]
    fn test_warns_when_nothing_extracted() {
        let engine = ExtractionEngine::new();
        let result = engine.parse("This is just plain text with no shareholders.");

        assert!(result.shareholders.is_empty());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("No shareholders found")));
    }

    #[test]
    fn test_warns_on_unrecognized_restricted_stock_table() {
        let engine = ExtractionEngine::new();
        let text = "The Restricted Stock grants are listed in an attached image.";

        let result = engine.parse(text);

        // Both aggregate warnings apply independently
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("No shareholders found")));
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("table format may be unusual")));
    }

    #[test]
    fn test_warns_when_company_name_undetected() {
        let engine = ExtractionEngine::new();
        let result = engine.parse("EXHIBIT A\nJane Smith 1000 shares");

        assert_eq!(result.company_name, None);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Could not automatically detect company name")));
        // Company-name absence alone is not a shareholder-extraction failure
        assert_eq!(result.shareholders.len(), 1);
    }

    #[test]
    fn test_accepts_middle_names_and_rejects_single_tokens() {
        let engine = ExtractionEngine::new();
        let text = "EXHIBIT A\nJohn Michael Smith 10000 shares\nMary Johnson 5000 shares";

        let result = engine.parse(text);

        assert_eq!(result.shareholders.len(), 2);
        assert_eq!(result.shareholders[0].name, "John Michael Smith");
        assert_eq!(result.shareholders[1].name, "Mary Johnson");
    }

    #[test]
    fn test_no_duplicate_names_in_result() {
        let engine = ExtractionEngine::new();
        let text = "EXHIBIT A\nJane Smith 1000 shares\nJane Smith 1000 shares";

        let result = engine.parse(text);

        assert_eq!(result.shareholders.len(), 1);
    }

    #[test]
    fn test_engine_warnings_classify_as_presentation_expects() {
        let engine = ExtractionEngine::new();
        let result = engine.parse("nothing of interest");

        let severities: Vec<Severity> = result
            .warnings
            .iter()
            .map(|w| Severity::classify(w))
            .collect();

        // "verify" (company name) and "may" (empty table) both bucket as Medium
        assert_eq!(severities, vec![Severity::Medium, Severity::Medium]);
    }
}
