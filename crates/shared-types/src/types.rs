#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShareholderRecord {
    pub name: String, // Trimmed, multi-word
    pub shares: u64,
}

/// Output shape shared by the heuristic engine and the model backend, so
/// callers can treat the two extraction strategies interchangeably.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub company_name: Option<String>,
    pub shareholders: Vec<ShareholderRecord>, // First-match order
    pub warnings: Vec<String>,
}

/// Display-ready view of a shareholder list entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormattedRecord {
    pub name: String,
    pub shares: String,     // e.g., "450,000"
    pub percentage: String, // e.g., "75.00%", or "N/A" when total is zero
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Presentation-layer bucket for a warning message.
    ///
    /// Severity is derived from the message text, never stored on the
    /// warning itself; the engine and backend emit plain strings.
    pub fn classify(warning: &str) -> Severity {
        let lower = warning.to_lowercase();

        if lower.contains("not found") || lower.contains("invalid") || lower.contains("failed") {
            Severity::High
        } else if lower.contains("verify") || lower.contains("may") || lower.contains("truncated") {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}
