//! Display formatting for extracted shareholder lists

use crate::extractors::numeric::group_thousands;
use shared_types::{FormattedRecord, ShareholderRecord};

/// Renders a shareholder list for display. Input order is preserved; share
/// counts get thousands grouping, and ownership percentages two decimal
/// places against the list total, or "N/A" for every row when the total is
/// zero.
pub fn format_shareholder_data(shareholders: &[ShareholderRecord]) -> Vec<FormattedRecord> {
    let total_shares: u64 = shareholders.iter().map(|s| s.shares).sum();

    shareholders
        .iter()
        .map(|s| FormattedRecord {
            name: s.name.clone(),
            shares: group_thousands(s.shares),
            percentage: if total_shares > 0 {
                format!("{:.2}%", s.shares as f64 / total_shares as f64 * 100.0)
            } else {
                "N/A".to_string()
            },
        })
        .collect()
}
