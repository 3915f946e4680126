// Locale-independent share-count parsing and thousands grouping.
// Explicit separator handling keeps round-trips deterministic regardless of
// the host locale.

/// Parses a share count as written in a table cell ("54,000" or "54000").
/// Anything that is not digits and thousands commas fails quietly.
pub fn parse_share_count(raw: &str) -> Option<u64> {
    let digits = raw.replace(',', "");
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Renders a count with thousands separators: 450000 -> "450,000".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
