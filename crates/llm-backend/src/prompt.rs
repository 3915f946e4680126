//! Prompt construction and input preparation for the model backend

pub const SYSTEM_MESSAGE: &str = "You are a precise data extraction assistant. Extract information exactly as requested and return valid JSON.";

pub const TRUNCATION_WARNING: &str =
    "Document was truncated for model processing. Some shareholders may be missed.";

const TRUNCATION_MARKER: &str = "\n\n[...truncated...]";

/// Caps over-long input at `max_chars` characters and reports the cut as a
/// warning.
pub fn prepare_input(text: &str, max_chars: usize) -> (String, Vec<String>) {
    if text.chars().count() <= max_chars {
        return (text.to_string(), Vec::new());
    }

    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str(TRUNCATION_MARKER);
    (truncated, vec![TRUNCATION_WARNING.to_string()])
}

/// The user-role extraction prompt for one document.
pub fn extraction_prompt(text: &str) -> String {
    format!(
        r#"Extract shareholder information from the following PDF text.

TASK:
1. Find the COMPANY NAME - extract ONLY the core name (e.g., "Lexsy Inc") WITHOUT legal jargon like "bylaws", "amended", "of Delaware", etc.
2. Look specifically for the "RESTRICTED STOCK PURCHASERS" section or similar shareholder table
3. Extract ONLY the names and share counts from that section
4. Return the data in the exact JSON format specified below

TEXT:
{text}

REQUIRED OUTPUT FORMAT (valid JSON only):
{{
  "companyName": "Clean Company Name Only (e.g., 'Lexsy Inc')" or null,
  "shareholders": [
    {{"name": "Full Name", "shares": 1000}},
    {{"name": "Another Name", "shares": 500}}
  ],
  "confidence": "high" or "medium" or "low",
  "notes": "Any extraction concerns"
}}

RULES:
- Return ONLY valid JSON, no other text
- Company name must be clean: NO bylaws, NO state names, NO legal jargon
- Focus on "Restricted Stock Purchasers" section
- Include only names with share counts from that section
- shares must be a positive integer
- If no shareholders found, return empty array

JSON Response:"#
    )
}
