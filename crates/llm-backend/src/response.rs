//! Interpretation of model output into the shared extraction shape

use crate::error::LlmError;
use serde_json::Value;
use shared_types::{ExtractionResult, ShareholderRecord};

pub const AI_VERIFY_WARNING: &str = "AI extraction used. Please verify accuracy of results.";

/// Pulls `choices[0].message.content` out of a chat-completions response
/// body. Structural absence is a hard error.
pub fn extract_message_content(body: &str) -> Result<String, LlmError> {
    let envelope: Value = serde_json::from_str(body)?;

    envelope["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or(LlmError::MissingContent)
}

/// Parses the model's JSON answer. Non-JSON content and a non-array
/// `shareholders` field are hard errors; individually malformed entries are
/// dropped. `warnings` carries anything accumulated while building the
/// request (e.g. truncation) so it lands in the final result.
pub fn parse_response(
    content: &str,
    mut warnings: Vec<String>,
) -> Result<ExtractionResult, LlmError> {
    let parsed: Value = serde_json::from_str(strip_code_fences(content))?;

    let entries = parsed["shareholders"]
        .as_array()
        .ok_or(LlmError::ShareholdersNotArray)?;

    let mut shareholders = Vec::new();
    for entry in entries {
        match (entry["name"].as_str(), entry["shares"].as_u64()) {
            (Some(name), Some(shares)) if shares > 0 => {
                shareholders.push(ShareholderRecord {
                    name: name.trim().to_string(),
                    shares,
                });
            }
            _ => {
                tracing::warn!("dropping malformed shareholder entry: {entry}");
            }
        }
    }

    if let Some(confidence) = parsed["confidence"].as_str() {
        if confidence != "high" {
            warnings.push(format!("AI confidence: {confidence}"));
        }
    }

    if let Some(notes) = parsed["notes"].as_str() {
        if !notes.is_empty() {
            warnings.push(format!("AI notes: {notes}"));
        }
    }

    warnings.push(AI_VERIFY_WARNING.to_string());

    Ok(ExtractionResult {
        company_name: parsed["companyName"].as_str().map(str::to_string),
        shareholders,
        warnings,
    })
}

/// Models wrap JSON in markdown fences often enough to tolerate it.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\n', '\r'])
        .trim_end()
        .trim_end_matches("```")
        .trim_end()
}
