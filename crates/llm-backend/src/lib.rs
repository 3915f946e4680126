pub mod config;
pub mod error;
pub mod prompt;
pub mod response;

pub use config::LlmConfig;
pub use error::LlmError;

use serde_json::json;
use shared_types::ExtractionResult;

/// Model-based extraction backend.
///
/// Produces the same output shape as the heuristic engine so callers can
/// treat the two strategies interchangeably. Network transport stays with
/// the caller; this crate builds the request body and interprets the
/// response.
pub struct LlmBackend {
    config: LlmConfig,
}

impl LlmBackend {
    pub fn new(config: LlmConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Chat-completions request body for one document, plus any warnings
    /// raised while preparing the input (currently only truncation). The
    /// caller must thread those warnings into `parse_response`.
    pub fn build_request(&self, text: &str) -> (serde_json::Value, Vec<String>) {
        let (prepared, warnings) = prompt::prepare_input(text, self.config.max_input_chars);

        let body = json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": prompt::SYSTEM_MESSAGE,
                },
                {
                    "role": "user",
                    "content": prompt::extraction_prompt(&prepared),
                }
            ],
            "temperature": 0,
            "max_completion_tokens": 20000,
        });

        (body, warnings)
    }

    /// Pulls the assistant message out of the chat-completions envelope.
    pub fn extract_message_content(&self, body: &str) -> Result<String, LlmError> {
        response::extract_message_content(body)
    }

    /// Parses the model's JSON answer into the shared output shape.
    pub fn parse_response(
        &self,
        content: &str,
        warnings: Vec<String>,
    ) -> Result<ExtractionResult, LlmError> {
        response::parse_response(content, warnings)
    }
}
