use thiserror::Error;

/// Hard failures of the model backend. Unlike the heuristic engine's
/// warnings, these propagate to the caller as user-visible errors.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Model response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Shareholders field is not an array")]
    ShareholdersNotArray,

    #[error("Model response has no message content")]
    MissingContent,
}
