pub const DEFAULT_MODEL: &str = "gpt-5.2";

/// Inputs longer than this are truncated before prompting.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 2_000_000;

/// Backend configuration, passed in explicitly at construction time rather
/// than read from the process environment. Whether the backend is offered
/// at all is the orchestrating layer's call, based on it holding a config.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key the transport layer attaches to the request
    pub api_key: String,
    pub model: String,
    pub max_input_chars: usize,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}
