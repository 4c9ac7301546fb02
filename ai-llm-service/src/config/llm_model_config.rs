/// Configuration for one Ollama generation profile.
///
/// Two profiles exist in practice: the answer profile used by `/ask` and the
/// warm-up profile fired once at startup. See [`crate::config::default_config`].
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"mistral"`).
/// - `endpoint`: Ollama base URL (e.g., `http://localhost:11434`).
/// - `max_tokens`: Hard cap on generated tokens (`num_predict`).
/// - `temperature`: Controls randomness (0.0 = deterministic).
/// - `num_ctx`: Context window size in tokens.
/// - `timeout_secs`: Whole-request timeout including reading the stream.
///
/// # Examples
///
/// ```
/// use ai_llm_service::config::llm_model_config::LlmModelConfig;
///
/// let cfg = LlmModelConfig {
///     model: "mistral".to_string(),
///     endpoint: "http://localhost:11434".to_string(),
///     max_tokens: Some(80),
///     temperature: Some(0.2),
///     num_ctx: Some(4096),
///     timeout_secs: Some(180),
/// };
/// assert_eq!(cfg.generate_url(), "http://localhost:11434/api/generate");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// Model identifier string (e.g., `"mistral"`).
    pub model: String,

    /// Ollama base URL.
    pub endpoint: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Context window size.
    pub num_ctx: Option<u32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

impl LlmModelConfig {
    /// Full URL of the streaming generate endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.endpoint.trim().trim_end_matches('/'))
    }
}
