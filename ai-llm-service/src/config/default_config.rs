//! Default Ollama configs, overridable through environment variables.
//!
//! Two roles are defined:
//!
//! - **Answer** → the profile used for `/ask` (low temperature, short output)
//! - **Warm-up** → a throwaway 10-token request fired once at startup
//!
//! # Environment variables
//!
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (default `http://localhost:11434`)
//! - `OLLAMA_MODEL`                = model name (default `mistral`)
//! - `LLM_MAX_TOKENS`              = optional override of the answer token cap

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{AiLlmError, ConfigError, env_opt, env_opt_u32, validate_http_endpoint},
};

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "mistral";

/// Answer profile constants.
pub const ANSWER_TEMPERATURE: f32 = 0.2;
pub const ANSWER_MAX_TOKENS: u32 = 80;
pub const ANSWER_NUM_CTX: u32 = 4096;
pub const ANSWER_TIMEOUT_SECS: u64 = 180;

/// Warm-up profile constants.
pub const WARMUP_MAX_TOKENS: u32 = 10;
pub const WARMUP_TIMEOUT_SECS: u64 = 30;

/// Resolves the Ollama endpoint from optional `OLLAMA_URL` / `OLLAMA_PORT` values.
///
/// Precedence:
/// 1. `url` if present
/// 2. `port` → `http://localhost:{port}`
/// 3. [`DEFAULT_OLLAMA_URL`]
///
/// # Errors
///
/// - [`ConfigError::InvalidNumber`] if the port is not a valid `u16`
/// - [`ConfigError::InvalidFormat`] if the URL lacks an http/https scheme
pub fn resolve_endpoint(url: Option<String>, port: Option<String>) -> Result<String, AiLlmError> {
    if let Some(url) = url {
        validate_http_endpoint("OLLAMA_URL", &url)?;
        return Ok(url.trim_end_matches('/').to_string());
    }
    if let Some(port) = port {
        let port = port.parse::<u16>().map_err(|_| ConfigError::InvalidNumber {
            var: "OLLAMA_PORT",
            reason: "expected u16 (1..=65535)",
        })?;
        return Ok(format!("http://localhost:{port}"));
    }
    Ok(DEFAULT_OLLAMA_URL.to_string())
}

/// Builds the answer profile for an endpoint/model pair.
///
/// # Errors
/// [`ConfigError::EmptyModel`] if `model` is blank.
pub fn answer_config(
    endpoint: String,
    model: String,
    max_tokens: Option<u32>,
) -> Result<LlmModelConfig, AiLlmError> {
    if model.trim().is_empty() {
        return Err(ConfigError::EmptyModel.into());
    }

    Ok(LlmModelConfig {
        model,
        endpoint,
        max_tokens: Some(max_tokens.unwrap_or(ANSWER_MAX_TOKENS)),
        temperature: Some(ANSWER_TEMPERATURE),
        num_ctx: Some(ANSWER_NUM_CTX),
        timeout_secs: Some(ANSWER_TIMEOUT_SECS),
    })
}

/// Derives the warm-up profile from the answer profile.
///
/// Only the token cap is sent as an option; endpoint and model are shared.
pub fn warmup_config(answer: &LlmModelConfig) -> LlmModelConfig {
    LlmModelConfig {
        model: answer.model.clone(),
        endpoint: answer.endpoint.clone(),
        max_tokens: Some(WARMUP_MAX_TOKENS),
        temperature: None,
        num_ctx: None,
        timeout_secs: Some(WARMUP_TIMEOUT_SECS),
    }
}

/// Constructs the answer profile from the environment.
///
/// # Env
/// - `OLLAMA_URL` / `OLLAMA_PORT` (optional)
/// - `OLLAMA_MODEL` (optional)
/// - `LLM_MAX_TOKENS` (optional)
///
/// # Defaults
/// - `temperature = 0.2`
/// - `num_predict = 80`
/// - `num_ctx = 4096`
/// - `timeout_secs = 180`
pub fn config_ollama_answer() -> Result<LlmModelConfig, AiLlmError> {
    let endpoint = resolve_endpoint(env_opt("OLLAMA_URL"), env_opt("OLLAMA_PORT"))?;
    let model = env_opt("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;
    answer_config(endpoint, model, max_tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_defaults_to_localhost() {
        assert_eq!(resolve_endpoint(None, None).unwrap(), DEFAULT_OLLAMA_URL);
    }

    #[test]
    fn endpoint_prefers_url_over_port() {
        let ep = resolve_endpoint(Some("http://gpu-box:11434/".into()), Some("1".into())).unwrap();
        assert_eq!(ep, "http://gpu-box:11434");
    }

    #[test]
    fn endpoint_from_port() {
        let ep = resolve_endpoint(None, Some("12000".into())).unwrap();
        assert_eq!(ep, "http://localhost:12000");
    }

    #[test]
    fn endpoint_rejects_bad_port_and_scheme() {
        assert!(resolve_endpoint(None, Some("nope".into())).is_err());
        assert!(resolve_endpoint(Some("gpu-box:11434".into()), None).is_err());
    }

    #[test]
    fn answer_profile_uses_fixed_options() {
        let cfg = answer_config(DEFAULT_OLLAMA_URL.into(), DEFAULT_MODEL.into(), None).unwrap();
        assert_eq!(cfg.temperature, Some(0.2));
        assert_eq!(cfg.max_tokens, Some(80));
        assert_eq!(cfg.num_ctx, Some(4096));
        assert_eq!(cfg.timeout_secs, Some(180));
    }

    #[test]
    fn answer_profile_rejects_blank_model() {
        assert!(answer_config(DEFAULT_OLLAMA_URL.into(), "  ".into(), None).is_err());
    }

    #[test]
    fn warmup_profile_is_minimal() {
        let answer = answer_config(DEFAULT_OLLAMA_URL.into(), DEFAULT_MODEL.into(), None).unwrap();
        let warm = warmup_config(&answer);
        assert_eq!(warm.max_tokens, Some(10));
        assert_eq!(warm.timeout_secs, Some(30));
        assert_eq!(warm.temperature, None);
        assert_eq!(warm.num_ctx, None);
        assert_eq!(warm.model, answer.model);
    }
}
