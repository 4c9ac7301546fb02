use std::sync::Arc;

use ai_llm_service::{
    LlmModelConfig, OllamaService, config::default_config::config_ollama_answer,
};
use assistant::{Assistant, AssistantConfig};
use tracing::info;

use crate::error_handler::AppResult;

/// Default listen address.
pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:8000";

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Question answering pipeline (cache + model).
    pub assistant: Assistant,
}

impl AppState {
    pub fn new(assistant: Assistant) -> Self {
        Self { assistant }
    }
}

/// Everything `start` needs, resolved once from the environment.
pub struct ServerConfig {
    /// Listen address, e.g. `0.0.0.0:8000`.
    pub address: String,
    /// Ollama answer profile (also the base of the warm-up profile).
    pub llm: LlmModelConfig,
    /// Cache sizing.
    pub assistant: AssistantConfig,
}

impl ServerConfig {
    /// Load from `API_ADDRESS`, the Ollama variables and the cache variables.
    pub fn from_env() -> AppResult<Self> {
        let address = std::env::var("API_ADDRESS")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string());

        Ok(Self {
            address,
            llm: config_ollama_answer()?,
            assistant: AssistantConfig::from_env(),
        })
    }

    /// Builds the shared handler state backed by a real Ollama client.
    pub fn build_state(&self) -> AppResult<Arc<AppState>> {
        let generator = Arc::new(OllamaService::new(self.llm.clone())?);
        info!(
            model = %self.llm.model,
            endpoint = %self.llm.endpoint,
            cache_capacity = self.assistant.cache_capacity,
            cache_ttl_secs = self.assistant.cache_ttl.map(|d| d.as_secs()),
            "assistant configured"
        );
        let assistant = Assistant::with_config(generator, &self.assistant);
        Ok(Arc::new(AppState::new(assistant)))
    }
}
