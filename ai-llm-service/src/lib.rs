//! Ollama client used by the portfolio assistant.
//!
//! - [`services::ollama_service::OllamaService`] streams `/api/generate` and
//!   joins the NDJSON fragments into one answer.
//! - [`generator::TextGenerator`] is the seam the request path depends on.
//! - [`warmup`] fires the one-shot startup request.
//! - [`telemetry`] builds the shared `tracing` layer and filter.

pub mod config {
    pub mod default_config;
    pub mod llm_model_config;
}

pub mod services {
    pub mod ollama_service;
    pub mod stream_decoder;
}

pub mod error_handler;
pub mod generator;
pub mod telemetry;
pub mod warmup;

pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::{AiLlmError, ConfigError};
pub use generator::TextGenerator;
pub use services::ollama_service::OllamaService;
