use async_trait::async_trait;

use crate::error_handler::Result;

/// Anything that turns a prompt into a completed answer.
///
/// [`crate::services::ollama_service::OllamaService`] is the production
/// implementation; tests substitute in-memory fakes.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a full answer for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
