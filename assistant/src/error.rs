//! Typed error for the assistant crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    /// Generation failed: HTTP status, transport, or stream decoding.
    #[error(transparent)]
    Llm(#[from] ai_llm_service::AiLlmError),
}
