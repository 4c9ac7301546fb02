//! One-shot model warm-up.
//!
//! Ollama loads the model lazily, so the first real request pays the load
//! cost. A tiny generation at startup moves that cost off the request path.
//! Failures never surface: the task logs at debug level and ends.

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::{default_config::warmup_config, llm_model_config::LlmModelConfig};
use crate::services::ollama_service::OllamaService;

pub const WARMUP_PROMPT: &str = "Say hello in one sentence.";

/// Sends the warm-up request once. Never fails.
pub async fn warm_up(answer_cfg: &LlmModelConfig) {
    let cfg = warmup_config(answer_cfg);
    let svc = match OllamaService::new(cfg) {
        Ok(svc) => svc,
        Err(err) => {
            debug!(error = %err, "warm-up skipped");
            return;
        }
    };

    match svc.ping_generate(WARMUP_PROMPT).await {
        Ok(bytes) => info!(model = %answer_cfg.model, bytes, "model warmed up"),
        Err(err) => debug!(error = %err, "warm-up failed"),
    }
}

/// Spawns [`warm_up`] on the current runtime.
///
/// The caller owns the handle and aborts it on shutdown; nothing awaits it.
pub fn spawn_warmup(answer_cfg: LlmModelConfig) -> JoinHandle<()> {
    tokio::spawn(async move { warm_up(&answer_cfg).await })
}
