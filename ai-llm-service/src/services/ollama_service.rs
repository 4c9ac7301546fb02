//! Lightweight Ollama service for streaming text generation.
//!
//! This module implements a thin client for the local Ollama API:
//! - `POST {endpoint}/api/generate` with `stream=true`, decoded line by line
//!   through [`StreamDecoder`] and joined into one answer string.
//!
//! # Examples
//!
//! ```no_run
//! use ai_llm_service::config::default_config::config_ollama_answer;
//! use ai_llm_service::services::ollama_service::OllamaService;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svc = OllamaService::new(config_ollama_answer()?)?;
//! let text = svc.generate_streaming("Write a haiku about Rust.").await?;
//! println!("Generated:\n{}", text);
//! # Ok(()) }
//! ```

use std::time::{Duration, Instant};

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, error, instrument};

use crate::config::llm_model_config::LlmModelConfig;
use crate::error_handler::{AiLlmError, Result, make_snippet, validate_http_endpoint};
use crate::generator::TextGenerator;
use crate::services::stream_decoder::StreamDecoder;

/// Thin streaming client for Ollama.
///
/// Initialized with a full [`LlmModelConfig`]. Reuses one HTTP client whose
/// timeout covers the whole exchange, stream included.
pub struct OllamaService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_generate: String,
}

impl OllamaService {
    /// Creates a new [`OllamaService`] from the given config.
    ///
    /// # Errors
    /// - [`AiLlmError::Config`] if `cfg.endpoint` is not an http(s) URL
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self> {
        validate_http_endpoint("OLLAMA_URL", cfg.endpoint.trim())?;

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let url_generate = cfg.generate_url();

        Ok(Self {
            client,
            cfg,
            url_generate,
        })
    }

    /// Performs a **streaming** generation request via `/api/generate`.
    ///
    /// Mapped options:
    /// - `num_predict`  ← `self.cfg.max_tokens`
    /// - `temperature`  ← `self.cfg.temperature`
    /// - `num_ctx`      ← `self.cfg.num_ctx`
    ///
    /// # Errors
    /// - [`AiLlmError::HttpStatus`] for any status other than 200
    /// - [`AiLlmError::HttpTransport`] for client/stream errors and timeouts
    /// - [`AiLlmError::Decode`] if a line is not a JSON object
    /// - [`AiLlmError::Upstream`] if Ollama reports an error mid-stream
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate_streaming(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest::from_cfg(&self.cfg, prompt);
        let started = Instant::now();

        debug!("POST {}", self.url_generate);
        let resp = self
            .client
            .post(&self.url_generate)
            .json(&body)
            .send()
            .await?;
        let resp = self.ensure_ok(resp).await.inspect_err(|err| {
            error!(url = %self.url_generate, error = %err, "generate failed");
        })?;

        let mut decoder = StreamDecoder::new();
        let mut stream = resp.bytes_stream();
        while let Some(chunk) = stream.next().await {
            if decoder.feed(&chunk?)? {
                break;
            }
        }

        let finished = decoder.is_done();
        let answer = decoder.finish()?;
        debug!(
            chars = answer.len(),
            finished,
            latency_ms = started.elapsed().as_millis() as u64,
            "generate stream consumed"
        );
        Ok(answer)
    }

    /// Fires a request and reads the whole body without decoding it.
    ///
    /// Used by the warm-up task. The body is drained within the client
    /// timeout so the generation runs to completion upstream. Returns the
    /// number of body bytes received.
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn ping_generate(&self, prompt: &str) -> Result<usize> {
        let body = GenerateRequest::from_cfg(&self.cfg, prompt);
        let resp = self
            .client
            .post(&self.url_generate)
            .json(&body)
            .send()
            .await?;
        let resp = self.ensure_ok(resp).await?;

        Ok(resp.bytes().await?.len())
    }

    /// Anything other than `200 OK` becomes [`AiLlmError::HttpStatus`].
    /// Logging is left to the caller.
    async fn ensure_ok(&self, resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if status == StatusCode::OK {
            return Ok(resp);
        }

        let text = resp.text().await.unwrap_or_default();
        Err(AiLlmError::HttpStatus {
            status,
            url: self.url_generate.clone(),
            snippet: make_snippet(&text),
        })
    }
}

#[async_trait]
impl TextGenerator for OllamaService {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_streaming(prompt).await
    }
}

/* ==========================
HTTP payloads & options
========================== */

/// Request body for `/api/generate`.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

impl<'a> GenerateRequest<'a> {
    /// Builds a streaming request from config and prompt.
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a str) -> Self {
        Self {
            model: &cfg.model,
            prompt,
            stream: true,
            options: GenerateOptions {
                temperature: cfg.temperature,
                num_predict: cfg.max_tokens,
                num_ctx: cfg.num_ctx,
            },
        }
    }
}

/// Subset of Ollama `options`.
#[derive(Debug, Default, Serialize)]
struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_ctx: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config::{answer_config, warmup_config};

    #[test]
    fn answer_payload_shape() {
        let cfg = answer_config("http://localhost:11434".into(), "mistral".into(), None).unwrap();
        let v = serde_json::to_value(GenerateRequest::from_cfg(&cfg, "q")).unwrap();
        assert_eq!(v["model"], "mistral");
        assert_eq!(v["prompt"], "q");
        assert_eq!(v["stream"], true);
        assert_eq!(v["options"]["num_predict"], 80);
        assert_eq!(v["options"]["num_ctx"], 4096);
        let temp = v["options"]["temperature"].as_f64().unwrap();
        assert!((temp - 0.2).abs() < 1e-6);
    }

    #[test]
    fn warmup_payload_only_caps_tokens() {
        let cfg = answer_config("http://localhost:11434".into(), "mistral".into(), None).unwrap();
        let warm = warmup_config(&cfg);
        let v = serde_json::to_value(GenerateRequest::from_cfg(&warm, "hello")).unwrap();
        assert_eq!(v["options"], serde_json::json!({ "num_predict": 10 }));
        assert_eq!(v["stream"], true);
    }

    #[test]
    fn rejects_endpoint_without_scheme() {
        let mut cfg =
            answer_config("http://localhost:11434".into(), "mistral".into(), None).unwrap();
        cfg.endpoint = "localhost:11434".into();
        assert!(OllamaService::new(cfg).is_err());
    }
}
