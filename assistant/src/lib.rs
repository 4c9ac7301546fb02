//! Question answering for the portfolio assistant.
//!
//! Public API: [`Assistant::ask`]. It normalizes the question, short-circuits
//! bare greetings, classifies the intent by keywords, consults the answer
//! cache (never for architecture), builds a prompt around one static context
//! block, and asks the model through [`TextGenerator`].

pub mod cache;
pub mod cfg;
pub mod context;
mod error;
pub mod intent;
pub mod prompt;

use std::sync::Arc;

use ai_llm_service::TextGenerator;
use tracing::{debug, info};

pub use cache::{AnswerCache, InMemoryAnswerCache};
pub use cfg::AssistantConfig;
pub use error::AssistantError;
pub use intent::Intent;

/// Canned reply for bare greetings.
pub const GREETING_REPLY: &str =
    "Hi 👋 How can I help? You can ask about my projects, GenAI work, or system design.";

/// Normalized inputs answered with [`GREETING_REPLY`].
const GREETINGS: [&str; 4] = ["hi", "hello", "hey", "hii"];

/// Routing/caching form of a question: trimmed and lowercased.
pub fn normalize(question: &str) -> String {
    question.trim().to_lowercase()
}

/// `true` when the normalized question is exactly a bare greeting.
pub fn is_greeting(normalized: &str) -> bool {
    GREETINGS.contains(&normalized)
}

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Greeting,
    Cache,
    Model,
}

/// Answer plus routing details for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    /// `None` for the greeting short-circuit.
    pub intent: Option<Intent>,
    pub source: AnswerSource,
}

/// Orchestrates classification, caching, prompting and generation.
///
/// Cheap to clone; the generator and cache are shared.
#[derive(Clone)]
pub struct Assistant {
    generator: Arc<dyn TextGenerator>,
    cache: Arc<dyn AnswerCache>,
}

impl Assistant {
    pub fn new(generator: Arc<dyn TextGenerator>, cache: Arc<dyn AnswerCache>) -> Self {
        Self { generator, cache }
    }

    /// Uses an [`InMemoryAnswerCache`] sized by `cfg`.
    pub fn with_config(generator: Arc<dyn TextGenerator>, cfg: &AssistantConfig) -> Self {
        let cache = InMemoryAnswerCache::new(cfg.cache_capacity, cfg.cache_ttl);
        Self::new(generator, Arc::new(cache))
    }

    /// Answers one question.
    ///
    /// # Errors
    /// Propagates [`AssistantError::Llm`] when the model call fails. Nothing is
    /// cached in that case.
    pub async fn ask(&self, question: &str) -> Result<Answer, AssistantError> {
        let key = normalize(question);

        if is_greeting(&key) {
            return Ok(Answer {
                text: GREETING_REPLY.to_string(),
                intent: None,
                source: AnswerSource::Greeting,
            });
        }

        let intent = Intent::classify(&key);
        debug!(%intent, "classified question");

        if intent.is_cacheable() {
            if let Some(text) = self.cache.get(&key).await {
                debug!(%intent, "cache hit");
                return Ok(Answer {
                    text,
                    intent: Some(intent),
                    source: AnswerSource::Cache,
                });
            }
        }

        let prompt = prompt::build_prompt(question, intent);
        let text = self.generator.generate(&prompt).await?;
        info!(%intent, chars = text.len(), "model answered");

        if intent.is_cacheable() {
            self.cache.put(key, text.clone()).await;
        }

        Ok(Answer {
            text,
            intent: Some(intent),
            source: AnswerSource::Model,
        })
    }
}
