use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use ai_llm_service::{AiLlmError, TextGenerator};
use assistant::{
    AnswerCache, AnswerSource, Assistant, AssistantConfig, GREETING_REPLY, InMemoryAnswerCache,
    Intent, context::PROJECTS_CONTEXT,
};
use async_trait::async_trait;

/// Counts calls, records prompts, and answers `answer #{n}` (or fails).
#[derive(Default)]
struct FakeGenerator {
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeGenerator {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> ai_llm_service::error_handler::Result<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(AiLlmError::Upstream("model not loaded".into()));
        }
        Ok(format!("answer #{n}"))
    }
}

fn setup() -> (Arc<FakeGenerator>, Assistant) {
    let generator = Arc::new(FakeGenerator::default());
    let assistant = Assistant::with_config(generator.clone(), &AssistantConfig::default());
    (generator, assistant)
}

#[tokio::test]
async fn bare_greetings_short_circuit() {
    let (generator, assistant) = setup();
    for q in ["hi", "  HELLO ", "Hey", "hii\n"] {
        let answer = assistant.ask(q).await.unwrap();
        assert_eq!(answer.text, GREETING_REPLY);
        assert_eq!(answer.source, AnswerSource::Greeting);
        assert_eq!(answer.intent, None);
    }
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn repeated_question_is_served_from_cache() {
    let (generator, assistant) = setup();

    let first = assistant.ask("What skills do you have in Python?").await.unwrap();
    let second = assistant.ask("  what skills do you have in python?").await.unwrap();

    assert_eq!(first.text, "answer #1");
    assert_eq!(first.source, AnswerSource::Model);
    assert_eq!(first.intent, Some(Intent::Skills));
    assert_eq!(second.text, "answer #1");
    assert_eq!(second.source, AnswerSource::Cache);
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn architecture_questions_always_hit_the_model() {
    let (generator, assistant) = setup();

    let q = "Explain the architecture of your VPC project";
    let first = assistant.ask(q).await.unwrap();
    let second = assistant.ask(q).await.unwrap();

    assert_eq!(first.intent, Some(Intent::Architecture));
    assert_eq!(first.text, "answer #1");
    assert_eq!(second.text, "answer #2");
    assert_eq!(second.source, AnswerSource::Model);
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn architecture_answers_are_not_stored() {
    let generator = Arc::new(FakeGenerator::default());
    let cache = Arc::new(InMemoryAnswerCache::new(8, None));
    let assistant = Assistant::new(generator.clone(), cache.clone());

    assistant.ask("walk me through the request flow").await.unwrap();
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn prompt_carries_intent_context_and_original_casing() {
    let (generator, assistant) = setup();

    let answer = assistant.ask("Tell me about your VPC project").await.unwrap();
    assert_eq!(answer.intent, Some(Intent::Projects));

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(PROJECTS_CONTEXT.trim()));
    assert!(prompts[0].contains("User Question:\nTell me about your VPC project"));
}

#[tokio::test]
async fn failures_propagate_and_are_not_cached() {
    let generator = Arc::new(FakeGenerator::failing());
    let cache = Arc::new(InMemoryAnswerCache::new(8, None));
    let assistant = Assistant::new(generator.clone(), cache.clone());

    let err = assistant.ask("what is nova?").await.unwrap_err();
    assert!(err.to_string().contains("model not loaded"));
    assert_eq!(cache.get("what is nova?").await, None);

    assistant.ask("what is nova?").await.unwrap_err();
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn disabled_cache_recomputes_everything() {
    let generator = Arc::new(FakeGenerator::default());
    let cfg = AssistantConfig {
        cache_capacity: 0,
        cache_ttl: None,
    };
    let assistant = Assistant::with_config(generator.clone(), &cfg);

    assistant.ask("what is smartdocx").await.unwrap();
    let again = assistant.ask("what is smartdocx").await.unwrap();
    assert_eq!(again.text, "answer #2");
    assert_eq!(generator.calls(), 2);
}
