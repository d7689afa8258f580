//! The Reply Orchestrator.
//!
//! `respond()` is the engine's single public entry point: profile the
//! message, capture a context snapshot, compose the augmented prompt,
//! call the chat service with the log plus the candidate user turn, and
//! append both turns only once a reply arrives.
//!
//! The conversation log lives behind a `tokio::sync::Mutex` that is held
//! across the chat call, so concurrent `respond` invocations are
//! serialized and their append pairs cannot interleave.

use crate::history::ConversationLog;
use crate::prompt;
use attune_config::AppConfig;
use attune_context::ContextProvider;
use attune_core::chat::{ChatProvider, ChatRequest};
use attune_core::error::{Error, Result};
use attune_core::message::Turn;
use attune_emotion::EmotionProfiler;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// The emotion-aware chat engine. One instance owns one conversation.
pub struct ChatEngine {
    profiler: EmotionProfiler,
    context: ContextProvider,
    chat: Arc<dyn ChatProvider>,
    history: Mutex<ConversationLog>,
    model: String,
    max_reply_tokens: u32,
    temperature: f32,
}

impl ChatEngine {
    pub fn new(
        profiler: EmotionProfiler,
        context: ContextProvider,
        chat: Arc<dyn ChatProvider>,
        config: &AppConfig,
    ) -> Self {
        Self {
            profiler,
            context,
            chat,
            history: Mutex::new(ConversationLog::new(
                config.history.max_turns,
                config.history.evict_count,
            )),
            model: config.chat_model.clone(),
            max_reply_tokens: config.max_reply_tokens,
            temperature: config.temperature,
        }
    }

    /// Process one user message and return the assistant's reply.
    ///
    /// The log is only mutated after a successful reply. On any failure it
    /// is identical to before the call, including when the log sits at
    /// capacity and an append would have evicted the oldest turns.
    pub async fn respond(&self, user_text: &str) -> Result<String> {
        // Profile and snapshot happen before any state is touched, so a
        // classification failure leaves the log byte-identical.
        let profile = self.profiler.profile(user_text).await?;
        let snapshot = self.context.snapshot().await;

        let composed = prompt::compose(&snapshot.describe(), &profile, user_text);

        debug!(
            dominant = %profile.dominant,
            blend = %profile.blend,
            prompt_chars = composed.len(),
            "Assembled prompt"
        );

        // Held across the chat call: serializes concurrent turns.
        let mut history = self.history.lock().await;

        // The candidate user turn rides along in the request but is not
        // stored yet; appending could evict at capacity, which a failed
        // call must not do.
        let user_turn = Turn::user(composed);
        let mut messages = history.to_messages();
        messages.push(user_turn.clone());

        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: Some(self.max_reply_tokens),
            temperature: self.temperature,
        };

        let reply = match self.chat.complete(request).await {
            Ok(response) => response.content.trim().to_string(),
            Err(e) => {
                warn!("Chat completion failed, conversation log left untouched: {e}");
                return Err(Error::Chat(e));
            }
        };

        history.append(user_turn);
        history.append(Turn::assistant(reply.clone()));
        info!(turns = history.len(), reply_chars = reply.len(), "Turn complete");

        Ok(reply)
    }

    /// Number of turns currently stored.
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use attune_context::{WeatherCache, WEATHER_UNAVAILABLE};
    use attune_core::chat::ChatResponse;
    use attune_core::classifier::Classifier;
    use attune_core::emotion::EmotionScore;
    use attune_core::error::{ChatError, ClassifierError, TelemetryError};
    use attune_core::message::Role;
    use attune_core::telemetry::{SystemProbe, WeatherSource};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct StubClassifier {
        scores: Vec<EmotionScore>,
        fail: bool,
    }

    #[async_trait]
    impl Classifier for StubClassifier {
        fn name(&self) -> &str {
            "stub"
        }

        async fn classify(
            &self,
            _text: &str,
        ) -> std::result::Result<Vec<EmotionScore>, ClassifierError> {
            if self.fail {
                Err(ClassifierError::Network("down".into()))
            } else {
                Ok(self.scores.clone())
            }
        }
    }

    /// Records the last request it saw; failure can be toggled mid-test.
    struct StubChat {
        reply: String,
        fail: std::sync::atomic::AtomicBool,
        calls: AtomicUsize,
        last_request: Mutex<Option<ChatRequest>>,
    }

    impl StubChat {
        fn new(reply: &str, fail: bool) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.into(),
                fail: std::sync::atomic::AtomicBool::new(fail),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }

        fn set_fail(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl ChatProvider for StubChat {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(
            &self,
            request: ChatRequest,
        ) -> std::result::Result<ChatResponse, ChatError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().await = Some(request);
            if self.fail.load(Ordering::SeqCst) {
                Err(ChatError::Network("connection refused".into()))
            } else {
                Ok(ChatResponse {
                    content: self.reply.clone(),
                    model: "stub-model".into(),
                })
            }
        }
    }

    struct StubProbe;

    impl SystemProbe for StubProbe {
        fn cpu_percent(&self) -> f32 {
            10.0
        }

        fn battery_percent(&self) -> Option<f32> {
            Some(75.0)
        }
    }

    struct StubWeather;

    #[async_trait]
    impl WeatherSource for StubWeather {
        async fn fetch(
            &self,
            _timeout: Duration,
        ) -> std::result::Result<String, TelemetryError> {
            Err(TelemetryError::WeatherFetch("offline".into()))
        }
    }

    fn engine_with(classifier: StubClassifier, chat: Arc<StubChat>) -> ChatEngine {
        let config = AppConfig::default();
        ChatEngine::new(
            EmotionProfiler::new(Arc::new(classifier)),
            ContextProvider::new(
                Arc::new(StubProbe),
                WeatherCache::new(
                    Arc::new(StubWeather),
                    Duration::from_secs(300),
                    Duration::from_secs(2),
                ),
            ),
            chat,
            &config,
        )
    }

    fn happy_classifier() -> StubClassifier {
        StubClassifier {
            scores: vec![
                EmotionScore::new("joy", 0.8),
                EmotionScore::new("fear", 0.3),
                EmotionScore::new("surprise", 0.1),
            ],
            fail: false,
        }
    }

    #[tokio::test]
    async fn respond_returns_trimmed_reply_and_stores_both_turns() {
        let chat = StubChat::new("  Glad to hear it!  \n", false);
        let engine = engine_with(happy_classifier(), chat.clone());

        let reply = engine.respond("I am so happy and a little nervous").await.unwrap();

        assert_eq!(reply, "Glad to hear it!");
        assert_eq!(engine.history_len().await, 2);
    }

    #[tokio::test]
    async fn assembled_prompt_reaches_the_chat_service() {
        let chat = StubChat::new("ok", false);
        let engine = engine_with(happy_classifier(), chat.clone());

        engine.respond("I am so happy and a little nervous").await.unwrap();

        let request = chat.last_request.lock().await.take().unwrap();
        assert_eq!(request.model, "mistral:7b-instruct-q5_0");
        assert_eq!(request.max_tokens, Some(150));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);

        let prompt = &request.messages[0].content;
        // The stored user turn holds the composed prompt, not raw text.
        assert!(prompt.contains("User: I am so happy and a little nervous"));
        assert!(prompt.contains("a mix of joy, fear and surprise"));
        assert!(prompt.contains("positive and cheerful tone"));
        assert!(prompt.contains(WEATHER_UNAVAILABLE));
        assert!(prompt.contains("Battery 75%"));
    }

    #[tokio::test]
    async fn chat_failure_rolls_back_the_user_turn() {
        let chat = StubChat::new("fine", false);
        let engine = engine_with(happy_classifier(), chat.clone());

        // Seed one successful exchange so there is prior state to protect.
        engine.respond("hello").await.unwrap();
        let before = engine.history_len().await;
        assert_eq!(before, 2);

        chat.set_fail(true);
        let err = engine.respond("hello again").await.unwrap_err();
        assert!(matches!(err, Error::Chat(_)));
        // No orphaned user turn: length unchanged from before the call.
        assert_eq!(engine.history_len().await, before);
    }

    #[tokio::test]
    async fn chat_failure_at_capacity_evicts_nothing() {
        let chat = StubChat::new("reply", false);
        let engine = engine_with(happy_classifier(), chat.clone());

        // 6 exchanges fill the log to exactly max_turns without eviction.
        for i in 0..6 {
            engine.respond(&format!("message {i}")).await.unwrap();
        }
        assert_eq!(engine.history_len().await, 12);

        chat.set_fail(true);
        let err = engine.respond("one too many").await.unwrap_err();
        assert!(matches!(err, Error::Chat(_)));
        // The failed turn must not trigger the over-capacity eviction.
        assert_eq!(engine.history_len().await, 12);

        // Contents survive too: the next successful request still opens
        // with the oldest stored turn.
        chat.set_fail(false);
        engine.respond("recovered").await.unwrap();
        let request = chat.last_request.lock().await.take().unwrap();
        assert_eq!(request.messages.len(), 13);
        assert!(request.messages[0].content.contains("User: message 0"));
    }

    #[tokio::test]
    async fn classifier_failure_leaves_state_untouched() {
        let chat = StubChat::new("never called", false);
        let engine = engine_with(
            StubClassifier {
                scores: vec![],
                fail: true,
            },
            chat.clone(),
        );

        let err = engine.respond("anything").await.unwrap_err();
        assert!(matches!(err, Error::Classifier(_)));
        assert_eq!(engine.history_len().await, 0);
        assert_eq!(chat.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn history_grows_by_two_per_successful_turn() {
        let chat = StubChat::new("reply", false);
        let engine = engine_with(happy_classifier(), chat.clone());

        for i in 0..3 {
            engine.respond(&format!("message {i}")).await.unwrap();
        }
        assert_eq!(engine.history_len().await, 6);
    }

    #[tokio::test]
    async fn sustained_turns_stay_within_the_history_cap() {
        let chat = StubChat::new("reply", false);
        let engine = engine_with(happy_classifier(), chat.clone());

        for i in 0..10 {
            engine.respond(&format!("message {i}")).await.unwrap();
        }
        // 20 appends against a cap of 12 with pairs evicted along the way.
        assert!(engine.history_len().await <= 12);
    }

    #[tokio::test]
    async fn concurrent_turns_do_not_interleave_appends() {
        let chat = StubChat::new("reply", false);
        let engine = Arc::new(engine_with(happy_classifier(), chat.clone()));

        let mut handles = Vec::new();
        for i in 0..4 {
            let engine = engine.clone();
            handles.push(tokio::spawn(async move {
                engine.respond(&format!("concurrent {i}")).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // 4 turns, each appending a user/assistant pair atomically.
        assert_eq!(engine.history_len().await, 8);
    }
}
