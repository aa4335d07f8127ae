//! The per-turn pipeline behind [`ConversationOrchestrator::handle_message`]:
//! resolve language, intercept identity questions, classify mood and domain,
//! append to history, build the system prompt, call the gateway, enhance and
//! chunk the reply. Provider failures never escape: the user gets canned
//! apology text in their language and the turn ends cleanly.

use crate::chunk::split_message;
use crate::enhance::ResponseEnhancer;
use crate::prompt::{PromptBuilder, PromptSpec};
use classify::{DomainClassifier, IdentityInterceptor, MoodClassifier};
use dashmap::DashMap;
use language::LanguageDetector;
use llm_gateway::{CompletionGateway, SamplingParams};
use ostaad_core::{ChatTurn, LanguageCode};
use session::{PreferenceStore, SessionStore};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Telegram's hard per-message limit.
pub const DEFAULT_CHUNK_LIMIT: usize = 4096;

/// One outbound message piece with its delivery hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryChunk {
    pub text: String,
    /// Show a typing indicator before this piece (first piece only).
    pub simulate_typing: bool,
    /// Attach the language menu to this piece (last piece only).
    pub attach_menu: bool,
}

/// Canned apology shown when the provider fails after retries.
pub fn error_message(language: LanguageCode) -> String {
    match language {
        LanguageCode::Hi => "😔 Sorry bhai, thodi technical problem aa gayi hai. \
                             Ek minute mein phir se try karo na 🙏"
            .to_string(),
        _ => "😔 Sorry, I ran into a technical problem. \
              Please try again in a minute 🙏"
            .to_string(),
    }
}

/// Façade over the whole conversation pipeline. Cheap to clone pieces are
/// owned directly; the gateway sits behind `Arc<dyn _>` so transports and
/// tests can swap it.
pub struct ConversationOrchestrator {
    detector: LanguageDetector,
    moods: MoodClassifier,
    domains: DomainClassifier,
    identity: IdentityInterceptor,
    prompts: PromptBuilder,
    enhancer: ResponseEnhancer,
    sessions: SessionStore,
    prefs: PreferenceStore,
    gateway: Arc<dyn CompletionGateway>,
    params: SamplingParams,
    chunk_limit: usize,
    // One mutex per user, held across the whole turn so a second message from
    // the same user queues instead of interleaving with the first.
    turn_locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl ConversationOrchestrator {
    pub fn new(
        gateway: Arc<dyn CompletionGateway>,
        sessions: SessionStore,
        prefs: PreferenceStore,
        detector: LanguageDetector,
    ) -> Self {
        Self {
            detector,
            moods: MoodClassifier::new(),
            domains: DomainClassifier::new(),
            identity: IdentityInterceptor::new(),
            prompts: PromptBuilder::new(),
            enhancer: ResponseEnhancer::new(),
            sessions,
            prefs,
            gateway,
            params: SamplingParams::default(),
            chunk_limit: DEFAULT_CHUNK_LIMIT,
            turn_locks: DashMap::new(),
        }
    }

    pub fn with_chunk_limit(mut self, chunk_limit: usize) -> Self {
        self.chunk_limit = chunk_limit;
        self
    }

    pub fn with_enhancer(mut self, enhancer: ResponseEnhancer) -> Self {
        self.enhancer = enhancer;
        self
    }

    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    /// Runs one full turn for `(user_id, text)` and returns the pieces to
    /// deliver, in order. Never errors: provider failures become canned text.
    pub async fn handle_message(&self, user_id: i64, text: &str) -> Vec<DeliveryChunk> {
        let turn_lock = self
            .turn_locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _turn = turn_lock.lock().await;

        let language = self.resolve_language(user_id, text).await;
        debug!(user_id, language = language.code(), "step: language resolved");

        if let Some(reply) = self.identity.try_intercept(text, language) {
            // Canned identity answers bypass history and the model entirely.
            info!(user_id, "step: identity question intercepted");
            return self.to_chunks(&reply);
        }

        let mood = self.moods.classify(text);
        let (domain, domain_confidence) = self.domains.classify(text, language);
        self.sessions.record_classification(user_id, mood, domain).await;
        debug!(
            user_id,
            mood = mood.as_str(),
            domain = domain.as_str(),
            domain_confidence,
            "step: message classified"
        );

        self.sessions.append(user_id, ChatTurn::user(text)).await;

        let system_prompt = self.prompts.build(&PromptSpec {
            language,
            mood,
            domain,
            domain_confidence,
        });
        let history = self.sessions.history(user_id).await;

        match self.gateway.complete(&system_prompt, &history, &self.params).await {
            Ok(reply) => {
                let enhanced = self.enhancer.enhance(&reply, mood);
                self.sessions
                    .append(user_id, ChatTurn::assistant(enhanced.clone()))
                    .await;
                info!(user_id, reply_chars = enhanced.chars().count(), "step: reply ready");
                self.to_chunks(&enhanced)
            }
            Err(e) => {
                // The user turn stays in history; no assistant turn is added,
                // so a retried question still reads as unanswered.
                error!(user_id, error = %e, "completion failed");
                self.to_chunks(&error_message(language))
            }
        }
    }

    /// Clears history and classification state. Language stays sticky.
    pub async fn reset(&self, user_id: i64) {
        self.sessions.clear(user_id).await;
        info!(user_id, "session reset");
    }

    /// Records an explicit language choice in the session and on disk.
    pub async fn set_language(&self, user_id: i64, code: LanguageCode) {
        self.sessions.set_language(user_id, code).await;
        self.prefs.set_language(user_id, code).await;
        info!(user_id, language = code.code(), "language preference set");
    }

    pub async fn language(&self, user_id: i64) -> Option<LanguageCode> {
        self.sessions.language(user_id).await
    }

    /// Session choice first, then the persisted preference, then detection.
    /// A detected language is persisted so later short messages ("ok", "haan")
    /// keep the established language instead of falling to the default.
    async fn resolve_language(&self, user_id: i64, text: &str) -> LanguageCode {
        if let Some(code) = self.sessions.language(user_id).await {
            return code;
        }
        if let Some(code) = self.prefs.language(user_id).await {
            self.sessions.set_language(user_id, code).await;
            return code;
        }
        let detected = self.detector.detect(text);
        self.sessions.set_language(user_id, detected).await;
        self.prefs.set_language(user_id, detected).await;
        detected
    }

    fn to_chunks(&self, text: &str) -> Vec<DeliveryChunk> {
        let pieces = split_message(text, self.chunk_limit);
        let last = pieces.len().saturating_sub(1);
        pieces
            .into_iter()
            .enumerate()
            .map(|(i, text)| DeliveryChunk {
                text,
                simulate_typing: i == 0,
                attach_menu: i == last,
            })
            .collect()
    }
}
