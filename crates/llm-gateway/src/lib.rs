//! # llm-gateway
//!
//! The remote completion call abstraction. [`CompletionGateway`] is the only
//! seam the orchestration core sees; [`OpenAiGateway`] implements it against
//! any OpenAI-compatible endpoint (Groq by default), and [`RetryingGateway`]
//! wraps another gateway with bounded exponential backoff for transient
//! failures. Every failure surfaces as [`ProviderError`]; callers substitute
//! canned text rather than propagating it to the transport.

use async_trait::async_trait;
use ostaad_core::{ChatTurn, ProviderError};

mod config;
mod openai_gateway;
mod retry;

pub use config::GatewayConfig;
pub use openai_gateway::OpenAiGateway;
pub use retry::RetryingGateway;

/// Sampling parameters for one completion request.
#[derive(Debug, Clone)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for SamplingParams {
    /// The tuned values: higher temperature for human-like replies, mild
    /// penalties against repetition.
    fn default() -> Self {
        Self {
            max_tokens: 4000,
            temperature: 0.8,
            top_p: 0.9,
            frequency_penalty: 0.1,
            presence_penalty: 0.1,
        }
    }
}

/// Remote completion endpoint contract.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Returns the assistant reply text for the given system prompt and
    /// conversation history.
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatTurn],
        params: &SamplingParams,
    ) -> Result<String, ProviderError>;
}
