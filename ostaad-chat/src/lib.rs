//! # ostaad-chat
//!
//! The conversation orchestration core: for each incoming `(user, text)` pair
//! it resolves language, intercepts identity questions, classifies mood and
//! domain, maintains the rolling history window, builds the conditioned system
//! prompt, calls the completion gateway, post-processes the reply and chunks
//! it for delivery. [`ConversationOrchestrator`] is the public façade.

pub mod chunk;
pub mod enhance;
pub mod orchestrator;
pub mod prompt;

pub use chunk::split_message;
pub use enhance::ResponseEnhancer;
pub use orchestrator::{error_message, ConversationOrchestrator, DeliveryChunk};
pub use prompt::{PromptBuilder, PromptSpec};
