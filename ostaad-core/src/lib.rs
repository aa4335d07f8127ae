//! # ostaad-core
//!
//! Shared foundation for the Ostaad bot workspace: domain types (chat turns,
//! language codes, mood and domain tags), the error taxonomy, and tracing setup.

pub mod brand;
pub mod error;
pub mod logger;
pub mod types;

pub use error::{BotError, ProviderError, Result};
pub use logger::init_tracing;
pub use types::{ChatRole, ChatTurn, DomainTag, LanguageCode, MoodTag};
