//! # ostaad-telegram
//!
//! The Telegram transport for Ostaad AI: configuration, the teloxide update
//! handler tree, and chunked delivery with typing simulation and the language
//! menu. The binary in `main.rs` wires this to the conversation core.

pub mod config;
pub mod delivery;
pub mod handlers;

pub use config::BotConfig;
pub use handlers::{schema, AppState, Command};
