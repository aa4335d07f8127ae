//! Bot identity strings shared by canned responses, the system prompt, and
//! the start screen.

pub const BOT_NAME: &str = "Ostaad AI";
pub const VERSION: &str = "v3.0.0";
pub const DEVELOPER: &str = "Ahmad Raza";
pub const POWERED_BY: &str = "⚡ Powered by Ostaad AI Engine";
pub const TAGLINE: &str = "Your Digital Ustad - Har Sawal Ka Jawab! 🎯";
