//! Transport configuration loaded from environment variables.

use anyhow::Result;
use ostaad_core::LanguageCode;
use session::DEFAULT_HISTORY_CAP;
use std::env;
use std::time::Duration;

pub const DEFAULT_PREFS_FILE: &str = "./data/user_preferences.json";
pub const DEFAULT_LOG_FILE: &str = "logs/ostaad-bot.log";

/// Telegram caps a single message at 4096 characters.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN.
    pub bot_token: String,
    /// PREFS_FILE: language preference JSON file.
    pub prefs_file: String,
    /// LOG_FILE.
    pub log_file: String,
    /// DEFAULT_LANGUAGE: fallback when detection gives nothing usable.
    pub default_language: LanguageCode,
    /// MAX_MESSAGE_LENGTH: outbound chunk limit.
    pub max_message_length: usize,
    /// TYPING_DELAY_SECS: pause shown before the first chunk of a turn.
    pub typing_delay: Duration,
    /// HISTORY_CAP: rolling history entries kept per user.
    pub history_cap: usize,
}

impl BotConfig {
    pub fn load() -> Result<Self> {
        let bot_token =
            env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let prefs_file =
            env::var("PREFS_FILE").unwrap_or_else(|_| DEFAULT_PREFS_FILE.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let default_language = env::var("DEFAULT_LANGUAGE")
            .ok()
            .and_then(|s| LanguageCode::from_code(&s))
            .unwrap_or(LanguageCode::En);
        let max_message_length = env::var("MAX_MESSAGE_LENGTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(TELEGRAM_MESSAGE_LIMIT);
        let typing_delay = env::var("TYPING_DELAY_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(3));
        let history_cap = env::var("HISTORY_CAP")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HISTORY_CAP);

        let config = Self {
            bot_token,
            prefs_file,
            log_file,
            default_language,
            max_message_length,
            typing_delay,
            history_cap,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN must not be empty");
        }
        if self.max_message_length == 0 || self.max_message_length > TELEGRAM_MESSAGE_LIMIT {
            anyhow::bail!(
                "MAX_MESSAGE_LENGTH must be between 1 and {TELEGRAM_MESSAGE_LIMIT}"
            );
        }
        if self.history_cap == 0 {
            anyhow::bail!("HISTORY_CAP must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BotConfig {
        BotConfig {
            bot_token: "123:abc".into(),
            prefs_file: DEFAULT_PREFS_FILE.into(),
            log_file: DEFAULT_LOG_FILE.into(),
            default_language: LanguageCode::En,
            max_message_length: TELEGRAM_MESSAGE_LIMIT,
            typing_delay: Duration::from_secs(3),
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        let mut c = config();
        c.bot_token = "  ".into();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_chunk_limit() {
        let mut c = config();
        c.max_message_length = TELEGRAM_MESSAGE_LIMIT + 1;
        assert!(c.validate().is_err());
        c.max_message_length = 0;
        assert!(c.validate().is_err());
    }
}
