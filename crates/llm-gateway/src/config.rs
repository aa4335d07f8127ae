//! Gateway configuration loaded from environment variables.

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Default chat-completions endpoint (Groq's OpenAI-compatible API).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// GROQ_API_KEY (or OPENAI_API_KEY when pointing at OpenAI).
    pub api_key: String,
    /// LLM_BASE_URL, defaults to the Groq endpoint.
    pub base_url: String,
    /// LLM_MODEL.
    pub model: String,
    /// REQUEST_TIMEOUT_SECS; timeout is treated as a transient provider error.
    pub request_timeout: Duration,
    /// MAX_RETRIES: total attempts for transient failures (first try included).
    pub max_retries: u32,
}

impl GatewayConfig {
    pub fn load() -> Result<Self> {
        let api_key = env::var("GROQ_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .map_err(|_| anyhow::anyhow!("GROQ_API_KEY (or OPENAI_API_KEY) not set"))?;
        let base_url = env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let request_timeout = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(45));
        let max_retries = env::var("MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3);

        let config = Self {
            api_key,
            base_url,
            model,
            request_timeout,
            max_retries,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("API key must not be empty");
        }
        if self.max_retries == 0 {
            anyhow::bail!("MAX_RETRIES must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_key() {
        let config = GatewayConfig {
            api_key: "  ".into(),
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            request_timeout: Duration::from_secs(45),
            max_retries: 3,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_reasonable_config() {
        let config = GatewayConfig {
            api_key: "k".into(),
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            request_timeout: Duration::from_secs(45),
            max_retries: 3,
        };
        assert!(config.validate().is_ok());
    }
}
