use std::time::Duration;
use thiserror::Error;

/// Failure of the remote completion call. The only true fault in the system:
/// everything else (unknown language, ambiguous classification) degrades to a
/// heuristic fallback instead of an error.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("provider rejected request: {0}")]
    Api(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Whether a retry has a chance of succeeding. Auth and request errors do
    /// not get retried.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ProviderError::Network(_)
                | ProviderError::Timeout(_)
                | ProviderError::RateLimited(_)
        )
    }
}

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
