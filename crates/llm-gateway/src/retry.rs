//! Bounded retry with exponential backoff around another gateway. Only
//! transient failures (network, timeout, rate limit) are retried; auth and
//! request errors return immediately.

use async_trait::async_trait;
use ostaad_core::{ChatTurn, ProviderError};
use std::time::Duration;
use tracing::warn;

use crate::{CompletionGateway, SamplingParams};

pub struct RetryingGateway<G> {
    inner: G,
    max_attempts: u32,
    base_delay: Duration,
}

impl<G> RetryingGateway<G> {
    /// `max_attempts` counts the first try: 3 means one call and up to two
    /// retries. Delay doubles per retry from `base_delay`.
    pub fn new(inner: G, max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }
}

#[async_trait]
impl<G: CompletionGateway> CompletionGateway for RetryingGateway<G> {
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatTurn],
        params: &SamplingParams,
    ) -> Result<String, ProviderError> {
        let mut attempt = 0u32;
        loop {
            match self.inner.complete(system_prompt, history, params).await {
                Ok(reply) => return Ok(reply),
                Err(e) if e.is_transient() && attempt + 1 < self.max_attempts => {
                    let delay = self.base_delay * 2u32.pow(attempt);
                    warn!(
                        attempt = attempt + 1,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "transient provider error, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Scripted gateway: pops one result per call and counts invocations.
    struct ScriptedGateway {
        calls: AtomicUsize,
        script: Mutex<Vec<Result<String, ProviderError>>>,
    }

    impl ScriptedGateway {
        fn new(script: Vec<Result<String, ProviderError>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                script: Mutex::new(script),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionGateway for ScriptedGateway {
        async fn complete(
            &self,
            _system_prompt: &str,
            _history: &[ChatTurn],
            _params: &SamplingParams,
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script.lock().unwrap().remove(0)
        }
    }

    fn params() -> SamplingParams {
        SamplingParams::default()
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_errors_are_retried_until_success() {
        let gateway = RetryingGateway::new(
            ScriptedGateway::new(vec![
                Err(ProviderError::Network("reset".into())),
                Err(ProviderError::Timeout(Duration::from_secs(45))),
                Ok("hello".into()),
            ]),
            3,
            Duration::from_millis(500),
        );
        let reply = gateway.complete("sys", &[], &params()).await.unwrap();
        assert_eq!(reply, "hello");
        assert_eq!(gateway.inner.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempts_are_bounded() {
        let gateway = RetryingGateway::new(
            ScriptedGateway::new(vec![
                Err(ProviderError::Network("a".into())),
                Err(ProviderError::Network("b".into())),
                Err(ProviderError::Network("c".into())),
            ]),
            3,
            Duration::from_millis(100),
        );
        let err = gateway.complete("sys", &[], &params()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Network(_)));
        assert_eq!(gateway.inner.calls(), 3);
    }

    #[tokio::test]
    async fn test_auth_errors_are_not_retried() {
        let gateway = RetryingGateway::new(
            ScriptedGateway::new(vec![Err(ProviderError::Auth("bad key".into()))]),
            3,
            Duration::from_millis(100),
        );
        let err = gateway.complete("sys", &[], &params()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Auth(_)));
        assert_eq!(gateway.inner.calls(), 1);
    }
}
