//! Inter-fetch pacing.
//!
//! The crawl pauses between external fetch calls to stay inside the API's
//! rate limits. The pause is a policy value, not an algorithm, so it is
//! expressed as an injectable strategy and tests run with no delay at all.

use std::time::Duration;

use async_trait::async_trait;

/// Pause applied between consecutive fetch calls.
#[async_trait]
pub trait WaitStrategy: Send + Sync {
    async fn wait(&self);
}

/// Flat fixed delay between fetches.
#[derive(Debug, Clone)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::from_millis(100)
    }
}

#[async_trait]
impl WaitStrategy for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// No pause at all. Test-only pacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWait;

#[async_trait]
impl WaitStrategy for NoWait {
    async fn wait(&self) {}
}
