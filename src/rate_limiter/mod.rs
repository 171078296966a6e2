use log::debug;
use std::time::Duration;
use tokio::time::sleep;

/// Spaces out consecutive page fetches against the results site.
///
/// The first fetch of a load goes out at once; every later one waits the
/// configured delay. A zero delay never sleeps.
pub struct RateLimiter {
    delay: Duration,
    pages_fetched: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pages_fetched: 0,
        }
    }

    /// Wait, if needed, before fetching `url`.
    pub async fn before_fetch(&mut self, url: &str) {
        if self.pages_fetched > 0 && !self.delay.is_zero() {
            debug!("Waiting {:?} before {}", self.delay, url);
            sleep(self.delay).await;
        }
        self.pages_fetched += 1;
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}
