use std::time::Duration;

use super::sales_api::FetchError;

/// Default wait after HTTP 429
pub const DEFAULT_RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(2);

/// Default wait after a network failure
pub const DEFAULT_NETWORK_BACKOFF: Duration = Duration::from_secs(5);

/// Default pause between two successful page requests
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(300);

/// Fixed-backoff retry policy for page requests.
///
/// There is no attempt limit: transient failures only ever cost time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub rate_limit_backoff: Duration,
    pub network_backoff: Duration,
    pub page_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            rate_limit_backoff: DEFAULT_RATE_LIMIT_BACKOFF,
            network_backoff: DEFAULT_NETWORK_BACKOFF,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn new(rate_limit_backoff: Duration, network_backoff: Duration, page_delay: Duration) -> Self {
        Self {
            rate_limit_backoff,
            network_backoff,
            page_delay,
        }
    }

    /// No waiting at all
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }

    /// How long to wait before retrying after `err`, or `None` when `err` is not retryable
    pub fn backoff_for(&self, err: &FetchError) -> Option<Duration> {
        match err {
            FetchError::RateLimited => Some(self.rate_limit_backoff),
            FetchError::Network(_) => Some(self.network_backoff),
            FetchError::Unauthorized | FetchError::Status { .. } | FetchError::Decode(_) => None,
        }
    }
}
