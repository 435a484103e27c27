use async_trait::async_trait;

use crate::modules::sales::models::{DateWindow, SalesPage};

/// Why a single page request did not produce a page
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// HTTP 401: token invalid or expired
    #[error("token rejected by the sales API")]
    Unauthorized,

    /// HTTP 429
    #[error("rate limited by the sales API")]
    RateLimited,

    /// Connection failure, timeout, broken body or a 5xx answer
    #[error("network failure: {0}")]
    Network(String),

    /// Any other non-success status
    #[error("sales API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body arrived but is not a sales page
    #[error("could not decode sales page: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Upstream source of paginated sales
#[async_trait]
pub trait SalesApi: Send + Sync {
    /// Fetch one page (1-based) of the sales listed inside `window`
    async fn fetch_page(
        &self,
        token: &str,
        window: &DateWindow,
        page: u32,
    ) -> Result<SalesPage, FetchError>;

    /// Name used in logs
    fn name(&self) -> &str;
}
