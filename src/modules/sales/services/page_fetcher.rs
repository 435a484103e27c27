use std::sync::Arc;

use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use super::retry_policy::RetryPolicy;
use super::sales_api::{FetchError, SalesApi};
use crate::core::{AppError, Result};
use crate::modules::sales::models::{DateWindow, RawSaleRecord};

/// Walks every page of one date window.
///
/// Pages are requested one at a time starting at 1. A 401 aborts at once,
/// 429s and network failures are retried on the same page forever with the
/// policy's fixed backoff, anything else is surfaced.
#[derive(Clone)]
pub struct PageFetcher {
    api: Arc<dyn SalesApi>,
    policy: RetryPolicy,
}

impl PageFetcher {
    pub fn new(api: Arc<dyn SalesApi>, policy: RetryPolicy) -> Self {
        Self { api, policy }
    }

    /// Fetch all records of `window`, in arrival order across pages
    pub async fn fetch_window(&self, token: &str, window: DateWindow) -> Result<Vec<RawSaleRecord>> {
        let mut records = Vec::new();
        let mut page = 1u32;
        let mut retries = 0u64;

        loop {
            match self.api.fetch_page(token, &window, page).await {
                Ok(sales_page) => {
                    let has_next = sales_page.has_next();
                    info!(
                        source = %self.api.name(),
                        window = %window,
                        page = sales_page.page,
                        last_page = sales_page.last_page,
                        records = sales_page.data.len(),
                        "Sales page collected"
                    );
                    records.extend(sales_page.data);

                    if !has_next {
                        break;
                    }
                    page += 1;
                    sleep(self.policy.page_delay).await;
                }
                Err(FetchError::Unauthorized) => {
                    error!(source = %self.api.name(), window = %window, page, "Sales API rejected the token");
                    return Err(AppError::authentication("Token inválido ou expirado."));
                }
                Err(err) => match self.policy.backoff_for(&err) {
                    Some(delay) => {
                        retries += 1;
                        warn!(
                            source = %self.api.name(),
                            window = %window,
                            page,
                            retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %err,
                            "Retrying sales page after backoff"
                        );
                        sleep(delay).await;
                    }
                    None => {
                        error!(source = %self.api.name(), window = %window, page, error = %err, "Sales page failed");
                        return Err(AppError::upstream(format!(
                            "page {} of {}: {}",
                            page, window, err
                        )));
                    }
                },
            }
        }

        debug!(window = %window, total = records.len(), retries, "Window fetched");
        Ok(records)
    }
}
