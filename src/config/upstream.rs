use std::time::Duration;

use super::{env_or, env_string_or};
use crate::core::{AppError, Result};
use crate::modules::sales::services::RetryPolicy;

pub const DEFAULT_SALES_API_BASE_URL: &str = "https://report.yooga.com.br/vendas";

/// Sales API connection and fetch behaviour
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub rate_limit_backoff_ms: u64,
    pub network_backoff_ms: u64,
    pub page_delay_ms: u64,
    pub fetch_concurrency: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SALES_API_BASE_URL.to_string(),
            timeout_secs: 30,
            rate_limit_backoff_ms: 2_000,
            network_backoff_ms: 5_000,
            page_delay_ms: 300,
            fetch_concurrency: 1,
        }
    }
}

impl UpstreamConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(UpstreamConfig {
            base_url: env_string_or("SALES_API_BASE_URL", &defaults.base_url),
            timeout_secs: env_or("SALES_API_TIMEOUT_SECS", defaults.timeout_secs)?,
            rate_limit_backoff_ms: env_or("RATE_LIMIT_BACKOFF_MS", defaults.rate_limit_backoff_ms)?,
            network_backoff_ms: env_or("NETWORK_BACKOFF_MS", defaults.network_backoff_ms)?,
            page_delay_ms: env_or("PAGE_DELAY_MS", defaults.page_delay_ms)?,
            fetch_concurrency: env_or("FETCH_CONCURRENCY", defaults.fetch_concurrency)?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            Duration::from_millis(self.rate_limit_backoff_ms),
            Duration::from_millis(self.network_backoff_ms),
            Duration::from_millis(self.page_delay_ms),
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "SALES_API_BASE_URL must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "SALES_API_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        if self.fetch_concurrency == 0 {
            return Err(AppError::Configuration(
                "FETCH_CONCURRENCY must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
