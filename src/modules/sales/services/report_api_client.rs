use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

use super::sales_api::{FetchError, SalesApi};
use crate::config::UpstreamConfig;
use crate::core::Result;
use crate::modules::sales::models::{DateWindow, SalesPage};

/// Query string of the sales listing endpoint
#[derive(Debug, Serialize)]
struct SalesQuery<'a> {
    inverse: &'a str,
    origin: &'a str,
    data_inicio: String,
    data_fim: String,
    hora_inicio: &'a str,
    hora_fim: &'a str,
    page: u32,
    query: &'a str,
}

impl<'a> SalesQuery<'a> {
    fn for_page(window: &DateWindow, page: u32) -> Self {
        Self {
            inverse: "true",
            origin: "",
            data_inicio: window.start_param(),
            data_fim: window.end_param(),
            hora_inicio: "00:00",
            hora_fim: "23:59",
            page,
            query: "",
        }
    }
}

/// reqwest client for the reporting API's sales listing
pub struct ReportApiClient {
    client: Client,
    base_url: String,
}

impl ReportApiClient {
    /// Build a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SalesApi for ReportApiClient {
    async fn fetch_page(
        &self,
        token: &str,
        window: &DateWindow,
        page: u32,
    ) -> std::result::Result<SalesPage, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json")
            .query(&SalesQuery::for_page(window, page))
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => return Err(FetchError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => return Err(FetchError::RateLimited),
            s if s.is_server_error() => {
                return Err(FetchError::Network(format!("sales API answered {}", s)))
            }
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(FetchError::Status {
                    status: s.as_u16(),
                    body,
                });
            }
            _ => {}
        }

        Ok(response.json::<SalesPage>().await?)
    }

    fn name(&self) -> &str {
        "report-api"
    }
}
