use std::sync::Arc;

use chrono::NaiveDate;
use futures_util::{stream, StreamExt, TryStreamExt};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::{calculate_kpis, consolidate_sales};
use crate::core::Result;
use crate::modules::reports::models::PipelineResult;
use crate::modules::sales::models::{DateWindow, RawSaleRecord};
use crate::modules::sales::services::{PageFetcher, RetryPolicy, SalesApi};

/// Sales report pipeline.
///
/// Splits the requested range into calendar months, fetches every page of
/// every month, drops canceled fragments, merges multi-payment sales and
/// computes the KPIs.
#[derive(Clone)]
pub struct ReportPipeline {
    fetcher: PageFetcher,
    concurrency: usize,
}

impl ReportPipeline {
    /// Create a sequential pipeline over `api`
    pub fn new(api: Arc<dyn SalesApi>, policy: RetryPolicy) -> Self {
        Self {
            fetcher: PageFetcher::new(api, policy),
            concurrency: 1,
        }
    }

    /// Fetch up to `concurrency` months at once.
    ///
    /// Each month keeps its own backoff; results are merged the same way
    /// regardless of arrival order. Values below 1 are treated as 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Build the report for `[start_date, end_date]`
    pub async fn run(
        &self,
        token: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PipelineResult> {
        let window = DateWindow::new(start_date, end_date);
        let span = info_span!("sales_report", run_id = %Uuid::new_v4(), window = %window);

        async move {
            if start_date > end_date {
                warn!("Reversed date range, nothing to fetch");
            }

            let raw = self.collect(token, window).await?;
            let fetched = raw.len();

            let data = consolidate_sales(raw);
            let kpis = calculate_kpis(&data);

            info!(
                fragments = fetched,
                sales = data.len(),
                valor_liquido = %kpis.valor_liquido,
                "Sales report generated"
            );

            Ok(PipelineResult::new(kpis, data))
        }
        .instrument(span)
        .await
    }

    /// Fetch the raw fragments of every month in `window`, month order preserved
    pub async fn collect(&self, token: &str, window: DateWindow) -> Result<Vec<RawSaleRecord>> {
        let per_period: Vec<Vec<RawSaleRecord>> = stream::iter(window.monthly_periods())
            .map(|period| self.fetcher.fetch_window(token, period))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        Ok(per_period.into_iter().flatten().collect())
    }
}
