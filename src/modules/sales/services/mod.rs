pub mod page_fetcher;
pub mod period_splitter;
pub mod report_api_client;
pub mod retry_policy;
pub mod sales_api;

pub use page_fetcher::PageFetcher;
pub use period_splitter::{last_day_of_month, MonthlyPeriods};
pub use report_api_client::ReportApiClient;
pub use retry_policy::RetryPolicy;
pub use sales_api::{FetchError, SalesApi};
