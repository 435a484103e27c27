pub mod models;
pub mod services;

pub use models::{DateWindow, PaymentDetail, PaymentMethod, RawSaleRecord, RecordCode, SalesPage};
pub use services::{
    FetchError, MonthlyPeriods, PageFetcher, ReportApiClient, RetryPolicy, SalesApi,
};
