pub mod consolidated_sale;
pub mod kpi_report;
pub mod payment_breakdown;
pub mod pipeline_result;

pub use consolidated_sale::ConsolidatedSale;
pub use kpi_report::KpiReport;
pub use payment_breakdown::PaymentMethodBreakdown;
pub use pipeline_result::PipelineResult;
