pub mod consolidator;
pub mod kpi_calculator;
pub mod payment_breakdown;
pub mod report_pipeline;

pub use consolidator::consolidate_sales;
pub use kpi_calculator::calculate_kpis;
pub use payment_breakdown::payment_breakdown;
pub use report_pipeline::ReportPipeline;
