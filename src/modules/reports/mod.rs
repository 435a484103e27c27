pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ConsolidatedSale, KpiReport, PaymentMethodBreakdown, PipelineResult};
pub use services::{calculate_kpis, consolidate_sales, payment_breakdown, ReportPipeline};
