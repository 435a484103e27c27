//! Sales report service library
//!
//! Fetches paginated sales from the reporting API, merges sales split across
//! several payments and computes the report KPIs.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::reports;
pub use modules::sales;

pub use crate::core::{AppError, Result};
pub use reports::{PipelineResult, ReportPipeline};
