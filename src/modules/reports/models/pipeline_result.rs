use serde::{Deserialize, Serialize};

use super::{ConsolidatedSale, KpiReport};

/// Output of a report run: `{total, kpis, data}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub total: usize,
    pub kpis: KpiReport,
    pub data: Vec<ConsolidatedSale>,
}

impl PipelineResult {
    pub fn new(kpis: KpiReport, data: Vec<ConsolidatedSale>) -> Self {
        Self {
            total: data.len(),
            kpis,
            data,
        }
    }
}
