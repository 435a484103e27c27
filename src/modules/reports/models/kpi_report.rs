use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures of a sales report
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiReport {
    /// Sum of consolidated sale values
    #[serde(with = "rust_decimal::serde::float")]
    pub valor_liquido: Decimal,
    /// Number of consolidated sales
    pub total_pedidos: u64,
    /// Sum of consolidated sale discounts
    #[serde(with = "rust_decimal::serde::float")]
    pub total_descontos: Decimal,
    /// Average sale value, zero when there are no sales
    #[serde(with = "rust_decimal::serde::float")]
    pub ticket_medio: Decimal,
}

impl KpiReport {
    pub fn is_empty(&self) -> bool {
        self.total_pedidos == 0
    }
}
