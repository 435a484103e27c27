use rust_decimal::Decimal;

use crate::modules::reports::models::{ConsolidatedSale, KpiReport};

/// Compute the report KPIs over consolidated sales.
///
/// Pure; an empty slice gives an all-zero report.
pub fn calculate_kpis(sales: &[ConsolidatedSale]) -> KpiReport {
    if sales.is_empty() {
        return KpiReport::default();
    }

    let valor_liquido: Decimal = sales.iter().map(|s| s.valor).sum();
    let total_descontos: Decimal = sales.iter().map(|s| s.desconto).sum();
    let total_pedidos = sales.len() as u64;
    let ticket_medio = valor_liquido
        .checked_div(Decimal::from(total_pedidos))
        .unwrap_or(Decimal::ZERO);

    KpiReport {
        valor_liquido,
        total_pedidos,
        total_descontos,
        ticket_medio,
    }
}
