use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::modules::reports::models::{ConsolidatedSale, PaymentMethodBreakdown};
use crate::modules::sales::models::NOT_INFORMED_DESCRIPTION;

/// Total collected per payment method.
///
/// A composite sale is split across its payments, each payment's amount
/// scaled by `sale.valor / Σ payment.valor` so the parts add back up to the
/// sale's net value. Other sales count whole under their own method. Sorted
/// by value, highest first, then by method name.
pub fn payment_breakdown(sales: &[ConsolidatedSale]) -> Vec<PaymentMethodBreakdown> {
    let mut totals: HashMap<String, (Decimal, u64)> = HashMap::new();

    for sale in sales {
        let composite = sale
            .forma_pagamento
            .as_ref()
            .is_some_and(|m| m.is_composite());

        if composite && !sale.pagamentos.is_empty() {
            let factor = split_factor(sale);

            for payment in &sale.pagamentos {
                let label = payment
                    .forma_pagamento
                    .as_ref()
                    .map_or(NOT_INFORMED_DESCRIPTION, |m| m.label());
                let share = payment.valor.checked_mul(factor).unwrap_or(payment.valor);
                let entry = totals.entry(label.to_string()).or_default();
                entry.0 = entry.0.saturating_add(share);
                entry.1 += 1;
            }
        } else {
            let label = sale
                .forma_pagamento
                .as_ref()
                .map_or(NOT_INFORMED_DESCRIPTION, |m| m.label());
            let entry = totals.entry(label.to_string()).or_default();
            entry.0 = entry.0.saturating_add(sale.valor);
            entry.1 += 1;
        }
    }

    let mut breakdown: Vec<PaymentMethodBreakdown> = totals
        .into_iter()
        .map(|(method, (valor, count))| PaymentMethodBreakdown::new(method, valor.round_dp(2), count))
        .collect();

    breakdown.sort_by(|a, b| {
        b.valor
            .cmp(&a.valor)
            .then_with(|| a.forma_pagamento.cmp(&b.forma_pagamento))
    });
    breakdown
}

/// `sale.valor / Σ payment.valor`, or 1 when the payments do not add up to
/// something positive or the ratio does not fit a `Decimal`
fn split_factor(sale: &ConsolidatedSale) -> Decimal {
    sale.payments_total()
        .filter(|paid| *paid > Decimal::ZERO)
        .and_then(|paid| sale.valor.checked_div(paid))
        .unwrap_or(Decimal::ONE)
}
