use std::collections::BTreeMap;

use tracing::debug;

use crate::modules::reports::models::ConsolidatedSale;
use crate::modules::sales::models::{PaymentMethod, RawSaleRecord, RecordCode};

/// Merge payment-level fragments into one sale per `codigo`.
///
/// Canceled fragments (non-null `data_del`) and fragments without a usable
/// code are dropped. Within a sale, fragments are merged in the order they
/// were received; the result is ordered by `codigo`, so it does not depend on
/// the order in which periods were fetched.
pub fn consolidate_sales<I>(records: I) -> Vec<ConsolidatedSale>
where
    I: IntoIterator<Item = RawSaleRecord>,
{
    let mut groups: BTreeMap<RecordCode, ConsolidatedSale> = BTreeMap::new();
    let mut canceled = 0usize;
    let mut unattributed = 0usize;

    for record in records {
        if record.is_canceled() {
            canceled += 1;
            continue;
        }
        let Some(codigo) = record.sale_code().cloned() else {
            unattributed += 1;
            continue;
        };

        match groups.get_mut(&codigo) {
            Some(sale) => sale.absorb(record),
            None => {
                groups.insert(codigo.clone(), ConsolidatedSale::from_base(codigo, record));
            }
        }
    }

    debug!(
        sales = groups.len(),
        canceled, unattributed, "Sale fragments consolidated"
    );

    groups
        .into_values()
        .map(|mut sale| {
            derive_payment_method(&mut sale);
            sale
        })
        .collect()
}

/// Set `formaPagamento` from the merged payments.
///
/// Several payments make the sale composite, a single payment lends its own
/// method, and a sale with no payments keeps whatever its base fragment had.
fn derive_payment_method(sale: &mut ConsolidatedSale) {
    match sale.pagamentos.as_slice() {
        [] => {}
        [only] => {
            sale.forma_pagamento = Some(
                only.forma_pagamento
                    .clone()
                    .unwrap_or_else(PaymentMethod::not_informed),
            );
        }
        _ => sale.forma_pagamento = Some(PaymentMethod::composite()),
    }
}
