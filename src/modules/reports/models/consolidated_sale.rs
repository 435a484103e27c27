use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::amount::{deserialize_amount, deserialize_list};
use crate::modules::sales::models::sale_record::deserialize_method;
use crate::modules::sales::models::{PaymentDetail, PaymentMethod, RawSaleRecord, RecordCode};

/// One logical sale, merged from every fragment sharing its `codigo`.
///
/// Serializes with the upstream's field names so the dashboard can read it
/// like a raw record: base attributes come from the first fragment, `valor`
/// is the fragments' total and `pagamentos` holds every fragment's payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedSale {
    pub codigo: RecordCode,

    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub valor: Decimal,

    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub desconto: Decimal,

    #[serde(default, deserialize_with = "deserialize_list")]
    pub pagamentos: Vec<PaymentDetail>,

    #[serde(
        rename = "formaPagamento",
        default,
        deserialize_with = "deserialize_method",
        skip_serializing_if = "Option::is_none"
    )]
    pub forma_pagamento: Option<PaymentMethod>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConsolidatedSale {
    /// Start a sale from its first fragment, keeping every attribute it carries
    pub(crate) fn from_base(codigo: RecordCode, base: RawSaleRecord) -> Self {
        let mut extra = base.extra;
        if let Some(data_del) = base.data_del {
            extra.insert("data_del".to_string(), data_del);
        }

        Self {
            codigo,
            valor: base.valor,
            desconto: base.desconto,
            pagamentos: base.pagamentos,
            forma_pagamento: base.forma_pagamento,
            extra,
        }
    }

    /// Fold a later fragment of the same sale into this one
    pub(crate) fn absorb(&mut self, fragment: RawSaleRecord) {
        self.valor += fragment.valor;
        self.pagamentos.extend(fragment.pagamentos);
    }

    /// Sum of the embedded payments' own amounts, `None` on overflow
    pub fn payments_total(&self) -> Option<Decimal> {
        self.pagamentos
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.valor))
    }
}
