use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Value collected through one payment method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodBreakdown {
    pub forma_pagamento: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    /// Number of payments attributed to this method
    pub pagamentos: u64,
}

impl PaymentMethodBreakdown {
    pub fn new(forma_pagamento: impl Into<String>, valor: Decimal, pagamentos: u64) -> Self {
        Self {
            forma_pagamento: forma_pagamento.into(),
            valor,
            pagamentos,
        }
    }
}
