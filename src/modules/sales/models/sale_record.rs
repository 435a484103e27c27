use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::core::amount::{deserialize_amount, deserialize_list};

/// Description used when several payments settle one sale
pub const COMPOSITE_DESCRIPTION: &str = "COMPOSTO";

/// Description used when a payment carries no method of its own
pub const NOT_INFORMED_DESCRIPTION: &str = "Não informado";

/// Identifier shared by every fragment of the same sale.
///
/// The upstream emits it as a number or as a string depending on the
/// endpoint version, so both are accepted. Whole floats such as `42.0` read
/// as numbers, other scalars as text. Numbers order before strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum RecordCode {
    Number(i64),
    Text(String),
}

impl RecordCode {
    /// Read a code from any JSON value; `null`, `false` and containers give `None`
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::from_number(n)),
            Value::String(s) => Some(RecordCode::Text(s.clone())),
            Value::Bool(true) => Some(RecordCode::Text("true".to_string())),
            Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn from_number(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            return RecordCode::Number(i);
        }
        match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                RecordCode::Number(f as i64)
            }
            _ => RecordCode::Text(n.to_string()),
        }
    }

    /// A zero or empty code cannot be attributed to a sale
    pub fn is_attributable(&self) -> bool {
        match self {
            RecordCode::Number(n) => *n != 0,
            RecordCode::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for RecordCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordCode::Number(n) => write!(f, "{}", n),
            RecordCode::Text(s) => f.write_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for RecordCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RecordCode::from_value(&value)
            .ok_or_else(|| de::Error::custom(format!("expected a sale code, got {}", value)))
    }
}

/// Optional code field; values that cannot be a code read as absent
pub(crate) fn deserialize_code<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<RecordCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(RecordCode::from_value))
}

/// Optional `formaPagamento`.
///
/// Objects decode as usual, a bare string is taken as the description and
/// anything else reads as absent.
pub(crate) fn deserialize_method<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<PaymentMethod>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(PaymentMethod::with_description(s))),
        Some(object @ Value::Object(_)) => serde_json::from_value(object)
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

fn deserialize_description<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Cancellation marker, keeping an explicit `null` apart from a missing field
fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl From<i64> for RecordCode {
    fn from(value: i64) -> Self {
        RecordCode::Number(value)
    }
}

impl From<&str> for RecordCode {
    fn from(value: &str) -> Self {
        RecordCode::Text(value.to_string())
    }
}

/// Payment method object (`formaPagamento`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(
        default,
        deserialize_with = "deserialize_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub descricao: Option<String>,

    /// Any other attribute the upstream sends, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentMethod {
    pub fn with_description(descricao: impl Into<String>) -> Self {
        Self {
            descricao: Some(descricao.into()),
            extra: Map::new(),
        }
    }

    /// Marker for a sale settled by more than one payment
    pub fn composite() -> Self {
        Self::with_description(COMPOSITE_DESCRIPTION)
    }

    /// Fallback for a payment without a method
    pub fn not_informed() -> Self {
        Self::with_description(NOT_INFORMED_DESCRIPTION)
    }

    pub fn is_composite(&self) -> bool {
        self.descricao.as_deref() == Some(COMPOSITE_DESCRIPTION)
    }

    /// Description for display and grouping, falling back to "Não informado"
    pub fn label(&self) -> &str {
        self.descricao
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(NOT_INFORMED_DESCRIPTION)
    }
}

/// One payment instrument embedded in a sale fragment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetail {
    #[serde(
        default,
        deserialize_with = "deserialize_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub codigo: Option<RecordCode>,

    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub valor: Decimal,

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

impl PaymentDetail {
    pub fn new(valor: Decimal, forma_pagamento: Option<PaymentMethod>) -> Self {
        Self {
            codigo: None,
            valor,
            forma_pagamento,
            extra: Map::new(),
        }
    }
}

/// One payment-level entry as returned by the sales API.
///
/// A real-world sale paid with several methods arrives as several of these
/// sharing the same `codigo`. Missing numeric fields read as zero and a
/// missing `pagamentos` reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSaleRecord {
    #[serde(
        default,
        deserialize_with = "deserialize_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub codigo: Option<RecordCode>,

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

    /// Cancellation timestamp; any non-null value marks the fragment as canceled
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_del: Option<Value>,

    #[serde(default, deserialize_with = "deserialize_list")]
    pub pagamentos: Vec<PaymentDetail>,

    #[serde(
        rename = "formaPagamento",
        default,
        deserialize_with = "deserialize_method",
        skip_serializing_if = "Option::is_none"
    )]
    pub forma_pagamento: Option<PaymentMethod>,

    /// Customer, date, channel, items and whatever else the upstream sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawSaleRecord {
    pub fn is_canceled(&self) -> bool {
        matches!(self.data_del, Some(ref v) if !v.is_null())
    }

    /// The code under which this fragment is grouped, if it has a usable one
    pub fn sale_code(&self) -> Option<&RecordCode> {
        self.codigo.as_ref().filter(|c| c.is_attributable())
    }
}
