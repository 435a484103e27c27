//! Lenient decoding of upstream amounts.
//!
//! The sales API is loose about numeric fields: they may be missing, `null`,
//! JSON numbers or numeric strings. Everything lands in a [`Decimal`] so sums
//! stay exact; serialization back to JSON goes through
//! `rust_decimal::serde::float`.

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

/// Deserialize an amount, treating `null` as zero.
pub fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    amount_from_value(value.as_ref()).map_err(de::Error::custom)
}

/// Deserialize a list field, treating `null` or a non-list as empty.
///
/// Items that do not decode are skipped with a warning, so one malformed
/// entry never costs the rest of the list.
pub fn deserialize_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                serde_json::from_value(item)
                    .inspect_err(|e| warn!(index, error = %e, "Skipping undecodable list item"))
                    .ok()
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn amount_from_value(value: Option<&Value>) -> std::result::Result<Decimal, String> {
    match value {
        None | Some(Value::Null) => Ok(Decimal::ZERO),
        // Going through the textual form keeps 0.1 as 0.1 instead of its f64 expansion
        Some(Value::Number(n)) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .map_err(|e| format!("invalid amount {}: {}", n, e)),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(Decimal::ZERO),
        Some(Value::String(s)) => {
            Decimal::from_str(s.trim()).map_err(|e| format!("invalid amount '{}': {}", s, e))
        }
        Some(other) => Err(format!("expected a numeric amount, got {}", other)),
    }
}
