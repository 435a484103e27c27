// Test Data Factory
//
// Builds upstream-shaped sale fragments from JSON so the tests exercise the
// same deserialization path as real responses.

use chrono::NaiveDate;
use sales_report::sales::{DateWindow, RawSaleRecord, SalesPage};
use serde_json::{json, Value};

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn window(start: &str, end: &str) -> DateWindow {
    DateWindow::new(date(start), date(end))
}

/// Fragment with one embedded payment per `(valor, method)` pair
pub fn fragment(codigo: i64, valor: f64, payments: &[(f64, &str)]) -> RawSaleRecord {
    record(json!({
        "codigo": codigo,
        "valor": valor,
        "desconto": 0,
        "data_del": null,
        "cliente": {"nome_razao": format!("Cliente {}", codigo)},
        "pagamentos": payments
            .iter()
            .map(|(v, m)| json!({"valor": v, "formaPagamento": {"descricao": m}}))
            .collect::<Vec<_>>(),
    }))
}

/// Fragment carrying a cancellation timestamp
pub fn canceled_fragment(codigo: i64, valor: f64, payments: &[(f64, &str)]) -> RawSaleRecord {
    let mut record = fragment(codigo, valor, payments);
    record.data_del = Some(json!("2024-01-20 18:32:00"));
    record
}

pub fn record(value: Value) -> RawSaleRecord {
    serde_json::from_value(value).unwrap()
}

pub fn sales_page(data: Vec<RawSaleRecord>, page: u32, last_page: u32) -> SalesPage {
    SalesPage::new(data, page, last_page)
}
