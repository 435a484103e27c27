// KPI calculation over consolidated sales

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sales_report::reports::{calculate_kpis, consolidate_sales, KpiReport};
use serde_json::json;

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::*;

#[test]
fn test_empty_input_gives_zero_kpis() {
    let kpis = calculate_kpis(&[]);

    assert_eq!(kpis, KpiReport::default());
    assert_eq!(
        serde_json::to_value(kpis).unwrap(),
        json!({"valor_liquido": 0.0, "total_pedidos": 0, "total_descontos": 0.0, "ticket_medio": 0.0})
    );
}

#[test]
fn test_sample_kpis() {
    let sales = consolidate_sales(vec![
        record(json!({"codigo": 1, "valor": 100.0, "desconto": 5.0})),
        record(json!({"codigo": 2, "valor": 50.0, "desconto": 0.0})),
    ]);

    let kpis = calculate_kpis(&sales);

    assert_eq!(kpis.valor_liquido, dec!(150));
    assert_eq!(kpis.total_pedidos, 2);
    assert_eq!(kpis.total_descontos, dec!(5));
    assert_eq!(kpis.ticket_medio, dec!(75));
}

#[test]
fn test_missing_discount_counts_as_zero() {
    let sales = consolidate_sales(vec![
        record(json!({"codigo": 1, "valor": 10})),
        record(json!({"codigo": 2, "valor": 20, "desconto": null})),
        record(json!({"codigo": 3, "valor": 30, "desconto": 1.5})),
    ]);

    let kpis = calculate_kpis(&sales);

    assert_eq!(kpis.total_descontos, dec!(1.5));
    assert_eq!(kpis.ticket_medio, dec!(20));
}

#[test]
fn test_kpis_count_sales_not_fragments() {
    let sales = consolidate_sales(vec![
        fragment(1, 10.0, &[(10.0, "PIX")]),
        fragment(1, 20.0, &[(20.0, "DEBITO")]),
        fragment(2, 30.0, &[(30.0, "PIX")]),
    ]);

    let kpis = calculate_kpis(&sales);

    assert_eq!(kpis.total_pedidos, 2);
    assert_eq!(kpis.valor_liquido, dec!(60));
    assert_eq!(kpis.ticket_medio, dec!(30));
}

#[test]
fn test_non_terminating_average() {
    let sales = consolidate_sales(vec![
        record(json!({"codigo": 1, "valor": 10})),
        record(json!({"codigo": 2, "valor": 10})),
        record(json!({"codigo": 3, "valor": 10.01})),
    ]);

    let kpis = calculate_kpis(&sales);

    assert!(kpis.ticket_medio > Decimal::from(10));
    assert_eq!(kpis.ticket_medio.round_dp(4), dec!(10.0033));
}
