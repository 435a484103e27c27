// Page fetcher retry and pagination behaviour
//
// Runs on tokio's paused clock: backoff sleeps complete instantly while the
// recorded call timestamps still advance by the configured durations.

use rust_decimal_macros::dec;
use sales_report::sales::{FetchError, PageFetcher, RetryPolicy};
use sales_report::AppError;
use std::time::Duration;

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::*;

const JANUARY: &str = "2024-01-01";

#[tokio::test(start_paused = true)]
async fn test_retries_after_rate_limit_with_backoff() {
    let api = ScriptedSalesApi::new()
        .respond(JANUARY, 1, Err(FetchError::RateLimited))
        .respond(JANUARY, 1, Err(FetchError::RateLimited))
        .respond(
            JANUARY,
            1,
            Ok(sales_page(vec![fragment(1, 10.0, &[(10.0, "PIX")])], 1, 1)),
        )
        .shared();
    let fetcher = PageFetcher::new(api.clone(), RetryPolicy::default());

    let records = fetcher
        .fetch_window("token", window("2024-01-01", "2024-01-31"))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].valor, dec!(10));

    let calls = api.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| c.page == 1));
    assert_waited(&calls[0], &calls[1], Duration::from_secs(2));
    assert_waited(&calls[1], &calls[2], Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn test_retries_after_network_failure_with_longer_backoff() {
    let api = ScriptedSalesApi::new()
        .respond(JANUARY, 1, Err(FetchError::Network("connection reset".into())))
        .respond(JANUARY, 1, Ok(sales_page(vec![fragment(1, 5.0, &[])], 1, 1)))
        .shared();
    let fetcher = PageFetcher::new(api.clone(), RetryPolicy::default());

    let records = fetcher
        .fetch_window("token", window("2024-01-01", "2024-01-31"))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    assert_waited(&calls[0], &calls[1], Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn test_unauthorized_fails_without_retry() {
    let api = ScriptedSalesApi::new()
        .respond(JANUARY, 1, Err(FetchError::Unauthorized))
        .shared();
    let fetcher = PageFetcher::new(api.clone(), RetryPolicy::default());

    let err = fetcher
        .fetch_window("expired", window("2024-01-01", "2024-01-31"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Authentication(_)));
    assert_eq!(api.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_unexpected_status_is_surfaced() {
    let api = ScriptedSalesApi::new()
        .respond(
            JANUARY,
            1,
            Err(FetchError::Status {
                status: 404,
                body: "not found".into(),
            }),
        )
        .shared();
    let fetcher = PageFetcher::new(api.clone(), RetryPolicy::default());

    let err = fetcher
        .fetch_window("token", window("2024-01-01", "2024-01-31"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Upstream(_)));
    assert_eq!(api.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_walks_pages_until_last_with_delay() {
    let api = ScriptedSalesApi::new()
        .respond(JANUARY, 1, Ok(sales_page(vec![fragment(1, 1.0, &[])], 1, 3)))
        .respond(JANUARY, 2, Ok(sales_page(vec![fragment(2, 2.0, &[])], 2, 3)))
        .respond(
            JANUARY,
            3,
            Ok(sales_page(vec![fragment(3, 3.0, &[]), fragment(4, 4.0, &[])], 3, 3)),
        )
        .shared();
    let fetcher = PageFetcher::new(api.clone(), RetryPolicy::default());

    let records = fetcher
        .fetch_window("token", window("2024-01-01", "2024-01-31"))
        .await
        .unwrap();

    let values: Vec<_> = records.iter().map(|r| r.valor).collect();
    assert_eq!(values, vec![dec!(1), dec!(2), dec!(3), dec!(4)]);

    let calls = api.calls();
    let pages: Vec<u32> = calls.iter().map(|c| c.page).collect();
    assert_eq!(pages, vec![1, 2, 3]);
    assert_waited(&calls[0], &calls[1], Duration::from_millis(300));
    assert_waited(&calls[1], &calls[2], Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_mid_window_retries_same_page() {
    let api = ScriptedSalesApi::new()
        .respond(JANUARY, 1, Ok(sales_page(vec![fragment(1, 1.0, &[])], 1, 2)))
        .respond(JANUARY, 2, Err(FetchError::RateLimited))
        .respond(JANUARY, 2, Ok(sales_page(vec![fragment(2, 2.0, &[])], 2, 2)))
        .shared();
    let fetcher = PageFetcher::new(api.clone(), RetryPolicy::default());

    let records = fetcher
        .fetch_window("token", window("2024-01-01", "2024-01-31"))
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    let pages: Vec<u32> = api.calls().iter().map(|c| c.page).collect();
    assert_eq!(pages, vec![1, 2, 2]);
}

#[tokio::test]
async fn test_token_is_forwarded() {
    let api = ScriptedSalesApi::new().shared();
    let fetcher = PageFetcher::new(api.clone(), RetryPolicy::immediate());

    fetcher
        .fetch_window("secret-token", window("2024-01-01", "2024-01-31"))
        .await
        .unwrap();

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].token, "secret-token");
    assert_eq!(calls[0].window, window("2024-01-01", "2024-01-31"));
}
