// Scripted Sales API
//
// In-memory `SalesApi` that replays queued outcomes per (period start, page)
// and records every call with the (possibly paused) tokio clock.

use async_trait::async_trait;
use chrono::NaiveDate;
use sales_report::sales::{DateWindow, FetchError, SalesApi, SalesPage};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

type Outcome = Result<SalesPage, FetchError>;

/// One recorded request
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub token: String,
    pub window: DateWindow,
    pub page: u32,
    pub at: Instant,
}

#[derive(Default)]
pub struct ScriptedSalesApi {
    outcomes: Mutex<HashMap<(NaiveDate, u32), VecDeque<Outcome>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedSalesApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `outcome` for `page` of the period starting at `period_start` (YYYY-MM-DD).
    ///
    /// Unscripted requests answer with an empty single page.
    pub fn respond(self, period_start: &str, page: u32, outcome: Outcome) -> Self {
        let start = NaiveDate::parse_from_str(period_start, "%Y-%m-%d").unwrap();
        self.outcomes
            .lock()
            .unwrap()
            .entry((start, page))
            .or_default()
            .push_back(outcome);
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SalesApi for ScriptedSalesApi {
    async fn fetch_page(&self, token: &str, window: &DateWindow, page: u32) -> Outcome {
        self.calls.lock().unwrap().push(RecordedCall {
            token: token.to_string(),
            window: *window,
            page,
            at: Instant::now(),
        });

        self.outcomes
            .lock()
            .unwrap()
            .get_mut(&(window.start, page))
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| Ok(SalesPage::new(Vec::new(), page, page)))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Assert that `later` happened `expected` after `earlier`, give or take a timer tick
pub fn assert_waited(earlier: &RecordedCall, later: &RecordedCall, expected: std::time::Duration) {
    let gap = later.at - earlier.at;
    let tick = std::time::Duration::from_millis(1);
    assert!(
        gap >= expected && gap <= expected + tick,
        "expected a wait of {:?} between calls, got {:?}",
        expected,
        gap
    );
}
