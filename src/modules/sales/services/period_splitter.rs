use chrono::{Datelike, NaiveDate};

use crate::modules::sales::models::DateWindow;

/// Lazy iterator over the calendar-month slices of a [`DateWindow`].
///
/// The sales API scopes pagination per request window, so a long range is
/// fetched one month at a time. Slices are contiguous, never overlap and each
/// one stays inside a single month. A reversed window yields nothing. Cloning
/// the iterator (or calling [`DateWindow::monthly_periods`] again) restarts it.
#[derive(Debug, Clone)]
pub struct MonthlyPeriods {
    cursor: Option<NaiveDate>,
    end: NaiveDate,
}

impl MonthlyPeriods {
    pub fn new(window: DateWindow) -> Self {
        Self {
            cursor: Some(window.start),
            end: window.end,
        }
    }
}

impl Iterator for MonthlyPeriods {
    type Item = DateWindow;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor.filter(|c| *c <= self.end)?;
        let period_end = last_day_of_month(start).map_or(self.end, |last| last.min(self.end));

        self.cursor = period_end.succ_opt();
        Some(DateWindow::new(start, period_end))
    }
}

impl std::iter::FusedIterator for MonthlyPeriods {}

impl DateWindow {
    /// Split this window into calendar-month periods
    pub fn monthly_periods(&self) -> MonthlyPeriods {
        MonthlyPeriods::new(*self)
    }
}

/// Last day of the month containing `date`
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}
