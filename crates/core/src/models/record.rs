use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One trading day of the source dataset.
///
/// **Important**: records are immutable once loaded. Rows whose `Date`
/// string failed tolerant parsing carry `date: None` together with
/// `None` calendar components, and never match any date filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Trading date (no time component — daily granularity).
    /// `None` when the source string was unparseable.
    pub date: Option<NaiveDate>,

    /// Recorded price at market open.
    pub open_price: f64,

    /// Number of shares traded that day.
    pub volume: u64,

    /// Calendar year derived from `date`.
    pub year: Option<i32>,

    /// Calendar month (1–12) derived from `date`.
    pub month: Option<u32>,

    /// Day of month (1–31) derived from `date`.
    pub day: Option<u32>,
}

impl StockRecord {
    /// Build a record from a parsed date, deriving the calendar fields.
    pub fn new(date: Option<NaiveDate>, open_price: f64, volume: u64) -> Self {
        Self {
            date,
            open_price,
            volume,
            year: date.map(|d| d.year()),
            month: date.map(|d| d.month()),
            day: date.map(|d| d.day()),
        }
    }

    /// Whether this record belongs to the given calendar year.
    /// Records without a date belong to no year.
    #[must_use]
    pub fn matches_year(&self, year: i32) -> bool {
        self.year == Some(year)
    }
}
