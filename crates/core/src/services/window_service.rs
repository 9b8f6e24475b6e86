use crate::models::record::StockRecord;
use crate::models::window::EventWindow;

/// Rows of one calendar year split by an event window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowPartition {
    /// Records whose date falls inside the window.
    pub matched: Vec<StockRecord>,

    /// The complement: the year's remaining records.
    pub unmatched: Vec<StockRecord>,
}

/// Partitions the dataset around event windows for chart highlighting.
pub struct WindowService;

impl WindowService {
    pub fn new() -> Self {
        Self
    }

    /// Split the given year's records into those inside `window` and
    /// the rest of the year.
    ///
    /// Records without a date never match (they belong to no year).
    /// Empty partitions are valid — a window spanning only market
    /// holidays simply matches nothing.
    pub fn partition_year(
        &self,
        records: &[StockRecord],
        year: i32,
        window: &EventWindow,
    ) -> WindowPartition {
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();

        for record in records.iter().filter(|r| r.matches_year(year)) {
            match record.date {
                Some(date) if window.contains(date) => matched.push(record.clone()),
                _ => unmatched.push(record.clone()),
            }
        }

        WindowPartition { matched, unmatched }
    }

    /// All records belonging to one calendar year, in dataset order.
    #[must_use]
    pub fn records_for_year(&self, records: &[StockRecord], year: i32) -> Vec<StockRecord> {
        records
            .iter()
            .filter(|r| r.matches_year(year))
            .cloned()
            .collect()
    }
}

impl Default for WindowService {
    fn default() -> Self {
        Self::new()
    }
}
