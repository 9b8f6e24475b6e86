use std::io::Read;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::CoreError;
use crate::models::record::StockRecord;
use crate::models::regression::Features;

/// Raw CSV row. Header names follow the source dataset; common casings
/// are accepted via aliases. A missing column fails the whole load.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date", alias = "date")]
    date: String,
    #[serde(rename = "Open Price", alias = "Open", alias = "open")]
    open_price: f64,
    #[serde(rename = "Volume", alias = "volume")]
    volume: u64,
}

/// Date formats attempted in order. The source uses ISO dates; the
/// alternates cover exports from other tools.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Loads the daily trading dataset from CSV into `StockRecord`s.
///
/// Parsing is tolerant on dates only: a row with an unparseable date is
/// kept with `date: None` (it will never match a date filter) rather
/// than aborting the load. Everything else — missing file, missing
/// columns, malformed numbers — is fatal.
pub struct DatasetService;

impl DatasetService {
    pub fn new() -> Self {
        Self
    }

    /// Load records from a CSV file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_csv(&self, path: impl AsRef<Path>) -> Result<Vec<StockRecord>, CoreError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| CoreError::FileIO(format!("{}: {e}", path.display())))?;
        let records = self.from_reader(file)?;
        info!(rows = records.len(), path = %path.display(), "dataset loaded");
        Ok(records)
    }

    /// Load records from any reader (also works on WASM, where the
    /// frontend hands over the file bytes).
    pub fn from_reader<R: Read>(&self, reader: R) -> Result<Vec<StockRecord>, CoreError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        let mut unparsed_dates = 0usize;

        for row in csv_reader.deserialize::<CsvRow>() {
            let row = row?;
            let date = parse_date(&row.date);
            if date.is_none() {
                unparsed_dates += 1;
                warn!(raw = %row.date, "unparseable date, row kept without one");
            }
            records.push(StockRecord::new(date, row.open_price, row.volume));
        }

        if records.is_empty() {
            return Err(CoreError::Dataset("dataset contains no rows".to_string()));
        }
        if unparsed_dates > 0 {
            info!(unparsed_dates, "rows loaded with missing dates");
        }

        // Ordered-by-date sequence; dateless rows sink to the end.
        records.sort_by_key(|r| r.date.unwrap_or(NaiveDate::MAX));
        Ok(records)
    }

    /// Extract `(features, true open price)` pairs for accuracy scoring.
    /// Rows without a valid date have no calendar features and are skipped.
    #[must_use]
    pub fn feature_rows(&self, records: &[StockRecord]) -> Vec<(Features, f64)> {
        records
            .iter()
            .filter_map(|r| {
                let (year, month, day) = (r.year?, r.month?, r.day?);
                Some((
                    [
                        r.volume as f64,
                        f64::from(year),
                        f64::from(month),
                        f64::from(day),
                    ],
                    r.open_price,
                ))
            })
            .collect()
    }
}

impl Default for DatasetService {
    fn default() -> Self {
        Self::new()
    }
}

/// Tolerant date parsing: try each known format, give up with `None`.
fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
