use crate::models::chart::{TrendPoint, TrendSeries};
use crate::models::record::StockRecord;

/// Colors cycled through when overlaying several year lines.
const YEAR_PALETTE: [&str; 6] = ["steelblue", "orange", "green", "red", "purple", "brown"];

/// Builds per-year trend lines for side-by-side comparison on one axis.
pub struct ComparisonService;

impl ComparisonService {
    pub fn new() -> Self {
        Self
    }

    /// One `TrendSeries` per requested year, in request order, each
    /// containing only that year's records sorted ascending by date and
    /// labeled with the year. Gaps between trading days are not filled.
    #[must_use]
    pub fn year_overlay(&self, records: &[StockRecord], years: &[i32]) -> Vec<TrendSeries> {
        years
            .iter()
            .enumerate()
            .map(|(i, &year)| {
                let mut points: Vec<TrendPoint> = records
                    .iter()
                    .filter(|r| r.matches_year(year))
                    .filter_map(|r| {
                        r.date.map(|date| TrendPoint {
                            date,
                            open_price: r.open_price,
                        })
                    })
                    .collect();
                points.sort_by_key(|p| p.date);

                let mut series =
                    TrendSeries::new(year.to_string(), YEAR_PALETTE[i % YEAR_PALETTE.len()]);
                series.points = points;
                series
            })
            .collect()
    }
}

impl Default for ComparisonService {
    fn default() -> Self {
        Self::new()
    }
}
