use crate::models::chart::{ChartFigure, ChartPanel, MarkerLine, TrendPoint, TrendSeries};
use crate::models::record::StockRecord;
use crate::models::window::EventWindow;
use crate::services::comparison_service::ComparisonService;
use crate::services::window_service::WindowService;

/// Color of the full-year background line behind a highlighted window.
const BACKGROUND_COLOR: &str = "lightgray";

/// Legend label of the full-year background line.
const BACKGROUND_LABEL: &str = "Other Dates";

/// Generates chart-ready figures from the dataset.
///
/// Purely presentational: this service decides layout and styling,
/// never which data matters — the window and comparison services do
/// that. The frontend turns the resulting `ChartFigure` into pixels.
pub struct ChartService {
    window_service: WindowService,
    comparison_service: ComparisonService,
}

/// Styling for one highlighted window inside an event figure.
pub struct WindowStyle<'a> {
    pub window: &'a EventWindow,
    pub label: &'a str,
    pub color: &'a str,
    pub line_width: f32,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            window_service: WindowService::new(),
            comparison_service: ComparisonService::new(),
        }
    }

    /// Single-panel figure: the whole year as a light background line,
    /// one or more highlighted window series on top, and a dashed
    /// marker at the event date.
    pub fn event_window_figure(
        &self,
        records: &[StockRecord],
        year: i32,
        windows: &[WindowStyle<'_>],
        marker: MarkerLine,
        title: impl Into<String>,
    ) -> ChartFigure {
        let panel = self.event_window_panel(records, year, windows, marker, None);
        ChartFigure::single(title, panel)
    }

    /// Two event panels side by side under a shared title.
    pub fn release_figure(
        &self,
        records: &[StockRecord],
        left: (i32, &[WindowStyle<'_>], MarkerLine, &str),
        right: (i32, &[WindowStyle<'_>], MarkerLine, &str),
        title: impl Into<String>,
    ) -> ChartFigure {
        let left_panel =
            self.event_window_panel(records, left.0, left.1, left.2, Some(left.3.to_string()));
        let right_panel =
            self.event_window_panel(records, right.0, right.1, right.2, Some(right.3.to_string()));
        ChartFigure::side_by_side(title, vec![left_panel, right_panel])
    }

    /// One line per year on a shared axis, legend keyed by year.
    pub fn year_overlay_figure(
        &self,
        records: &[StockRecord],
        years: &[i32],
        title: impl Into<String>,
    ) -> ChartFigure {
        let mut panel = ChartPanel::standard();
        panel.series = self.comparison_service.year_overlay(records, years);
        ChartFigure::single(title, panel)
    }

    fn event_window_panel(
        &self,
        records: &[StockRecord],
        year: i32,
        windows: &[WindowStyle<'_>],
        marker: MarkerLine,
        panel_title: Option<String>,
    ) -> ChartPanel {
        let mut panel = ChartPanel::standard();
        panel.title = panel_title;

        // Background first so highlights draw on top of it.
        let year_records = self.window_service.records_for_year(records, year);
        let mut background = TrendSeries::new(BACKGROUND_LABEL, BACKGROUND_COLOR);
        background.points = to_points(&year_records);
        panel.series.push(background);

        for style in windows {
            let partition = self
                .window_service
                .partition_year(records, year, style.window);
            let mut series =
                TrendSeries::new(style.label, style.color).with_width(style.line_width);
            series.points = to_points(&partition.matched);
            panel.series.push(series);
        }

        panel.markers.push(marker);
        panel
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

/// Dated records as chart points, sorted ascending. Dateless rows are
/// dropped — they cannot be placed on the axis.
fn to_points(records: &[StockRecord]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = records
        .iter()
        .filter_map(|r| {
            r.date.map(|date| TrendPoint {
                date,
                open_price: r.open_price,
            })
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}
