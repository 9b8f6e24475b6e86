use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single (date, open price) point on a trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub open_price: f64,
}

/// A labeled, styled line on a chart.
///
/// The core generates these — the frontend just renders them.
/// Points are ordered ascending by date; gaps between trading days are
/// left as-is for the line-plotting primitive to draw through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Legend label (e.g., "Other Dates", "Post 9/11 (2 Months)", "2020").
    pub label: String,

    /// CSS-style color name or hex string understood by the display layer.
    pub color: String,

    /// Line width in display units.
    pub line_width: f32,

    /// The data, sorted ascending by date.
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            line_width: 1.0,
            points: Vec::new(),
        }
    }

    /// Set a non-default line width (builder style).
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// A dashed vertical annotation at a single date (e.g., the event itself).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    pub date: NaiveDate,
    pub label: String,
    pub color: String,
}

impl MarkerLine {
    pub fn new(date: NaiveDate, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
            color: color.into(),
        }
    }
}

/// One plotting area: axes, series, markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    /// Panel-level title, shown when a figure has several panels.
    pub title: Option<String>,

    pub x_label: String,
    pub y_label: String,

    /// Lines drawn in order — later series draw on top of earlier ones.
    pub series: Vec<TrendSeries>,

    /// Vertical marker lines drawn over the series.
    pub markers: Vec<MarkerLine>,

    pub show_legend: bool,
    pub show_grid: bool,
}

impl ChartPanel {
    /// A panel with the dashboard's standard axes, legend and grid.
    pub fn standard() -> Self {
        Self {
            title: None,
            x_label: "Date".to_string(),
            y_label: "Open Price".to_string(),
            series: Vec::new(),
            markers: Vec::new(),
            show_legend: true,
            show_grid: true,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A complete figure handed to the display layer: a shared title over
/// one or more side-by-side panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFigure {
    pub title: String,
    pub panels: Vec<ChartPanel>,
}

impl ChartFigure {
    pub fn single(title: impl Into<String>, panel: ChartPanel) -> Self {
        Self {
            title: title.into(),
            panels: vec![panel],
        }
    }

    pub fn side_by_side(title: impl Into<String>, panels: Vec<ChartPanel>) -> Self {
        Self {
            title: title.into(),
            panels,
        }
    }
}
