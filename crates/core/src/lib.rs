pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use models::{
    chart::{ChartFigure, MarkerLine},
    page::{DashboardPage, DashboardSection},
    prediction::{PredictionFormSpec, PredictionOutcome, PredictionRequest},
    record::StockRecord,
    regression::OpenPriceModel,
    window::EventWindow,
};
use services::{
    chart_service::{ChartService, WindowStyle},
    dataset_service::DatasetService,
    prediction_service::PredictionService,
};
use storage::manager::ModelStore;

use errors::CoreError;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid anchor date literal"),
    }
}

/// Date of the September 11 attacks.
pub const SEPT11_ANCHOR: NaiveDate = ymd(2001, 9, 11);

/// Release date of the first iPhone.
pub const IPHONE1_ANCHOR: NaiveDate = ymd(2007, 6, 29);

/// Release date of the iPhone 16.
pub const IPHONE16_ANCHOR: NaiveDate = ymd(2024, 9, 1);

/// Years overlaid in the COVID-19 comparison chart.
pub const COMPARISON_YEARS: [i32; 6] = [2017, 2018, 2019, 2020, 2021, 2022];

/// Page title shown above everything else.
pub const PAGE_TITLE: &str = "Apple Stock Price Analysis";

/// Main entry point for the stock dashboard core library.
/// Owns the read-only dataset and model, and precomputes everything
/// that does not depend on user input.
///
/// The three narrative figures are keyed by fixed filter parameters,
/// so they are built once here instead of on every interaction; only
/// the prediction runs per request.
#[must_use]
pub struct StockDashboard {
    records: Vec<StockRecord>,
    model: OpenPriceModel,
    prediction_service: PredictionService,
    sept11: ChartFigure,
    iphone_releases: ChartFigure,
    covid_comparison: ChartFigure,
    accuracy_pct: f64,
}

impl std::fmt::Debug for StockDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockDashboard")
            .field("records", &self.records.len())
            .field("model", &self.model)
            .field("accuracy_pct", &self.accuracy_pct)
            .finish()
    }
}

impl StockDashboard {
    /// Load the dataset CSV and the model artifact from disk (native only).
    /// Both resources are read-only for the lifetime of the dashboard.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(data_path: &str, model_path: &str) -> Result<Self, CoreError> {
        let records = DatasetService::new().load_csv(data_path)?;
        let model = ModelStore::load_from_file(model_path)?;
        Ok(Self::build(records, model))
    }

    /// Build a dashboard from already-loaded parts.
    /// Use this for WASM / Tauri where the frontend handles file I/O.
    pub fn from_parts(records: Vec<StockRecord>, model: OpenPriceModel) -> Self {
        Self::build(records, model)
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// 2001 open prices with the two months after 9/11 highlighted.
    #[must_use]
    pub fn sept11_figure(&self) -> &ChartFigure {
        &self.sept11
    }

    /// iPhone 1 (2007) and iPhone 16 (2024) release windows, side by side.
    #[must_use]
    pub fn iphone_release_figure(&self) -> &ChartFigure {
        &self.iphone_releases
    }

    /// One open-price line per year, 2017 through 2022.
    #[must_use]
    pub fn covid_comparison_figure(&self) -> &ChartFigure {
        &self.covid_comparison
    }

    // ── Prediction ──────────────────────────────────────────────────

    /// Validate a form request and predict the open price for it.
    ///
    /// An impossible date (e.g., February 30) returns a
    /// `ValidationError` and the model is never invoked. The attached
    /// accuracy is the model's R² over the full historical set.
    pub fn predict_open_price(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionOutcome, CoreError> {
        request.compose_date()?;
        let predicted = self.prediction_service.predict(&self.model, request);
        Ok(PredictionOutcome::new(predicted, self.accuracy_pct))
    }

    /// Model accuracy (R²) over the historical dataset, as a percentage.
    #[must_use]
    pub fn accuracy_pct(&self) -> f64 {
        self.accuracy_pct
    }

    // ── Page Assembly ───────────────────────────────────────────────

    /// The whole dashboard page in display order: three narrative
    /// sections and the prediction form. The frontend renders it as-is.
    #[must_use]
    pub fn build_page(&self) -> DashboardPage {
        DashboardPage {
            title: PAGE_TITLE.to_string(),
            sections: vec![
                DashboardSection::narrative(
                    "How did the 9/11 attacks affect the stock price of Apple?",
                    self.sept11.clone(),
                    "As we can see, the event of 9/11 did affect Apple stocks in a \
                     negative way, but Apple managed to recover quickly.",
                ),
                DashboardSection::narrative(
                    "Is there a massive difference between the release of the first \
                     iPhone and the last iPhone?",
                    self.iphone_releases.clone(),
                    "We can observe the impact around the releases of the first iPhone \
                     and the upcoming iPhone 16!",
                ),
                DashboardSection::narrative(
                    "Did COVID-19 affect the stock prices of Apple during quarantine?",
                    self.covid_comparison.clone(),
                    "COVID-19 severely affected the stock prices of Apple and caused \
                     long-term damage.",
                ),
                DashboardSection::prediction(
                    "Apple Stock Price Prediction",
                    PredictionFormSpec::default(),
                ),
            ],
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn model(&self) -> &OpenPriceModel {
        &self.model
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(records: Vec<StockRecord>, model: OpenPriceModel) -> Self {
        let chart_service = ChartService::new();
        let prediction_service = PredictionService::new();

        let sept11_window = EventWindow::following(SEPT11_ANCHOR, 2);
        let sept11 = chart_service.event_window_figure(
            &records,
            2001,
            &[WindowStyle {
                window: &sept11_window,
                label: "Post 9/11 (2 Months)",
                color: "blue",
                line_width: 2.0,
            }],
            MarkerLine::new(SEPT11_ANCHOR, "9/11", "red"),
            "Apple Open Prices: Highlighting 9/11 and Two Months After (2001)",
        );

        let iphone1_before = EventWindow::leading(IPHONE1_ANCHOR, 1);
        let iphone1_after = EventWindow::trailing(IPHONE1_ANCHOR, 1);
        let iphone16_before = EventWindow::leading(IPHONE16_ANCHOR, 1);
        let iphone16_after = EventWindow::trailing(IPHONE16_ANCHOR, 1);
        let iphone_releases = chart_service.release_figure(
            &records,
            (
                2007,
                &[
                    WindowStyle {
                        window: &iphone1_before,
                        label: "Month Before Release",
                        color: "red",
                        line_width: 1.0,
                    },
                    WindowStyle {
                        window: &iphone1_after,
                        label: "Month After Release",
                        color: "blue",
                        line_width: 1.0,
                    },
                ],
                MarkerLine::new(IPHONE1_ANCHOR, "iPhone 1 Release", "black"),
                "iPhone 1 Release (2007)",
            ),
            (
                2024,
                &[
                    WindowStyle {
                        window: &iphone16_before,
                        label: "Month Before Release",
                        color: "red",
                        line_width: 1.0,
                    },
                    WindowStyle {
                        window: &iphone16_after,
                        label: "Month After Release",
                        color: "blue",
                        line_width: 1.0,
                    },
                ],
                MarkerLine::new(IPHONE16_ANCHOR, "iPhone 16 Release", "green"),
                "iPhone 16 Release (2024)",
            ),
            "Apple Open Prices Around iPhone 1 and iPhone 16 Releases",
        );

        let covid_comparison = chart_service.year_overlay_figure(
            &records,
            &COMPARISON_YEARS,
            "Apple Open Prices (2017 - 2022)",
        );

        let accuracy_pct = prediction_service.accuracy_pct(&model, &records);

        Self {
            records,
            model,
            prediction_service,
            sept11,
            iphone_releases,
            covid_comparison,
            accuracy_pct,
        }
    }
}
