use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::regression::Features;
use crate::errors::CoreError;

/// First selectable year in the prediction form.
pub const MIN_YEAR: i32 = 2007;

/// Last selectable year in the prediction form.
pub const MAX_YEAR: i32 = 2050;

/// Default expected volume pre-filled in the form.
pub const DEFAULT_VOLUME: u64 = 50_000_000;

/// Step size of the volume input.
pub const VOLUME_STEP: u64 = 1_000_000;

/// The four form inputs composing a prediction query.
///
/// Invariant: `(year, month, day)` must form a valid calendar date —
/// enforced by `compose_date()` before any model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Expected trading volume (the form floor is zero; the type enforces it).
    pub volume: u64,
    pub year: i32,
    /// Calendar month, 1–12.
    pub month: u32,
    /// Day of month, 1–31.
    pub day: u32,
}

impl PredictionRequest {
    pub fn new(volume: u64, year: i32, month: u32, day: u32) -> Self {
        Self {
            volume,
            year,
            month,
            day,
        }
    }

    /// Validate the request and compose the calendar date it refers to.
    ///
    /// Rejects out-of-range selector values and impossible dates
    /// (e.g., February 30) with a user-facing validation error.
    pub fn compose_date(&self) -> Result<NaiveDate, CoreError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(CoreError::ValidationError(format!(
                "Year {} is outside the supported range {MIN_YEAR}–{MAX_YEAR}",
                self.year
            )));
        }
        if !(1..=12).contains(&self.month) {
            return Err(CoreError::ValidationError(format!(
                "Month {} is outside 1–12",
                self.month
            )));
        }
        if !(1..=31).contains(&self.day) {
            return Err(CoreError::ValidationError(format!(
                "Day {} is outside 1–31",
                self.day
            )));
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            CoreError::ValidationError(
                "Invalid date selected. Please choose a valid date.".to_string(),
            )
        })
    }

    /// The model feature vector, in the fixed trained order
    /// `[volume, year, month, day]`.
    #[must_use]
    pub fn features(&self) -> Features {
        [
            self.volume as f64,
            f64::from(self.year),
            f64::from(self.month),
            f64::from(self.day),
        ]
    }
}

/// Result of a successful prediction, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// Raw predicted open price.
    pub predicted_open: f64,

    /// Currency-formatted success message, two decimal places.
    pub message: String,

    /// Model accuracy (R²) over the full historical set, as a percentage.
    pub accuracy_pct: f64,

    /// Accuracy formatted for display, two decimal places.
    pub accuracy_message: String,
}

impl PredictionOutcome {
    pub fn new(predicted_open: f64, accuracy_pct: f64) -> Self {
        Self {
            predicted_open,
            message: format!("Open Price Prediction: ${predicted_open:.2}"),
            accuracy_pct,
            accuracy_message: format!("Model Accuracy (R²): {accuracy_pct:.2}%"),
        }
    }
}

/// Selector ranges and defaults the frontend needs to build the form.
/// The core owns the constraints; the frontend only renders widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionFormSpec {
    pub days: Vec<u32>,
    pub months: Vec<u32>,
    pub years: Vec<i32>,
    pub min_volume: u64,
    pub default_volume: u64,
    pub volume_step: u64,
}

impl Default for PredictionFormSpec {
    fn default() -> Self {
        Self {
            days: (1..=31).collect(),
            months: (1..=12).collect(),
            years: (MIN_YEAR..=MAX_YEAR).collect(),
            min_volume: 0,
            default_volume: DEFAULT_VOLUME,
            volume_step: VOLUME_STEP,
        }
    }
}
