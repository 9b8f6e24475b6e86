use serde::{Deserialize, Serialize};

/// Number of model features.
pub const FEATURE_COUNT: usize = 4;

/// The fixed feature order the model was trained with.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["Volume", "year", "month", "day"];

/// One inference input: `[volume, year, month, day]` as floats.
pub type Features = [f64; FEATURE_COUNT];

/// A pre-fitted linear regression over the fixed feature order
/// `[volume, year, month, day]`, mapping to an open-price prediction.
///
/// This crate never fits or tunes the model — it is trained externally
/// and shipped as a serialized artifact (see `storage`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenPriceModel {
    pub intercept: f64,
    pub coefficients: Features,
}

impl OpenPriceModel {
    pub fn new(intercept: f64, coefficients: Features) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    /// Point prediction for a single feature vector.
    #[must_use]
    pub fn predict(&self, features: &Features) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.iter())
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}
