use crate::models::prediction::PredictionRequest;
use crate::models::record::StockRecord;
use crate::models::regression::OpenPriceModel;
use crate::services::dataset_service::DatasetService;

/// Runs model inference and scores the model against history.
///
/// Everything here is a pure function of (model, inputs, records) —
/// identical inputs always produce identical outputs.
pub struct PredictionService {
    dataset_service: DatasetService,
}

impl PredictionService {
    pub fn new() -> Self {
        Self {
            dataset_service: DatasetService::new(),
        }
    }

    /// Point prediction for a single form request.
    /// Callers validate the request date first (`compose_date`).
    #[must_use]
    pub fn predict(&self, model: &OpenPriceModel, request: &PredictionRequest) -> f64 {
        model.predict(&request.features())
    }

    /// Coefficient of determination of the model over every dated row,
    /// in [0, 1].
    ///
    /// A model worse than predicting the mean has a negative raw R²;
    /// the reported score clamps at zero so the percentage form stays
    /// within [0, 100].
    #[must_use]
    pub fn r_squared(&self, model: &OpenPriceModel, records: &[StockRecord]) -> f64 {
        let rows = self.dataset_service.feature_rows(records);
        if rows.is_empty() {
            return 0.0;
        }

        let mean = rows.iter().map(|(_, y)| y).sum::<f64>() / rows.len() as f64;
        let mut ss_res = 0.0;
        let mut ss_tot = 0.0;
        for (features, actual) in &rows {
            let predicted = model.predict(features);
            ss_res += (actual - predicted).powi(2);
            ss_tot += (actual - mean).powi(2);
        }

        if ss_tot == 0.0 {
            // Constant target: perfect only if the residuals are zero too.
            return if ss_res == 0.0 { 1.0 } else { 0.0 };
        }

        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    }

    /// `r_squared` expressed as a percentage.
    #[must_use]
    pub fn accuracy_pct(&self, model: &OpenPriceModel, records: &[StockRecord]) -> f64 {
        self.r_squared(model, records) * 100.0
    }
}

impl Default for PredictionService {
    fn default() -> Self {
        Self::new()
    }
}
