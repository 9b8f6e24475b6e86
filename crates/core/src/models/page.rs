use serde::{Deserialize, Serialize};

use super::chart::ChartFigure;
use super::prediction::PredictionFormSpec;

/// One section of the dashboard page: a heading, optionally a figure,
/// optionally a commentary paragraph, optionally the prediction form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSection {
    pub heading: String,
    pub figure: Option<ChartFigure>,
    pub commentary: Option<String>,
    pub form: Option<PredictionFormSpec>,
}

impl DashboardSection {
    /// A narrative section: heading, chart, commentary.
    pub fn narrative(
        heading: impl Into<String>,
        figure: ChartFigure,
        commentary: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            figure: Some(figure),
            commentary: Some(commentary.into()),
            form: None,
        }
    }

    /// The interactive prediction section: heading plus form spec.
    pub fn prediction(heading: impl Into<String>, form: PredictionFormSpec) -> Self {
        Self {
            heading: heading.into(),
            figure: None,
            commentary: None,
            form: Some(form),
        }
    }
}

/// The whole single-page dashboard, in display order.
/// The frontend walks the sections top to bottom and renders each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPage {
    pub title: String,
    pub sections: Vec<DashboardSection>,
}
