pub mod chart_service;
pub mod comparison_service;
pub mod dataset_service;
pub mod prediction_service;
pub mod window_service;
