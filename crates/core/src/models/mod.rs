pub mod chart;
pub mod page;
pub mod prediction;
pub mod record;
pub mod regression;
pub mod window;
