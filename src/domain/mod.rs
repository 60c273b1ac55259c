// Domain layer - Dataset, metrics and view models
pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod views;
