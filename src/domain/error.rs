// Domain errors shared by the generator, aggregator and view pipeline
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    /// Caller handed the core something it cannot work with
    /// (non-positive point count, empty dataset, unknown label, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DashboardError {
    pub fn invalid(message: impl Into<String>) -> Self {
        DashboardError::InvalidArgument(message.into())
    }
}
