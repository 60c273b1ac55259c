// Source trait for datasets
use crate::domain::dataset::Dataset;
use crate::domain::error::Result;
use std::sync::Arc;

pub trait DatasetSource: Send + Sync {
    /// Produce a dataset with exactly `n_points` rows.
    /// Non-positive counts fail with `InvalidArgument`.
    fn dataset(&self, n_points: i64) -> Result<Arc<Dataset>>;
}
