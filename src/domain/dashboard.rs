// Dashboard domain model
use super::chart::{ChartData, TileData};
use super::dataset::DataRow;
use super::filter::DatasetFilter;
use super::metrics::SummaryMetrics;
use serde::Serialize;

/// Which widgets the control surface wants rendered.
/// Has no effect on generation or aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartVisibility {
    pub line: bool,
    pub bar: bool,
    pub scatter: bool,
    pub heatmap: bool,
    pub pie: bool,
    pub donut: bool,
    pub table: bool,
}

impl Default for ChartVisibility {
    fn default() -> Self {
        Self {
            line: true,
            bar: true,
            scatter: true,
            heatmap: true,
            pie: true,
            donut: false,
            table: false,
        }
    }
}

/// Everything one render pass needs: point count, filter, visible widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub n_points: i64,
    pub filter: DatasetFilter,
    pub visibility: ChartVisibility,
}

impl ViewConfig {
    pub fn new(n_points: i64) -> Self {
        Self {
            n_points,
            filter: DatasetFilter::default(),
            visibility: ChartVisibility::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub points: usize,
    /// Rows left after filtering.
    pub rows: usize,
    pub summary: Option<SummaryMetrics>,
    pub tiles: Vec<TileData>,
    pub charts: Vec<ChartData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Vec<DataRow>>,
}
