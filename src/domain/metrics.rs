// Summary metrics derived from a dataset
use super::dataset::{DataRow, Dataset};
use super::error::{DashboardError, Result};
use serde::Serialize;

/// Aggregates over one contiguous slice of rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodMetrics {
    pub rows: usize,
    pub total_sales: f64,
    pub total_profit: f64,
    pub mean_sales: f64,
    pub margin: f64,
}

impl PeriodMetrics {
    fn from_rows(rows: &[DataRow]) -> Self {
        let total_sales: f64 = rows.iter().map(|r| r.sales).sum();
        let total_profit: f64 = rows.iter().map(|r| r.profit).sum();
        let mean_sales = if rows.is_empty() {
            0.0
        } else {
            total_sales / rows.len() as f64
        };

        Self {
            rows: rows.len(),
            total_sales,
            total_profit,
            mean_sales,
            margin: margin(total_profit, total_sales),
        }
    }
}

/// Percentage change from the previous to the current period.
/// `None` when the previous value is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodDeltas {
    pub total_sales_pct: Option<f64>,
    pub total_profit_pct: Option<f64>,
    pub mean_sales_pct: Option<f64>,
    pub margin_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub rows: usize,
    pub total_sales: f64,
    pub total_profit: f64,
    pub mean_sales: f64,
    pub margin: f64,
    pub previous: PeriodMetrics,
    pub current: PeriodMetrics,
    pub deltas: PeriodDeltas,
}

/// Summarize a non-empty dataset.
pub fn summarize(dataset: &Dataset) -> Result<SummaryMetrics> {
    if dataset.is_empty() {
        return Err(DashboardError::invalid("cannot summarize an empty dataset"));
    }

    let overall = PeriodMetrics::from_rows(dataset.rows());
    let (previous, current) = dataset.split_periods();
    let previous = PeriodMetrics::from_rows(previous);
    let current = PeriodMetrics::from_rows(current);

    let deltas = PeriodDeltas {
        total_sales_pct: percent_change(previous.total_sales, current.total_sales),
        total_profit_pct: percent_change(previous.total_profit, current.total_profit),
        mean_sales_pct: percent_change(previous.mean_sales, current.mean_sales),
        margin_pct: percent_change(previous.margin, current.margin),
    };

    Ok(SummaryMetrics {
        rows: overall.rows,
        total_sales: overall.total_sales,
        total_profit: overall.total_profit,
        mean_sales: overall.mean_sales,
        margin: overall.margin,
        previous,
        current,
        deltas,
    })
}

/// Profit over sales; zero sales reports a zero margin.
fn margin(total_profit: f64, total_sales: f64) -> f64 {
    if total_sales == 0.0 {
        0.0
    } else {
        total_profit / total_sales
    }
}

fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        None
    } else {
        Some((current - previous) / previous.abs() * 100.0)
    }
}
