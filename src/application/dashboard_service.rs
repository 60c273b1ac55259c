// Dashboard service - Use case for building dashboards from a view configuration
use crate::application::dataset_source::DatasetSource;
use crate::domain::chart::{
    ChartBody, ChartData, ChartKind, PieSlice, ScatterGroup, ScatterPoint, SeriesData, SeriesPoint,
    TileData,
};
use crate::domain::dashboard::{ChartVisibility, Dashboard, ViewConfig};
use crate::domain::dataset::{Category, Dataset};
use crate::domain::error::Result;
use crate::domain::filter::DatasetFilter;
use crate::domain::metrics::{summarize, SummaryMetrics};
use crate::domain::views;
use crate::infrastructure::config::{render_template, DashboardSettings};
use std::collections::HashMap;
use std::sync::Arc;

const DONUT_HOLE: f64 = 0.4;
const SALES_COLOR: &str = "#4D96FF";
const PROFIT_COLOR: &str = "#6BCB77";
const MEAN_COLOR: &str = "#FFD93D";

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DatasetSource>,
    settings: DashboardSettings,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DatasetSource>, settings: DashboardSettings) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Generated (possibly cached) dataset with the filter applied.
    pub fn dataset(&self, n_points: i64, filter: &DatasetFilter) -> Result<Arc<Dataset>> {
        let dataset = self.source.dataset(n_points)?;
        if filter.is_empty() {
            return Ok(dataset);
        }
        Ok(Arc::new(filter.apply(&dataset)))
    }

    pub fn summary(&self, n_points: i64, filter: &DatasetFilter) -> Result<SummaryMetrics> {
        summarize(&*self.dataset(n_points, filter)?)
    }

    pub fn build_dashboard(&self, view: &ViewConfig) -> Result<Dashboard> {
        let dataset = self.dataset(view.n_points, &view.filter)?;

        let mut vars = HashMap::new();
        vars.insert("points".to_string(), view.n_points.to_string());
        let title = render_template(&self.settings.title, &vars);

        let (summary, tiles, charts) = if dataset.is_empty() {
            tracing::warn!("Filter left no rows out of {} points", view.n_points);
            (None, Vec::new(), Vec::new())
        } else {
            let summary = summarize(&dataset)?;
            let tiles = build_tiles(&summary);
            let charts = self.build_charts(&dataset, &view.visibility);
            (Some(summary), tiles, charts)
        };

        tracing::info!(
            "Built dashboard: {} points, {} rows after filter, {} charts",
            view.n_points,
            dataset.len(),
            charts.len()
        );

        Ok(Dashboard {
            title,
            points: view.n_points.max(0) as usize,
            rows: dataset.len(),
            summary,
            tiles,
            charts,
            table: view.visibility.table.then(|| dataset.rows().to_vec()),
        })
    }

    fn build_charts(&self, dataset: &Dataset, visibility: &ChartVisibility) -> Vec<ChartData> {
        let mut charts = Vec::new();

        if visibility.line {
            charts.push(self.daily_trend_chart(dataset));
        }
        if visibility.bar {
            charts.push(category_bar_chart(dataset));
            charts.push(region_bar_chart(dataset));
            charts.push(monthly_bar_chart(dataset));
        }
        if visibility.scatter {
            charts.push(scatter_chart(dataset));
        }
        if visibility.heatmap {
            charts.push(heatmap_chart(dataset));
        }
        if visibility.pie {
            charts.push(pie_chart(dataset, visibility.donut));
        }

        charts
    }

    fn daily_trend_chart(&self, dataset: &Dataset) -> ChartData {
        let daily = views::downsample(
            views::daily_totals(dataset),
            self.settings.max_points_per_series,
        );
        let date_label = |d: &views::DailyTotal| d.date.format("%Y-%m-%d").to_string();

        let sales = daily
            .iter()
            .map(|d| SeriesPoint::new(date_label(d), d.sales))
            .collect();
        let profit = daily
            .iter()
            .map(|d| SeriesPoint::new(date_label(d), d.profit))
            .collect();

        ChartData::new(
            "daily_trend",
            "Daily sales and profit",
            Some("$"),
            ChartKind::Line,
            Some(2),
            ChartBody::Series {
                series: vec![
                    SeriesData::new("sales", "Sales", Some(SALES_COLOR), sales),
                    SeriesData::new("profit", "Profit", Some(PROFIT_COLOR), profit),
                ],
            },
        )
    }
}

fn build_tiles(summary: &SummaryMetrics) -> Vec<TileData> {
    let deltas = &summary.deltas;
    vec![
        TileData::new("total_sales", "Total sales", "$", summary.total_sales, 2, deltas.total_sales_pct),
        TileData::new("total_profit", "Total profit", "$", summary.total_profit, 2, deltas.total_profit_pct),
        TileData::new("mean_sales", "Average sales", "$", summary.mean_sales, 2, deltas.mean_sales_pct),
        TileData::new("margin", "Profit margin", "%", summary.margin * 100.0, 1, deltas.margin_pct),
        TileData::new("rows", "Rows", "", summary.rows as f64, 0, None),
    ]
}

fn category_bar_chart(dataset: &Dataset) -> ChartData {
    let points = views::category_totals(dataset)
        .into_iter()
        .map(|t| SeriesPoint::new(t.label, t.total))
        .collect();

    ChartData::new(
        "sales_by_category",
        "Sales by category",
        Some("$"),
        ChartKind::Bar,
        Some(0),
        ChartBody::Series {
            series: vec![SeriesData::new("sales", "Sales", Some(SALES_COLOR), points)],
        },
    )
}

fn region_bar_chart(dataset: &Dataset) -> ChartData {
    let totals = views::region_totals(dataset);
    let sums = totals
        .iter()
        .map(|t| SeriesPoint::new(t.label.clone(), t.total))
        .collect();
    let means = totals
        .into_iter()
        .map(|t| SeriesPoint::new(t.label, t.mean))
        .collect();

    ChartData::new(
        "sales_by_region",
        "Sales by region",
        Some("$"),
        ChartKind::Bar,
        Some(0),
        ChartBody::Series {
            series: vec![
                SeriesData::new("total", "Total sales", Some(SALES_COLOR), sums),
                SeriesData::new("mean", "Average sales", Some(MEAN_COLOR), means),
            ],
        },
    )
}

fn monthly_bar_chart(dataset: &Dataset) -> ChartData {
    let points = views::monthly_totals(dataset)
        .into_iter()
        .map(|t| SeriesPoint::new(t.label, t.total))
        .collect();

    ChartData::new(
        "monthly_sales",
        "Monthly sales",
        Some("$"),
        ChartKind::Bar,
        Some(0),
        ChartBody::Series {
            series: vec![SeriesData::new("sales", "Sales", Some(SALES_COLOR), points)],
        },
    )
}

fn scatter_chart(dataset: &Dataset) -> ChartData {
    let groups = Category::ALL
        .iter()
        .filter_map(|&category| {
            let points: Vec<ScatterPoint> = dataset
                .rows()
                .iter()
                .filter(|r| r.category == category)
                .map(|r| ScatterPoint { x: r.sales, y: r.profit })
                .collect();
            (!points.is_empty()).then(|| ScatterGroup {
                name: category.label().to_string(),
                points,
            })
        })
        .collect();

    ChartData::new(
        "sales_vs_profit",
        "Sales vs profit",
        Some("$"),
        ChartKind::Scatter,
        Some(2),
        ChartBody::Scatter { groups },
    )
}

fn heatmap_chart(dataset: &Dataset) -> ChartData {
    let pivot = views::region_category_pivot(dataset);

    ChartData::new(
        "region_category_heatmap",
        "Sales by region and category",
        Some("$"),
        ChartKind::Heatmap,
        Some(0),
        ChartBody::Heatmap {
            rows: pivot.rows,
            columns: pivot.columns,
            values: pivot.values,
        },
    )
}

fn pie_chart(dataset: &Dataset, donut: bool) -> ChartData {
    let slices = views::category_shares(dataset)
        .into_iter()
        .map(|s| PieSlice {
            label: s.label,
            value: s.value,
            share: s.share,
        })
        .collect();

    ChartData::new(
        "category_share",
        "Category share of sales",
        None,
        ChartKind::Pie,
        Some(1),
        ChartBody::Pie {
            hole: if donut { DONUT_HOLE } else { 0.0 },
            slices,
        },
    )
}
