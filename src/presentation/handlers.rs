// HTTP request handlers
use crate::domain::dashboard::{ChartVisibility, Dashboard, ViewConfig};
use crate::domain::filter::DatasetFilter;
use crate::domain::metrics::SummaryMetrics;
use crate::infrastructure::csv_export::dataset_to_csv;
use crate::infrastructure::http_response::csv_download_response;
use crate::presentation::api_error::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

/// Control-surface parameters shared by every data endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub points: Option<i64>,
    pub region: Option<String>,
    pub category: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub line: Option<bool>,
    pub bar: Option<bool>,
    pub scatter: Option<bool>,
    pub heatmap: Option<bool>,
    pub pie: Option<bool>,
    pub donut: Option<bool>,
    pub table: Option<bool>,
}

impl ViewQuery {
    fn filter(&self) -> Result<DatasetFilter, ApiError> {
        Ok(DatasetFilter::parse(
            self.region.as_deref(),
            self.category.as_deref(),
            self.start,
            self.end,
        )?)
    }

    fn visibility(&self) -> ChartVisibility {
        let defaults = ChartVisibility::default();
        ChartVisibility {
            line: self.line.unwrap_or(defaults.line),
            bar: self.bar.unwrap_or(defaults.bar),
            scatter: self.scatter.unwrap_or(defaults.scatter),
            heatmap: self.heatmap.unwrap_or(defaults.heatmap),
            pie: self.pie.unwrap_or(defaults.pie),
            donut: self.donut.unwrap_or(defaults.donut),
            table: self.table.unwrap_or(defaults.table),
        }
    }

    fn view_config(&self, state: &AppState) -> Result<ViewConfig, ApiError> {
        Ok(ViewConfig {
            n_points: state.dataset_settings.clamp_points(self.points),
            filter: self.filter()?,
            visibility: self.visibility(),
        })
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard: tiles, charts and optionally the data table
pub async fn get_dashboard(
    Query(query): Query<ViewQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dashboard>, ApiError> {
    let view = query.view_config(&state)?;
    let dashboard = state.dashboard_service.build_dashboard(&view)?;
    Ok(Json(dashboard))
}

/// Summary metrics only
pub async fn get_summary(
    Query(query): Query<ViewQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SummaryMetrics>, ApiError> {
    let view = query.view_config(&state)?;
    let summary = state.dashboard_service.summary(view.n_points, &view.filter)?;
    Ok(Json(summary))
}

/// Download the (filtered) dataset as CSV
pub async fn export_csv(
    Query(query): Query<ViewQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let view = query.view_config(&state)?;
    let dataset = state.dashboard_service.dataset(view.n_points, &view.filter)?;
    let bytes = dataset_to_csv(&dataset)?;

    tracing::info!("Exporting {} rows as CSV ({} bytes)", dataset.len(), bytes.len());

    let filename = &state.dashboard_service.settings().export_filename;
    Ok(match csv_download_response(bytes, filename) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    })
}
