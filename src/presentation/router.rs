// Route table for the dashboard service
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{export_csv, get_dashboard, get_summary, health_check};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/summary", get(get_summary))
        .route("/dataset.csv", get(export_csv))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::generator::{GeneratorSettings, SyntheticGenerator};
    use crate::infrastructure::config::{DashboardSettings, DatasetSettings};
    use crate::infrastructure::dataset_cache::{DatasetCache, MemoizedSource};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let dataset_settings = DatasetSettings {
            min_points: 1,
            seed: Some(99),
            ..DatasetSettings::default()
        };
        let generator = SyntheticGenerator::new(GeneratorSettings {
            seed: dataset_settings.seed,
            ..GeneratorSettings::default()
        })
        .unwrap();
        let source = MemoizedSource::new(generator, Arc::new(DatasetCache::new()));
        let state = Arc::new(AppState {
            dashboard_service: DashboardService::new(Arc::new(source), DashboardSettings::default()),
            dataset_settings,
        });
        build_router(state)
    }

    async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, _, body) = get("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_dashboard_json() {
        let (status, _, body) = get("/dashboard?points=40&pie=false&table=true").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["points"], 40);
        assert_eq!(json["rows"], 40);
        assert_eq!(json["table"].as_array().unwrap().len(), 40);
        let ids: Vec<&str> = json["charts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert!(!ids.contains(&"category_share"));
        assert!(ids.contains(&"daily_trend"));
    }

    #[tokio::test]
    async fn test_points_clamped_to_slider_range() {
        let (status, _, body) = get("/dashboard?points=50000").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["points"], 1000);
    }

    #[tokio::test]
    async fn test_summary_endpoint() {
        let (status, _, body) = get("/dashboard/summary?points=4").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["rows"], 4);
        assert_eq!(json["previous"]["rows"], 2);
        assert_eq!(json["current"]["rows"], 2);
    }

    #[tokio::test]
    async fn test_summary_of_empty_filter_is_bad_request() {
        let (status, _, body) = get("/dashboard/summary?points=10&start=2031-01-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("empty dataset"));
    }

    #[tokio::test]
    async fn test_unknown_region_is_bad_request() {
        let (status, _, _) = get("/dashboard?region=atlantis").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_csv_export() {
        let (status, headers, body) = get("/dataset.csv?points=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/csv; charset=utf-8");
        assert!(headers[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .starts_with("attachment;"));

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "date,category,sales,profit,region");
    }

    #[tokio::test]
    async fn test_csv_matches_cached_dashboard_table() {
        let app = app();
        let dashboard = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/dashboard?points=5&table=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = to_bytes(dashboard.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let first_sales = json["table"][0]["sales"].as_f64().unwrap();

        let csv = app
            .oneshot(Request::builder().uri("/dataset.csv?points=5").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = to_bytes(csv.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        let first_row: Vec<&str> = text.lines().nth(1).unwrap().split(',').collect();

        assert_eq!(first_row[2], format!("{:.2}", first_sales));
    }
}
