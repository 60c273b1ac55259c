// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::DatasetSettings;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    /// Slider bounds used to clamp requested point counts.
    pub dataset_settings: DatasetSettings,
}
