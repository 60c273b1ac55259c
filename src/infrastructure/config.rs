use crate::application::generator::GeneratorSettings;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Slider bounds and generator parameters.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetSettings {
    pub default_points: i64,
    pub min_points: i64,
    pub max_points: i64,
    pub seed: Option<u64>,
    pub anchor_date: NaiveDate,
    pub sales_mean: f64,
    pub sales_std_dev: f64,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        let generator = GeneratorSettings::default();
        Self {
            default_points: 100,
            min_points: 10,
            max_points: 1000,
            seed: generator.seed,
            anchor_date: generator.anchor_date,
            sales_mean: generator.sales_mean,
            sales_std_dev: generator.sales_std_dev,
        }
    }
}

impl DatasetSettings {
    /// Clamp a requested point count to the slider range; absent means the default.
    pub fn clamp_points(&self, requested: Option<i64>) -> i64 {
        requested
            .unwrap_or(self.default_points)
            .clamp(self.min_points, self.max_points)
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            anchor_date: self.anchor_date,
            sales_mean: self.sales_mean,
            sales_std_dev: self.sales_std_dev,
            seed: self.seed,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardSettings {
    /// Supports the `${points}` placeholder.
    pub title: String,
    pub max_points_per_series: usize,
    pub export_filename: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "Sales Dashboard (${points} points)".to_string(),
            max_points_per_series: 150,
            export_filename: "sales_data.csv".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        let d = &self.dataset;
        if d.min_points < 1 {
            anyhow::bail!("dataset.min_points must be at least 1, got {}", d.min_points);
        }
        if d.min_points > d.max_points {
            anyhow::bail!(
                "dataset.min_points ({}) exceeds dataset.max_points ({})",
                d.min_points,
                d.max_points
            );
        }
        if !(d.min_points..=d.max_points).contains(&d.default_points) {
            anyhow::bail!(
                "dataset.default_points ({}) outside [{}, {}]",
                d.default_points,
                d.min_points,
                d.max_points
            );
        }
        if !(d.sales_std_dev.is_finite() && d.sales_std_dev >= 0.0) {
            anyhow::bail!("dataset.sales_std_dev must be a non-negative number");
        }
        Ok(())
    }
}

/// Load `config/dashboard.toml` (optional) with `DASHBOARD__*` environment overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    finish(builder)
}

fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> anyhow::Result<AppConfig> {
    let settings: AppConfig = builder.build()?.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

/// Replace `${name}` placeholders in a template string
pub fn render_template(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
