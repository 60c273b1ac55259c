// Synthetic dataset generator
use crate::application::dataset_source::DatasetSource;
use crate::domain::dataset::{Category, DataRow, Dataset, Region};
use crate::domain::error::{DashboardError, Result};
use chrono::{Days, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use std::sync::Arc;

/// Profit is drawn as this fraction range of sales; the negative end simulates losses.
const PROFIT_FRACTION_MIN: f64 = -0.2;
const PROFIT_FRACTION_MAX: f64 = 0.4;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub anchor_date: NaiveDate,
    pub sales_mean: f64,
    pub sales_std_dev: f64,
    /// Fixed seed for reproducible output; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            anchor_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            sales_mean: 1000.0,
            sales_std_dev: 300.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    settings: GeneratorSettings,
    sales: Normal<f64>,
}

impl SyntheticGenerator {
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        let sales = Normal::new(settings.sales_mean, settings.sales_std_dev).map_err(|e| {
            DashboardError::invalid(format!(
                "sales distribution N({}, {}): {}",
                settings.sales_mean, settings.sales_std_dev, e
            ))
        })?;
        Ok(Self { settings, sales })
    }

    pub fn generate(&self, n_points: i64) -> Result<Dataset> {
        if n_points <= 0 {
            return Err(DashboardError::invalid(format!(
                "n_points must be a positive integer, got {}",
                n_points
            )));
        }

        let mut rng = match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut rows = Vec::with_capacity(n_points as usize);
        for offset in 0..n_points as u64 {
            let date = self
                .settings
                .anchor_date
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| DashboardError::invalid(format!("date overflow at row {}", offset)))?;

            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            let region = Region::ALL[rng.gen_range(0..Region::ALL.len())];
            let sales = round_cents(self.sales.sample(&mut rng).max(0.0));
            let profit = round_cents(sales * rng.gen_range(PROFIT_FRACTION_MIN..PROFIT_FRACTION_MAX));

            rows.push(DataRow::new(date, category, sales, profit, region));
        }

        tracing::debug!("Generated {} synthetic rows", rows.len());
        Ok(Dataset::new(rows))
    }
}

impl DatasetSource for SyntheticGenerator {
    fn dataset(&self, n_points: i64) -> Result<Arc<Dataset>> {
        self.generate(n_points).map(Arc::new)
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
