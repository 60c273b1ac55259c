// CSV encoding of datasets for download
use crate::domain::dataset::Dataset;
use anyhow::{Context, Result};

/// Encode as UTF-8 CSV: header row, then one record per row in dataset order.
pub fn dataset_to_csv(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::with_capacity(64 * (dataset.len() + 1)));

    wtr.write_record(Dataset::COLUMNS)
        .context("writing CSV header")?;

    for row in dataset.rows() {
        wtr.write_record([
            row.date.format("%Y-%m-%d").to_string(),
            row.category.label().to_string(),
            format!("{:.2}", row.sales),
            format!("{:.2}", row.profit),
            row.region.label().to_string(),
        ])
        .with_context(|| format!("writing CSV record for {}", row.date))?;
    }

    wtr.into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV writer: {}", e.error()))
}
