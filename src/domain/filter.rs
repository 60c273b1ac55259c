// Row filters applied after generation
use super::dataset::{Category, DataRow, Dataset, Region};
use super::error::{DashboardError, Result};
use chrono::NaiveDate;

/// Label filters accept this in place of a concrete label.
pub const ALL_LABELS: &str = "all";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetFilter {
    pub region: Option<Region>,
    pub category: Option<Category>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DatasetFilter {
    /// Build a filter from raw control-surface values.
    pub fn parse(
        region: Option<&str>,
        category: Option<&str>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(DashboardError::invalid(format!(
                    "start date {} is after end date {}",
                    s, e
                )));
            }
        }

        Ok(Self {
            region: parse_label(region)?,
            category: parse_label(category)?,
            start,
            end,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.region.is_none() && self.category.is_none() && self.start.is_none() && self.end.is_none()
    }

    pub fn matches(&self, row: &DataRow) -> bool {
        self.region.is_none_or(|r| row.region == r)
            && self.category.is_none_or(|c| row.category == c)
            && self.start.is_none_or(|s| row.date >= s)
            && self.end.is_none_or(|e| row.date <= e)
    }

    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        dataset.rows().iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

fn parse_label<T>(value: Option<&str>) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = DashboardError>,
{
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case(ALL_LABELS) => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}
