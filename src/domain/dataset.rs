// Dataset domain model
use super::error::DashboardError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Groceries,
    Home,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Groceries,
        Category::Home,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Groceries => "Groceries",
            Category::Home => "Home",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub fn label(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::invalid(format!("unknown category '{}'", s)))
    }
}

impl FromStr for Region {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::invalid(format!("unknown region '{}'", s)))
    }
}

/// One synthetic observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataRow {
    pub date: NaiveDate,
    pub category: Category,
    pub sales: f64,
    pub profit: f64,
    pub region: Region,
}

impl DataRow {
    pub fn new(date: NaiveDate, category: Category, sales: f64, profit: f64, region: Region) -> Self {
        Self {
            date,
            category,
            sales,
            profit,
            region,
        }
    }
}

/// Ordered rows, ascending by date.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<DataRow>,
}

impl Dataset {
    /// Column names in export order.
    pub const COLUMNS: [&'static str; 5] = ["date", "category", "sales", "profit", "region"];

    pub fn new(rows: Vec<DataRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Positional split into (previous, current); an odd extra row lands in current.
    pub fn split_periods(&self) -> (&[DataRow], &[DataRow]) {
        self.rows.split_at(self.rows.len() / 2)
    }
}

impl FromIterator<DataRow> for Dataset {
    fn from_iter<I: IntoIterator<Item = DataRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
