// Grouped and pivoted views over a dataset, feeding the chart builders
use super::dataset::{Category, DataRow, Dataset, Region};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub sales: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelTotal {
    pub label: String,
    pub total: f64,
    pub mean: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub label: String,
    pub value: f64,
    pub share: f64,
}

/// Region x category sales totals, zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Pivot {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Sales and profit per date, ascending.
pub fn daily_totals(dataset: &Dataset) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for row in dataset.rows() {
        let entry = by_date.entry(row.date).or_default();
        entry.0 += row.sales;
        entry.1 += row.profit;
    }

    by_date
        .into_iter()
        .map(|(date, (sales, profit))| DailyTotal { date, sales, profit })
        .collect()
}

/// Sales per calendar month, keyed `YYYY-MM`.
pub fn monthly_totals(dataset: &Dataset) -> Vec<LabelTotal> {
    let mut by_month: BTreeMap<(i32, u32), Vec<f64>> = BTreeMap::new();
    for row in dataset.rows() {
        by_month
            .entry((row.date.year(), row.date.month()))
            .or_default()
            .push(row.sales);
    }

    by_month
        .into_iter()
        .map(|((year, month), sales)| label_total(format!("{:04}-{:02}", year, month), &sales))
        .collect()
}

pub fn category_totals(dataset: &Dataset) -> Vec<LabelTotal> {
    grouped_totals(dataset, &Category::ALL, |row| row.category, |c| c.label())
}

pub fn region_totals(dataset: &Dataset) -> Vec<LabelTotal> {
    grouped_totals(dataset, &Region::ALL, |row| row.region, |r| r.label())
}

/// Sales share per category. Shares are zero when total sales are zero.
pub fn category_shares(dataset: &Dataset) -> Vec<Share> {
    let totals = category_totals(dataset);
    let grand_total: f64 = totals.iter().map(|t| t.total).sum();

    totals
        .into_iter()
        .map(|t| Share {
            share: if grand_total == 0.0 { 0.0 } else { t.total / grand_total },
            label: t.label,
            value: t.total,
        })
        .collect()
}

pub fn region_category_pivot(dataset: &Dataset) -> Pivot {
    let mut values = vec![vec![0.0; Category::ALL.len()]; Region::ALL.len()];
    for row in dataset.rows() {
        let r = Region::ALL.iter().position(|&r| r == row.region).unwrap_or_default();
        let c = Category::ALL.iter().position(|&c| c == row.category).unwrap_or_default();
        values[r][c] += row.sales;
    }

    Pivot {
        rows: Region::ALL.iter().map(|r| r.label().to_string()).collect(),
        columns: Category::ALL.iter().map(|c| c.label().to_string()).collect(),
        values,
    }
}

/// Bucket-average a daily series down to at most `max_points`,
/// keeping the middle date of each bucket.
pub fn downsample(points: Vec<DailyTotal>, max_points: usize) -> Vec<DailyTotal> {
    if max_points == 0 || points.len() <= max_points {
        return points;
    }

    let bucket_size = points.len().div_ceil(max_points);
    points
        .chunks(bucket_size)
        .map(|chunk| {
            let n = chunk.len() as f64;
            DailyTotal {
                date: chunk[chunk.len() / 2].date,
                sales: chunk.iter().map(|p| p.sales).sum::<f64>() / n,
                profit: chunk.iter().map(|p| p.profit).sum::<f64>() / n,
            }
        })
        .collect()
}

fn grouped_totals<K, F, L>(dataset: &Dataset, order: &[K], key: F, label: L) -> Vec<LabelTotal>
where
    K: Ord + Copy,
    F: Fn(&DataRow) -> K,
    L: Fn(&K) -> &'static str,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for row in dataset.rows() {
        groups.entry(key(row)).or_default().push(row.sales);
    }

    order
        .iter()
        .filter_map(|k| groups.get(k).map(|sales| label_total(label(k).to_string(), sales)))
        .collect()
}

fn label_total(label: String, sales: &[f64]) -> LabelTotal {
    let total: f64 = sales.iter().sum();
    LabelTotal {
        label,
        total,
        mean: if sales.is_empty() { 0.0 } else { total / sales.len() as f64 },
        count: sales.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::fixtures::{dataset, day};

    #[test]
    fn test_category_totals_in_declared_order() {
        // categories cycle Electronics, Clothing, Groceries, Home
        let data = dataset(&[(10.0, 0.0), (20.0, 0.0), (30.0, 0.0), (40.0, 0.0), (50.0, 0.0)]);
        let totals = category_totals(&data);

        let labels: Vec<&str> = totals.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Electronics", "Clothing", "Groceries", "Home"]);
        assert_eq!(totals[0].total, 60.0);
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[0].mean, 30.0);
    }

    #[test]
    fn test_region_totals_omit_empty_labels() {
        let data = dataset(&[(10.0, 0.0), (20.0, 0.0)]);
        let totals = region_totals(&data);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[1].label, "South");
    }

    #[test]
    fn test_category_shares_sum_to_one() {
        let data = dataset(&[(10.0, 0.0), (30.0, 0.0), (60.0, 0.0)]);
        let shares = category_shares(&data);
        let sum: f64 = shares.iter().map(|s| s.share).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((shares[2].share - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_category_shares_zero_sales() {
        let data = dataset(&[(0.0, 0.0), (0.0, 0.0)]);
        assert!(category_shares(&data).iter().all(|s| s.share == 0.0));
    }

    #[test]
    fn test_pivot_zero_filled() {
        let data = dataset(&[(10.0, 0.0), (20.0, 0.0)]);
        let pivot = region_category_pivot(&data);

        assert_eq!(pivot.rows.len(), 4);
        assert_eq!(pivot.columns.len(), 4);
        // row 0 is North/Electronics, row 1 is South/Clothing
        assert_eq!(pivot.values[0][0], 10.0);
        assert_eq!(pivot.values[1][1], 20.0);
        assert_eq!(pivot.values[2][2], 0.0);
        let total: f64 = pivot.values.iter().flatten().sum();
        assert_eq!(total, 30.0);
    }

    #[test]
    fn test_monthly_totals_cross_month_boundary() {
        // 40 consecutive days from Jan 1 span January and February
        let data = dataset(&[(1.0, 0.0); 40]);
        let months = monthly_totals(&data);

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].label, "2024-01");
        assert_eq!(months[0].total, 31.0);
        assert_eq!(months[1].label, "2024-02");
        assert_eq!(months[1].total, 9.0);
    }

    #[test]
    fn test_daily_totals_ascending() {
        let data = dataset(&[(5.0, 1.0), (7.0, -2.0)]);
        let daily = daily_totals(&data);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, day(0));
        assert_eq!(daily[1].profit, -2.0);
    }

    #[test]
    fn test_downsample_buckets() {
        let points: Vec<DailyTotal> = (0..10)
            .map(|i| DailyTotal {
                date: day(i),
                sales: i as f64,
                profit: 0.0,
            })
            .collect();

        let sampled = downsample(points, 4);
        // bucket size ceil(10 / 4) = 3 -> buckets of 3, 3, 3, 1
        assert_eq!(sampled.len(), 4);
        assert_eq!(sampled[0].sales, 1.0);
        assert_eq!(sampled[0].date, day(1));
        assert_eq!(sampled[3].sales, 9.0);
    }

    #[test]
    fn test_downsample_short_series_untouched() {
        let points = vec![DailyTotal {
            date: day(0),
            sales: 1.0,
            profit: 1.0,
        }];
        assert_eq!(downsample(points.clone(), 150), points);
    }
}
