// Chart and tile view models handed to the rendering collaborator
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TileData {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub value: f64,
    pub precision: i32,
    /// Percent change against the previous period, if defined.
    pub delta_pct: Option<f64>,
}

impl TileData {
    pub fn new(
        id: &str,
        title: &str,
        unit: &str,
        value: f64,
        precision: i32,
        delta_pct: Option<f64>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: unit.to_string(),
            value,
            precision,
            delta_pct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: String,
    pub y: f64,
}

impl SeriesPoint {
    pub fn new(x: impl Into<String>, y: f64) -> Self {
        Self { x: x.into(), y }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<SeriesPoint>,
}

impl SeriesData {
    pub fn new(id: &str, name: &str, color: Option<&str>, points: Vec<SeriesPoint>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.map(str::to_string),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterGroup {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
    Heatmap,
    Pie,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChartBody {
    Series { series: Vec<SeriesData> },
    Scatter { groups: Vec<ScatterGroup> },
    Heatmap {
        rows: Vec<String>,
        columns: Vec<String>,
        values: Vec<Vec<f64>>,
    },
    Pie {
        /// Inner radius ratio; 0 draws a full pie, >0 a donut.
        hole: f64,
        slices: Vec<PieSlice>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub unit: Option<String>,
    pub kind: ChartKind,
    pub fraction_digits: Option<i32>,
    pub body: ChartBody,
}

impl ChartData {
    pub fn new(
        id: &str,
        title: &str,
        unit: Option<&str>,
        kind: ChartKind,
        fraction_digits: Option<i32>,
        body: ChartBody,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: unit.map(str::to_string),
            kind,
            fraction_digits,
            body,
        }
    }
}
