use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One row of the master production table (`APY.csv`). Header cells are
/// trimmed by the reader, so `"District "` binds to `District`.
#[derive(Debug, Deserialize)]
pub struct RawProductionRow {
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "District")]
    pub district: Option<String>,
    #[serde(rename = "Crop")]
    pub crop: Option<String>,
    #[serde(rename = "Crop_Year")]
    pub crop_year: Option<String>,
    #[serde(rename = "Season")]
    pub season: Option<String>,
    #[serde(rename = "Area")]
    pub area: Option<String>,
    #[serde(rename = "Production")]
    pub production: Option<String>,
    #[serde(rename = "Yield")]
    pub yield_: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductionRecord {
    pub state: String,
    pub district: String,
    pub crop: String,
    pub crop_year: i32,
    pub season: String,
    pub area: Option<f64>,
    pub production: f64,
    pub yield_: Option<f64>,
}

/// Row of a per-crop table (`Crops/crop_<key>.csv`).
#[derive(Debug, Deserialize)]
pub struct RawCropRow {
    #[serde(rename = "Districts")]
    pub districts: Option<String>,
    #[serde(rename = "Production")]
    pub production: Option<String>,
    #[serde(rename = "Crop_Year")]
    pub crop_year: Option<String>,
    #[serde(rename = "STATE")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct CropProductionRow {
    #[serde(rename = "Districts")]
    #[tabled(rename = "Districts")]
    pub district: String,
    #[serde(rename = "Production")]
    #[tabled(rename = "Production")]
    pub production: f64,
    #[serde(rename = "Crop_Year")]
    #[tabled(rename = "Crop_Year")]
    pub crop_year: i32,
    #[serde(rename = "STATE")]
    #[tabled(rename = "STATE")]
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub struct RawRainfallRow {
    #[serde(rename = "SUBDIVISION")]
    pub subdivision: Option<String>,
    #[serde(rename = "Districts")]
    pub districts: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Annual Rainfall")]
    pub annual_rainfall: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct RainfallRecord {
    #[serde(rename = "SUBDIVISION")]
    #[tabled(rename = "SUBDIVISION")]
    pub subdivision: String,
    #[serde(rename = "Districts")]
    #[tabled(rename = "Districts")]
    pub district: String,
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Annual Rainfall")]
    #[tabled(rename = "Annual Rainfall")]
    pub annual_rainfall: f64,
}

/// Identifiers of one boundary feature: `District` is the choropleth join
/// key, `REMARKS` is matched against rainfall subdivisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictBoundary {
    pub district: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct AggregatedRow {
    #[serde(rename = "Crop")]
    #[tabled(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Crop_Year")]
    #[tabled(rename = "Crop_Year")]
    pub crop_year: i32,
    #[serde(rename = "Production")]
    #[tabled(rename = "Production")]
    pub production: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarRaceFrame {
    pub item: String,
    pub value: f64,
    pub time: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorBounds {
    pub min: f64,
    pub max: f64,
}

/// Render-ready choropleth data. Parallel vectors, one entry per row; the
/// renderer joins `locations` against the boundary `District` property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethSeries {
    pub title: String,
    pub feature_id_key: &'static str,
    pub locations: Vec<String>,
    pub values: Vec<f64>,
    pub time_dimension: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<Vec<String>>,
    pub color_scale_bounds: ColorBounds,
}

#[derive(Debug, Serialize)]
pub struct BarRaceArtifact {
    pub item_column: &'static str,
    pub value_column: &'static str,
    pub time_column: &'static str,
    pub crops: Vec<String>,
    pub frames: Vec<BarRaceFrame>,
}

/// Wrapper written to disk so the renderer can tell fresh output from stale.
#[derive(Debug, Serialize)]
pub struct Artifact<T: Serialize> {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub data: T,
}
