use crate::categories::NO_SELECTION;
use crate::config::DataPaths;
use crate::error::DashError;
use crate::loader::load_crop_table;
use crate::types::{ChoroplethSeries, ColorBounds, CropProductionRow};

/// Crop whose name cannot be used as a file name; its table is stored
/// under a shortened key.
const SLASHED_CROP: (&str, &str) = ("Arhar/Tur", "Arhar");

/// Resource key of the per-crop table, e.g. `crop_Rice`.
pub fn crop_resource_key(crop: &str) -> String {
    let name = if crop == SLASHED_CROP.0 { SLASHED_CROP.1 } else { crop };
    format!("crop_{}", name)
}

/// Reject the placeholder before any file is touched.
pub fn validate_crop(crop: &str) -> Result<&str, DashError> {
    if crop.trim().is_empty() || crop == NO_SELECTION {
        return Err(DashError::Validation("You must complete the required fields".into()));
    }
    Ok(crop)
}

pub fn select_crop_file(paths: &DataPaths, crop: &str) -> Result<Vec<CropProductionRow>, DashError> {
    let crop = validate_crop(crop)?;
    let path = paths.crop_file(&crop_resource_key(crop));
    log::debug!("resolved crop {:?} to {}", crop, path.display());
    load_crop_table(&path)
}

/// `[min, max]` over the given values, independent of row order. `None`
/// when there is nothing finite to scale.
pub fn color_bounds<I>(values: I) -> Option<ColorBounds>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some(ColorBounds { min: v, max: v }),
            Some(b) => Some(ColorBounds { min: b.min.min(v), max: b.max.max(v) }),
        })
}

pub fn choropleth_series(crop: &str, rows: &[CropProductionRow]) -> Result<ChoroplethSeries, DashError> {
    let bounds = color_bounds(rows.iter().map(|r| r.production))
        .ok_or_else(|| DashError::NoData(crop_resource_key(crop)))?;
    Ok(ChoroplethSeries {
        title: format!("{} production", crop),
        feature_id_key: "properties.District",
        locations: rows.iter().map(|r| r.district.clone()).collect(),
        values: rows.iter().map(|r| r.production).collect(),
        time_dimension: rows.iter().map(|r| r.crop_year).collect(),
        hover: Some(rows.iter().map(|r| r.state.clone()).collect()),
        color_scale_bounds: bounds,
    })
}
