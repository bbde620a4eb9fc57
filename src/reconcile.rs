use crate::error::DashError;
use crate::selector::color_bounds;
use crate::types::{ChoroplethSeries, DistrictBoundary, RainfallRecord};
use std::collections::HashSet;

/// Every non-empty `REMARKS` value in the boundary file.
pub fn boundary_remarks(boundary: &[DistrictBoundary]) -> HashSet<&str> {
    boundary.iter().filter_map(|b| b.remarks.as_deref()).collect()
}

/// Keep rainfall rows whose subdivision names a boundary `REMARKS` value.
/// Rows that cannot be joined are dropped without being reported.
pub fn filter_rainfall(rainfall: &[RainfallRecord], boundary: &[DistrictBoundary]) -> Vec<RainfallRecord> {
    let names = boundary_remarks(boundary);
    let kept: Vec<RainfallRecord> = rainfall
        .iter()
        .filter(|r| names.contains(r.subdivision.as_str()))
        .cloned()
        .collect();
    log::debug!("kept {} of {} rainfall rows", kept.len(), rainfall.len());
    kept
}

pub fn rainfall_series(rows: &[RainfallRecord]) -> Result<ChoroplethSeries, DashError> {
    let bounds = color_bounds(rows.iter().map(|r| r.annual_rainfall))
        .ok_or_else(|| DashError::NoData("rainfall".into()))?;
    Ok(ChoroplethSeries {
        title: "Annual rainfall".into(),
        feature_id_key: "properties.District",
        locations: rows.iter().map(|r| r.district.clone()).collect(),
        values: rows.iter().map(|r| r.annual_rainfall).collect(),
        time_dimension: rows.iter().map(|r| r.year).collect(),
        hover: None,
        color_scale_bounds: bounds,
    })
}
