// Per-request handlers behind the menu.
//
// Each call re-reads the files it needs, runs the pure selection code and
// writes one render-ready artifact. Nothing is kept between calls.
use crate::aggregate::{aggregate, bar_race_artifact, crop_choices, group_production};
use crate::categories::{BarRaceRequest, CropSelection};
use crate::config::DataPaths;
use crate::error::DashError;
use crate::loader::{self, LoadReport};
use crate::output::{artifact_path, write_csv, write_json};
use crate::reconcile::{filter_rainfall, rainfall_series};
use crate::selector::{choropleth_series, crop_resource_key, select_crop_file};
use crate::types::{AggregatedRow, ChoroplethSeries, CropProductionRow, ProductionRecord, RainfallRecord};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Context {
    pub paths: DataPaths,
    pub out_dir: PathBuf,
}

#[derive(Debug)]
pub struct CropMap {
    pub rows: Vec<CropProductionRow>,
    pub series: ChoroplethSeries,
    pub artifact: PathBuf,
}

#[derive(Debug)]
pub struct ProductionTrends {
    pub rows: Vec<AggregatedRow>,
    pub json_artifact: PathBuf,
    pub csv_artifact: PathBuf,
}

#[derive(Debug)]
pub struct RainfallMap {
    pub rows: Vec<RainfallRecord>,
    pub series: ChoroplethSeries,
    pub artifact: PathBuf,
}

/// Options for the crop selector, read from the merged table.
pub fn map_crop_options(ctx: &Context) -> Result<Vec<String>, DashError> {
    loader::load_crop_names(&ctx.paths.crop_list())
}

pub fn crop_map(ctx: &Context, crop: &str) -> Result<CropMap, DashError> {
    let rows = select_crop_file(&ctx.paths, crop)?;
    let series = choropleth_series(crop, &rows)?;
    let artifact = artifact_path(&ctx.out_dir, &format!("choropleth_{}.json", crop_resource_key(crop)))?;
    write_json(&artifact, &series)?;
    log::info!("wrote {} map rows for {} to {}", rows.len(), crop, artifact.display());
    Ok(CropMap { rows, series, artifact })
}

/// Master production table plus the crops it offers to the custom pickers.
pub fn production_table(
    ctx: &Context,
) -> Result<(Vec<ProductionRecord>, LoadReport, Vec<String>), DashError> {
    let (records, report) = loader::load_production(&ctx.paths.production_master())?;
    let choices = crop_choices(&group_production(&records));
    Ok((records, report, choices))
}

pub fn production_trends(
    ctx: &Context,
    records: &[ProductionRecord],
    request: &BarRaceRequest,
) -> Result<ProductionTrends, DashError> {
    let selection = CropSelection::try_from(request)?;
    let rows = aggregate(records, &selection);
    if rows.is_empty() {
        return Err(DashError::NoData(format!("the production table for {}", selection.crops().join(", "))));
    }
    let json_artifact = artifact_path(&ctx.out_dir, "bar_race.json")?;
    write_json(&json_artifact, bar_race_artifact(&rows))?;
    let csv_artifact = artifact_path(&ctx.out_dir, "bar_race.csv")?;
    write_csv(&csv_artifact, &rows)?;
    log::info!("wrote {} bar race rows to {}", rows.len(), json_artifact.display());
    Ok(ProductionTrends { rows, json_artifact, csv_artifact })
}

pub fn rainfall_map(ctx: &Context) -> Result<RainfallMap, DashError> {
    let boundaries = loader::load_boundaries(&ctx.paths.boundary())?;
    let rainfall = loader::load_rainfall(&ctx.paths.rainfall())?;
    let rows = filter_rainfall(&rainfall, &boundaries);
    let series = rainfall_series(&rows)?;
    let artifact = artifact_path(&ctx.out_dir, "rainfall_map.json")?;
    write_json(&artifact, &series)?;
    Ok(RainfallMap { rows, series, artifact })
}
