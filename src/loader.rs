use crate::error::{DashError, DatasetKind};
use crate::types::{
    CropProductionRow, DistrictBoundary, ProductionRecord, RainfallRecord, RawCropRow,
    RawProductionRow, RawRainfallRow,
};
use crate::util::{clean_text, parse_f64_safe, parse_year_safe};
use csv::{ReaderBuilder, Trim};
use geojson::{FeatureCollection, GeoJson};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub kept_rows: usize,
    pub missing_production: usize,
    pub parse_errors: usize,
}

fn open_input(path: &Path, kind: DatasetKind) -> Result<File, DashError> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DashError::MissingInput { kind, path: path.to_path_buf() },
        _ => DashError::Io(e),
    })
}

fn csv_reader(file: File) -> csv::Reader<File> {
    ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(file)
}

/// Load the master production table, dropping rows whose production is
/// missing, unparseable or negative. Those rows never reach aggregation.
pub fn load_production(path: &Path) -> Result<(Vec<ProductionRecord>, LoadReport), DashError> {
    let mut rdr = csv_reader(open_input(path, DatasetKind::ProductionMaster)?);
    let mut report = LoadReport::default();
    let mut records = Vec::new();

    for result in rdr.deserialize::<RawProductionRow>() {
        report.total_rows += 1;
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::debug!("skipping malformed production row: {}", e);
                report.parse_errors += 1;
                continue;
            }
        };

        let production = match parse_f64_safe(row.production.as_deref()) {
            Some(v) if v >= 0.0 => v,
            _ => {
                report.missing_production += 1;
                continue;
            }
        };
        // Crop names are join keys; keep them verbatim.
        let crop = match row.crop {
            Some(c) if !c.trim().is_empty() => c,
            _ => {
                report.parse_errors += 1;
                continue;
            }
        };
        let Some(crop_year) = parse_year_safe(row.crop_year.as_deref()) else {
            report.parse_errors += 1;
            continue;
        };

        records.push(ProductionRecord {
            state: clean_text(row.state).unwrap_or_default(),
            district: clean_text(row.district).unwrap_or_default(),
            crop,
            crop_year,
            season: clean_text(row.season).unwrap_or_default(),
            area: parse_f64_safe(row.area.as_deref()),
            production,
            yield_: parse_f64_safe(row.yield_.as_deref()),
        });
    }

    report.kept_rows = records.len();
    log::info!(
        "loaded {} production rows from {} ({} without production, {} unparseable)",
        report.kept_rows,
        path.display(),
        report.missing_production,
        report.parse_errors
    );
    Ok((records, report))
}

#[derive(Debug, Deserialize)]
struct CropNameRow {
    #[serde(rename = "Crop")]
    crop: Option<String>,
}

/// Distinct crop names of the merged table in order of first appearance.
/// The first entry is normally the `-` placeholder the selector defaults to.
pub fn load_crop_names(path: &Path) -> Result<Vec<String>, DashError> {
    let mut rdr = csv_reader(open_input(path, DatasetKind::CropList)?);
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::new();
    for result in rdr.deserialize::<CropNameRow>() {
        let Some(crop) = result?.crop else { continue };
        if crop.is_empty() {
            continue;
        }
        if seen.insert(crop.clone()) {
            names.push(crop);
        }
    }
    log::debug!("{} distinct crops in {}", names.len(), path.display());
    Ok(names)
}

/// Load one per-crop table. A missing file is reported with
/// [`DatasetKind::CropFile`] so the caller can keep the session going.
pub fn load_crop_table(path: &Path) -> Result<Vec<CropProductionRow>, DashError> {
    let mut rdr = csv_reader(open_input(path, DatasetKind::CropFile)?);
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.deserialize::<RawCropRow>() {
        let row = result?;
        // District names are matched against the boundary file; keep them verbatim.
        let district = row.districts.filter(|d| !d.is_empty());
        let production = parse_f64_safe(row.production.as_deref());
        let crop_year = parse_year_safe(row.crop_year.as_deref());
        match (district, production, crop_year) {
            (Some(district), Some(production), Some(crop_year)) => rows.push(CropProductionRow {
                district,
                production,
                crop_year,
                state: clean_text(row.state).unwrap_or_default(),
            }),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("{}: skipped {} rows without district, production or year", path.display(), skipped);
    }
    Ok(rows)
}

pub fn load_rainfall(path: &Path) -> Result<Vec<RainfallRecord>, DashError> {
    let mut rdr = csv_reader(open_input(path, DatasetKind::Rainfall)?);
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.deserialize::<RawRainfallRow>() {
        let row = result?;
        // Both names are join keys against the boundary file; keep them verbatim.
        let subdivision = row.subdivision.filter(|s| !s.is_empty());
        let district = row.districts.filter(|d| !d.is_empty());
        let year = parse_year_safe(row.year.as_deref());
        let rainfall = parse_f64_safe(row.annual_rainfall.as_deref());
        match (subdivision, district, year, rainfall) {
            (Some(subdivision), Some(district), Some(year), Some(annual_rainfall)) => {
                rows.push(RainfallRecord { subdivision, district, year, annual_rainfall })
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("{}: skipped {} incomplete rainfall rows", path.display(), skipped);
    }
    log::debug!("loaded {} rainfall rows", rows.len());
    Ok(rows)
}

fn property_text(value: Option<&serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Read the district identifiers of every feature in the boundary file.
/// Geometry is left to the renderer, which reads the same file.
pub fn load_boundaries(path: &Path) -> Result<Vec<DistrictBoundary>, DashError> {
    let file = open_input(path, DatasetKind::Boundary)?;
    let geojson = GeoJson::from_reader(std::io::BufReader::new(file))?;
    let collection = FeatureCollection::try_from(geojson)?;
    let boundaries: Vec<DistrictBoundary> = collection
        .features
        .iter()
        .map(|f| DistrictBoundary {
            district: property_text(f.property("District")),
            remarks: property_text(f.property("REMARKS")),
        })
        .collect();
    log::debug!("loaded {} boundary features from {}", boundaries.len(), path.display());
    Ok(boundaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn production_drops_missing_values_and_trims_headers() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "APY.csv",
            "State,District ,Crop,Crop_Year,Season,Area ,Production,Yield\n\
             Kerala,ALAPPUZHA,Rice,1998,Kharif,100,250,2.5\n\
             Kerala,ALAPPUZHA,Rice,1998,Rabi,50,,\n\
             Kerala,KOLLAM,Rice,1999,Kharif,80,NaN,\n\
             Kerala,KOLLAM,Wheat,oops,Kharif,80,12,\n\
             Kerala,KOLLAM,Wheat,1999,Kharif,80,-5,\n",
        );
        let (records, report) = load_production(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].district, "ALAPPUZHA");
        assert_eq!(records[0].area, Some(100.0));
        assert_eq!(records[0].production, 250.0);
        assert_eq!(
            report,
            LoadReport { total_rows: 5, kept_rows: 1, missing_production: 3, parse_errors: 1 }
        );
    }

    #[test]
    fn missing_master_file_is_reported_as_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = load_production(&dir.path().join("APY.csv")).unwrap_err();
        assert!(matches!(
            err,
            DashError::MissingInput { kind: DatasetKind::ProductionMaster, .. }
        ));
        assert!(err.ends_session());
    }

    #[test]
    fn crop_names_are_distinct_in_first_seen_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "merged.csv",
            "Districts,Crop,Production\n-,-,\nA,Rice,1\nB,Arhar/Tur,2\nC,Rice,3\n",
        );
        assert_eq!(load_crop_names(&path).unwrap(), vec!["-", "Rice", "Arhar/Tur"]);
    }

    #[test]
    fn crop_table_keeps_complete_rows() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "crop_Rice.csv",
            "Districts,Production,Crop_Year,STATE,Extra\n\
             ALAPPUZHA,250.0,1998,Kerala,x\n\
             KOLLAM,,1998,Kerala,x\n",
        );
        let rows = load_crop_table(&path).unwrap();
        assert_eq!(
            rows,
            vec![CropProductionRow {
                district: "ALAPPUZHA".into(),
                production: 250.0,
                crop_year: 1998,
                state: "Kerala".into(),
            }]
        );
        let err = load_crop_table(&dir.path().join("crop_Nope.csv")).unwrap_err();
        assert!(!err.ends_session());
    }

    #[test]
    fn rainfall_rows_parse() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "Rainfall_Final.csv",
            "SUBDIVISION,Districts,Year,Annual Rainfall\nKERALA,ALAPPUZHA,1998,3000.5\nKERALA,,1998,1\n",
        );
        let rows = load_rainfall(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].annual_rainfall, 3000.5);
    }

    #[test]
    fn boundaries_read_district_and_remarks() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "districtsm.geojson",
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":null,"properties":{"District":"ALAPPUZHA","REMARKS":"KERALA"}},
                {"type":"Feature","geometry":null,"properties":{"District":"LEH","REMARKS":null}}
            ]}"#,
        );
        let b = load_boundaries(&path).unwrap();
        assert_eq!(b.len(), 2);
        assert_eq!(b[0].remarks.as_deref(), Some("KERALA"));
        assert_eq!(b[1].district.as_deref(), Some("LEH"));
        assert_eq!(b[1].remarks, None);
    }
}
