use crate::categories::CropSelection;
use crate::types::{AggregatedRow, BarRaceArtifact, BarRaceFrame, ProductionRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Sum production per (crop, year). Grouping uses exact string equality on
/// the crop name; output is ordered by crop, then year.
pub fn group_production<'a, I>(records: I) -> Vec<AggregatedRow>
where
    I: IntoIterator<Item = &'a ProductionRecord>,
{
    let mut totals: BTreeMap<(&str, i32), f64> = BTreeMap::new();
    for r in records {
        *totals.entry((r.crop.as_str(), r.crop_year)).or_insert(0.0) += r.production;
    }
    totals
        .into_iter()
        .map(|((crop, crop_year), production)| AggregatedRow {
            crop: crop.to_string(),
            crop_year,
            production,
        })
        .collect()
}

/// Production totals per (crop, year) restricted to the selected crops.
pub fn aggregate(records: &[ProductionRecord], selection: &CropSelection) -> Vec<AggregatedRow> {
    let rows = group_production(records.iter().filter(|r| selection.contains(&r.crop)));
    log::debug!(
        "aggregated {} crops into {} (crop, year) rows",
        selection.crops().len(),
        rows.len()
    );
    rows
}

/// Distinct crops present in an aggregated table; these feed the custom
/// crop pickers.
pub fn crop_choices(rows: &[AggregatedRow]) -> Vec<String> {
    rows.iter()
        .map(|r| r.crop.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn bar_race_frames(rows: &[AggregatedRow]) -> Vec<BarRaceFrame> {
    rows.iter()
        .map(|r| BarRaceFrame { item: r.crop.clone(), value: r.production, time: r.crop_year })
        .collect()
}

pub fn bar_race_artifact(rows: &[AggregatedRow]) -> BarRaceArtifact {
    BarRaceArtifact {
        item_column: "Crop",
        value_column: "Production",
        time_column: "Crop_Year",
        crops: crop_choices(rows),
        frames: bar_race_frames(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::{BarRaceRequest, CropCategory};

    fn rec(crop: &str, year: i32, production: f64) -> ProductionRecord {
        ProductionRecord {
            state: "Kerala".into(),
            district: "KOLLAM".into(),
            crop: crop.into(),
            crop_year: year,
            season: "Kharif".into(),
            area: None,
            production,
            yield_: None,
        }
    }

    fn select(crops: &[&str]) -> CropSelection {
        let picks = crops.iter().map(|c| c.to_string()).collect();
        CropSelection::try_from(&BarRaceRequest::Custom(picks)).unwrap()
    }

    fn sample() -> Vec<ProductionRecord> {
        vec![
            rec("Wheat", 1999, 7.0),
            rec("Rice", 1999, 10.0),
            rec("Rice", 1998, 5.0),
            rec("Rice", 1998, 2.5),
            rec("Jute", 1998, 100.0),
            rec("Maize", 1998, 1.0),
        ]
    }

    #[test]
    fn sums_per_crop_and_year_in_sorted_order() {
        let rows = aggregate(&sample(), &select(&["Rice", "Wheat"]));
        let got: Vec<(&str, i32, f64)> =
            rows.iter().map(|r| (r.crop.as_str(), r.crop_year, r.production)).collect();
        assert_eq!(got, vec![("Rice", 1998, 7.5), ("Rice", 1999, 10.0), ("Wheat", 1999, 7.0)]);
    }

    #[test]
    fn category_total_matches_single_crop_total() {
        let records = sample();
        let cereals =
            CropSelection::try_from(&BarRaceRequest::Category(CropCategory::Cereals)).unwrap();
        let by_category: Vec<_> =
            aggregate(&records, &cereals).into_iter().filter(|r| r.crop == "Rice").collect();
        assert_eq!(by_category, aggregate(&records, &select(&["Rice"])));
        assert!(aggregate(&records, &cereals).iter().all(|r| r.crop != "Jute"));
    }

    #[test]
    fn crop_names_match_exactly() {
        let records = vec![rec("Rice ", 1998, 1.0), rec("rice", 1998, 2.0), rec("Rice", 1998, 3.0)];
        let rows = aggregate(&records, &select(&["Rice"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].production, 3.0);
    }

    #[test]
    fn unknown_crops_produce_no_rows() {
        assert!(aggregate(&sample(), &select(&["Saffron"])).is_empty());
    }

    #[test]
    fn bar_race_artifact_lists_frames_and_crops() {
        let rows = group_production(&sample());
        assert_eq!(crop_choices(&rows), vec!["Jute", "Maize", "Rice", "Wheat"]);
        let artifact = bar_race_artifact(&aggregate(&sample(), &select(&["Jute"])));
        assert_eq!(
            artifact.frames,
            vec![BarRaceFrame { item: "Jute".into(), value: 100.0, time: 1998 }]
        );
        assert_eq!(artifact.crops, vec!["Jute"]);
    }
}
