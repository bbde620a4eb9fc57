use std::path::PathBuf;
use thiserror::Error;

/// Which input a missing file belongs to. Master datasets back every menu
/// flow, so losing one ends the session; a per-crop file only affects the
/// current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Boundary,
    CropList,
    ProductionMaster,
    Rainfall,
    CropFile,
}

impl DatasetKind {
    pub fn is_master(self) -> bool {
        !matches!(self, DatasetKind::CropFile)
    }
}

#[derive(Debug, Error)]
pub enum DashError {
    #[error("Input file not found: {} ({kind:?})", .path.display())]
    MissingInput { kind: DatasetKind, path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("{0}")]
    Validation(String),

    #[error("No usable rows in {0}")]
    NoData(String),
}

impl DashError {
    /// Only a missing master dataset is unrecoverable for the whole session.
    pub fn ends_session(&self) -> bool {
        matches!(self, DashError::MissingInput { kind, .. } if kind.is_master())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_crop_file_keeps_session_alive() {
        let err = DashError::MissingInput {
            kind: DatasetKind::CropFile,
            path: PathBuf::from("Crops/crop_Nothing.csv"),
        };
        assert!(!err.ends_session());
        assert!(err.to_string().contains("crop_Nothing.csv"));
    }

    #[test]
    fn missing_master_dataset_ends_session() {
        for kind in [
            DatasetKind::Boundary,
            DatasetKind::CropList,
            DatasetKind::ProductionMaster,
            DatasetKind::Rainfall,
        ] {
            let err = DashError::MissingInput { kind, path: PathBuf::from("x") };
            assert!(err.ends_session());
        }
        assert!(!DashError::Validation("nope".into()).ends_session());
    }
}
