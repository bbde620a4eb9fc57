// Command-line configuration and the fixed dataset layout.
//
// Every input lives at a fixed path relative to the data directory; only the
// per-crop tables vary, keyed by the normalized crop name.
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "agri_dash", about = "Browse crop production and rainfall datasets")]
pub struct Args {
    /// Directory holding districtsm.geojson, merged.csv, APY.csv, Crops/ and Rainfall_Final.csv
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Where render-ready series are written
    #[arg(long, default_value = "output")]
    pub out_dir: PathBuf,

    /// Rows shown in terminal previews
    #[arg(long, default_value_t = 10)]
    pub preview_rows: usize,
}

#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn boundary(&self) -> PathBuf {
        self.root.join("districtsm.geojson")
    }

    pub fn crop_list(&self) -> PathBuf {
        self.root.join("merged.csv")
    }

    pub fn production_master(&self) -> PathBuf {
        self.root.join("APY.csv")
    }

    pub fn rainfall(&self) -> PathBuf {
        self.root.join("Rainfall_Final.csv")
    }

    /// Path of the per-crop table for an already-resolved resource key.
    pub fn crop_file(&self, resource_key: &str) -> PathBuf {
        self.root.join("Crops").join(format!("{}.csv", resource_key))
    }
}
