use crate::error::DashError;
use crate::types::Artifact;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), DashError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `data` wrapped with a generation timestamp as pretty JSON.
pub fn write_json<T: Serialize>(path: &Path, data: T) -> Result<(), DashError> {
    let artifact = Artifact { generated_at: chrono::Utc::now(), data };
    let s = serde_json::to_string_pretty(&artifact)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Resolve `name` inside the output directory, creating the directory first.
pub fn artifact_path(out_dir: &Path, name: &str) -> Result<PathBuf, DashError> {
    std::fs::create_dir_all(out_dir)?;
    Ok(out_dir.join(name))
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
    if rows.len() > max_rows {
        println!("({} more rows)\n", crate::util::format_count(rows.len() - max_rows));
    }
}
