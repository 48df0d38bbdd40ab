#![allow(dead_code)]

use nhts_trip_report::utils::config::ReportConfig;
use std::path::{Path, PathBuf};

/// A synthetic dataset row: mode category plus the non-zero fields
pub struct Row<'a> {
    pub mode: &'a str,
    pub fields: Vec<(&'a str, f64)>,
    pub annual_total_trips: f64,
}

impl<'a> Row<'a> {
    /// Row whose total equals the sum of its fields
    pub fn consistent(mode: &'a str, fields: &[(&'a str, f64)]) -> Self {
        Self {
            mode,
            fields: fields.to_vec(),
            annual_total_trips: fields.iter().map(|(_, v)| v).sum(),
        }
    }
}

/// Render rows as CSV with the full NHTS column set plus an extra id column
pub fn dataset_csv(config: &ReportConfig, rows: &[Row]) -> String {
    let fields = config.field_names();

    let mut header = vec!["id".to_string(), "mode".to_string()];
    header.extend(fields.iter().cloned());
    header.push("annual_total_trips".to_string());

    let mut lines = vec![header.join(",")];
    for (i, row) in rows.iter().enumerate() {
        let mut cells = vec![i.to_string(), row.mode.to_string()];
        for field in &fields {
            let value = row
                .fields
                .iter()
                .find(|(name, _)| name == field)
                .map(|(_, v)| *v)
                .unwrap_or(0.0);
            cells.push(value.to_string());
        }
        cells.push(row.annual_total_trips.to_string());
        lines.push(cells.join(","));
    }

    lines.join("\n") + "\n"
}

/// Write the dataset into `dir` and return its path
pub fn write_dataset(dir: &Path, config: &ReportConfig, rows: &[Row]) -> PathBuf {
    let path = dir.join("trips.csv");
    std::fs::write(&path, dataset_csv(config, rows)).unwrap();
    path
}
