//! Aggregated trips CSV export.
//!
//! Layout: distance bands as rows (human-readable labels), modes as
//! columns, leading index column `Distance`:
//!
//! ```text
//! Distance,air,rail,vehicle,atf
//! 0 to 10 miles,8,0,0,0
//! ...
//! >300 miles,0,0,100,0
//! ```

use super::artifact::write_artifact;
use crate::aggregator::AggregatedTrips;
use crate::utils::config::{ReportConfig, AGGREGATED_CSV_FILE, DISTANCE_INDEX_HEADER};
use crate::utils::error::OutputError;
use crate::utils::format::format_count;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::debug;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Serialize the table in configured band/mode order
///
/// **Public** - in-memory form of the export
pub fn aggregated_csv_bytes(
    table: &AggregatedTrips,
    config: &ReportConfig,
) -> Result<Vec<u8>, OutputError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    let mut header = vec![DISTANCE_INDEX_HEADER.to_string()];
    header.extend(config.modes.iter().map(|m| m.id.clone()));
    writer.write_record(&header)?;

    for band in &config.distance_bands {
        let mut row = vec![band.label.clone()];
        row.extend(
            config
                .modes
                .iter()
                .map(|mode| format_count(table.get(mode, band))),
        );
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|e| OutputError::WriteFailed(e.into_error()))
}

/// Write `aggregated_trips.csv` into the output directory
///
/// **Public** - main entry point for the export
///
/// # Returns
/// Path of the written file
pub fn write_aggregated_csv(
    table: &AggregatedTrips,
    config: &ReportConfig,
) -> Result<PathBuf, OutputError> {
    let path = config.output_path(AGGREGATED_CSV_FILE);
    let bytes = aggregated_csv_bytes(table, config)?;

    write_artifact(&bytes, &path)?;

    Ok(path)
}

/// Read an exported CSV back into a table
///
/// **Public** - used by the `validate` command and round-trip checks
///
/// # Errors
/// * `OutputError::UnknownLabel` - index header, band label or mode column not in `config`
/// * `OutputError::InvalidValue` - a cell is not a number
pub fn read_aggregated_csv(
    input_path: impl AsRef<Path>,
    config: &ReportConfig,
) -> Result<AggregatedTrips, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading aggregated table from: {}", input_path.display());

    let file = File::open(input_path)?;
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let headers = reader.headers()?.clone();
    let mut columns = headers.iter();

    match columns.next() {
        Some(DISTANCE_INDEX_HEADER) => {}
        other => {
            return Err(OutputError::UnknownLabel {
                kind: "index column",
                value: other.unwrap_or_default().to_string(),
            })
        }
    }

    let modes = columns
        .map(|id| {
            config.mode(id).ok_or_else(|| OutputError::UnknownLabel {
                kind: "mode",
                value: id.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = AggregatedTrips::new();

    for record in reader.records() {
        let record = record?;
        let label = record.get(0).unwrap_or_default();
        let band = config
            .band_by_label(label)
            .ok_or_else(|| OutputError::UnknownLabel {
                kind: "distance band",
                value: label.to_string(),
            })?;

        for (mode, raw) in modes.iter().zip(record.iter().skip(1)) {
            let field = band.field_name(mode);
            let value = raw.parse::<f64>().map_err(|_| OutputError::InvalidValue {
                field: field.clone(),
                value: raw.to_string(),
            })?;
            table.add(field, value);
        }
    }

    debug!("Read {} cells", table.len());

    Ok(table)
}
