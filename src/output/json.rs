//! `summary.json` writer and reader.
//!
//! The summary records the per-mode, per-band totals alongside run
//! metadata so a report can be inspected without re-reading the dataset.

use super::artifact::write_artifact;
use crate::aggregator::{calculate_mode_summaries, AggregatedTrips, ConsistencyReport};
use crate::parser::schema::{BandCount, ConsistencySummary, ModeBreakdown, TripSummary};
use crate::parser::Dataset;
use crate::utils::config::{ReportConfig, SCHEMA_VERSION};
use crate::utils::error::OutputError;
use chrono::Utc;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Assemble the summary document for one run
///
/// **Public** - converts the aggregated table into the JSON schema
pub fn build_summary(
    table: &AggregatedTrips,
    dataset: &Dataset,
    input_path: &Path,
    config: &ReportConfig,
    consistency: Option<&ConsistencyReport>,
) -> TripSummary {
    let modes = calculate_mode_summaries(table, config)
        .into_iter()
        .zip(&config.modes)
        .map(|(summary, mode)| ModeBreakdown {
            mode: summary.mode,
            name: summary.name,
            total: summary.total,
            share_percent: summary.share_percent,
            bands: config
                .distance_bands
                .iter()
                .map(|band| BandCount {
                    band: band.suffix.trim_start_matches('_').to_string(),
                    label: band.label.clone(),
                    trips: table.get(mode, band),
                })
                .collect(),
        })
        .collect();

    TripSummary {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        input_path: input_path.display().to_string(),
        row_count: dataset.len(),
        grand_total: table.grand_total(),
        annual_total_trips: dataset.annual_total(),
        modes,
        consistency: consistency.map(|report| ConsistencySummary {
            rows_checked: report.rows_checked,
            mismatches: report.mismatches,
        }),
    }
}

/// Write a summary as pretty-printed JSON
///
/// **Public** - main entry point for JSON output
pub fn write_summary(summary: &TripSummary, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let bytes = serde_json::to_vec_pretty(summary)?;
    write_artifact(&bytes, output_path)
}

/// Read a summary back from disk
///
/// **Public** - useful for validation and testing
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<TripSummary, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path)?;
    let summary: TripSummary = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Summary loaded: version {}, {} rows",
        summary.version, summary.row_count
    );

    Ok(summary)
}
