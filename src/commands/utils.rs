use crate::aggregator::calculate_mode_summaries;
use crate::output::read_aggregated_csv;
use crate::parser::schema::{ANNUAL_TOTAL_COLUMN, MODE_COLUMN};
use crate::utils::config::{ReportConfig, SCHEMA_VERSION};
use crate::utils::format::format_thousands;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate an exported aggregated CSV and print its totals
pub fn validate_export_file(file_path: &Path, config: &ReportConfig) -> Result<()> {
    println!("Validating aggregated table: {}", file_path.display());

    let table = read_aggregated_csv(file_path, config)
        .with_context(|| format!("Invalid aggregated table {}", file_path.display()))?;

    println!("✓ Valid aggregated trips CSV");
    println!("  Cells: {}", table.len());
    for summary in calculate_mode_summaries(&table, config) {
        println!(
            "  {:<8} {:>20} trips ({:.1}%)",
            summary.mode,
            format_thousands(summary.total),
            summary.share_percent
        );
    }
    println!("  Total: {} trips", format_thousands(table.grand_total()));

    Ok(())
}

/// Display the required input columns
pub fn display_schema(show_details: bool, config: &ReportConfig) {
    println!("NHTS Trip Report Input Schema");
    println!("Summary Schema Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Required columns:");
        println!("  {:<20} - Mode category of the row", MODE_COLUMN);
        for mode in &config.modes {
            for band in &config.distance_bands {
                println!(
                    "  {:<20} - {} trips, {}",
                    band.field_name(mode),
                    mode.name,
                    band.label
                );
            }
        }
        println!("  {:<20} - Recorded total across all fields", ANNUAL_TOTAL_COLUMN);
    } else {
        println!(
            "{} required columns ({} modes x {} distance bands + mode + total)",
            config.field_names().len() + 2,
            config.modes.len(),
            config.distance_bands.len()
        );
        println!("Use --show for the full column list");
    }
}

/// Display version information
pub fn display_version() {
    println!("NHTS Trip Report v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Aggregates NHTS 2022 origin/destination trips by mode and distance band.");
}
