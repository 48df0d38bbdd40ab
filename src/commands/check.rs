//! Check command: run the row-sum consistency diagnostic on its own,
//! plus the count of trips filed under a mode other than the row's own.

use crate::aggregator::{check_row_sums, off_mode_trips, ConsistencyReport};
use crate::parser::load_dataset;
use crate::utils::config::ReportConfig;
use crate::utils::format::format_thousands;
use anyhow::{Context, Result};
use std::path::Path;

/// Load the dataset and print how many rows disagree with their totals
///
/// **Public** - mismatches are reported, not returned as errors
pub fn execute_check(input_path: &Path, config: &ReportConfig) -> Result<ConsistencyReport> {
    println!("Checking row sums: {}", input_path.display());

    let dataset = load_dataset(input_path, config).context("Failed to load dataset")?;
    let report = check_row_sums(&dataset, config).context("Failed to run consistency check")?;

    println!("Total mismatches found: {}", report.mismatches);
    println!("  Rows checked: {}", report.rows_checked);

    for mismatch in &report.examples {
        println!(
            "  row {:>8} ({}): fields sum to {}, annual_total_trips is {}",
            mismatch.row,
            mismatch.mode,
            format_thousands(mismatch.actual),
            format_thousands(mismatch.expected)
        );
    }
    if report.mismatches > report.examples.len() {
        println!(
            "  (Showing first {} of {} mismatching rows)",
            report.examples.len(),
            report.mismatches
        );
    }

    let off_mode = off_mode_trips(&dataset, config).context("Failed to group rows by mode")?;
    println!(
        "Trips recorded under another mode's fields: {}",
        format_thousands(off_mode.grand_total())
    );
    for (field, trips) in off_mode.iter().filter(|(_, trips)| *trips != 0.0) {
        println!("  {:<20} {:>20}", field, format_thousands(trips));
    }

    Ok(report)
}
