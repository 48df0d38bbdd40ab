//! Row-sum consistency diagnostic.
//!
//! For each record, the mode-distance fields should add up to
//! `annual_total_trips`. Mismatches are counted and reported, never raised.

use crate::parser::dataset::Dataset;
use crate::utils::config::{ReportConfig, CONSISTENCY_TOLERANCE, MAX_REPORTED_MISMATCHES};
use crate::utils::error::DatasetError;
use log::{debug, info, warn};

/// A row whose fields disagree with its recorded total
#[derive(Debug, Clone, PartialEq)]
pub struct RowMismatch {
    /// Zero-based record index
    pub row: usize,
    pub mode: String,
    /// Recorded `annual_total_trips`
    pub expected: f64,
    /// Sum of the mode-distance fields
    pub actual: f64,
}

/// Outcome of [`check_row_sums`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsistencyReport {
    pub rows_checked: usize,
    pub mismatches: usize,
    /// The first few mismatching rows, for display
    pub examples: Vec<RowMismatch>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatches == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "Checked {} rows | Mismatches: {}",
            self.rows_checked, self.mismatches
        )
    }
}

/// Compare every row's mode-distance sum with its recorded total
///
/// **Public** - optional diagnostic, not part of report generation
///
/// # Errors
/// * `DatasetError::MissingColumns` - the dataset lacks a configured field
pub fn check_row_sums(
    dataset: &Dataset,
    config: &ReportConfig,
) -> Result<ConsistencyReport, DatasetError> {
    let indices = dataset.column_indices(&config.field_names())?;
    let mut report = ConsistencyReport::default();

    for (row, record) in dataset.records().iter().enumerate() {
        report.rows_checked += 1;

        let actual: f64 = indices.iter().map(|&idx| record.counts[idx]).sum();
        let expected = record.annual_total_trips;
        let tolerance = CONSISTENCY_TOLERANCE * expected.abs().max(1.0);

        if (actual - expected).abs() > tolerance {
            report.mismatches += 1;
            debug!(
                "Row {} ({}): fields sum to {} but total is {}",
                row, record.mode, actual, expected
            );
            if report.examples.len() < MAX_REPORTED_MISMATCHES {
                report.examples.push(RowMismatch {
                    row,
                    mode: record.mode.clone(),
                    expected,
                    actual,
                });
            }
        }
    }

    if report.is_consistent() {
        info!("Total mismatches found: 0 ({} rows)", report.rows_checked);
    } else {
        warn!(
            "Total mismatches found: {} of {} rows",
            report.mismatches, report.rows_checked
        );
    }

    Ok(report)
}
