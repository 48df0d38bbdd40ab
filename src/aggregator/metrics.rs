//! Per-mode summaries and distribution statistics over the aggregated table.

use super::table::AggregatedTrips;
use crate::utils::config::ReportConfig;
use crate::utils::format::format_thousands;
use log::debug;

/// Totals for a single mode
#[derive(Debug, Clone, PartialEq)]
pub struct ModeSummary {
    /// Column prefix of the mode
    pub mode: String,

    /// Display name
    pub name: String,

    /// Trips across all bands
    pub total: f64,

    /// Percentage of the grand total
    pub share_percent: f64,

    /// Label of the band with the most trips, if any are non-zero
    pub dominant_band: Option<String>,
}

/// Summaries for every configured mode, in configured order
///
/// **Public** - feeds the text summary and `summary.json`
pub fn calculate_mode_summaries(table: &AggregatedTrips, config: &ReportConfig) -> Vec<ModeSummary> {
    let grand_total = table.grand_total();

    config
        .modes
        .iter()
        .map(|mode| {
            let values = table.mode_values(mode, &config.distance_bands);
            let total: f64 = values.iter().sum();

            let dominant_band = values
                .iter()
                .zip(&config.distance_bands)
                .filter(|(value, _)| **value > 0.0)
                .fold(None, |best: Option<(f64, &str)>, (value, band)| match best {
                    Some((best_value, _)) if best_value >= *value => best,
                    _ => Some((*value, band.label.as_str())),
                })
                .map(|(_, label)| label.to_string());

            ModeSummary {
                mode: mode.id.clone(),
                name: mode.name.clone(),
                total,
                share_percent: percentage(total, grand_total),
                dominant_band,
            }
        })
        .collect()
}

/// Summary statistics over all cells of the table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripDistribution {
    /// Sum of every cell
    pub grand_total: f64,

    /// Number of (mode, band) cells
    pub cell_count: usize,

    /// Cells holding a non-zero total
    pub nonzero_cells: usize,

    /// Field name and total of the largest cell
    pub largest_cell: Option<(String, f64)>,

    /// Percentage of trips in the busiest mode
    pub top_mode_percentage: f64,
}

/// Calculate distribution statistics for the aggregated table
///
/// **Public** - logged after aggregation
pub fn calculate_trip_distribution(table: &AggregatedTrips, config: &ReportConfig) -> TripDistribution {
    if table.is_empty() {
        return TripDistribution::default();
    }

    let grand_total = table.grand_total();
    let largest_cell = table
        .iter()
        .filter(|(_, value)| *value > 0.0)
        .fold(None, |best: Option<(&str, f64)>, (field, value)| match best {
            Some((_, best_value)) if best_value >= value => best,
            _ => Some((field, value)),
        })
        .map(|(field, value)| (field.to_string(), value));

    let top_mode_total = config
        .modes
        .iter()
        .map(|mode| table.mode_total(mode, &config.distance_bands))
        .fold(0.0_f64, f64::max);

    let distribution = TripDistribution {
        grand_total,
        cell_count: table.len(),
        nonzero_cells: table.iter().filter(|(_, v)| *v != 0.0).count(),
        largest_cell,
        top_mode_percentage: percentage(top_mode_total, grand_total),
    };

    debug!("Trip distribution: {:?}", distribution);

    distribution
}

impl TripDistribution {
    /// True when a single mode carries more than 80% of all trips
    pub fn is_highly_concentrated(&self) -> bool {
        self.top_mode_percentage > 80.0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let largest = match &self.largest_cell {
            Some((field, value)) => format!("{} ({})", field, format_thousands(*value)),
            None => "none".to_string(),
        };
        format!(
            "Total: {} trips | Cells: {} ({} non-zero) | Largest: {} | Top mode: {:.1}%",
            format_thousands(self.grand_total),
            self.cell_count,
            self.nonzero_cells,
            largest,
            self.top_mode_percentage
        )
    }
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part * 100.0 / whole
    } else {
        0.0
    }
}
