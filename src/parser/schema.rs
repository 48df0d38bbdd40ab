//! Column schema of the survey dataset and the `summary.json` document.
//!
//! Field names are built as `"{mode}{distance}"`, e.g. `air_0_10mi`.
//! The summary schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Categorical column naming the row's transportation mode
pub const MODE_COLUMN: &str = "mode";

/// Per-row trip total across every mode and band
pub const ANNUAL_TOTAL_COLUMN: &str = "annual_total_trips";

/// A transportation mode, identified by its column prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mode {
    /// Column prefix, e.g. `air` or `atf`
    pub id: String,

    /// Display name used in chart titles
    pub name: String,
}

impl Mode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Air, rail, vehicle and active (walk, bike, ferry)
    pub fn defaults() -> Vec<Mode> {
        vec![
            Mode::new("air", "Air"),
            Mode::new("rail", "Rail"),
            Mode::new("vehicle", "Vehicle"),
            Mode::new("atf", "Active"),
        ]
    }
}

/// One of the mutually exclusive trip-length ranges
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DistanceBand {
    /// Column suffix, e.g. `_0_10mi`
    pub suffix: String,

    /// Human-readable label, e.g. `0 to 10 miles`
    pub label: String,
}

impl DistanceBand {
    pub fn new(suffix: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            label: label.into(),
        }
    }

    /// The eight NHTS bands, shortest first
    pub fn defaults() -> Vec<DistanceBand> {
        [
            ("_0_10mi", "0 to 10 miles"),
            ("_10_25mi", "10 to 25 miles"),
            ("_25_50mi", "25 to 50 miles"),
            ("_50_75mi", "50 to 75 miles"),
            ("_75_100mi", "75 to 100 miles"),
            ("_100_150mi", "100 to 150 miles"),
            ("_150_300mi", "150 to 300 miles"),
            ("_gt300mi", ">300 miles"),
        ]
        .into_iter()
        .map(|(suffix, label)| DistanceBand::new(suffix, label))
        .collect()
    }

    /// Dataset column holding this band's trips for `mode`
    pub fn field_name(&self, mode: &Mode) -> String {
        format!("{}{}", mode.id, self.suffix)
    }
}

/// Top-level summary structure written to `summary.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSummary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the summary was generated (RFC 3339)
    pub generated_at: String,

    /// Dataset the report was built from
    pub input_path: String,

    /// Number of records read
    pub row_count: usize,

    /// Sum of every aggregated mode-distance cell
    pub grand_total: f64,

    /// Sum of the `annual_total_trips` column
    pub annual_total_trips: f64,

    /// Per-mode breakdown in configured order
    pub modes: Vec<ModeBreakdown>,

    /// Row-sum check results, when the check ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency: Option<ConsistencySummary>,
}

/// Trips of one mode across all bands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeBreakdown {
    pub mode: String,
    pub name: String,
    pub total: f64,
    pub share_percent: f64,
    pub bands: Vec<BandCount>,
}

/// Aggregated trips of one (mode, band) cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandCount {
    pub band: String,
    pub label: String,
    pub trips: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencySummary {
    pub rows_checked: usize,
    pub mismatches: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name() {
        let mode = Mode::new("vehicle", "Vehicle");
        let band = DistanceBand::new("_gt300mi", ">300 miles");
        assert_eq!(band.field_name(&mode), "vehicle_gt300mi");
    }

    #[test]
    fn test_defaults_order() {
        let bands = DistanceBand::defaults();
        assert_eq!(bands.len(), 8);
        assert_eq!(bands[0].label, "0 to 10 miles");
        assert_eq!(bands[7].suffix, "_gt300mi");

        let modes: Vec<String> = Mode::defaults().into_iter().map(|m| m.id).collect();
        assert_eq!(modes, vec!["air", "rail", "vehicle", "atf"]);
    }
}
