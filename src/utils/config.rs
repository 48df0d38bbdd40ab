//! Configuration and constants for the report pipeline.
//!
//! Every stage receives a [`ReportConfig`] explicitly; nothing here is
//! mutable process state.

use crate::parser::schema::{DistanceBand, Mode};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Current `summary.json` schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Dataset location relative to the working directory
pub const DEFAULT_INPUT_PATH: &str =
    "datasets/NHTS_OD_2022/2022_Passenger_OD_Annual/2022_Passenger_OD_Annual_Data.csv";

/// Where charts and exports land unless overridden
pub const DEFAULT_OUTPUT_DIR: &str = "scripts/NHTS_OD_2022/";

// Artifact names inside the output directory
pub const BAR_CHART_STEM: &str = "trips_by_mode_distance";
pub const PIE_CHART_PREFIX: &str = "pie_";
pub const AGGREGATED_CSV_FILE: &str = "aggregated_trips.csv";
pub const SUMMARY_JSON_FILE: &str = "summary.json";

/// Header of the index column in the aggregated CSV
pub const DISTANCE_INDEX_HEADER: &str = "Distance";

/// Relative tolerance for the row-sum consistency check.
/// Scaled by `max(1, |annual_total_trips|)`.
pub const CONSISTENCY_TOLERANCE: f64 = 1e-6;

/// Mismatching rows kept in a consistency report for display
pub const MAX_REPORTED_MISMATCHES: usize = 10;

/// Image encoding for chart artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ChartFormat {
    /// Rasterized PNG
    #[default]
    Png,
    /// The SVG document as composed
    Svg,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

/// Explicit configuration handed to the aggregator, renderer and exporter
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Distance bands in display order
    pub distance_bands: Vec<DistanceBand>,

    /// Modes in display order
    pub modes: Vec<Mode>,

    /// Directory receiving every artifact
    pub output_dir: PathBuf,

    /// Open each chart in the platform viewer after saving it
    pub interactive_display: bool,

    /// Encoding for chart files
    pub chart_format: ChartFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            distance_bands: DistanceBand::defaults(),
            modes: Mode::defaults(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            interactive_display: false,
            chart_format: ChartFormat::default(),
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_interactive_display(mut self, interactive_display: bool) -> Self {
        self.interactive_display = interactive_display;
        self
    }

    pub fn with_chart_format(mut self, chart_format: ChartFormat) -> Self {
        self.chart_format = chart_format;
        self
    }

    pub fn with_modes(mut self, modes: Vec<Mode>) -> Self {
        self.modes = modes;
        self
    }

    /// All `{mode}{distance}` field names, mode-major
    pub fn field_names(&self) -> Vec<String> {
        self.modes
            .iter()
            .flat_map(|mode| self.distance_bands.iter().map(move |band| band.field_name(mode)))
            .collect()
    }

    /// Look up a configured mode by its column prefix
    pub fn mode(&self, id: &str) -> Option<&Mode> {
        self.modes.iter().find(|m| m.id == id)
    }

    /// Look up a configured band by its human-readable label
    pub fn band_by_label(&self, label: &str) -> Option<&DistanceBand> {
        self.distance_bands.iter().find(|b| b.label == label)
    }

    /// Path of a non-chart artifact in the output directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Path of a chart artifact, extension chosen by `chart_format`
    pub fn chart_path(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(Path::new(stem).with_extension(self.chart_format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field_names() {
        let config = ReportConfig::default();
        let fields = config.field_names();

        assert_eq!(fields.len(), 32);
        assert_eq!(fields[0], "air_0_10mi");
        assert_eq!(fields[7], "air_gt300mi");
        assert_eq!(fields[31], "atf_gt300mi");
    }

    #[test]
    fn test_chart_path_uses_format_extension() {
        let config = ReportConfig::new()
            .with_output_dir("out")
            .with_chart_format(ChartFormat::Svg);

        assert_eq!(config.chart_path("pie_air"), PathBuf::from("out/pie_air.svg"));
        assert_eq!(
            config.output_path(AGGREGATED_CSV_FILE),
            PathBuf::from("out/aggregated_trips.csv")
        );
    }

    #[test]
    fn test_lookups() {
        let config = ReportConfig::default();
        assert_eq!(config.mode("atf").map(|m| m.name.as_str()), Some("Active"));
        assert!(config.mode("boat").is_none());
        assert_eq!(
            config.band_by_label(">300 miles").map(|b| b.suffix.as_str()),
            Some("_gt300mi")
        );
    }
}
