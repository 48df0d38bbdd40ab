//! Output writers for the aggregated table, summary and charts.
//!
//! This module handles writing data to disk in various formats:
//! - Aggregated trips CSV (and reading it back)
//! - JSON run summary
//! - PNG/SVG chart files
//! - Optional viewer launch for saved charts

pub mod artifact;
pub mod chart;
pub mod display;
pub mod export;
pub mod json;

// Re-export main functions
pub use artifact::{validate_output_path, write_artifact};
pub use chart::{rasterize_svg, write_chart};
pub use display::{display_if_requested, open_in_viewer};
pub use export::{aggregated_csv_bytes, read_aggregated_csv, write_aggregated_csv};
pub use json::{build_summary, read_summary, write_summary};
