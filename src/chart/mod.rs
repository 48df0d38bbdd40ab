//! Chart rendering for the aggregated trips table.
//!
//! Charts are composed as SVG documents and saved as PNG or SVG
//! through [`crate::output::write_chart`]:
//! - One stacked bar chart across all modes
//! - One pie chart per mode with trips

pub mod bar;
pub mod palette;
pub mod pie;
pub mod svg;
pub mod text;

pub use bar::generate_stacked_bar;
pub use pie::{PieChart, PieSlice};
pub use text::generate_text_summary;

use crate::aggregator::AggregatedTrips;
use crate::output::{display_if_requested, write_chart};
use crate::utils::config::{ReportConfig, BAR_CHART_STEM, PIE_CHART_PREFIX};
use crate::utils::error::ChartError;
use log::info;
use std::path::PathBuf;

/// Render and save the stacked bar chart
///
/// **Public** - writes `trips_by_mode_distance.<ext>` to the output directory
///
/// # Returns
/// Path of the written chart
pub fn render_stacked_bar(
    table: &AggregatedTrips,
    config: &ReportConfig,
) -> Result<PathBuf, ChartError> {
    let svg = generate_stacked_bar(table, config);
    let path = config.chart_path(BAR_CHART_STEM);

    write_chart(&svg, &path, config.chart_format)?;
    info!("Plot saved as '{}'", path.display());

    display_if_requested(&path, config);

    Ok(path)
}

/// Render and save one pie chart per mode with non-zero trips
///
/// **Public** - writes `pie_<mode>.<ext>`; modes without trips are skipped
///
/// # Returns
/// Paths of the written charts, in mode order
pub fn render_pie_charts(
    table: &AggregatedTrips,
    config: &ReportConfig,
) -> Result<Vec<PathBuf>, ChartError> {
    let mut written = Vec::new();

    for mode in &config.modes {
        let Some(pie) = PieChart::for_mode(table, mode, &config.distance_bands) else {
            info!("Skipping pie chart for '{}': no trips in any distance band", mode.id);
            continue;
        };

        let path = config.chart_path(&format!("{}{}", PIE_CHART_PREFIX, mode.id));
        write_chart(&pie.to_svg(), &path, config.chart_format)?;
        info!("Pie chart saved as '{}'", path.display());

        display_if_requested(&path, config);
        written.push(path);
    }

    Ok(written)
}
