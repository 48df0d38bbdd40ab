//! Stacked bar chart: one bar per mode, segments stacked by distance band.

use super::palette::band_color;
use super::svg::{Anchor, SvgDocument};
use crate::aggregator::AggregatedTrips;
use crate::utils::config::ReportConfig;
use crate::utils::format::{format_compact, format_thousands};
use log::debug;

// 1280x720 canvas, legend to the right of the plot area
const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const PLOT_LEFT: f64 = 100.0;
const PLOT_RIGHT: f64 = 1050.0;
const PLOT_TOP: f64 = 60.0;
const PLOT_BOTTOM: f64 = 650.0;

/// Fraction of each mode's slot covered by its bar
const BAR_FILL: f64 = 0.8;

const TITLE: &str = "Trips by Mode and Distance";
const X_LABEL: &str = "Transportation Mode";
const Y_LABEL: &str = "Number of Trips";

/// Compose the stacked bar chart as an SVG document
///
/// **Public** - rendering entry point used by [`super::render_stacked_bar`]
///
/// Bars follow `config.modes` order; segments stack bottom-up in
/// `config.distance_bands` order. Non-positive cells draw no segment.
pub fn generate_stacked_bar(table: &AggregatedTrips, config: &ReportConfig) -> String {
    let stacks: Vec<Vec<f64>> = config
        .modes
        .iter()
        .map(|mode| table.mode_values(mode, &config.distance_bands))
        .collect();

    let tallest = stacks
        .iter()
        .map(|values| values.iter().filter(|v| **v > 0.0).sum::<f64>())
        .fold(0.0_f64, f64::max);
    let (y_max, step) = nice_axis(tallest);

    debug!(
        "Stacked bar: {} modes, tallest {} -> axis 0..{} step {}",
        stacks.len(),
        tallest,
        y_max,
        step
    );

    let plot_width = PLOT_RIGHT - PLOT_LEFT;
    let plot_height = PLOT_BOTTOM - PLOT_TOP;
    let scale_y = |value: f64| PLOT_BOTTOM - value / y_max * plot_height;

    let mut doc = SvgDocument::new(WIDTH, HEIGHT);

    // Grid and y ticks
    let ticks = (y_max / step).round() as usize;
    for k in 0..=ticks {
        let value = k as f64 * step;
        let y = scale_y(value);
        if k > 0 {
            doc.line(PLOT_LEFT, y, PLOT_RIGHT, y, "rgb(230, 230, 230)");
        }
        doc.line(PLOT_LEFT - 5.0, y, PLOT_LEFT, y, "black");
        doc.text(PLOT_LEFT - 8.0, y + 4.0, 12, Anchor::End, &format_compact(value));
    }

    // Bars
    if !stacks.is_empty() {
        let slot = plot_width / stacks.len() as f64;
        let bar_width = slot * BAR_FILL;

        for (i, (mode, values)) in config.modes.iter().zip(&stacks).enumerate() {
            let x = PLOT_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
            let mut bottom = 0.0;

            for (j, (band, value)) in config.distance_bands.iter().zip(values).enumerate() {
                if *value <= 0.0 {
                    continue;
                }
                let top = bottom + value;
                let tooltip = format!("{}, {}: {}", mode.name, band.label, format_thousands(*value));
                doc.rect(
                    x,
                    scale_y(top),
                    bar_width,
                    scale_y(bottom) - scale_y(top),
                    band_color(j),
                    Some(&tooltip),
                );
                bottom = top;
            }

            doc.text(x + bar_width / 2.0, PLOT_BOTTOM + 20.0, 13, Anchor::Middle, &mode.id);
        }
    }

    // Axes
    doc.line(PLOT_LEFT, PLOT_TOP, PLOT_LEFT, PLOT_BOTTOM, "black");
    doc.line(PLOT_LEFT, PLOT_BOTTOM, PLOT_RIGHT, PLOT_BOTTOM, "black");

    // Labels
    let center_x = PLOT_LEFT + plot_width / 2.0;
    doc.bold_text(center_x, 35.0, 20, Anchor::Middle, TITLE);
    doc.text(center_x, HEIGHT as f64 - 20.0, 14, Anchor::Middle, X_LABEL);
    doc.vertical_text(30.0, PLOT_TOP + plot_height / 2.0, 14, Y_LABEL);

    // Legend, first band on top
    let legend_x = PLOT_RIGHT + 25.0;
    for (j, band) in config.distance_bands.iter().enumerate() {
        let y = PLOT_TOP + 10.0 + j as f64 * 24.0;
        doc.rect(legend_x, y, 14.0, 14.0, band_color(j), None);
        doc.text(legend_x + 20.0, y + 12.0, 13, Anchor::Start, &band.label);
    }

    doc.finish()
}

/// Round `max` up to a readable axis limit
///
/// Returns `(axis_max, tick_step)` with steps of 1, 2 or 5 × 10^k and
/// roughly five ticks.
pub fn nice_axis(max: f64) -> (f64, f64) {
    if !max.is_finite() || max <= 0.0 {
        return (1.0, 0.2);
    }

    let raw_step = max / 5.0;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    let step = nice * magnitude;
    ((max / step).ceil() * step, step)
}
