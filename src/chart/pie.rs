//! Per-mode pie charts of the distance-band split.
//!
//! Only non-zero bands become slices and legend entries. A mode with no
//! trips at all produces no chart.

use super::palette::band_color;
use super::svg::{Anchor, SvgDocument};
use crate::aggregator::AggregatedTrips;
use crate::parser::schema::{DistanceBand, Mode};
use crate::utils::format::format_thousands;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 800;
const CENTER_X: f64 = 430.0;
const CENTER_Y: f64 = 440.0;
const RADIUS: f64 = 300.0;

/// Slices start at 12 o'clock and run counter-clockwise
const START_ANGLE_DEG: f64 = 90.0;

/// Percentage labels sit at this fraction of the radius
const LABEL_RADIUS: f64 = 0.6;

const LEGEND_TITLE: &str = "Distance Ranges";

/// One wedge of a pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// A pie chart for one mode
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub mode: Mode,
    pub slices: Vec<PieSlice>,
    pub total: f64,
}

impl PieChart {
    /// Build the chart for `mode`, or `None` when every band is zero
    ///
    /// **Public** - decides whether a mode gets a pie at all
    pub fn for_mode(table: &AggregatedTrips, mode: &Mode, bands: &[DistanceBand]) -> Option<Self> {
        let slices: Vec<PieSlice> = bands
            .iter()
            .enumerate()
            .filter_map(|(j, band)| {
                let value = table.get(mode, band);
                (value > 0.0).then(|| PieSlice {
                    label: band.label.clone(),
                    value,
                    color: band_color(j),
                })
            })
            .collect();

        if slices.is_empty() {
            return None;
        }

        let total = slices.iter().map(|s| s.value).sum();
        Some(Self {
            mode: mode.clone(),
            slices,
            total,
        })
    }

    /// e.g. `Air - Total: 1,234 trips`
    pub fn title(&self) -> String {
        format!("{} - Total: {} trips", self.mode.name, format_thousands(self.total))
    }

    /// Share of the slice at `index`, in percent
    pub fn percentage(&self, index: usize) -> f64 {
        self.slices[index].value * 100.0 / self.total
    }

    /// Compose the chart as an SVG document
    pub fn to_svg(&self) -> String {
        let mut doc = SvgDocument::new(WIDTH, HEIGHT);

        doc.bold_text(WIDTH as f64 / 2.0, 50.0, 20, Anchor::Middle, &self.title());

        let mut angle = START_ANGLE_DEG;
        for (i, slice) in self.slices.iter().enumerate() {
            let sweep = slice.value / self.total * 360.0;
            let pct = self.percentage(i);
            let tooltip = format!("{}: {} ({:.1}%)", slice.label, format_thousands(slice.value), pct);

            if self.slices.len() == 1 {
                doc.circle(CENTER_X, CENTER_Y, RADIUS, slice.color, Some(&tooltip));
            } else {
                let (x0, y0) = polar(angle, RADIUS);
                let (x1, y1) = polar(angle + sweep, RADIUS);
                let large_arc = if sweep > 180.0 { 1 } else { 0 };
                // sweep-flag 0: counter-clockwise on screen
                let d = format!(
                    "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z",
                    CENTER_X, CENTER_Y, x0, y0, RADIUS, RADIUS, large_arc, x1, y1
                );
                doc.path(&d, slice.color, Some(&tooltip));
            }

            let (lx, ly) = polar(angle + sweep / 2.0, RADIUS * LABEL_RADIUS);
            doc.text(lx, ly + 5.0, 14, Anchor::Middle, &format!("{:.1}%", pct));

            angle += sweep;
        }

        // Legend restricted to the drawn slices
        let legend_x = CENTER_X + RADIUS + 90.0;
        let legend_y = CENTER_Y - (self.slices.len() as f64 * 24.0) / 2.0;
        doc.bold_text(legend_x, legend_y - 14.0, 14, Anchor::Start, LEGEND_TITLE);
        for (i, slice) in self.slices.iter().enumerate() {
            let y = legend_y + i as f64 * 24.0;
            doc.rect(legend_x, y, 14.0, 14.0, slice.color, None);
            doc.text(legend_x + 20.0, y + 12.0, 13, Anchor::Start, &slice.label);
        }

        doc.finish()
    }
}

/// Screen point at `angle_deg` (counter-clockwise from 3 o'clock)
fn polar(angle_deg: f64, radius: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (CENTER_X + radius * rad.cos(), CENTER_Y - radius * rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::ReportConfig;

    fn table(cells: &[(&str, f64)]) -> AggregatedTrips {
        cells.iter().map(|(f, v)| (f.to_string(), *v)).collect()
    }

    #[test]
    fn test_all_zero_mode_has_no_chart() {
        let config = ReportConfig::default();
        let t = table(&[("rail_0_10mi", 0.0), ("air_0_10mi", 4.0)]);
        let rail = config.mode("rail").unwrap();

        assert!(PieChart::for_mode(&t, rail, &config.distance_bands).is_none());
    }

    #[test]
    fn test_only_nonzero_bands_become_slices() {
        let config = ReportConfig::default();
        let t = table(&[
            ("air_0_10mi", 1500.0),
            ("air_25_50mi", 0.0),
            ("air_gt300mi", 500.0),
        ]);
        let air = config.mode("air").unwrap();

        let pie = PieChart::for_mode(&t, air, &config.distance_bands).unwrap();

        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.slices[0].label, "0 to 10 miles");
        assert_eq!(pie.slices[1].label, ">300 miles");
        assert_eq!(pie.slices[1].color, band_color(7));
        assert_eq!(pie.total, 2000.0);
        assert_eq!(pie.title(), "Air - Total: 2,000 trips");
        assert_eq!(pie.percentage(0), 75.0);

        let svg = pie.to_svg();
        assert!(svg.contains(LEGEND_TITLE));
        assert!(svg.contains("75.0%"));
        assert!(svg.contains("25.0%"));
        assert!(!svg.contains("25 to 50 miles"));
    }

    #[test]
    fn test_single_slice_is_full_circle() {
        let config = ReportConfig::default();
        let t = table(&[("vehicle_gt300mi", 100.0)]);
        let vehicle = config.mode("vehicle").unwrap();

        let svg = PieChart::for_mode(&t, vehicle, &config.distance_bands)
            .unwrap()
            .to_svg();

        assert!(svg.contains("<circle"));
        assert!(svg.contains("100.0%"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_polar_start_is_top() {
        let (x, y) = polar(START_ANGLE_DEG, RADIUS);
        assert!((x - CENTER_X).abs() < 1e-9);
        assert!((y - (CENTER_Y - RADIUS)).abs() < 1e-9);
    }
}
