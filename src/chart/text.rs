//! Plain-text summary of mode totals for the terminal.

use crate::aggregator::ModeSummary;
use crate::utils::format::format_thousands;

/// Width of a bar at 100% share
const BAR_WIDTH: usize = 50;

/// Render a table of per-mode totals followed by share bars
pub fn generate_text_summary(summaries: &[ModeSummary], grand_total: f64) -> String {
    let mut lines = Vec::new();

    lines.push("  TRIPS BY MODE".to_string());
    lines.push("  ┏━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━┳━━━━━━━━━━━━━━━━━━━━┓".to_string());
    lines.push(format!(
        "  ┃ {:<12} ┃ {:^20} ┃ {:^7} ┃ {:^18} ┃",
        "Mode", "TRIPS", "%", "Top band"
    ));
    lines.push("  ┣━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━╋━━━━━━━━━━━━━━━━━━━━┫".to_string());

    for summary in summaries {
        lines.push(format!(
            "  ┃ {:<12} ┃ {:>20} ┃ {:>6.1}% ┃ {:<18} ┃",
            summary.name,
            format_thousands(summary.total),
            summary.share_percent,
            summary.dominant_band.as_deref().unwrap_or("-")
        ));
    }

    lines.push("  ┗━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━┻━━━━━━━━━━━━━━━━━━━━┛".to_string());
    lines.push(format!("  Total: {} trips", format_thousands(grand_total)));

    lines.push(String::new());
    for summary in summaries {
        let bar_len = ((summary.share_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        lines.push(format!(
            "  {:<12} {:<width$} {:>5.1}%",
            summary.name,
            "█".repeat(bar_len.min(BAR_WIDTH)),
            summary.share_percent,
            width = BAR_WIDTH
        ));
    }

    lines.join("\n")
}
