//! Segment colors, one per distance band.

/// Ten-color categorical palette (matplotlib "tab10")
const PALETTE: [&str; 10] = [
    "rgb(31, 119, 180)",  // Blue
    "rgb(255, 127, 14)",  // Orange
    "rgb(44, 160, 44)",   // Green
    "rgb(214, 39, 40)",   // Red
    "rgb(148, 103, 189)", // Purple
    "rgb(140, 86, 75)",   // Brown
    "rgb(227, 119, 194)", // Pink
    "rgb(127, 127, 127)", // Gray
    "rgb(188, 189, 34)",  // Olive
    "rgb(23, 190, 207)",  // Cyan
];

/// Color for the band at `index`; wraps past ten bands
pub fn band_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
