//! Chart file writer.
//!
//! Charts arrive as SVG documents; PNG output rasterizes them with
//! `resvg`. System fonts are loaded once per process; without any
//! installed fonts the shapes still render, labels are dropped and a
//! warning says so.

use super::artifact::write_artifact;
use crate::utils::config::ChartFormat;
use crate::utils::error::ChartError;
use log::{debug, warn};
use resvg::{tiny_skia, usvg};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Save an SVG chart in the requested format
///
/// **Public** - main entry point for chart output
pub fn write_chart(
    svg: &str,
    output_path: impl AsRef<Path>,
    format: ChartFormat,
) -> Result<(), ChartError> {
    let output_path = output_path.as_ref();

    match format {
        ChartFormat::Svg => write_artifact(svg.as_bytes(), output_path)?,
        ChartFormat::Png => {
            let png = rasterize_svg(svg)?;
            write_artifact(&png, output_path)?;
        }
    }

    Ok(())
}

/// Render an SVG document to PNG bytes at its declared size
///
/// **Public** - exposed for tests and callers that keep images in memory
pub fn rasterize_svg(svg: &str) -> Result<Vec<u8>, ChartError> {
    let options = usvg::Options {
        fontdb: font_database(),
        ..Default::default()
    };

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| ChartError::InvalidSvg(e.to_string()))?;

    let size = tree.size().to_int_size();
    debug!("Rasterizing chart at {}x{}", size.width(), size.height());

    let mut pixmap =
        tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(ChartError::EmptyCanvas)?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| ChartError::Raster(e.to_string()))
}

/// System fonts, loaded on first use and shared by every chart
pub fn font_database() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();

    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            if db.is_empty() {
                warn!("No system fonts found: PNG charts will have no text (use --format svg)");
            } else {
                debug!("Loaded {} font faces", db.len());
            }
            Arc::new(db)
        })
        .clone()
}
