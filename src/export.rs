use crate::error::RasterError;
use crate::font::{width_of_text, FontSet};
use crate::layout::{split_lines, text_height, wrap};
use crate::raster::{render, Canvas};
use crate::style::Style;
use crate::surface::{Surface, MAX_TEXT_WIDTH, PADDING, SURFACE_WIDTH};
use log::debug;
use std::path::{Path, PathBuf};

/// The filename stem used when no title is supplied
pub const DEFAULT_BASENAME: &str = "untitled";

/// A finished export: PNG bytes plus the filename they should be saved under
pub struct Export {
    pub filename: String,
    pub png: Vec<u8>,
}

/// Run the full export pipeline: measure, wrap, size a surface to exactly fit
/// the text, rasterize, and encode to PNG.
///
/// Returns `Ok(None)` when the document has no renderable content (empty, or
/// blank lines only) — exporting nothing is a no-op, not an error. The whole
/// pipeline is a pure function of its inputs: exporting the same document,
/// style, and title twice produces byte-identical PNGs.
pub fn export(
    text: &str,
    style: &Style,
    fonts: &FontSet,
    title: Option<&str>,
    device_scale: f32,
) -> Result<Option<Export>, RasterError> {
    let font = fonts.face_for(style);
    let size = style.size();

    let raw_lines = split_lines(text);
    let lines = wrap(
        raw_lines.iter().map(String::as_str),
        |s| width_of_text(s, font, size),
        MAX_TEXT_WIDTH,
    );
    if lines.is_empty() {
        debug!("export requested for an empty document, skipping");
        return Ok(None);
    }

    let height = text_height(lines.len(), style);
    let mut canvas = Canvas::new(SURFACE_WIDTH, height + PADDING * 2.0, device_scale)?;
    debug!(
        "rasterizing {} lines onto a {}x{} pixel surface",
        lines.len(),
        canvas.width(),
        canvas.height()
    );

    render(&lines, style, font, &mut canvas);
    let png = canvas.encode_png()?;
    debug!("encoded {} bytes of PNG", png.len());

    Ok(Some(Export {
        filename: filename_for(title),
        png,
    }))
}

/// Resolve the output filename: `"{title}.png"` for a non-blank title,
/// otherwise [DEFAULT_BASENAME]
pub fn filename_for(title: Option<&str>) -> String {
    match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => format!("{title}.png"),
        None => format!("{DEFAULT_BASENAME}.png"),
    }
}

/// [export] and commit the result to disk under `dir`, returning the path of
/// the written file, or `None` when there was nothing to export
pub fn export_to_file(
    text: &str,
    style: &Style,
    fonts: &FontSet,
    title: Option<&str>,
    device_scale: f32,
    dir: &Path,
) -> Result<Option<PathBuf>, RasterError> {
    match export(text, style, fonts, title, device_scale)? {
        Some(Export { filename, png }) => {
            let path = dir.join(filename);
            std::fs::write(&path, png)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}
