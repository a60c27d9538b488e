use crate::colour::Colour;
use crate::error::RasterError;
use crate::font::Font;
use crate::units::Px;

/// The fixed logical width of every exported image
pub const SURFACE_WIDTH: Px = Px(600.0);

/// The logical padding between the text and every surface edge
pub const PADDING: Px = Px(1.0);

/// The width available to a line of text: the surface width less the padding
/// on both sides
pub const MAX_TEXT_WIDTH: Px = Px(SURFACE_WIDTH.0 - 2.0 * PADDING.0);

/// The narrow drawing contract the engine needs from a raster back end:
/// glyph drawing at an origin, line stroking, and PNG encoding. Layout never
/// touches pixels, so retargeting the engine to another back end means
/// implementing these three calls.
///
/// Text origins are the *top left* of the glyph box, not the baseline;
/// implementations convert internally (see [Font::ascent]). That keeps line
/// positioning a simple multiple of the line height for callers.
pub trait Surface {
    /// Draw a run of text with its top-left corner at `origin`
    fn draw_text(&mut self, text: &str, font: &Font, size: Px, colour: Colour, origin: (Px, Px));

    /// Stroke a straight line from `from` to `to` with the given width
    fn stroke_line(&mut self, from: (Px, Px), to: (Px, Px), colour: Colour, width: Px);

    /// Encode the current surface contents as PNG bytes
    fn encode_png(&self) -> Result<Vec<u8>, RasterError>;
}
