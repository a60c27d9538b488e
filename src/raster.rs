use crate::colour::Colour;
use crate::error::RasterError;
use crate::font::{width_of_text, Font};
use crate::layout::{place, DrawCommand};
use crate::style::Style;
use crate::surface::Surface;
use crate::units::Px;
use owned_ttf_parser::{AsFaceRef, OutlineBuilder};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

/// A software raster surface backed by a [tiny_skia::Pixmap], pre-filled
/// white. The pixmap is allocated at `logical size × device scale` physical
/// pixels; the scale is applied as a draw-time transform, so all coordinates
/// passed to the surface stay logical.
pub struct Canvas {
    pixmap: Pixmap,
    device_scale: f32,
}

impl Canvas {
    /// Allocate a canvas of the given logical size. A non-positive
    /// `device_scale` is treated as 1.0.
    pub fn new(width: Px, height: Px, device_scale: f32) -> Result<Canvas, RasterError> {
        let device_scale = if device_scale > 0.0 { device_scale } else { 1.0 };
        let physical_width = (width.0 * device_scale).ceil().max(1.0) as u32;
        let physical_height = (height.0 * device_scale).ceil().max(1.0) as u32;

        let mut pixmap = Pixmap::new(physical_width, physical_height)
            .ok_or(RasterError::SurfaceSize(physical_width, physical_height))?;
        pixmap.fill(tiny_skia::Color::WHITE);

        Ok(Canvas {
            pixmap,
            device_scale,
        })
    }

    /// The physical pixel width of the backing pixmap
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// The physical pixel height of the backing pixmap
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.device_scale, self.device_scale)
    }

    fn paint(colour: Colour) -> Paint<'static> {
        let (r, g, b) = colour.to_rgb_bytes();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = true;
        paint
    }
}

impl Surface for Canvas {
    fn draw_text(&mut self, text: &str, font: &Font, size: Px, colour: Colour, origin: (Px, Px)) {
        let face = font.face.as_face_ref();
        let scaling: Px = size / face.units_per_em() as f32;
        // the origin is the top of the glyph box; glyph outlines are placed
        // relative to the baseline
        let baseline = origin.1 + font.ascent(size);
        let paint = Canvas::paint(colour);

        let mut x = origin.0;
        for ch in text.chars() {
            let Some(gid) = font.glyph_id(ch) else {
                continue;
            };

            let mut builder = GlyphPathBuilder::new(x.0, baseline.0, scaling.0);
            if face.outline_glyph(gid, &mut builder).is_some() {
                if let Some(path) = builder.finish() {
                    self.pixmap
                        .fill_path(&path, &paint, FillRule::Winding, self.transform(), None);
                }
            }

            x += font.glyph_advance(gid, size);
        }
    }

    fn stroke_line(&mut self, from: (Px, Px), to: (Px, Px), colour: Colour, width: Px) {
        let mut builder = PathBuilder::new();
        builder.move_to(from.0 .0, from.1 .0);
        builder.line_to(to.0 .0, to.1 .0);
        let Some(path) = builder.finish() else {
            return;
        };

        let stroke = Stroke {
            width: width.0,
            ..Stroke::default()
        };
        let paint = Canvas::paint(colour);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, self.transform(), None);
    }

    fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RasterError::PngEncode(e.to_string()))
    }
}

/// Builds a glyph outline into a [tiny_skia::Path], translating from the
/// font's y-up unit grid to the pixmap's y-down logical coordinates.
struct GlyphPathBuilder {
    builder: PathBuilder,
    origin_x: f32,
    baseline_y: f32,
    scale: f32,
}

impl GlyphPathBuilder {
    fn new(origin_x: f32, baseline_y: f32, scale: f32) -> GlyphPathBuilder {
        GlyphPathBuilder {
            builder: PathBuilder::new(),
            origin_x,
            baseline_y,
            scale,
        }
    }

    fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(
            self.origin_x + x * self.scale,
            self.baseline_y - y * self.scale,
        );
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(
            self.origin_x + x * self.scale,
            self.baseline_y - y * self.scale,
        );
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(
            self.origin_x + x1 * self.scale,
            self.baseline_y - y1 * self.scale,
            self.origin_x + x * self.scale,
            self.baseline_y - y * self.scale,
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.origin_x + x1 * self.scale,
            self.baseline_y - y1 * self.scale,
            self.origin_x + x2 * self.scale,
            self.baseline_y - y2 * self.scale,
            self.origin_x + x * self.scale,
            self.baseline_y - y * self.scale,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Rasterize a block of wrapped lines onto a surface: compute placements
/// (measuring with the given font at the style's size) and execute them. The
/// surface must already be sized per the height formula — drawing never
/// resizes it.
pub fn render<S: Surface>(lines: &[String], style: &Style, font: &Font, surface: &mut S) {
    let size = style.size();
    let commands = place(lines, style, |text| width_of_text(text, font, size));
    draw_commands(&commands, style, font, surface);
}

/// Execute placed draw commands against a surface. Drawing parameters (face,
/// size, fill colour) are fixed for the whole batch; underline rules stroke
/// 1 logical unit wide in the same colour.
pub fn draw_commands<S: Surface>(
    commands: &[DrawCommand],
    style: &Style,
    font: &Font,
    surface: &mut S,
) {
    for command in commands {
        match command {
            DrawCommand::Text { text, origin } => {
                surface.draw_text(text, font, style.size(), style.colour, *origin);
            }
            DrawCommand::Rule { origin, width } => {
                surface.stroke_line(
                    *origin,
                    (origin.0 + *width, origin.1),
                    style.colour,
                    Px(1.0),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    #[test]
    fn canvas_size_follows_the_device_scale() {
        let canvas = Canvas::new(Px(600.0), Px(50.0), 1.0).expect("can allocate");
        assert_eq!((canvas.width(), canvas.height()), (600, 50));

        let canvas = Canvas::new(Px(600.0), Px(50.0), 2.0).expect("can allocate");
        assert_eq!((canvas.width(), canvas.height()), (1200, 100));
    }

    #[test]
    fn non_positive_device_scale_falls_back_to_one() {
        let canvas = Canvas::new(Px(10.0), Px(10.0), 0.0).expect("can allocate");
        assert_eq!((canvas.width(), canvas.height()), (10, 10));
    }

    #[test]
    fn identical_strokes_encode_identical_png_bytes() {
        let draw = || -> Vec<u8> {
            let mut canvas = Canvas::new(Px(64.0), Px(32.0), 1.0).expect("can allocate");
            canvas.stroke_line(
                (Px(1.0), Px(18.0)),
                (Px(51.0), Px(18.0)),
                colours::BLACK,
                Px(1.0),
            );
            canvas.encode_png().expect("can encode")
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn stroke_changes_the_encoded_surface() {
        let blank = Canvas::new(Px(64.0), Px(32.0), 1.0)
            .expect("can allocate")
            .encode_png()
            .expect("can encode");

        let mut canvas = Canvas::new(Px(64.0), Px(32.0), 1.0).expect("can allocate");
        canvas.stroke_line(
            (Px(1.0), Px(18.0)),
            (Px(51.0), Px(18.0)),
            colours::RED,
            Px(1.0),
        );
        assert_ne!(blank, canvas.encode_png().expect("can encode"));
    }
}
