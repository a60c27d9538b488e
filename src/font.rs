use crate::error::RasterError;
use crate::style::Style;
use crate::units::Px;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed font face. Fonts can be TTF or OTF fonts; the engine uses their
/// horizontal advances for measurement and their glyph outlines for drawing.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, RasterError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().descender() as f32
    }

    /// Look up the glyph for a character, falling back to the font's
    /// replacement glyph (then `?`) when the character isn't covered
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// The horizontal advance of a glyph at the given font size
    pub fn glyph_advance(&self, glyph: GlyphId, size: Px) -> Px {
        let face = self.face.as_face_ref();
        let scaling: Px = size / face.units_per_em() as f32;
        scaling * face.glyph_hor_advance(glyph).unwrap_or_default() as f32
    }
}

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, font: &Font, size: Px) -> Px {
    text.chars()
        .filter_map(|ch| font.glyph_id(ch))
        .map(|gid| font.glyph_advance(gid, size))
        .sum()
}

/// The set of faces available to render one document. The bold and italic
/// axes of a [Style] select a face; missing variants fall back to the regular
/// face (no synthetic emboldening or obliquing is performed).
pub struct FontSet {
    pub regular: Font,
    pub bold: Option<Font>,
    pub italic: Option<Font>,
    pub bold_italic: Option<Font>,
}

impl FontSet {
    pub fn new(regular: Font) -> FontSet {
        FontSet {
            regular,
            bold: None,
            italic: None,
            bold_italic: None,
        }
    }

    pub fn with_bold(mut self, font: Font) -> FontSet {
        self.bold = Some(font);
        self
    }

    pub fn with_italic(mut self, font: Font) -> FontSet {
        self.italic = Some(font);
        self
    }

    pub fn with_bold_italic(mut self, font: Font) -> FontSet {
        self.bold_italic = Some(font);
        self
    }

    /// Select the face for a style's bold/italic axes
    pub fn face_for(&self, style: &Style) -> &Font {
        match (style.bold, style.italic) {
            (true, true) => self
                .bold_italic
                .as_ref()
                .or(self.bold.as_ref())
                .or(self.italic.as_ref())
                .unwrap_or(&self.regular),
            (true, false) => self.bold.as_ref().unwrap_or(&self.regular),
            (false, true) => self.italic.as_ref().unwrap_or(&self.regular),
            (false, false) => &self.regular,
        }
    }
}
