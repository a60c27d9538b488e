use crate::colour::{colours, Colour};
use crate::units::Px;

/// Horizontal placement of each rendered line within the fixed surface width
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
    /// Stretch inter-word spacing so the line spans the full available width.
    /// The final line of the document and single-word lines render as [Align::Left].
    Justify,
}

/// The smallest font size a [Style] will hold
pub const MIN_FONT_SIZE: Px = Px(8.0);
/// The largest font size a [Style] will hold
pub const MAX_FONT_SIZE: Px = Px(72.0);

/// The styling applied to a whole document for one render. A style is a plain
/// snapshot: the engine never reads ambient state, so rendering is a pure
/// function of the text and the style passed in.
///
/// The font size is kept within [MIN_FONT_SIZE] and [MAX_FONT_SIZE] by every
/// mutator, so layout math can assume an in-range size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub colour: Colour,
    pub align: Align,
    size: Px,
}

impl Default for Style {
    fn default() -> Style {
        Style {
            bold: false,
            italic: false,
            underline: false,
            colour: colours::BLACK,
            align: Align::Left,
            size: Px(16.0),
        }
    }
}

impl Style {
    /// Create a style with the given font size (clamped) and defaults for
    /// everything else: regular weight, no underline, black, left-aligned
    pub fn new(size: Px) -> Style {
        Style {
            size: Self::clamp_size(size),
            ..Style::default()
        }
    }

    pub fn size(&self) -> Px {
        self.size
    }

    /// Set the font size, clamping it to [MIN_FONT_SIZE]..=[MAX_FONT_SIZE]
    pub fn set_size(&mut self, size: Px) {
        self.size = Self::clamp_size(size);
    }

    pub fn with_size(mut self, size: Px) -> Style {
        self.set_size(size);
        self
    }

    /// The vertical distance between the tops of consecutive lines: 1.5× the font size
    pub fn line_height(&self) -> Px {
        self.size * 1.5
    }

    fn clamp_size(size: Px) -> Px {
        Px(size.0.clamp(MIN_FONT_SIZE.0, MAX_FONT_SIZE.0))
    }
}
