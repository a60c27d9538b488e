use crate::RasterError;

/// A colour, expressed in the RGB colour space; r, g, and b range from 0.0 to 1.0
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    /// Create a new colour. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b }
    }

    /// Create a new colour. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a colour from a hex string such as `#ff8000` or `#f80` (the
    /// leading `#` is optional). Returns [RasterError::InvalidColour] if the
    /// string isn't 3 or 6 hex digits.
    pub fn from_hex(hex: &str) -> Result<Colour, RasterError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        // digits must be ASCII before any slicing below; user-authored strings
        // can hold multi-byte characters
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RasterError::InvalidColour(hex.to_string()));
        }
        let digits: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(RasterError::InvalidColour(hex.to_string())),
        };

        let component = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| RasterError::InvalidColour(hex.to_string()))
        };
        let r = component(&digits[0..2])?;
        let g = component(&digits[2..4])?;
        let b = component(&digits[4..6])?;
        Ok(Colour::new_rgb_bytes(r, g, b))
    }

    /// Convert the colour to 8-bit components, clamping each channel to [0, 255]
    pub fn to_rgb_bytes(&self) -> (u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::Colour;

    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Colour = Colour {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const RED: Colour = Colour {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}
