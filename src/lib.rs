mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod export;
pub use export::*;

mod font;
pub use font::*;

/// Utility functions and structures to break text into lines and place glyphs
pub mod layout;

mod raster;
pub use raster::*;

mod style;
pub use style::*;

mod surface;
pub use surface::*;

mod units;
pub use units::*;
