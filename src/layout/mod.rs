//! Text layout: greedy line breaking and per-line glyph placement.
//!
//! Layout runs in two pure stages. [wrap] breaks raw lines into lines that
//! fit the available width, and [place] turns wrapped lines plus a style into
//! an ordered list of [DrawCommand]s with exact coordinates. Neither stage
//! touches a font or a surface directly — measurement is threaded in as a
//! closure — so both are testable with synthetic measurements.

mod place;
mod wrap;

pub use place::*;
pub use wrap::*;
