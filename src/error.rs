use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum RasterError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    /// A colour string could not be parsed as 3- or 6-digit hex
    #[error("invalid colour string {0:?}")]
    InvalidColour(String),

    /// The output surface could not be allocated at the requested pixel size
    #[error("cannot allocate a {0}x{1} pixel surface")]
    SurfaceSize(u32, u32),

    /// The surface could not be encoded as a PNG
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}
