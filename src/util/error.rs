/// Error type for get-zoom operations.
#[derive(Debug, PartialEq)]
pub enum ZoomError {
    /// Missing or malformed command-line arguments.
    Usage(String),
    /// The raster could not be opened or its header could not be read.
    ResolutionUnavailable(String),
    /// The raster carries neither a pixel scale nor a model transformation.
    MissingGeoreference,
    /// The resolution is zero, negative, or not a finite number.
    InvalidResolution(f64),
    /// Failed to render a report.
    Serialization(String),
}

impl std::fmt::Display for ZoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoomError::Usage(msg) => write!(f, "{}", msg),
            ZoomError::ResolutionUnavailable(msg) => write!(f, "Resolution unavailable: {}", msg),
            ZoomError::MissingGeoreference => write!(f, "Raster has no georeferencing tags"),
            ZoomError::InvalidResolution(r) => write!(f, "Invalid resolution: {}", r),
            ZoomError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ZoomError {}

impl From<std::io::Error> for ZoomError {
    fn from(e: std::io::Error) -> Self {
        ZoomError::ResolutionUnavailable(e.to_string())
    }
}

impl From<tiff::TiffError> for ZoomError {
    fn from(e: tiff::TiffError) -> Self {
        ZoomError::ResolutionUnavailable(e.to_string())
    }
}
