use crate::core::zoom::compute_zoom_offset;
use serde::Serialize;

/// Pixel dimensions of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of levels below `approximate_zoom` the image can be halved
    /// in both dimensions.
    pub fn zoom_offset(&self, approximate_zoom: u8) -> u8 {
        compute_zoom_offset(self.width, self.height, approximate_zoom)
    }
}

impl From<(u32, u32)> for ImageDimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}
