use crate::api::raster::{RasterInfo, Units};
use crate::core::zoom::{Resolution, ZoomLevel, compute_zoom, raw_zoom};
use crate::util::error::ZoomError;
use serde::Serialize;

/// Everything computed for one raster, in a form suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomReport {
    pub input: String,
    pub width: u32,
    pub height: u32,
    /// Meters per pixel
    pub resolution: Resolution,
    pub native_scale: f64,
    pub units: Units,
    pub zoom: ZoomLevel,
    pub raw_zoom: i32,
    /// Levels below `zoom` the image can still be halved in both dimensions
    pub zoom_offset: u8,
}

impl ZoomReport {
    pub fn new(input: impl Into<String>, info: &RasterInfo) -> Result<Self, ZoomError> {
        let zoom = compute_zoom(&info.resolution)?;

        Ok(Self {
            input: input.into(),
            width: info.dimensions.width,
            height: info.dimensions.height,
            resolution: info.resolution,
            native_scale: info.native_scale,
            units: info.units,
            zoom,
            raw_zoom: raw_zoom(&info.resolution)?,
            zoom_offset: info.dimensions.zoom_offset(zoom.value()),
        })
    }

    pub fn to_json(&self) -> Result<String, ZoomError> {
        serde_json::to_string_pretty(self).map_err(|e| ZoomError::Serialization(e.to_string()))
    }
}
