//! # get-zoom
//!
//! Picks the Web Mercator zoom level that matches a raster's ground resolution.
//!
//! ### 1. `compute_zoom` - Resolution to Zoom Level
//!
//! ```
//! use get_zoom::{compute_zoom, raw_zoom};
//!
//! # fn main() -> Result<(), get_zoom::ZoomError> {
//! // 0.3 m/px orthophoto
//! assert_eq!(compute_zoom(&0.3)?.value(), 19);
//!
//! // Clamped to 22, the raw ceiling is not
//! assert_eq!(compute_zoom(&0.001)?.value(), 22);
//! assert_eq!(raw_zoom(&0.001)?, 28);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `compute_zoom_offset` - Pyramid Depth of an Image
//!
//! ```
//! use get_zoom::{ImageDimensions, compute_zoom_offset};
//!
//! assert_eq!(compute_zoom_offset(512, 256, 10), 8);
//! assert_eq!(ImageDimensions::new(512, 256).zoom_offset(10), 8);
//! ```
//!
//! ### 3. `RasterInfo` - Reading a GeoTIFF
//!
//! ```no_run
//! use get_zoom::{RasterInfo, ZoomReport};
//!
//! let info = RasterInfo::open("dem.tif").unwrap();
//! let report = ZoomReport::new("dem.tif", &info).unwrap();
//! println!("{}", report.to_json().unwrap());
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use api::{RasterInfo, Units, ZoomReport, get_resolution};
pub use crate::core::{
    EARTH_RADIUS, GroundResolution, ImageDimensions, MAX_ZOOM_LEVEL, METERS_PER_DEGREE,
    Resolution, TILE_SIZE, WEB_MERCATOR_CIRCUMFERENCE, ZoomLevel, compute_zoom,
    compute_zoom_offset, pixel_size_at, raw_zoom,
};
pub use util::ZoomError;
