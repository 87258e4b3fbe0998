pub mod constants;
pub mod dimensions;
pub mod zoom;

pub use constants::{
    EARTH_RADIUS, MAX_ZOOM_LEVEL, METERS_PER_DEGREE, TILE_SIZE, WEB_MERCATOR_CIRCUMFERENCE,
};
pub use dimensions::ImageDimensions;
pub use zoom::{
    GroundResolution, Resolution, ZoomLevel, compute_zoom, compute_zoom_offset, pixel_size_at,
    raw_zoom,
};
