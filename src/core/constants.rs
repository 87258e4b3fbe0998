/// WGS84 equatorial radius in meters
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Web Mercator world circumference in meters (2·π·R)
pub const WEB_MERCATOR_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * EARTH_RADIUS;

/// Width and height of a tile in pixels
pub const TILE_SIZE: u32 = 256;

/// Maximum zoom level
pub const MAX_ZOOM_LEVEL: u8 = 22;

/// Meters spanned by one degree of longitude at the equator
pub const METERS_PER_DEGREE: f64 = WEB_MERCATOR_CIRCUMFERENCE / 360.0;
