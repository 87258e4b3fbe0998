use crate::core::constants::{MAX_ZOOM_LEVEL, TILE_SIZE, WEB_MERCATOR_CIRCUMFERENCE};
use crate::util::error::ZoomError;
use serde::Serialize;
use std::fmt;

/// Anything that can report a ground resolution in meters per pixel.
pub trait GroundResolution {
    fn meters_per_pixel(&self) -> f64;
}

impl GroundResolution for f64 {
    fn meters_per_pixel(&self) -> f64 { *self }
}

impl GroundResolution for Resolution {
    fn meters_per_pixel(&self) -> f64 { self.0 }
}

/// Ground distance in meters covered by one pixel. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Resolution(f64);

impl Resolution {
    pub fn new(meters_per_pixel: f64) -> Result<Self, ZoomError> {
        validate(meters_per_pixel).map(Self)
    }

    pub fn meters(&self) -> f64 {
        self.0
    }
}

/// A Web Mercator tile pyramid level in `0..=MAX_ZOOM_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate(meters_per_pixel: f64) -> Result<f64, ZoomError> {
    if !meters_per_pixel.is_finite() || meters_per_pixel <= 0.0 {
        return Err(ZoomError::InvalidResolution(meters_per_pixel));
    }
    Ok(meters_per_pixel)
}

/// Ground size in meters of one tile pixel at the given zoom level.
pub fn pixel_size_at(zoom: u8) -> f64 {
    WEB_MERCATOR_CIRCUMFERENCE / (TILE_SIZE as f64 * 2f64.powi(zoom as i32))
}

/// Unclamped zoom level: `ceil(log2(circumference / (resolution * 256)))`.
///
/// Negative for resolutions coarser than the zoom 0 pixel size.
pub fn raw_zoom<R: GroundResolution>(resolution: &R) -> Result<i32, ZoomError> {
    let meters = validate(resolution.meters_per_pixel())?;
    let ratio = WEB_MERCATOR_CIRCUMFERENCE / (meters * TILE_SIZE as f64);

    // Extreme resolutions overflow or underflow the ratio; log2 of each side stays finite.
    let zoom = if ratio.is_normal() {
        ratio.log2()
    } else {
        (WEB_MERCATOR_CIRCUMFERENCE / TILE_SIZE as f64).log2() - meters.log2()
    };

    Ok(zoom.ceil() as i32)
}

/// Smallest zoom level whose tile pixels are no larger than `resolution`,
/// clamped to `0..=MAX_ZOOM_LEVEL`.
///
/// # Example
///
/// ```
/// use get_zoom::compute_zoom;
///
/// # fn main() -> Result<(), get_zoom::ZoomError> {
/// let zoom = compute_zoom(&0.2986)?;
/// assert_eq!(zoom.value(), 19);
/// # Ok(())
/// # }
/// ```
pub fn compute_zoom<R: GroundResolution>(resolution: &R) -> Result<ZoomLevel, ZoomError> {
    let raw = raw_zoom(resolution)?;
    let zoom = raw.clamp(0, MAX_ZOOM_LEVEL as i32) as u8;

    log::debug!(
        "resolution {} m/px -> raw zoom {}, zoom {}",
        resolution.meters_per_pixel(),
        raw,
        zoom
    );

    Ok(ZoomLevel(zoom))
}

/// Counts the levels in `1..approximate_zoom` at which an image of
/// `width` x `height` pixels still spans at least one pixel in both
/// dimensions after being halved `level` times.
pub fn compute_zoom_offset(width: u32, height: u32, approximate_zoom: u8) -> u8 {
    let halves_to_pixel = |dim: u32, level: u8| {
        u64::from(dim)
            .checked_shr(u32::from(level))
            .is_some_and(|scaled| scaled >= 1)
    };

    (1..approximate_zoom)
        .filter(|&level| halves_to_pixel(width, level) && halves_to_pixel(height, level))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_zero_pixel_size() -> Result<(), ZoomError> {
        let resolution = WEB_MERCATOR_CIRCUMFERENCE / 256.0;
        assert!((resolution - 156543.03392804097).abs() < 1e-6);
        assert_eq!(compute_zoom(&resolution)?.value(), 0);
        Ok(())
    }

    #[test]
    fn test_zoom_19_imagery() -> Result<(), ZoomError> {
        assert_eq!(compute_zoom(&0.2986)?.value(), 19);
        Ok(())
    }

    #[test]
    fn test_exact_pixel_sizes_map_to_their_level() -> Result<(), ZoomError> {
        for zoom in 0..=MAX_ZOOM_LEVEL {
            assert_eq!(compute_zoom(&pixel_size_at(zoom))?.value(), zoom);
        }
        Ok(())
    }

    #[test]
    fn test_slightly_coarser_stays_on_level() -> Result<(), ZoomError> {
        let resolution = pixel_size_at(12) * 1.01;
        assert_eq!(compute_zoom(&resolution)?.value(), 12);

        let resolution = pixel_size_at(12) * 0.99;
        assert_eq!(compute_zoom(&resolution)?.value(), 13);
        Ok(())
    }

    #[test]
    fn test_fine_resolution_clamped() -> Result<(), ZoomError> {
        assert_eq!(compute_zoom(&1e-6)?.value(), MAX_ZOOM_LEVEL);
        assert!(raw_zoom(&1e-6)? > MAX_ZOOM_LEVEL as i32);
        Ok(())
    }

    #[test]
    fn test_coarse_resolution_never_negative() -> Result<(), ZoomError> {
        let resolution = pixel_size_at(0) * 4.0;
        assert_eq!(raw_zoom(&resolution)?, -2);
        assert_eq!(compute_zoom(&resolution)?.value(), 0);
        Ok(())
    }

    #[test]
    fn test_raw_zoom_extreme_resolutions() -> Result<(), ZoomError> {
        // log2(156543.03) - log2(1e308) ~= 17.26 - 1023.15
        let coarse = raw_zoom(&1e308)?;
        assert!((-1007..=-1004).contains(&coarse), "got {}", coarse);
        assert_eq!(compute_zoom(&1e308)?.value(), 0);

        // Smallest subnormal, log2 == -1074
        let fine = raw_zoom(&5e-324)?;
        assert!((1090..=1093).contains(&fine), "got {}", fine);
        assert_eq!(compute_zoom(&5e-324)?.value(), MAX_ZOOM_LEVEL);
        Ok(())
    }

    #[test]
    fn test_monotonically_non_increasing() -> Result<(), ZoomError> {
        let mut previous = u8::MAX;
        let mut resolution = 1e-4;
        while resolution < 1e7 {
            let zoom = compute_zoom(&resolution)?.value();
            assert!(zoom <= previous, "zoom increased at {}", resolution);
            previous = zoom;
            resolution *= 1.37;
        }
        Ok(())
    }

    #[test]
    fn test_invalid_resolution() {
        assert!(matches!(
            compute_zoom(&0.0),
            Err(ZoomError::InvalidResolution(r)) if r == 0.0
        ));
        assert!(matches!(
            compute_zoom(&-1.5),
            Err(ZoomError::InvalidResolution(r)) if r == -1.5
        ));
        assert!(compute_zoom(&f64::NAN).is_err());
        assert!(compute_zoom(&f64::INFINITY).is_err());
        assert!(Resolution::new(0.0).is_err());
    }

    #[test]
    fn test_resolution_newtype() -> Result<(), ZoomError> {
        let resolution = Resolution::new(0.5)?;
        assert_eq!(resolution.meters(), 0.5);
        assert_eq!(compute_zoom(&resolution)?, compute_zoom(&0.5)?);
        Ok(())
    }

    #[test]
    fn test_zoom_offset() {
        // 256 = 2^8: levels 1..=8 keep the short side at one pixel or more
        assert_eq!(compute_zoom_offset(512, 256, 10), 8);
        assert_eq!(compute_zoom_offset(256, 512, 10), 8);
        assert_eq!(compute_zoom_offset(512, 256, 5), 4);
        assert_eq!(compute_zoom_offset(1, 1, 10), 0);
        assert_eq!(compute_zoom_offset(0, 256, 10), 0);
        assert_eq!(compute_zoom_offset(512, 256, 0), 0);
    }

    #[test]
    fn test_zoom_offset_large_levels() {
        assert_eq!(compute_zoom_offset(u32::MAX, u32::MAX, u8::MAX), 31);
    }
}
