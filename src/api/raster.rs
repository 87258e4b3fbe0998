use crate::core::constants::METERS_PER_DEGREE;
use crate::core::dimensions::ImageDimensions;
use crate::core::zoom::Resolution;
use crate::util::error::ZoomError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tiff::decoder::Decoder;
use tiff::decoder::ifd::Value;
use tiff::tags::Tag;

/// GeoKey holding the raster model type.
const GT_MODEL_TYPE_GEO_KEY: u16 = 1024;
const MODEL_TYPE_GEOGRAPHIC: u16 = 2;

/// Units the raster's native pixel scale is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Meters,
    Degrees,
}

/// Georeferencing summary of a GeoTIFF, read from its header only.
///
/// # Example
///
/// ```no_run
/// use get_zoom::{RasterInfo, compute_zoom};
///
/// # fn main() -> Result<(), get_zoom::ZoomError> {
/// let info = RasterInfo::open("orthophoto.tif")?;
/// let zoom = compute_zoom(&info.resolution)?;
/// println!("{}x{} at {} m/px -> z{}", info.dimensions.width, info.dimensions.height,
///     info.resolution.meters(), zoom);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterInfo {
    pub dimensions: ImageDimensions,
    /// Horizontal resolution converted to meters per pixel
    pub resolution: Resolution,
    /// Horizontal pixel size as stored in the file
    pub native_scale: f64,
    pub units: Units,
}

impl RasterInfo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ZoomError> {
        let path = path.as_ref();
        log::debug!("reading GeoTIFF header of {}", path.display());

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self, ZoomError> {
        let mut decoder = Decoder::new(reader)?;
        let (width, height) = decoder.dimensions()?;

        let native_scale = pixel_scale(&mut decoder)?;
        let units = if model_type(&mut decoder)? == Some(MODEL_TYPE_GEOGRAPHIC) {
            Units::Degrees
        } else {
            Units::Meters
        };

        let meters = match units {
            Units::Meters => native_scale,
            Units::Degrees => native_scale * METERS_PER_DEGREE,
        };

        log::debug!(
            "{}x{} px, scale {} {:?}/px, {} m/px",
            width,
            height,
            native_scale,
            units,
            meters
        );

        Ok(Self {
            dimensions: ImageDimensions::new(width, height),
            resolution: Resolution::new(meters)?,
            native_scale,
            units,
        })
    }
}

/// Horizontal resolution of the raster at `path`, in meters per pixel.
pub fn get_resolution<P: AsRef<Path>>(path: P) -> Result<Resolution, ZoomError> {
    RasterInfo::open(path).map(|info| info.resolution)
}

fn pixel_scale<R: Read + Seek>(decoder: &mut Decoder<R>) -> Result<f64, ZoomError> {
    if let Some(scale) = decoder
        .find_tag(Tag::ModelPixelScaleTag)?
        .map(Value::into_f64_vec)
        .transpose()?
    {
        return scale.first().copied().ok_or(ZoomError::MissingGeoreference);
    }

    // Row-major 4x4 matrix; the first column holds the pixel x axis in model space.
    let matrix = decoder
        .find_tag(Tag::ModelTransformationTag)?
        .map(Value::into_f64_vec)
        .transpose()?
        .ok_or(ZoomError::MissingGeoreference)?;

    match matrix.as_slice() {
        [m0, _, _, _, m4, ..] => Ok(m0.hypot(*m4)),
        _ => Err(ZoomError::MissingGeoreference),
    }
}

fn model_type<R: Read + Seek>(decoder: &mut Decoder<R>) -> Result<Option<u16>, ZoomError> {
    let Some(directory) = decoder
        .find_tag(Tag::GeoKeyDirectoryTag)?
        .map(Value::into_u16_vec)
        .transpose()?
    else {
        return Ok(None);
    };

    // Header is four shorts, followed by (key, location, count, value) entries.
    Ok(directory
        .get(4..)
        .unwrap_or_default()
        .chunks_exact(4)
        .find(|entry| entry[0] == GT_MODEL_TYPE_GEO_KEY && entry[1] == 0)
        .map(|entry| entry[3]))
}
