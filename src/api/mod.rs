pub mod raster;
pub mod report;

pub use raster::{RasterInfo, Units, get_resolution};
pub use report::ZoomReport;
