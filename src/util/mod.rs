pub mod error;

pub use error::ZoomError;
