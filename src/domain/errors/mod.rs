//! Domain error types.

mod catalog_error;
mod image_error;

pub use catalog_error::CatalogError;
pub use image_error::{ImageError, TransportError};
