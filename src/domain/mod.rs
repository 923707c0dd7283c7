//! Domain layer with core entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{CachedImage, ImageKey, Movie, SearchPage};
pub use errors::{CatalogError, ImageError, TransportError};
pub use ports::{CatalogPort, HttpResponse, HttpTransport, ImageLoaderPort};
