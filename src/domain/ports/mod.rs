mod catalog_port;
mod http_transport_port;
mod image_loader_port;

pub use catalog_port::CatalogPort;
pub use http_transport_port::{HttpResponse, HttpTransport};
pub use image_loader_port::ImageLoaderPort;
