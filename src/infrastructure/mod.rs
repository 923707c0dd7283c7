//! Infrastructure layer with external service adapters.

/// Movie catalog client.
pub mod catalog;
/// Application configuration.
pub mod config;
/// HTTP transport adapters.
pub mod http;
/// Image handling (caching, loading, memory pressure).
pub mod image;

pub use catalog::OmdbClient;
pub use config::{AppConfig, CliArgs, ConfigLoader, LogLevel};
pub use http::ReqwestTransport;
pub use self::image::{
    CacheStats, FetchDecodePipeline, ImageCacheManager, MemoryImageCache, MemoryPressureNotifier,
    MemoryPressureSubscription,
};
