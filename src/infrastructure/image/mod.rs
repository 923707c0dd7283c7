//! Image handling infrastructure.
//!
//! This module provides:
//! - Memory caching with LRU eviction
//! - Fetch and decode of poster images
//! - The cache-aside loading facade
//! - Memory-pressure subscriptions

pub mod manager;
pub mod memory_cache;
pub mod memory_pressure;
pub mod pipeline;
pub mod placeholder;

pub use manager::ImageCacheManager;
pub use memory_cache::{CacheStats, DEFAULT_CACHE_CAPACITY, MemoryImageCache};
pub use memory_pressure::{MemoryPressureNotifier, MemoryPressureSubscription};
pub use pipeline::FetchDecodePipeline;
pub use placeholder::image_not_found;

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Cursor;

    /// Encodes a blank RGB image of the given size as PNG.
    pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::new_rgb8(width, height)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }
}
