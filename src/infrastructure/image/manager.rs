//! Cache-aside image loading facade.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;
use reqwest::Url;
use tracing::{debug, info, warn};

use crate::domain::entities::{CachedImage, ImageKey};
use crate::domain::errors::ImageError;
use crate::domain::ports::{HttpTransport, ImageLoaderPort};

use super::memory_cache::{CacheStats, DEFAULT_CACHE_CAPACITY, MemoryImageCache};
use super::memory_pressure::{MemoryPressureNotifier, MemoryPressureSubscription};
use super::pipeline::FetchDecodePipeline;

/// Serves images from the memory cache and fetches misses from the network.
///
/// Construct one per process and share it behind an `Arc`. The manager
/// stays subscribed to memory pressure for as long as it lives; each
/// signal flushes the cache.
///
/// Concurrent misses for the same URL are not coalesced: each performs its
/// own fetch and the last successful `put` wins. In-flight fetches cannot be
/// cancelled.
pub struct ImageCacheManager {
    cache: Arc<MemoryImageCache>,
    pipeline: FetchDecodePipeline,
    _memory_pressure: MemoryPressureSubscription,
}

impl ImageCacheManager {
    /// Creates a manager holding at most `capacity` images.
    #[must_use]
    pub fn new(
        capacity: usize,
        transport: Arc<dyn HttpTransport>,
        memory_pressure: &MemoryPressureNotifier,
    ) -> Self {
        let cache = Arc::new(MemoryImageCache::new(capacity));

        let weak = Arc::downgrade(&cache);
        let subscription = memory_pressure.subscribe(move || {
            if let Some(cache) = weak.upgrade() {
                warn!(size = cache.len(), "Memory pressure, flushing image cache");
                cache.clear();
            }
        });

        info!(capacity = cache.capacity(), "Image cache initialized");

        Self {
            cache,
            pipeline: FetchDecodePipeline::new(transport),
            _memory_pressure: subscription,
        }
    }

    /// Creates a manager with [`DEFAULT_CACHE_CAPACITY`].
    #[must_use]
    pub fn with_default_capacity(
        transport: Arc<dyn HttpTransport>,
        memory_pressure: &MemoryPressureNotifier,
    ) -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY, transport, memory_pressure)
    }

    /// Loads an image by URL string.
    ///
    /// # Errors
    /// Returns [`ImageError::InvalidUrl`] if `url` does not parse, otherwise
    /// see [`load_url`](Self::load_url).
    pub async fn load_image(&self, url: &str) -> Result<CachedImage, ImageError> {
        let parsed = Url::parse(url).map_err(|e| ImageError::invalid_url(url, e.to_string()))?;
        self.load_url(&parsed).await
    }

    /// Loads an image, fetching and caching it on a miss.
    ///
    /// Placeholders served for 404 responses are cached like any other image.
    /// Failures are never cached.
    ///
    /// # Errors
    /// Propagates pipeline failures unchanged.
    pub async fn load_url(&self, url: &Url) -> Result<CachedImage, ImageError> {
        let key = ImageKey::from_url(url);

        if let Some(img) = self.cache.get(&key) {
            return Ok(img);
        }

        let img = self.pipeline.fetch(url).await?;
        self.cache.put(key, img.clone());
        debug!(url = %url, "Image cached");
        Ok(img)
    }

    /// Loads several images concurrently, preserving input order.
    pub async fn load_many<I, S>(&self, urls: I) -> Vec<Result<CachedImage, ImageError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: Vec<String> = urls.into_iter().map(|u| u.as_ref().to_owned()).collect();
        join_all(owned.iter().map(|u| self.load_image(u))).await
    }

    /// Drops every cached image. Always succeeds.
    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("Cleared image cache");
    }

    /// Returns the underlying cache store.
    #[must_use]
    pub fn cache(&self) -> &MemoryImageCache {
        &self.cache
    }

    /// Returns memory cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl std::fmt::Debug for ImageCacheManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCacheManager")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ImageLoaderPort for ImageCacheManager {
    async fn load_image(&self, url: &str) -> Result<CachedImage, ImageError> {
        Self::load_image(self, url).await
    }

    fn clear_cache(&self) {
        Self::clear_cache(self);
    }
}
