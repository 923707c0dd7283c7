//! In-memory LRU image cache implementation.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::domain::entities::{CachedImage, ImageKey};

/// Default maximum number of images to cache in memory.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Bounded in-memory LRU cache for decoded images.
///
/// Every operation runs as one critical section on a single mutex, so
/// `get`, `put` and `clear` never interleave. Callers must not hold the
/// cache across network I/O; nothing here blocks on anything but the lock.
pub struct MemoryImageCache {
    cache: Mutex<LruCache<ImageKey, CachedImage>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryImageCache {
    /// Creates a new cache with the specified capacity.
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(cap)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Creates a new cache with the default capacity.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Returns the image for `key` and marks it most recently used.
    pub fn get(&self, key: &ImageKey) -> Option<CachedImage> {
        let mut cache = self.cache.lock();
        if let Some(img) = cache.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "Memory cache hit");
            Some(img.clone())
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "Memory cache miss");
            None
        }
    }

    /// Stores `image` under `key` as the most recently used entry.
    ///
    /// Replacing an existing key never evicts. Inserting a new key into a
    /// full cache evicts the least recently used entry first.
    pub fn put(&self, key: ImageKey, image: CachedImage) {
        let mut cache = self.cache.lock();
        debug!(key = %key, "Storing image in memory cache");
        if let Some((old_key, _)) = cache.push(key.clone(), image) {
            if old_key != key {
                debug!(key = %old_key, "Evicted least recently used image");
            }
        }
    }

    /// Removes every entry. Idempotent.
    pub fn clear(&self) {
        let mut cache = self.cache.lock();
        let count = cache.len();
        cache.clear();
        debug!(count, "Cleared memory image cache");
    }

    /// Peeks at an image without promoting it in the LRU.
    #[must_use]
    pub fn peek(&self, key: &ImageKey) -> Option<CachedImage> {
        self.cache.lock().peek(key).cloned()
    }

    /// Returns true if `key` is cached. Does not promote.
    #[must_use]
    pub fn contains(&self, key: &ImageKey) -> bool {
        self.cache.lock().contains(key)
    }

    /// Returns cached keys, most recently used first.
    #[must_use]
    pub fn keys(&self) -> Vec<ImageKey> {
        self.cache.lock().iter().map(|(k, _)| k.clone()).collect()
    }

    /// Returns the current number of cached images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns true if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.lock().cap().get()
    }

    /// Returns cache statistics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
            size: self.len(),
        }
    }
}

impl Default for MemoryImageCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl std::fmt::Debug for MemoryImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.cache.lock();
        f.debug_struct("MemoryImageCache")
            .field("len", &cache.len())
            .field("capacity", &cache.cap())
            .finish_non_exhaustive()
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
    /// Current number of cached images.
    pub size: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} images, {:.1}% hit rate ({} hits, {} misses)",
            self.size, self.hit_rate, self.hits, self.misses
        )
    }
}
