//! Domain types for poster images.

use std::sync::Arc;

use reqwest::Url;

/// Decoded image as held by the cache.
/// Clones share the same pixel buffer.
pub type CachedImage = Arc<image::DynamicImage>;

/// Cache key for an image: the normalized string form of its URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageKey(String);

impl ImageKey {
    /// Creates a key from any string-like input without normalization.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Creates a key from a parsed URL.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        Self(url.as_str().to_owned())
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ImageKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ImageKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Url> for ImageKey {
    fn from(url: &Url) -> Self {
        Self::from_url(url)
    }
}
