//! Port definition for image loading.

use async_trait::async_trait;

use crate::domain::entities::CachedImage;
use crate::domain::errors::ImageError;

/// Port consumed by UI collaborators that display poster images.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageLoaderPort: Send + Sync {
    /// Loads an image, serving cached copies before touching the network.
    async fn load_image(&self, url: &str) -> Result<CachedImage, ImageError>;

    /// Drops every cached image.
    fn clear_cache(&self);
}
