//! Movie catalog port definition.

use async_trait::async_trait;

use crate::domain::entities::SearchPage;
use crate::domain::errors::CatalogError;

/// Port for remote movie catalog search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Searches the catalog by title. `page` is 1-based.
    async fn search_movies(&self, query: &str, page: u32) -> Result<SearchPage, CatalogError>;
}
