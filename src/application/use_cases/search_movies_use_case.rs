//! Movie search use case implementation.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::application::dto::{MovieCard, PosterState, SearchResult};
use crate::domain::entities::Movie;
use crate::domain::errors::CatalogError;
use crate::domain::ports::{CatalogPort, ImageLoaderPort};

/// Searches the catalog and resolves posters through the image cache.
#[derive(Clone)]
pub struct SearchMoviesUseCase {
    catalog: Arc<dyn CatalogPort>,
    images: Arc<dyn ImageLoaderPort>,
}

impl SearchMoviesUseCase {
    /// Creates new search use case.
    #[must_use]
    pub const fn new(catalog: Arc<dyn CatalogPort>, images: Arc<dyn ImageLoaderPort>) -> Self {
        Self { catalog, images }
    }

    /// Searches for `query` on the given 1-based page.
    ///
    /// A blank query returns an empty result without calling the catalog.
    /// Poster failures do not fail the search; they are reported per card.
    ///
    /// # Errors
    /// Returns error if the catalog request fails.
    pub async fn execute(&self, query: &str, page: u32) -> Result<SearchResult, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            debug!("Empty query, skipping search");
            return Ok(SearchResult::default());
        }

        let page = page.max(1);
        let result = self.catalog.search_movies(query, page).await?;
        let has_more = result.has_more();
        let cards = self.load_cards(result.movies).await;

        Ok(SearchResult {
            cards,
            total_results: result.total_results,
            page: result.page,
            has_more,
        })
    }

    /// Loads posters for `movies` concurrently, preserving order.
    pub async fn load_cards(&self, movies: Vec<Movie>) -> Vec<MovieCard> {
        let posters = join_all(movies.iter().map(|movie| self.load_poster(movie))).await;
        movies
            .into_iter()
            .zip(posters)
            .map(|(movie, poster)| MovieCard { movie, poster })
            .collect()
    }

    async fn load_poster(&self, movie: &Movie) -> PosterState {
        let Some(url) = movie.poster_url() else {
            return PosterState::Missing;
        };

        match self.images.load_image(url).await {
            Ok(img) => PosterState::Loaded(img),
            Err(e) => {
                warn!(id = movie.id(), error = %e, "Failed to load poster");
                PosterState::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SearchPage;
    use crate::domain::errors::{ImageError, TransportError};
    use crate::domain::ports::mocks::{MockCatalogPort, MockImageLoaderPort};

    fn movies() -> Vec<Movie> {
        vec![
            Movie::new("tt1", "Batman", "1989", "movie", "https://img.example.com/1.jpg"),
            Movie::new("tt2", "Batman Returns", "1992", "movie", "N/A"),
            Movie::new("tt3", "Batman Forever", "1995", "movie", "https://img.example.com/3.jpg"),
        ]
    }

    #[tokio::test]
    async fn test_search_loads_posters() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_search_movies()
            .withf(|query, page| query == "batman" && *page == 1)
            .times(1)
            .returning(|_, page| {
                Ok(SearchPage {
                    movies: movies(),
                    total_results: 31,
                    page,
                })
            });

        let mut images = MockImageLoaderPort::new();
        images.expect_load_image().times(2).returning(|url| {
            if url.ends_with("1.jpg") {
                Ok(Arc::new(image::DynamicImage::new_rgb8(2, 3)))
            } else {
                Err(ImageError::bad_status(500))
            }
        });

        let use_case = SearchMoviesUseCase::new(Arc::new(catalog), Arc::new(images));
        let result = use_case.execute("  batman ", 1).await.unwrap();

        assert_eq!(result.total_results, 31);
        assert!(result.has_more);
        assert_eq!(result.cards.len(), 3);
        assert_eq!(result.cards[0].poster.image().map(|i| i.width()), Some(2));
        assert!(matches!(result.cards[1].poster, PosterState::Missing));
        assert!(result.cards[2].poster.is_failed());
    }

    #[tokio::test]
    async fn test_blank_query_skips_catalog() {
        let mut catalog = MockCatalogPort::new();
        catalog.expect_search_movies().times(0);
        let images = MockImageLoaderPort::new();

        let use_case = SearchMoviesUseCase::new(Arc::new(catalog), Arc::new(images));
        let result = use_case.execute("   ", 1).await.unwrap();

        assert!(result.cards.is_empty());
        assert!(!result.has_more);
    }

    #[tokio::test]
    async fn test_catalog_error_propagates() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_search_movies()
            .returning(|_, _| Err(CatalogError::Transport(TransportError::Timeout)));
        let mut images = MockImageLoaderPort::new();
        images.expect_load_image().times(0);

        let use_case = SearchMoviesUseCase::new(Arc::new(catalog), Arc::new(images));
        let err = use_case.execute("batman", 2).await.unwrap_err();

        assert_eq!(err, CatalogError::Transport(TransportError::Timeout));
    }

    #[tokio::test]
    async fn test_page_zero_is_first_page() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_search_movies()
            .withf(|_, page| *page == 1)
            .times(1)
            .returning(|_, page| {
                Ok(SearchPage {
                    movies: Vec::new(),
                    total_results: 0,
                    page,
                })
            });
        let images = MockImageLoaderPort::new();

        let use_case = SearchMoviesUseCase::new(Arc::new(catalog), Arc::new(images));
        let result = use_case.execute("batman", 0).await.unwrap();

        assert_eq!(result.page, 1);
        assert!(!result.has_more);
    }
}
