//! Search result DTOs.

use crate::domain::entities::{CachedImage, Movie};
use crate::domain::errors::ImageError;

/// Poster state for a search result.
#[derive(Debug, Clone)]
pub enum PosterState {
    /// Poster decoded (or the shared not-found placeholder).
    Loaded(CachedImage),
    /// The catalog has no poster for this title.
    Missing,
    /// Loading failed; the UI shows a broken-image placeholder.
    Failed(ImageError),
}

impl PosterState {
    /// Returns the image if one was loaded.
    #[must_use]
    pub const fn image(&self) -> Option<&CachedImage> {
        match self {
            Self::Loaded(img) => Some(img),
            _ => None,
        }
    }

    /// Returns true if loading failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// A movie paired with its poster.
#[derive(Debug, Clone)]
pub struct MovieCard {
    /// Catalog entry.
    pub movie: Movie,
    /// Poster outcome.
    pub poster: PosterState,
}

/// One page of search results ready for display.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Movies with posters.
    pub cards: Vec<MovieCard>,
    /// Total number of results across all pages.
    pub total_results: u32,
    /// The 1-based page number.
    pub page: u32,
    /// Whether another page can be requested.
    pub has_more: bool,
}
