//! Movie catalog entities.

use serde::{Deserialize, Serialize};

/// Poster value the catalog uses when a title has no artwork.
pub const NO_POSTER: &str = "N/A";

/// A movie returned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    id: String,
    title: String,
    year: String,
    kind: String,
    poster: String,
}

impl Movie {
    /// Creates a new movie.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
        kind: impl Into<String>,
        poster: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            kind: kind.into(),
            poster: poster.into(),
        }
    }

    /// Returns the catalog identifier (IMDb id).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns the catalog type ("movie", "series", "episode").
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the poster URL, or `None` when the catalog has no poster.
    #[must_use]
    pub fn poster_url(&self) -> Option<&str> {
        let poster = self.poster.trim();
        if poster.is_empty() || poster == NO_POSTER {
            None
        } else {
            Some(poster)
        }
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}

/// One page of catalog search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Movies on this page.
    pub movies: Vec<Movie>,
    /// Total number of results across all pages.
    pub total_results: u32,
    /// The 1-based page number.
    pub page: u32,
}

impl SearchPage {
    /// Number of results per catalog page.
    pub const PAGE_SIZE: u32 = 10;

    /// Returns true if a following page exists.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.page.saturating_mul(Self::PAGE_SIZE) < self.total_results
    }
}
