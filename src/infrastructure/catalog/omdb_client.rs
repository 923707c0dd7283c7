//! OMDb movie catalog client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::SearchResponseDto;
use crate::domain::entities::SearchPage;
use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogPort;
use crate::infrastructure::http::reqwest_transport::classify;

/// Default OMDb endpoint.
pub const OMDB_API_BASE: &str = "https://www.omdbapi.com/";

// OMDb reports an empty result set as an error.
const NOT_FOUND_MESSAGE: &str = "Movie not found!";

/// Catalog client for the OMDb search API.
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Creates new client against the default endpoint.
    ///
    /// # Errors
    /// Returns error if the API key is empty or the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CatalogError> {
        Self::with_base_url(OMDB_API_BASE, api_key)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if the API key is empty or the HTTP client cannot be created.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CatalogError::not_configured("missing OMDb API key"));
        }

        let client = Client::builder().build().map_err(|e| {
            CatalogError::not_configured(format!("failed to create HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    fn into_page(dto: SearchResponseDto, page: u32) -> Result<SearchPage, CatalogError> {
        if !dto.response.eq_ignore_ascii_case("true") {
            return match dto.error.as_deref() {
                Some(NOT_FOUND_MESSAGE) | None => Ok(SearchPage {
                    movies: Vec::new(),
                    total_results: 0,
                    page,
                }),
                Some(message) => Err(CatalogError::api(message)),
            };
        }

        let total_results = dto
            .total_results
            .as_deref()
            .map(str::parse::<u32>)
            .transpose()
            .map_err(|e| CatalogError::parse(format!("invalid totalResults: {e}")))?
            .unwrap_or(0);

        let movies = dto
            .search
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(SearchPage {
            movies,
            total_results,
            page,
        })
    }
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogPort for OmdbClient {
    async fn search_movies(&self, query: &str, page: u32) -> Result<SearchPage, CatalogError> {
        debug!(query, page, "Searching catalog");

        let page_param = page.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", query),
                ("page", page_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach catalog");
                CatalogError::Transport(classify(&e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::BadStatus {
                code: status.as_u16(),
            });
        }

        let dto: SearchResponseDto = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse catalog response");
            CatalogError::parse(e.to_string())
        })?;

        let result = Self::into_page(dto, page)?;
        debug!(
            count = result.movies.len(),
            total = result.total_results,
            "Catalog search complete"
        );
        Ok(result)
    }
}
