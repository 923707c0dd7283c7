//! OMDb API response shapes.

use serde::Deserialize;

use crate::domain::entities::Movie;

#[derive(Debug, Deserialize)]
pub struct MovieDto {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl From<MovieDto> for Movie {
    fn from(dto: MovieDto) -> Self {
        Self::new(dto.imdb_id, dto.title, dto.year, dto.kind, dto.poster)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponseDto {
    #[serde(rename = "Search")]
    pub search: Option<Vec<MovieDto>>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}
