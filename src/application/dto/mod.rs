//! Data transfer objects for the application layer.

mod movie_dto;

pub use movie_dto::{MovieCard, PosterState, SearchResult};
