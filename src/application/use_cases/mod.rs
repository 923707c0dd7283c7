//! Use case implementations.

mod search_movies_use_case;

pub use search_movies_use_case::SearchMoviesUseCase;
