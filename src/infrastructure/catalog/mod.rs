//! Movie catalog adapters.

mod dto;
pub mod omdb_client;

pub use omdb_client::{OMDB_API_BASE, OmdbClient};
