//! Poster cache - bounded LRU image caching for a movie search client.
//!
//! This crate provides a concurrency-safe, capacity-bounded image cache in
//! front of a network fetch-and-decode pipeline, flushed on host memory
//! pressure, plus the catalog search client that feeds it poster URLs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "poster-cache";
