//! API clients for external services
//!
//! - TMDB: movie/TV metadata, genre lists, multi-search, credits and reviews

pub mod tmdb;

pub use tmdb::{FetchError, TmdbClient};
