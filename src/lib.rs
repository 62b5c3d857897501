//! reelfeed - terminal client for browsing movies and TV shows
//!
//! A small TMDB front end: browse popular and discover listings, search
//! across movies and TV, and view per-item details (cast, directors,
//! reviews, star ratings).
//!
//! # Modules
//!
//! - `models` - Shared data structures (records, cards, genre table, details)
//! - `api` - TMDB HTTP client and the core `FetchError`
//! - `catalog` - Genre-id → name catalog (movie + TV merge)
//! - `normalize` - Raw record → display card derivation
//! - `rating` - Vote average → star glyph string
//! - `search` - Multi-search with filtering and normalization
//! - `pagination` - Client-side paging over fetched lists
//! - `details` - Credits + reviews aggregation
//! - `screens` - Per-screen state and the fail-soft fetch policy
//! - `config` - API key and config file handling
//! - `cli` / `commands` - Command-line surface

pub mod api;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod details;
pub mod models;
pub mod normalize;
pub mod pagination;
pub mod rating;
pub mod screens;
pub mod search;

// Re-export commonly used types
pub use api::{FetchError, TmdbClient};
pub use models::{
    CastMember, CrewMember, DetailBundle, GenreTable, MediaCard, MediaKind, RawMediaRecord, Review,
};
pub use catalog::GenreCatalog;
pub use normalize::{normalize, PosterProfile};
pub use pagination::{paginate, total_pages, PageState, PAGE_SIZE};
pub use rating::render_stars;
pub use screens::{DetailState, HomeState, ListingState, SearchState};
