//! Integration tests for reelfeed
//!
//! Tests are organized by component:
//! - tmdb_test: TMDB API client tests
//! - catalog_test: genre catalog fetch + merge tests
//! - search_test: multi-search filtering and normalization tests
//! - details_test: credits/reviews aggregation tests
//! - screens_test: screen state flows (home, listings, pagination)

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
