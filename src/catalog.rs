//! Genre catalog: fetch + merge of the two genre domains
//!
//! The movie and TV genre lists are separate API resources sharing one id
//! space. The catalog merges them into a single [`GenreTable`] per screen
//! mount.

use crate::api::{FetchError, TmdbClient};
use crate::models::GenreTable;

/// Holds the current merged genre table for a screen's lifetime.
///
/// `load` replaces the table only when both fetches succeed; on failure the
/// previous table (empty before the first success) stays in place and the
/// caller decides whether to retry or proceed stale. No automatic retry.
#[derive(Debug, Default)]
pub struct GenreCatalog {
    table: GenreTable,
}

impl GenreCatalog {
    pub fn new() -> Self {
        Self {
            table: GenreTable::new(),
        }
    }

    /// The current table (possibly stale or empty)
    pub fn table(&self) -> &GenreTable {
        &self.table
    }

    /// Fetch both genre lists concurrently and merge them, movie entries
    /// first, TV entries second — TV overwrites movie on id collision.
    pub async fn load(&mut self, client: &TmdbClient) -> Result<&GenreTable, FetchError> {
        let (movie, tv) = tokio::join!(client.movie_genres(), client.tv_genres());
        let movie = movie?;
        let tv = tv?;

        let mut table = GenreTable::new();
        table.merge(movie);
        table.merge(tv);
        self.table = table;
        Ok(&self.table)
    }
}
