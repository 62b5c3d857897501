//! Combined movie+TV search
//!
//! One multi-search request, filtered and normalized for display. The
//! `media_type` tag survives on each card as `kind` so the presentation
//! layer can route taps to the right detail screen.

use crate::api::{FetchError, TmdbClient};
use crate::models::{GenreTable, MediaCard};
use crate::normalize::{normalize, PosterProfile};

/// Search movies and TV shows in one query.
///
/// An empty or whitespace-only query short-circuits to an empty result set
/// without issuing a request. Results lacking a `genre_ids` array — `person`
/// entries and malformed items — are dropped before anything else; the
/// survivors are normalized with the listing poster profile.
pub async fn search(
    client: &TmdbClient,
    query: &str,
    genres: &GenreTable,
) -> Result<Vec<MediaCard>, FetchError> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records = client.search_multi(query).await?;
    Ok(records
        .into_iter()
        .filter(|r| r.genre_ids.is_some())
        .map(|r| normalize(r, genres, PosterProfile::Listing))
        .collect())
}
