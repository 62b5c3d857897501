//! Data structures and types for reelfeed
//!
//! Contains all shared models used across the application organized by domain:
//! - **Media**: raw API records and normalized display cards
//! - **Genres**: the merged genre-id lookup table
//! - **Details**: per-item cast/crew/review aggregates

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Media Models
// =============================================================================

/// Media kind discriminator (movie vs. TV show)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// URL path segment for this kind (`movie` or `tv`)
    pub fn as_path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// Parse the `media_type` tag carried by multi-search results.
    /// Returns `None` for `person` and anything else we don't render.
    pub fn from_media_type(tag: &str) -> Option<Self> {
        match tag {
            "movie" => Some(MediaKind::Movie),
            "tv" => Some(MediaKind::Tv),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Tv => write!(f, "TV Show"),
        }
    }
}

/// One media item as the API returned it, validated at the client boundary.
///
/// Listing endpoints know their kind from the URL; multi-search items carry a
/// `media_type` tag instead, and items we can't classify keep `kind: None`.
/// `genre_ids` is absent on some search results (notably `person` entries).
#[derive(Debug, Clone, PartialEq)]
pub struct RawMediaRecord {
    pub id: u64,
    pub kind: Option<MediaKind>,
    /// Movies use `title`
    pub title: Option<String>,
    /// TV shows use `name`
    pub name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub genre_ids: Option<Vec<u64>>,
    pub vote_average: f64,
}

/// Normalized, presentation-ready view of a media item.
///
/// Derived from exactly one [`RawMediaRecord`] plus the [`GenreTable`]
/// snapshot at normalization time; never mutated afterwards. A genre table
/// update means re-normalizing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaCard {
    pub id: u64,
    /// Detail-screen routing tag; `None` for listing items fetched from a
    /// kind-specific endpoint the caller already knows about.
    pub kind: Option<MediaKind>,
    pub title: String,
    pub overview: String,
    /// Fully qualified poster URL; `None` is the "no poster" sentinel the
    /// presentation layer maps to a placeholder image.
    pub poster_url: Option<String>,
    /// Resolved genre names, positionally aligned with the record's genre
    /// ids. An id missing from the table stays in place as `None`.
    pub genre_names: Vec<Option<String>>,
    pub vote_average: f64,
    /// Pre-rendered star glyph string for `vote_average`
    pub stars: String,
}

impl MediaCard {
    /// Joined genre line as the original UI rendered it.
    ///
    /// Unknown ids produce an empty segment that is still included
    /// positionally ("Action, , Drama"). That quirk is part of the observed
    /// behavior and is deliberately kept.
    pub fn genre_line(&self) -> String {
        self.genre_names
            .iter()
            .map(|g| g.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for MediaCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.title, self.stars, self.genre_line())
    }
}

// =============================================================================
// Genre Table
// =============================================================================

/// Merged genre-id → display-name lookup built from the movie and TV genre
/// lists. Immutable for the lifetime of a screen; rebuilt only by re-fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenreTable(HashMap<u64, String>);

impl GenreTable {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Merge a batch of entries into the table. Later entries overwrite
    /// earlier ones on id collision (TV overwrites movie in catalog order).
    pub fn merge(&mut self, entries: impl IntoIterator<Item = (u64, String)>) {
        self.0.extend(entries);
    }

    pub fn get(&self, id: u64) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    /// Map each id through the table, keeping misses in place as `None`.
    pub fn resolve(&self, ids: &[u64]) -> Vec<Option<String>> {
        ids.iter().map(|id| self.0.get(id).cloned()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u64, String)> for GenreTable {
    fn from_iter<I: IntoIterator<Item = (u64, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// =============================================================================
// Detail Models
// =============================================================================

/// Cast credit for one media item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
}

/// Crew credit for one media item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: String,
}

/// User review for one media item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    /// The reviewer's own numeric rating; not every review carries one
    pub rating: Option<f64>,
    pub content: String,
}

/// Aggregated cast/crew/review data for a single movie or TV show.
///
/// Cast is truncated to the first 5 entries in API order; directors are every
/// crew entry whose job is exactly "Director", API order; reviews are
/// unfiltered and unsorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailBundle {
    pub cast: Vec<CastMember>,
    pub directors: Vec<CrewMember>,
    pub reviews: Vec<Review>,
}

impl DetailBundle {
    /// Comma-joined cast names, as the detail screen renders them
    pub fn cast_line(&self) -> String {
        self.cast
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Comma-joined director names
    pub fn director_line(&self) -> String {
        self.directors
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_media_type() {
        assert_eq!(MediaKind::from_media_type("movie"), Some(MediaKind::Movie));
        assert_eq!(MediaKind::from_media_type("tv"), Some(MediaKind::Tv));
        assert_eq!(MediaKind::from_media_type("person"), None);
        assert_eq!(MediaKind::from_media_type(""), None);
    }

    #[test]
    fn test_genre_table_merge_overwrites() {
        let mut table = GenreTable::new();
        table.merge([(1, "Action".to_string())]);
        table.merge([(1, "Drama".to_string()), (2, "Comedy".to_string())]);

        assert_eq!(table.get(1), Some("Drama"));
        assert_eq!(table.get(2), Some("Comedy"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_genre_table_resolve_keeps_misses_in_place() {
        let table: GenreTable = [(28, "Action".to_string())].into_iter().collect();
        let resolved = table.resolve(&[28, 99, 28]);
        assert_eq!(
            resolved,
            vec![Some("Action".to_string()), None, Some("Action".to_string())]
        );
    }

    #[test]
    fn test_genre_line_preserves_empty_segments() {
        let card = MediaCard {
            id: 1,
            kind: Some(MediaKind::Movie),
            title: "Test".to_string(),
            overview: String::new(),
            poster_url: None,
            genre_names: vec![Some("Action".to_string()), None, Some("Drama".to_string())],
            vote_average: 7.0,
            stars: String::new(),
        };
        assert_eq!(card.genre_line(), "Action, , Drama");
    }
}
