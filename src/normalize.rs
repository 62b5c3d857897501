//! Raw record → display card normalization
//!
//! Pure derivation: no network access, no mutation of the genre table. Raw
//! records are consumed here and discarded.

use crate::models::{GenreTable, MediaCard, RawMediaRecord};
use crate::rating::render_stars;

/// Poster image host prefix; a width token and the poster path complete the URL
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Poster width profile, selected by the caller.
///
/// Listings render `w200` thumbnails; the detail screen renders `w500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterProfile {
    Listing,
    Detail,
}

impl PosterProfile {
    fn width_token(self) -> &'static str {
        match self {
            PosterProfile::Listing => "w200",
            PosterProfile::Detail => "w500",
        }
    }
}

/// Derive a [`MediaCard`] from one raw record and a genre table snapshot.
///
/// Title prefers `title` over `name`; a record with neither renders an empty
/// title. An absent poster path maps to the `None` sentinel rather than a
/// malformed URL. Genre ids missing from the table stay in the card as
/// positional `None` entries (see [`MediaCard::genre_line`]).
pub fn normalize(record: RawMediaRecord, genres: &GenreTable, profile: PosterProfile) -> MediaCard {
    let title = record.title.or(record.name).unwrap_or_default();

    let poster_url = record
        .poster_path
        .map(|path| format!("{}/{}{}", IMAGE_BASE_URL, profile.width_token(), path));

    let genre_names = match &record.genre_ids {
        Some(ids) => genres.resolve(ids),
        None => Vec::new(),
    };

    MediaCard {
        id: record.id,
        kind: record.kind,
        title,
        overview: record.overview.unwrap_or_default(),
        poster_url,
        genre_names,
        vote_average: record.vote_average,
        stars: render_stars(record.vote_average),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;

    fn record() -> RawMediaRecord {
        RawMediaRecord {
            id: 550,
            kind: Some(MediaKind::Movie),
            title: Some("Fight Club".to_string()),
            name: None,
            overview: Some("An insomniac office worker".to_string()),
            poster_path: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()),
            genre_ids: Some(vec![18, 53]),
            vote_average: 8.4,
        }
    }

    fn table() -> GenreTable {
        [(18, "Drama".to_string()), (53, "Thriller".to_string())]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_listing_profile_uses_w200() {
        let card = normalize(record(), &table(), PosterProfile::Listing);
        assert_eq!(
            card.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w200/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg")
        );
    }

    #[test]
    fn test_detail_profile_uses_w500() {
        let card = normalize(record(), &table(), PosterProfile::Detail);
        assert_eq!(
            card.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg")
        );
    }

    #[test]
    fn test_missing_poster_yields_sentinel() {
        let mut rec = record();
        rec.poster_path = None;
        let card = normalize(rec, &table(), PosterProfile::Listing);
        assert_eq!(card.poster_url, None);
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let mut rec = record();
        rec.title = None;
        rec.name = Some("Breaking Bad".to_string());
        let card = normalize(rec, &table(), PosterProfile::Listing);
        assert_eq!(card.title, "Breaking Bad");
    }

    #[test]
    fn test_genres_resolved_with_positional_misses() {
        let mut rec = record();
        rec.genre_ids = Some(vec![18, 9999, 53]);
        let card = normalize(rec, &table(), PosterProfile::Listing);
        assert_eq!(card.genre_line(), "Drama, , Thriller");
    }

    #[test]
    fn test_absent_genre_ids_give_empty_list() {
        let mut rec = record();
        rec.genre_ids = None;
        let card = normalize(rec, &table(), PosterProfile::Listing);
        assert!(card.genre_names.is_empty());
        assert_eq!(card.genre_line(), "");
    }

    #[test]
    fn test_rating_passes_through_with_stars() {
        let card = normalize(record(), &table(), PosterProfile::Listing);
        assert_eq!(card.vote_average, 8.4);
        assert_eq!(card.stars, "★★★★☆");
    }
}
