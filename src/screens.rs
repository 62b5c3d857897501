//! Per-screen state and the fail-soft fetch policy
//!
//! Each screen owns an immutable snapshot of everything it displays: genre
//! table, normalized cards, current display page. Refreshing a screen
//! re-runs its fetches from scratch; a failed fetch is logged and the screen
//! keeps its previous content (empty before the first success). No retry
//! loops, no error propagation past this layer.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use tracing::warn;

use crate::api::TmdbClient;
use crate::catalog::GenreCatalog;
use crate::models::{DetailBundle, GenreTable, MediaCard, MediaKind, RawMediaRecord, Review};
use crate::normalize::{normalize, PosterProfile};
use crate::pagination::{page_numbers, paginate, PageState, PAGE_SIZE};
use crate::search;

/// Reviews longer than this render a truncated preview until expanded
pub const REVIEW_PREVIEW_LEN: usize = 1000;

// =============================================================================
// Home Screen
// =============================================================================

/// Home screen: shuffled discover rows for movies and TV, plus the search box.
#[derive(Debug, Default)]
pub struct HomeState {
    pub movies: Vec<MediaCard>,
    pub tv_shows: Vec<MediaCard>,
    pub search_query: String,
    catalog: GenreCatalog,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Genre table snapshot for this screen (passed along on navigation)
    pub fn genres(&self) -> &GenreTable {
        self.catalog.table()
    }

    /// Fetch just the genre catalog, warn-and-continue on failure. The
    /// search path needs the table loaded without the discover rows.
    pub async fn load_genres(&mut self, client: &TmdbClient) {
        if let Err(e) = self.catalog.load(client).await {
            warn!(error = %e, "genre catalog load failed");
        }
    }

    /// Fetch genres and both discover rows. Each fetch fails independently;
    /// a failure leaves that row as it was.
    pub async fn refresh(&mut self, client: &TmdbClient) {
        self.load_genres(client).await;

        match client.discover_movies().await {
            Ok(records) => self.movies = shuffle_and_normalize(records, self.catalog.table()),
            Err(e) => warn!(error = %e, "discover movies failed"),
        }

        match client.discover_tv().await {
            Ok(records) => self.tv_shows = shuffle_and_normalize(records, self.catalog.table()),
            Err(e) => warn!(error = %e, "discover tv failed"),
        }
    }

    /// Run the current search query against the multi-search endpoint.
    ///
    /// The resulting [`SearchState`] is the navigation artifact handed to the
    /// results screen. A fetch failure degrades to an empty result set.
    pub async fn run_search(&self, client: &TmdbClient) -> SearchState {
        let results = match search::search(client, &self.search_query, self.catalog.table()).await
        {
            Ok(results) => results,
            Err(e) => {
                warn!(query = %self.search_query, error = %e, "search failed");
                Vec::new()
            }
        };
        SearchState::new(results)
    }
}

/// Discover rows are shuffled before display (the home screen's "random
/// picks" behavior), then normalized with the listing profile.
fn shuffle_and_normalize(mut records: Vec<RawMediaRecord>, genres: &GenreTable) -> Vec<MediaCard> {
    records.shuffle(&mut rand::rng());
    records
        .into_iter()
        .map(|r| normalize(r, genres, PosterProfile::Listing))
        .collect()
}

// =============================================================================
// Listing Screens (popular movies / popular TV)
// =============================================================================

/// A popular-movies or popular-TV listing screen.
///
/// Carries both pagination schemes of the source: `upstream_page` is the
/// API's own `page` parameter sent on fetch, while `page` slices the
/// in-memory list into [`PAGE_SIZE`]-card display pages. The two are
/// deliberately not unified.
#[derive(Debug)]
pub struct ListingState {
    kind: MediaKind,
    pub upstream_page: u32,
    pub items: Vec<MediaCard>,
    pub page: PageState,
    catalog: GenreCatalog,
}

impl ListingState {
    pub fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            upstream_page: 1,
            items: Vec::new(),
            page: PageState::new(),
            catalog: GenreCatalog::new(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn genres(&self) -> &GenreTable {
        self.catalog.table()
    }

    /// Fetch the upstream page, sort it alphabetically by title, and reset
    /// the display page. On failure the previous list stays in place.
    pub async fn refresh(&mut self, client: &TmdbClient) {
        if let Err(e) = self.catalog.load(client).await {
            warn!(error = %e, "genre catalog load failed");
        }

        let fetched = match self.kind {
            MediaKind::Movie => client.popular_movies(self.upstream_page).await,
            MediaKind::Tv => client.popular_tv(self.upstream_page).await,
        };

        match fetched {
            Ok(records) => {
                let mut items: Vec<MediaCard> = records
                    .into_iter()
                    .map(|r| normalize(r, self.catalog.table(), PosterProfile::Listing))
                    .collect();
                items.sort_by_key(|c| c.title.to_lowercase());
                self.items = items;
                self.page.reset();
            }
            Err(e) => warn!(kind = %self.kind, page = self.upstream_page, error = %e,
                "popular listing fetch failed"),
        }
    }

    /// Cards on the current display page
    pub fn visible(&self) -> &[MediaCard] {
        paginate(&self.items, PAGE_SIZE, self.page.current())
    }

    /// Page-button labels for the full in-memory list
    pub fn page_buttons(&self) -> Vec<usize> {
        page_numbers(self.items.len(), PAGE_SIZE).collect()
    }

    pub fn change_page(&mut self, page: usize) {
        self.page.change_page(page);
    }
}

// =============================================================================
// Search Results Screen
// =============================================================================

/// Search results screen state, created by [`HomeState::run_search`]
#[derive(Debug, Default)]
pub struct SearchState {
    pub results: Vec<MediaCard>,
    pub page: PageState,
}

impl SearchState {
    pub fn new(results: Vec<MediaCard>) -> Self {
        Self {
            results,
            page: PageState::new(),
        }
    }

    pub fn visible(&self) -> &[MediaCard] {
        paginate(&self.results, PAGE_SIZE, self.page.current())
    }

    pub fn page_buttons(&self) -> Vec<usize> {
        page_numbers(self.results.len(), PAGE_SIZE).collect()
    }

    pub fn change_page(&mut self, page: usize) {
        self.page.change_page(page);
    }
}

// =============================================================================
// Detail Screen
// =============================================================================

/// Detail screen state: the cast/crew/review bundle plus per-review
/// expansion toggles. Discarded on navigation away.
#[derive(Debug, Default)]
pub struct DetailState {
    pub bundle: DetailBundle,
    expanded: HashSet<String>,
}

impl DetailState {
    /// Load the detail bundle for one item. Never fails: each sub-fetch
    /// degrades independently (see [`DetailBundle::load`]).
    pub async fn load(client: &TmdbClient, id: u64, kind: MediaKind) -> Self {
        Self {
            bundle: DetailBundle::load(client, id, kind).await,
            expanded: HashSet::new(),
        }
    }

    pub fn is_expanded(&self, review_id: &str) -> bool {
        self.expanded.contains(review_id)
    }

    /// Flip the read-more/read-less state for one review
    pub fn toggle_expanded(&mut self, review_id: &str) {
        if !self.expanded.remove(review_id) {
            self.expanded.insert(review_id.to_string());
        }
    }

    /// Review text as the screen shows it: the full content when short or
    /// expanded, otherwise the first [`REVIEW_PREVIEW_LEN`] characters
    /// followed by "...".
    pub fn review_text(&self, review: &Review) -> String {
        let char_count = review.content.chars().count();
        if char_count <= REVIEW_PREVIEW_LEN || self.is_expanded(&review.id) {
            return review.content.clone();
        }
        let preview: String = review.content.chars().take(REVIEW_PREVIEW_LEN).collect();
        format!("{}...", preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: &str, content: String) -> Review {
        Review {
            id: id.to_string(),
            author: "someone".to_string(),
            rating: Some(8.0),
            content,
        }
    }

    fn card(title: &str) -> MediaCard {
        MediaCard {
            id: 1,
            kind: Some(MediaKind::Movie),
            title: title.to_string(),
            overview: String::new(),
            poster_url: None,
            genre_names: Vec::new(),
            vote_average: 0.0,
            stars: String::new(),
        }
    }

    #[test]
    fn test_short_review_is_never_truncated() {
        let state = DetailState::default();
        let r = review("r1", "short review".to_string());
        assert_eq!(state.review_text(&r), "short review");
    }

    #[test]
    fn test_long_review_previews_until_expanded() {
        let mut state = DetailState::default();
        let r = review("r1", "x".repeat(REVIEW_PREVIEW_LEN + 50));

        let preview = state.review_text(&r);
        assert_eq!(preview.chars().count(), REVIEW_PREVIEW_LEN + 3);
        assert!(preview.ends_with("..."));

        state.toggle_expanded("r1");
        assert_eq!(state.review_text(&r), r.content);

        state.toggle_expanded("r1");
        assert!(state.review_text(&r).ends_with("..."));
    }

    #[test]
    fn test_expansion_is_keyed_by_review_id() {
        let mut state = DetailState::default();
        state.toggle_expanded("r1");
        assert!(state.is_expanded("r1"));
        assert!(!state.is_expanded("r2"));
    }

    #[test]
    fn test_search_state_pages_over_results() {
        let results: Vec<MediaCard> = (0..25).map(|i| card(&format!("t{:02}", i))).collect();
        let mut state = SearchState::new(results);

        assert_eq!(state.page_buttons(), vec![1, 2, 3]);
        assert_eq!(state.visible().len(), 10);

        state.change_page(3);
        assert_eq!(state.visible().len(), 5);
    }
}
