//! TMDB (The Movie Database) API client
//!
//! Read-only JSON metadata: listings, genre lists, multi-search, credits,
//! reviews, and the authentication-token connectivity probe.
//! API docs: https://developer.themoviedb.org/docs

use serde::Deserialize;
use thiserror::Error;

use crate::models::{CastMember, CrewMember, MediaKind, RawMediaRecord, Review};

/// The one error kind in the core: network failure, non-success HTTP status,
/// or JSON parse failure. Every caller degrades to an empty/previous value
/// rather than propagating further up; nothing here is fatal.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// TMDB API client.
///
/// One static API key per client, passed as the `api_key` query parameter on
/// every request. No retries, no timeouts beyond the transport's defaults:
/// a failed attempt is terminal and the user re-triggers via refresh.
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://api.themoviedb.org/3")
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Make a GET request with the API key appended to the query string
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T, FetchError> {
        let sep = if endpoint.contains('?') { '&' } else { '?' };
        let url = format!("{}{}{}api_key={}", self.base_url, endpoint, sep, self.api_key);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    // =========================================================================
    // Genre Lists
    // =========================================================================

    /// Movie genre id → name entries, in API order
    pub async fn movie_genres(&self) -> Result<Vec<(u64, String)>, FetchError> {
        let response: GenreListResponse = self.get("/genre/movie/list").await?;
        Ok(response.into_entries())
    }

    /// TV genre id → name entries, in API order
    pub async fn tv_genres(&self) -> Result<Vec<(u64, String)>, FetchError> {
        let response: GenreListResponse = self.get("/genre/tv/list").await?;
        Ok(response.into_entries())
    }

    // =========================================================================
    // Listings
    // =========================================================================

    /// Discover movies (server-chosen ordering, first page)
    pub async fn discover_movies(&self) -> Result<Vec<RawMediaRecord>, FetchError> {
        let response: ListingResponse = self.get("/discover/movie").await?;
        Ok(response.into_records(Some(MediaKind::Movie)))
    }

    /// Discover TV shows (server-chosen ordering, first page)
    pub async fn discover_tv(&self) -> Result<Vec<RawMediaRecord>, FetchError> {
        let response: ListingResponse = self.get("/discover/tv").await?;
        Ok(response.into_records(Some(MediaKind::Tv)))
    }

    /// Popular movies, `page` is 1-based and supplied by the caller
    pub async fn popular_movies(&self, page: u32) -> Result<Vec<RawMediaRecord>, FetchError> {
        let endpoint = format!("/movie/popular?page={}", page);
        let response: ListingResponse = self.get(&endpoint).await?;
        Ok(response.into_records(Some(MediaKind::Movie)))
    }

    /// Popular TV shows, `page` is 1-based and supplied by the caller
    pub async fn popular_tv(&self, page: u32) -> Result<Vec<RawMediaRecord>, FetchError> {
        let endpoint = format!("/tv/popular?page={}", page);
        let response: ListingResponse = self.get(&endpoint).await?;
        Ok(response.into_records(Some(MediaKind::Tv)))
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Combined movie+TV+person multi-search, unfiltered.
    ///
    /// Items are tagged with `media_type` by the API; anything that isn't a
    /// movie or TV show comes back with `kind: None`. Filtering belongs to
    /// the search engine, not the client.
    pub async fn search_multi(&self, query: &str) -> Result<Vec<RawMediaRecord>, FetchError> {
        let endpoint = format!("/search/multi?query={}", urlencoding::encode(query));
        let response: ListingResponse = self.get(&endpoint).await?;
        Ok(response.into_records(None))
    }

    // =========================================================================
    // Details
    // =========================================================================

    /// Full cast and crew lists for one item, in API order
    pub async fn credits(
        &self,
        id: u64,
        kind: MediaKind,
    ) -> Result<(Vec<CastMember>, Vec<CrewMember>), FetchError> {
        let endpoint = format!("/{}/{}/credits", kind.as_path(), id);
        let response: CreditsResponse = self.get(&endpoint).await?;
        Ok(response.into_credits())
    }

    /// Reviews for one item, in API order, unfiltered
    pub async fn reviews(&self, id: u64, kind: MediaKind) -> Result<Vec<Review>, FetchError> {
        let endpoint = format!("/{}/{}/reviews", kind.as_path(), id);
        let response: ReviewsResponse = self.get(&endpoint).await?;
        Ok(response.into_reviews())
    }

    // =========================================================================
    // Connectivity Probe
    // =========================================================================

    /// Hit the authentication-token endpoint as a key/connectivity check.
    /// The token itself is discarded; only the status matters.
    pub async fn verify_key(&self) -> Result<(), FetchError> {
        let url = format!(
            "{}/authentication/token/new?api_key={}",
            self.base_url, self.api_key
        );
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(FetchError::Status(status.as_u16()))
        }
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListingResponse {
    results: Vec<MediaItemRaw>,
}

impl ListingResponse {
    fn into_records(self, kind: Option<MediaKind>) -> Vec<RawMediaRecord> {
        self.results
            .into_iter()
            .map(|r| r.into_record(kind))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct MediaItemRaw {
    id: u64,
    // Present on multi-search results only
    media_type: Option<String>,
    // Movies use "title", TV uses "name"
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    // Absent on some search results ("person" entries in particular)
    genre_ids: Option<Vec<u64>>,
    vote_average: Option<f64>,
}

impl MediaItemRaw {
    /// Validate into the shared record type. `endpoint_kind` is the kind
    /// implied by the URL for kind-specific listings; multi-search passes
    /// `None` and the `media_type` tag decides instead.
    fn into_record(self, endpoint_kind: Option<MediaKind>) -> RawMediaRecord {
        let kind = endpoint_kind.or_else(|| {
            self.media_type
                .as_deref()
                .and_then(MediaKind::from_media_type)
        });

        RawMediaRecord {
            id: self.id,
            kind,
            title: self.title,
            name: self.name,
            overview: self.overview,
            poster_path: self.poster_path,
            genre_ids: self.genre_ids,
            vote_average: self.vote_average.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    genres: Vec<GenreRaw>,
}

impl GenreListResponse {
    fn into_entries(self) -> Vec<(u64, String)> {
        self.genres.into_iter().map(|g| (g.id, g.name)).collect()
    }
}

#[derive(Debug, Deserialize)]
struct GenreRaw {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CreditsResponse {
    #[serde(default)]
    cast: Vec<CastRaw>,
    #[serde(default)]
    crew: Vec<CrewRaw>,
}

impl CreditsResponse {
    fn into_credits(self) -> (Vec<CastMember>, Vec<CrewMember>) {
        let cast = self
            .cast
            .into_iter()
            .map(|c| CastMember {
                id: c.id,
                name: c.name,
                character: c.character,
            })
            .collect();
        let crew = self
            .crew
            .into_iter()
            .map(|c| CrewMember {
                id: c.id,
                name: c.name,
                job: c.job.unwrap_or_default(),
            })
            .collect();
        (cast, crew)
    }
}

#[derive(Debug, Deserialize)]
struct CastRaw {
    id: u64,
    name: String,
    character: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CrewRaw {
    id: u64,
    name: String,
    job: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    results: Vec<ReviewRaw>,
}

impl ReviewsResponse {
    fn into_reviews(self) -> Vec<Review> {
        self.results.into_iter().map(ReviewRaw::into_review).collect()
    }
}

#[derive(Debug, Deserialize)]
struct ReviewRaw {
    id: String,
    #[serde(default)]
    author: String,
    author_details: Option<AuthorDetailsRaw>,
    #[serde(default)]
    content: String,
}

impl ReviewRaw {
    fn into_review(self) -> Review {
        Review {
            id: self.id,
            author: self.author,
            rating: self.author_details.and_then(|d| d.rating),
            content: self.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthorDetailsRaw {
    rating: Option<f64>,
}
