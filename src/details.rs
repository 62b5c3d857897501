//! Detail bundle aggregation (credits + reviews)

use tracing::warn;

use crate::api::TmdbClient;
use crate::models::{DetailBundle, MediaKind};

/// First-N cast entries shown on the detail screen
pub const CAST_LIMIT: usize = 5;

/// Crew job title that counts as a director (exact, case-sensitive)
const DIRECTOR_JOB: &str = "Director";

impl DetailBundle {
    /// Fetch credits and reviews for one item and aggregate them.
    ///
    /// The two requests run concurrently and fail independently: a credits
    /// failure leaves cast and directors empty, a reviews failure leaves
    /// reviews empty, and neither aborts the other. Cast keeps the first
    /// [`CAST_LIMIT`] entries in API order (no re-sort); directors are every
    /// crew entry whose job is exactly "Director".
    pub async fn load(client: &TmdbClient, id: u64, kind: MediaKind) -> Self {
        let (credits, reviews) = tokio::join!(client.credits(id, kind), client.reviews(id, kind));

        let (cast, directors) = match credits {
            Ok((mut cast, crew)) => {
                cast.truncate(CAST_LIMIT);
                let directors = crew.into_iter().filter(|c| c.job == DIRECTOR_JOB).collect();
                (cast, directors)
            }
            Err(e) => {
                warn!(id, kind = %kind, error = %e, "credits fetch failed");
                (Vec::new(), Vec::new())
            }
        };

        let reviews = reviews.unwrap_or_else(|e| {
            warn!(id, kind = %kind, error = %e, "reviews fetch failed");
            Vec::new()
        });

        Self {
            cast,
            directors,
            reviews,
        }
    }
}
