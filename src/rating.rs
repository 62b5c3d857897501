//! Star-glyph rendering for vote averages
//!
//! Maps a 0–10 vote average onto a 5-symbol star string, exactly as the
//! listing and detail screens display it.

/// Star glyphs used by [`render_stars`]
pub const FILLED_STAR: char = '★';
pub const HALF_STAR: char = '½';
pub const EMPTY_STAR: char = '☆';

/// Render a vote average in `[0, 10]` as a 5-symbol star string.
///
/// `filled = floor(rating / 2)`; a half symbol appears when the *truncated*
/// rating is odd, so 7.5 renders the same as 7.0 ("★★★½☆"). Inputs outside
/// `[0, 10]` are out of contract; the empty-star count saturates at zero
/// rather than going negative.
pub fn render_stars(vote_average: f64) -> String {
    let filled = (vote_average / 2.0).floor() as usize;
    let half = (vote_average.trunc() as i64).rem_euclid(2) == 1;
    let empty = 5usize.saturating_sub(filled + usize::from(half));

    let mut stars = String::with_capacity(5 * FILLED_STAR.len_utf8());
    for _ in 0..filled {
        stars.push(FILLED_STAR);
    }
    if half {
        stars.push(HALF_STAR);
    }
    for _ in 0..empty {
        stars.push(EMPTY_STAR);
    }
    stars
}
