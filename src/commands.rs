//! CLI command handlers
//!
//! Each handler builds the relevant screen state, drives its fetches, and
//! renders the result as text or JSON. Takes CLI args and Output, returns
//! ExitCode.

use serde_json::json;

use crate::api::TmdbClient;
use crate::cli::{DetailsCmd, ExitCode, ListingCmd, Output, SearchCmd, SetKeyCmd};
use crate::config::Config;
use crate::models::{MediaCard, MediaKind};
use crate::screens::{DetailState, HomeState, ListingState};

/// Build a client from the resolved API key, or fail with a config hint
fn make_client(output: &Output) -> Result<TmdbClient, ExitCode> {
    match Config::load().tmdb_api_key() {
        Some(key) => Ok(TmdbClient::new(key)),
        None => Err(output.error(
            "no TMDB API key configured. Set TMDB_API_KEY or add tmdb_api_key to the config file.",
            ExitCode::InvalidArgs,
        )),
    }
}

fn print_card(card: &MediaCard) {
    println!("  {:<40} {}  {}", card.title, card.stars, card.genre_line());
}

// =============================================================================
// Home Command
// =============================================================================

pub async fn home_cmd(output: &Output) -> ExitCode {
    let client = match make_client(output) {
        Ok(client) => client,
        Err(code) => return code,
    };

    output.info("Fetching discover rows...");

    let mut state = HomeState::new();
    state.refresh(&client).await;

    if output.json {
        let value = json!({
            "movies": state.movies,
            "tv_shows": state.tv_shows,
        });
        if let Err(e) = output.print_json(&value) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
        return ExitCode::Success;
    }

    println!("Most Popular Movies");
    for card in &state.movies {
        print_card(card);
    }
    println!();
    println!("Most Popular TV Shows");
    for card in &state.tv_shows {
        print_card(card);
    }
    ExitCode::Success
}

// =============================================================================
// Listing Commands (movies / tv)
// =============================================================================

pub async fn listing_cmd(kind: MediaKind, cmd: ListingCmd, output: &Output) -> ExitCode {
    let client = match make_client(output) {
        Ok(client) => client,
        Err(code) => return code,
    };

    output.info(format!("Fetching popular {} (page {})...", kind, cmd.page));

    let mut state = ListingState::new(kind);
    state.upstream_page = cmd.page;
    state.refresh(&client).await;
    state.change_page(cmd.show_page);

    if output.json {
        let value = json!({
            "page": state.page.current(),
            "pages": state.page_buttons(),
            "items": state.visible(),
        });
        if let Err(e) = output.print_json(&value) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
        return ExitCode::Success;
    }

    println!("All {}s", kind);
    for card in state.visible() {
        print_card(card);
    }
    let buttons: Vec<String> = state.page_buttons().iter().map(usize::to_string).collect();
    println!("pages: [{}] (showing {})", buttons.join(" "), state.page.current());
    ExitCode::Success
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, output: &Output) -> ExitCode {
    let client = match make_client(output) {
        Ok(client) => client,
        Err(code) => return code,
    };

    output.info(format!("Searching for: {}", cmd.query));

    let mut home = HomeState::new();
    home.search_query = cmd.query;
    // Results carry resolved genre names, so the table must be loaded first
    home.load_genres(&client).await;
    let results = home.run_search(&client).await;

    if output.json {
        if let Err(e) = output.print_json(&results.results) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
        return ExitCode::Success;
    }

    println!("Search Results");
    for card in &results.results {
        let kind = card
            .kind
            .map(|k| k.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!("  {:<40} [{}] {}", card.title, kind, card.stars);
    }
    ExitCode::Success
}

// =============================================================================
// Details Command
// =============================================================================

pub async fn details_cmd(cmd: DetailsCmd, output: &Output) -> ExitCode {
    let client = match make_client(output) {
        Ok(client) => client,
        Err(code) => return code,
    };

    let kind: MediaKind = cmd.media_type.into();
    output.info(format!("Fetching details for {} {}...", kind, cmd.id));

    let state = DetailState::load(&client, cmd.id, kind).await;

    if output.json {
        if let Err(e) = output.print_json(&state.bundle) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
        return ExitCode::Success;
    }

    println!("Cast: {}", state.bundle.cast_line());
    if !state.bundle.directors.is_empty() {
        let label = if state.bundle.directors.len() > 1 {
            "Directors"
        } else {
            "Director"
        };
        println!("{}: {}", label, state.bundle.director_line());
    }
    for review in &state.bundle.reviews {
        let rating = review
            .rating
            .map(|r| format!(" ({})", r))
            .unwrap_or_default();
        println!();
        println!("Review by {}{}:", review.author, rating);
        println!("{}", state.review_text(review));
    }
    ExitCode::Success
}

// =============================================================================
// Check Command
// =============================================================================

pub async fn check_cmd(output: &Output) -> ExitCode {
    let client = match make_client(output) {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client.verify_key().await {
        Ok(()) => {
            if output.json {
                let value = json!({ "ok": true });
                let _ = output.print_json(&value);
            } else {
                println!("API key OK");
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Connectivity check failed: {}", e), ExitCode::NetworkError),
    }
}

// =============================================================================
// Set-Key Command
// =============================================================================

pub fn set_key_cmd(cmd: SetKeyCmd, output: &Output) -> ExitCode {
    let mut config = Config::load();
    config.tmdb_api_key = Some(cmd.key);

    match config.save() {
        Ok(()) => {
            if output.json {
                let _ = output.print_json(&json!({ "ok": true }));
            } else {
                println!("API key saved");
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Failed to save config: {}", e), ExitCode::Error),
    }
}
