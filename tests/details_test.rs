//! Detail bundle aggregation tests
//!
//! Tests cast truncation, the exact-match director filter, and the
//! independent failure domains of the credits and reviews sub-fetches.

use mockito::{Matcher, Server};
use reelfeed::api::TmdbClient;
use reelfeed::models::{DetailBundle, MediaKind};

fn credits_body(cast_count: usize) -> String {
    let cast: Vec<String> = (0..cast_count)
        .map(|i| format!(r#"{{"id": {0}, "name": "Actor {0}", "character": "Role {0}"}}"#, i))
        .collect();
    format!(
        r#"{{
            "id": 550,
            "cast": [{}],
            "crew": [
                {{"id": 100, "name": "Jane Doe", "job": "Director"}},
                {{"id": 101, "name": "John Roe", "job": "Producer"}},
                {{"id": 102, "name": "Ann Poe", "job": "Director"}},
                {{"id": 103, "name": "Sam Loe", "job": "director"}}
            ]
        }}"#,
        cast.join(",")
    )
}

const REVIEWS_BODY: &str = r#"{
    "id": 550,
    "results": [
        {"id": "a", "author": "alice", "author_details": {"rating": 8.0}, "content": "Liked it"},
        {"id": "b", "author": "bob", "author_details": {"rating": null}, "content": "Meh"}
    ]
}"#;

#[tokio::test]
async fn test_cast_truncated_directors_exact_match() {
    let mut server = Server::new_async().await;

    let credits_mock = server
        .mock("GET", "/movie/550/credits")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(credits_body(8))
        .create_async()
        .await;
    let reviews_mock = server
        .mock("GET", "/movie/550/reviews")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(REVIEWS_BODY)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let bundle = DetailBundle::load(&client, 550, MediaKind::Movie).await;

    credits_mock.assert_async().await;
    reviews_mock.assert_async().await;

    // First 5 of 8 cast entries, API order
    assert_eq!(bundle.cast.len(), 5);
    assert_eq!(bundle.cast[0].name, "Actor 0");
    assert_eq!(bundle.cast[4].name, "Actor 4");

    // "Director" matches exactly and case-sensitively; "director" does not
    assert_eq!(bundle.directors.len(), 2);
    assert_eq!(bundle.director_line(), "Jane Doe, Ann Poe");

    assert_eq!(bundle.reviews.len(), 2);
    assert_eq!(bundle.reviews[0].author, "alice");
}

#[tokio::test]
async fn test_small_cast_is_not_padded() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/tv/1396/credits")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(credits_body(3))
        .create_async()
        .await;
    server
        .mock("GET", "/tv/1396/reviews")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"id": 1396, "results": []}"#)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let bundle = DetailBundle::load(&client, 1396, MediaKind::Tv).await;

    assert_eq!(bundle.cast.len(), 3);
    assert!(bundle.reviews.is_empty());
}

#[tokio::test]
async fn test_credits_failure_leaves_reviews_intact() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/movie/550/credits")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    server
        .mock("GET", "/movie/550/reviews")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(REVIEWS_BODY)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let bundle = DetailBundle::load(&client, 550, MediaKind::Movie).await;

    assert!(bundle.cast.is_empty());
    assert!(bundle.directors.is_empty());
    assert_eq!(bundle.reviews.len(), 2);
}

#[tokio::test]
async fn test_reviews_failure_leaves_credits_intact() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/movie/550/credits")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(credits_body(2))
        .create_async()
        .await;
    server
        .mock("GET", "/movie/550/reviews")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let bundle = DetailBundle::load(&client, 550, MediaKind::Movie).await;

    assert_eq!(bundle.cast.len(), 2);
    assert_eq!(bundle.directors.len(), 2);
    assert!(bundle.reviews.is_empty());
}
