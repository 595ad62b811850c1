//! End-to-end tests for routes that require no token.

use axum::http::{Method, StatusCode};

use crate::e2e_tests::helpers::{TestApp, request};

#[tokio::test]
async fn test_list_books_without_token() {
    let app = TestApp::new();
    app.seed("Dune", "Herbert", 1, 0);
    app.seed("Emma", "Austen", 1, 0);

    let (status, body) = app.send(request(Method::GET, "/api/books", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    let books = body.as_array().expect("array");
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["title"], "Dune");
    assert_eq!(books[0]["copiesAvailable"], 1);
}

#[tokio::test]
async fn test_public_route_ignores_invalid_token() {
    let app = TestApp::new();

    let (status, body) = app
        .send(request(Method::GET, "/api/books", Some("garbage"), None))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_grouped_by_author() {
    let app = TestApp::new();
    app.seed("Persuasion", "Austen", 1, 0);
    app.seed("Dune", "Herbert", 1, 0);
    app.seed("Emma", "Austen", 1, 0);

    let (status, body) = app
        .send(request(Method::GET, "/api/books/grouped-by-author", None, None))
        .await;

    assert_eq!(status, StatusCode::OK);
    let groups = body.as_array().expect("array");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["author"], "Austen");
    assert_eq!(groups[0]["books"].as_array().map(Vec::len), Some(2));
    assert_eq!(groups[1]["author"], "Herbert");
}

#[tokio::test]
async fn test_most_borrowed_returns_top_three() {
    let app = TestApp::new();
    app.seed("A", "x", 1, 2);
    app.seed("B", "x", 1, 10);
    app.seed("C", "x", 1, 7);
    app.seed("D", "x", 1, 0);

    let (status, body) = app
        .send(request(Method::GET, "/api/books/most-borrowed", None, None))
        .await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|book| book["title"].as_str())
        .collect();
    assert_eq!(titles, ["B", "C", "A"]);
}
