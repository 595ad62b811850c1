//! End-to-end tests for the user-only borrow route.

use axum::http::{Method, StatusCode};

use crate::e2e_tests::helpers::{TestApp, request};

#[tokio::test]
async fn test_user_borrows_book() {
    let app = TestApp::new();
    let id = app.seed("Dune", "Herbert", 2, 4);
    let token = app.user_token().await;

    let (status, body) = app
        .send(request(Method::POST, &format!("/api/books/{id}/borrow"), Some(&token), None))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["copiesAvailable"], 1);
    assert_eq!(body["timesBorrowed"], 5);
}

#[tokio::test]
async fn test_borrow_without_copies_is_conflict() {
    let app = TestApp::new();
    let id = app.seed("Dune", "Herbert", 0, 0);
    let token = app.user_token().await;

    let (status, body) = app
        .send(request(Method::POST, &format!("/api/books/{id}/borrow"), Some(&token), None))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_borrow_missing_book_is_not_found() {
    let app = TestApp::new();
    let token = app.user_token().await;

    let (status, _) = app
        .send(request(Method::POST, "/api/books/9/borrow", Some(&token), None))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_borrows_feed_most_borrowed() {
    let app = TestApp::new();
    let dune = app.seed("Dune", "Herbert", 5, 0);
    app.seed("Emma", "Austen", 5, 1);
    let token = app.user_token().await;

    for _ in 0..2 {
        let (status, _) = app
            .send(request(Method::POST, &format!("/api/books/{dune}/borrow"), Some(&token), None))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app
        .send(request(Method::GET, "/api/books/most-borrowed", None, None))
        .await;
    assert_eq!(body[0]["title"], "Dune");
    assert_eq!(body[0]["timesBorrowed"], 2);
}

#[tokio::test]
async fn test_borrow_non_numeric_id_is_bad_request() {
    let app = TestApp::new();
    let token = app.user_token().await;

    let (status, body) = app
        .send(request(Method::POST, "/api/books/first/borrow", Some(&token), None))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_non_numeric_id_without_token_is_unauthorized() {
    let app = TestApp::new();

    let (status, body) = app
        .send(request(Method::POST, "/api/books/first/borrow", None, None))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}
