//! End-to-end tests for token lifetime against the injected clock.

use axum::http::{Method, StatusCode};

use crate::e2e_tests::helpers::{ONE_MINUTE_MS, TestApp, request};

#[tokio::test]
async fn test_token_valid_until_lifetime_elapses() {
    let app = TestApp::new();
    let id = app.seed("Dune", "Herbert", 3, 0);
    let token = app.user_token().await;

    app.clock.advance(60 * ONE_MINUTE_MS);
    let (status, _) = app
        .send(request(Method::POST, &format!("/api/books/{id}/borrow"), Some(&token), None))
        .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::new();
    let id = app.seed("Dune", "Herbert", 3, 0);
    let token = app.user_token().await;

    app.clock.advance(61 * ONE_MINUTE_MS);
    let (status, body) = app
        .send(request(Method::POST, &format!("/api/books/{id}/borrow"), Some(&token), None))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token: token has expired");
    assert_eq!(app.catalog.all().expect("all")[0].copies_available, 3);
}

#[tokio::test]
async fn test_fresh_login_after_expiry_works() {
    let app = TestApp::new();
    let stale = app.admin_token().await;

    app.clock.advance(2 * 60 * ONE_MINUTE_MS);
    let (status, _) = app
        .send(request(Method::DELETE, "/api/books/1", Some(&stale), None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let fresh = app.admin_token().await;
    let (status, _) = app
        .send(request(Method::DELETE, "/api/books/1", Some(&fresh), None))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expiry_does_not_affect_public_routes() {
    let app = TestApp::new();
    let token = app.user_token().await;
    app.clock.advance(120 * ONE_MINUTE_MS);

    let (status, _) = app
        .send(request(Method::GET, "/api/books", Some(&token), None))
        .await;
    assert_eq!(status, StatusCode::OK);
}
