//! End-to-end tests for the login endpoint.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;

use crate::auth::Role;
use crate::e2e_tests::helpers::{TestApp, request};

#[tokio::test]
async fn test_login_admin_returns_token() {
    let app = TestApp::new();
    let (status, body) = app.login("admin", "admin123").await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token string");
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_tokens_carry_identity_role() {
    let app = TestApp::new();
    let config = crate::testing::test_signing_config();
    let validator = crate::auth::TokenValidator::new(config, app.clock.clone());

    let admin = validator
        .validate(&app.admin_token().await)
        .expect("valid admin token");
    let user = validator
        .validate(&app.user_token().await)
        .expect("valid user token");

    assert_eq!(admin.role, Role::Admin);
    assert_eq!(user.role, Role::User);
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let app = TestApp::new();
    let (status, body) = app.login("user", "wrongpass").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_mixed_identity_is_unauthorized() {
    let app = TestApp::new();
    let (status, _) = app.login("admin", "user123").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_missing_fields_is_unauthorized() {
    let app = TestApp::new();
    let (status, body) = app
        .send(request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "admin" })),
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_accepts_pascal_case_fields() {
    let app = TestApp::new();
    let (status, body) = app
        .send(request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "Username": "user", "Password": "user123" })),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn test_login_invalid_json_is_bad_request() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("valid request");

    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
