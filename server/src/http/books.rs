//! Book catalog endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::Serialize;

use super::{AdminOnly, ApiError, AppState, Authorized, JsonBody, PathId, UserOnly};
use crate::catalog::{AuthorBooks, Book, NewBook};

/// Confirmation body for mutations without a resource to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /api/books`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.catalog.all()?))
}

/// `GET /api/books/grouped-by-author`
pub async fn grouped_by_author(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthorBooks>>, ApiError> {
    Ok(Json(state.catalog.grouped_by_author()?))
}

/// `GET /api/books/most-borrowed`
pub async fn most_borrowed(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.catalog.most_borrowed()?))
}

/// `POST /api/books` (Admin)
pub async fn add(
    caller: Authorized<AdminOnly>,
    State(state): State<AppState>,
    JsonBody(book): JsonBody<NewBook>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = state.catalog.add(book)?;
    tracing::debug!(role = %caller.claims().role, id = book.id, "add book authorized");
    Ok((StatusCode::CREATED, Json(book)))
}

/// `DELETE /api/books/{id}` (Admin)
pub async fn remove(
    caller: Authorized<AdminOnly>,
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.catalog.remove(id)?;
    tracing::debug!(role = %caller.claims().role, id, "delete book authorized");
    Ok(Json(MessageResponse {
        message: "Book deleted successfully.".to_string(),
    }))
}

/// `POST /api/books/{id}/borrow` (User)
pub async fn borrow(
    caller: Authorized<UserOnly>,
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<Book>, ApiError> {
    let book = state.catalog.borrow(id)?;
    tracing::debug!(role = %caller.claims().role, id, "borrow authorized");
    Ok(Json(book))
}
