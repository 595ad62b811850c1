//! HTTP surface.
//!
//! Routes:
//! - `POST /api/auth/login` (public)
//! - `GET /api/books`, `/api/books/grouped-by-author`, `/api/books/most-borrowed` (public)
//! - `POST /api/books`, `DELETE /api/books/{id}` (Admin)
//! - `POST /api/books/{id}/borrow` (User)

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::auth::{CredentialVerifier, SigningConfig, TokenIssuer, TokenValidator};
use crate::catalog::BookCatalog;
use crate::time::TimeSource;

pub mod auth;
pub mod books;
pub mod error;
pub mod extract;

pub use error::ApiError;
pub use extract::{
    AdminOnly, Authorized, JsonBody, PathId, RoleRequirement, UserOnly, check_access,
};

/// Shared state handed to every handler.
///
/// Everything here is immutable after startup except the catalog, which guards
/// its own state.
#[derive(Clone)]
pub struct AppState {
    /// Login credential check.
    pub credentials: Arc<dyn CredentialVerifier>,
    /// Signs tokens on login.
    pub issuer: Arc<TokenIssuer>,
    /// Verifies tokens on protected routes.
    pub validator: Arc<TokenValidator>,
    /// Book store.
    pub catalog: Arc<BookCatalog>,
}

impl AppState {
    /// Build state with an issuer and validator sharing one signing configuration.
    #[must_use]
    pub fn new(
        signing: SigningConfig,
        credentials: Arc<dyn CredentialVerifier>,
        catalog: Arc<BookCatalog>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        let signing = Arc::new(signing);
        Self {
            credentials,
            issuer: Arc::new(TokenIssuer::new(Arc::clone(&signing), Arc::clone(&clock))),
            validator: Arc::new(TokenValidator::new(signing, clock)),
            catalog,
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/books", get(books::list).post(books::add))
        .route("/api/books/grouped-by-author", get(books::grouped_by_author))
        .route("/api/books/most-borrowed", get(books::most_borrowed))
        .route("/api/books/{id}", delete(books::remove))
        .route("/api/books/{id}/borrow", post(books::borrow))
        .with_state(state)
}
