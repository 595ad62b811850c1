//! HTTP error responses.
//!
//! Every handler failure becomes an `ApiError`, rendered as a status code plus a
//! JSON body `{ "code": ..., "message": ... }`.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::auth::{CredentialError, IssueError, Role, ValidationError};
use crate::catalog::CatalogError;

/// Message returned for a failed login.
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid username or password";

/// API error with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request (400).
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Missing or rejected credentials (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Authenticated but not permitted (403).
    #[error("forbidden: {0}")]
    Forbidden(String),
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),
    /// Request conflicts with current state (409).
    #[error("conflict: {0}")]
    Conflict(String),
    /// Internal failure (500). The message is logged, not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
}

impl ApiError {
    /// The response for a caller whose role does not match `required`.
    #[must_use]
    pub fn access_denied(required: Role) -> Self {
        Self::Forbidden(format!("Access denied: requires role {required}"))
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for categorization.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn public_message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Conflict(message) => message,
            Self::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(message) = &self {
            tracing::error!("internal error: {message}");
        }

        let status = self.status_code();
        let body = Json(ErrorBody {
            code: self.error_code(),
            message: self.public_message(),
        });

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

impl From<CredentialError> for ApiError {
    fn from(e: CredentialError) -> Self {
        match e {
            CredentialError::InvalidCredentials => Self::Unauthorized(INVALID_LOGIN_MESSAGE.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Unauthorized(format!("Invalid token: {e}"))
    }
}

impl From<IssueError> for ApiError {
    fn from(e: IssueError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => Self::NotFound(e.to_string()),
            CatalogError::OutOfCopies(_) => Self::Conflict(e.to_string()),
            CatalogError::MissingField(_) => Self::BadRequest(e.to_string()),
            CatalogError::LockPoisoned => Self::Internal(e.to_string()),
        }
    }
}
