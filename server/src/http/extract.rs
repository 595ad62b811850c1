//! Request extractors.
//!
//! `Authorized<R>` runs the token validator and the authorization gate for an
//! operation that declares role `R::ROLE`. Public operations simply don't take it.
//!
//! Every rejection here is an `ApiError`, so clients always get the JSON error
//! body, whichever part of the request was bad.

use std::marker::PhantomData;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, header, request::Parts},
};
use serde::de::DeserializeOwned;

use super::{ApiError, AppState};
use crate::auth::{Claims, Role, TokenValidator, authorize};

/// A role an operation requires, declared at the type level.
pub trait RoleRequirement {
    /// The single role the operation requires.
    const ROLE: Role;
}

/// Operations restricted to `Role::Admin`.
#[derive(Debug, Clone, Copy)]
pub struct AdminOnly;

impl RoleRequirement for AdminOnly {
    const ROLE: Role = Role::Admin;
}

/// Operations restricted to `Role::User`.
#[derive(Debug, Clone, Copy)]
pub struct UserOnly;

impl RoleRequirement for UserOnly {
    const ROLE: Role = Role::User;
}

/// Extractor for callers holding exactly the role `R` requires.
///
/// Rejects with 401 when the bearer token is missing or invalid, and with 403
/// when the token is valid but carries a different role.
#[derive(Debug)]
pub struct Authorized<R> {
    claims: Claims,
    requirement: PhantomData<fn() -> R>,
}

impl<R> Authorized<R> {
    /// The caller's validated claims.
    #[must_use]
    pub const fn claims(&self) -> &Claims {
        &self.claims
    }
}

impl<R> FromRequestParts<AppState> for Authorized<R>
where
    R: RoleRequirement,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = check_access(&parts.headers, &state.validator, R::ROLE)?;

        Ok(Self {
            claims,
            requirement: PhantomData,
        })
    }
}

/// Validates the bearer token in `headers` and checks it carries `required`.
///
/// Returns the validated claims on `Allow`. A missing or invalid token is
/// `Unauthorized`; a valid token for another role is `Forbidden`.
pub fn check_access(
    headers: &HeaderMap,
    validator: &TokenValidator,
    required: Role,
) -> Result<Claims, ApiError> {
    let token = bearer_token(headers)?;
    let claims = validator.validate(token).map_err(|e| {
        tracing::debug!(reason = %e, "token rejected");
        ApiError::from(e)
    })?;

    if authorize(&claims, required).is_allowed() {
        Ok(claims)
    } else {
        tracing::warn!(required = %required, presented = %claims.role, "access denied");
        Err(ApiError::access_denied(required))
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    let value = value
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Malformed authorization header".to_string()))?;

    match value.split_once(' ') {
        Some((scheme, token))
            if scheme.eq_ignore_ascii_case("Bearer") && !token.trim().is_empty() =>
        {
            Ok(token.trim())
        }
        _ => Err(ApiError::Unauthorized(
            "Authorization header must use the Bearer scheme".to_string(),
        )),
    }
}

/// Numeric `{id}` path segment that reports parse failures as `ApiError::BadRequest`.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub u32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<u32>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid path: {}", e.body_text())))?;

        Ok(Self(id))
    }
}

/// JSON body extractor that reports parse failures as `ApiError::BadRequest`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON: {}", e.body_text())))?;

        Ok(Self(value))
    }
}
