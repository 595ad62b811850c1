//! Login endpoint.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use super::{ApiError, AppState, JsonBody};

/// Login request body.
///
/// Missing fields are treated as empty strings and fail verification like any
/// other unknown pair.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(alias = "Username")]
    pub username: String,
    #[serde(alias = "Password")]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let role = state
        .credentials
        .verify(&request.username, &request.password)
        .inspect_err(|_| tracing::warn!(username = %request.username, "login failed"))?;

    let issued = state.issuer.issue(role)?;
    tracing::info!(username = %request.username, role = %role, "login succeeded");

    Ok(Json(LoginResponse {
        token: issued.token,
    }))
}
