//! Token claims.

use serde::{Deserialize, Serialize};

use super::Role;

/// The `aud` claim.
///
/// RFC 7519 allows either a single string or an array of strings. Tokens issued
/// here always carry a single string; both forms are accepted on validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    /// A single audience.
    Single(String),
    /// Several audiences; the token is valid for any of them.
    Multiple(Vec<String>),
}

impl Audience {
    /// Returns `true` if `audience` is one of the token's audiences.
    #[must_use]
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Self::Single(value) => value == audience,
            Self::Multiple(values) => values.iter().any(|value| value == audience),
        }
    }
}

/// Claims embedded in a session token.
///
/// Timestamps are whole seconds since Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The identity's role.
    pub role: Role,
    /// Intended consumer of the token.
    pub aud: Audience,
    /// Service that issued the token.
    pub iss: String,
    /// Expiration time.
    pub exp: u64,
    /// Issued-at time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Random token identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Returns `true` if the token is past its expiration at `now_ms`.
    ///
    /// There is no clock-skew allowance: a token is expired one millisecond after `exp`.
    #[must_use]
    pub const fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms > self.exp.saturating_mul(1000)
    }
}
