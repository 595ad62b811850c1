//! Token issuance.
//!
//! # Post-conditions
//! - An issued token, validated immediately with the same `SigningConfig`, yields
//!   the issued role and is not expired.
//!
//! # Invariants
//! - Two tokens issued for the same role differ only in `exp`, `iat` and `jti`.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use super::{Audience, Claims, Role, SigningConfig};
use crate::time::TimeSource;

/// The signing algorithm shared by the issuer and the validator.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Error returned when a token cannot be encoded.
///
/// A valid `SigningConfig` makes this unreachable in practice; it exists so the
/// underlying library error is propagated rather than swallowed.
#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    /// The claims could not be serialized or signed.
    #[error("failed to encode token: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

/// A freshly issued token together with the claims it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// The compact `header.payload.signature` form handed to the client.
    pub token: String,
    /// The claims signed into `token`.
    pub claims: Claims,
}

/// Builds signed session tokens.
pub struct TokenIssuer {
    config: Arc<SigningConfig>,
    encoding_key: EncodingKey,
    header: Header,
    clock: Arc<dyn TimeSource>,
}

impl TokenIssuer {
    /// Create an issuer for the given configuration and clock.
    #[must_use]
    pub fn new(config: Arc<SigningConfig>, clock: Arc<dyn TimeSource>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret());
        Self {
            config,
            encoding_key,
            header: Header::new(SIGNING_ALGORITHM),
            clock,
        }
    }

    /// Issue a token for `role`, expiring one token lifetime from now.
    ///
    /// # Errors
    /// Returns `IssueError::Encoding` if the claims cannot be signed.
    pub fn issue(&self, role: Role) -> Result<IssuedToken, IssueError> {
        let now = self.clock.now_secs();
        let claims = Claims {
            role,
            aud: Audience::Single(self.config.audience().to_string()),
            iss: self.config.issuer().to_string(),
            exp: now.saturating_add(self.config.token_lifetime().as_secs()),
            iat: Some(now),
            jti: Some(new_token_id()),
        };

        let token = encode(&self.header, &claims, &self.encoding_key)?;
        tracing::debug!(role = %role, exp = claims.exp, "issued token");

        Ok(IssuedToken { token, claims })
    }
}

/// Random 128-bit token identifier, hex encoded.
fn new_token_id() -> String {
    let id: u128 = rand::random();
    format!("{id:032x}")
}
