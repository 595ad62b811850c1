//! Token validation.
//!
//! # Pre-conditions
//! - The validator is built from the same `SigningConfig` as the issuer.
//!
//! # Post-conditions
//! - On success, returns the token's claims.
//! - On failure, returns exactly one `ValidationError`, the first violation found.
//!
//! # Invariants
//! - Checks run in a fixed order: structure and header, signature, claim
//!   structure, issuer, audience, expiration. No claim is inspected before the
//!   signature has been verified.
//! - Expiration has no clock-skew allowance.
//! - Validation is stateless and does not modify any external state.

use std::sync::Arc;

use jsonwebtoken::{DecodingKey, Validation, decode};

use super::{Claims, SIGNING_ALGORITHM, SigningConfig};
use crate::time::TimeSource;

/// Error returned when a token is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The token cannot be parsed into the expected structure.
    #[error("malformed token")]
    Malformed,
    /// The signature does not match the token's contents.
    #[error("invalid token signature")]
    SignatureInvalid,
    /// The `iss` claim does not match the configured issuer.
    #[error("token issuer mismatch")]
    IssuerMismatch,
    /// The `aud` claim does not include the configured audience.
    #[error("token audience mismatch")]
    AudienceMismatch,
    /// The token is past its expiration time.
    #[error("token has expired")]
    Expired,
}

/// Verifies session tokens and extracts their claims.
pub struct TokenValidator {
    config: Arc<SigningConfig>,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn TimeSource>,
}

impl TokenValidator {
    /// Create a validator for the given configuration and clock.
    #[must_use]
    pub fn new(config: Arc<SigningConfig>, clock: Arc<dyn TimeSource>) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret());

        // The library only verifies structure and signature; the claim checks
        // below run against our own clock and in our own order.
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        Self {
            config,
            decoding_key,
            validation,
            clock,
        }
    }

    /// Validates `token` and returns its claims.
    ///
    /// # Errors
    /// Returns the `ValidationError` for the first violated check.
    pub fn validate(&self, token: &str) -> Result<Claims, ValidationError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| map_jwt_error(&e))?
            .claims;

        if claims.iss != self.config.issuer() {
            return Err(ValidationError::IssuerMismatch);
        }

        if !claims.aud.contains(self.config.audience()) {
            return Err(ValidationError::AudienceMismatch);
        }

        if claims.is_expired_at(self.clock.now_ms()) {
            return Err(ValidationError::Expired);
        }

        Ok(claims)
    }
}

/// Maps jsonwebtoken errors to our `ValidationError` type.
///
/// The library's issuer, audience and expiry checks are disabled, so only a
/// bad signature or an unparseable token can come back from `decode`.
fn map_jwt_error(error: &jsonwebtoken::errors::Error) -> ValidationError {
    match error.kind() {
        jsonwebtoken::errors::ErrorKind::InvalidSignature => ValidationError::SignatureInvalid,
        _ => ValidationError::Malformed,
    }
}
