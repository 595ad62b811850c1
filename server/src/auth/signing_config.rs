//! Token signing configuration.
//!
//! # Pre-conditions
//! - The secret must be at least `MIN_SECRET_LEN` bytes.
//! - Issuer and audience must be non-empty strings.
//! - The token lifetime must be non-zero.
//!
//! # Post-conditions
//! - `SigningConfig` instances are immutable once created.
//!
//! # Invariants
//! - A constructed `SigningConfig` always holds valid HS256 key material, so token
//!   issuance never fails on configuration grounds.

use std::time::Duration;

/// Minimum HS256 secret length in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Default token lifetime: one hour.
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// Error returned when the signing configuration is invalid.
///
/// These errors are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SigningConfigError {
    /// The secret is empty.
    #[error("signing secret must not be empty")]
    EmptySecret,
    /// The secret is too short for HS256.
    #[error("signing secret must be at least {min} bytes, got {len}")]
    SecretTooShort {
        /// Length of the provided secret.
        len: usize,
        /// Required minimum length.
        min: usize,
    },
    /// The issuer is empty.
    #[error("issuer must not be empty")]
    EmptyIssuer,
    /// The audience is empty.
    #[error("audience must not be empty")]
    EmptyAudience,
    /// The token lifetime is zero.
    #[error("token lifetime must be greater than zero")]
    ZeroLifetime,
}

/// Shared configuration for the token issuer and validator.
///
/// The issuer and validator must be built from the same `SigningConfig` for
/// issued tokens to validate.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningConfig {
    secret: Vec<u8>,
    issuer: String,
    audience: String,
    token_lifetime: Duration,
}

impl SigningConfig {
    /// Create a new signing configuration.
    ///
    /// # Errors
    /// Returns a `SigningConfigError` describing the first invalid field, checked in
    /// the order secret, issuer, audience, lifetime.
    pub fn new(
        secret: Vec<u8>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        token_lifetime: Duration,
    ) -> Result<Self, SigningConfigError> {
        if secret.is_empty() {
            return Err(SigningConfigError::EmptySecret);
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(SigningConfigError::SecretTooShort {
                len: secret.len(),
                min: MIN_SECRET_LEN,
            });
        }

        let issuer = issuer.into();
        if issuer.is_empty() {
            return Err(SigningConfigError::EmptyIssuer);
        }

        let audience = audience.into();
        if audience.is_empty() {
            return Err(SigningConfigError::EmptyAudience);
        }

        if token_lifetime.is_zero() {
            return Err(SigningConfigError::ZeroLifetime);
        }

        Ok(Self {
            secret,
            issuer,
            audience,
            token_lifetime,
        })
    }

    /// Create a configuration with the default one-hour lifetime.
    ///
    /// # Errors
    /// See [`SigningConfig::new`].
    pub fn with_default_lifetime(
        secret: Vec<u8>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, SigningConfigError> {
        Self::new(secret, issuer, audience, DEFAULT_TOKEN_LIFETIME)
    }

    /// The HMAC secret.
    #[must_use]
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// The expected `iss` claim.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// The expected `aud` claim.
    #[must_use]
    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// How long issued tokens remain valid.
    #[must_use]
    pub const fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }
}

impl std::fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningConfig")
            .field("secret", &format_args!("<{} bytes>", self.secret.len()))
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("token_lifetime", &self.token_lifetime)
            .finish()
    }
}
