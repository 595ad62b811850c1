//! Authentication and authorization.
//!
//! Login flow: a `CredentialVerifier` turns a username/password pair into a
//! `Role`, the `TokenIssuer` signs that role into a session token, and on later
//! requests the `TokenValidator` recovers the claims for `authorize` to check
//! against the operation's required role.
//!
//! # Pre-conditions
//! - Issuer and validator are built from the same `SigningConfig`.
//!
//! # Post-conditions
//! - Signing configuration is immutable once loaded.
//!
//! # Invariants
//! - Nothing in this module holds mutable state; every operation is safe to call
//!   concurrently.

pub mod claims;
pub mod credentials;
pub mod gate;
pub mod issuer;
pub mod role;
pub mod signing_config;
pub mod validator;

pub use claims::{Audience, Claims};
pub use credentials::{CredentialError, CredentialVerifier, Identity, StaticCredentials};
pub use gate::{Decision, authorize};
pub use issuer::{IssueError, IssuedToken, SIGNING_ALGORITHM, TokenIssuer};
pub use role::{Role, UnknownRole};
pub use signing_config::{
    DEFAULT_TOKEN_LIFETIME, MIN_SECRET_LEN, SigningConfig, SigningConfigError,
};
pub use validator::{TokenValidator, ValidationError};
