//! Credential verification.
//!
//! # Invariants
//! - A login succeeds only when both the username and the password match the
//!   same identity exactly.
//! - Verification never mutates state and is safe to call concurrently.
//!
//! Passwords in `StaticCredentials` are held and compared as plaintext. That is a
//! known limitation of the fixed identity set; a hashed store can be swapped in
//! behind `CredentialVerifier` without touching token issuance or validation.

use super::Role;

/// Error returned when a presented identity is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// No identity matches the username/password pair.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Validates a presented username/password pair and yields the identity's role.
pub trait CredentialVerifier: Send + Sync {
    /// Returns the role of the identity matching both `username` and `password`.
    ///
    /// # Errors
    /// Returns `CredentialError::InvalidCredentials` if no identity matches.
    fn verify(&self, username: &str, password: &str) -> Result<Role, CredentialError>;
}

/// A known identity.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    /// Login name.
    pub username: String,
    /// Plaintext password, compared verbatim.
    pub password: String,
    /// Role granted on successful login.
    pub role: Role,
}

impl Identity {
    /// Create a new identity.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// A fixed, in-memory identity set.
///
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    identities: Vec<Identity>,
}

impl StaticCredentials {
    /// Create a verifier over the given identities.
    #[must_use]
    pub const fn new(identities: Vec<Identity>) -> Self {
        Self { identities }
    }

    /// The built-in identity set: `admin`/`admin123` (Admin) and `user`/`user123` (User).
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Identity::new("admin", "admin123", Role::Admin),
            Identity::new("user", "user123", Role::User),
        ])
    }

    /// Number of known identities.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.identities.len()
    }

    /// Whether the identity set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Result<Role, CredentialError> {
        self.identities
            .iter()
            .find(|identity| identity.username == username && identity.password == password)
            .map(|identity| identity.role)
            .ok_or(CredentialError::InvalidCredentials)
    }
}
