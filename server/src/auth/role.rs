//! Access-level roles carried in session tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The role an identity holds.
///
/// Roles are compared by equality only. There is no hierarchy: `Admin` does not
/// satisfy a `User` requirement.
///
/// The serialized form is the canonical name (`"Admin"`, `"User"`), which is also
/// what appears in the token's `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full catalog management.
    Admin,
    /// Regular library member.
    User,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Self; 2] = [Self::Admin, Self::User];

    /// Returns the canonical role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a canonical role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Parses a canonical role name. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
