//! Role-based authorization.
//!
//! Policy is exact match against a single required role. There is no role
//! hierarchy. Operations without a required role never reach the gate.

use super::{Claims, Role};

/// Outcome of an authorization check.
///
/// `Deny` is a policy decision, distinct from a token validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The caller holds the required role.
    Allow,
    /// The caller holds a different role.
    Deny,
}

impl Decision {
    /// Returns `true` for `Allow`.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// `Allow` iff `claims.role` equals `required`.
#[must_use]
pub fn authorize(claims: &Claims, required: Role) -> Decision {
    if claims.role == required {
        Decision::Allow
    } else {
        Decision::Deny
    }
}
