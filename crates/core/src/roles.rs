//! Role tiers carried in the `role` claim of every access token.
//!
//! The string forms must match the `accounts.role` column values written by
//! the initial migration (`'user'` is the column default).

use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Closed set of roles. Any string other than the two known tiers parses to
/// [`Role::Unrecognized`], which no gate ever admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Full read/write access.
    Admin,
    /// Read-only access.
    User,
    Unrecognized,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::User => ROLE_USER,
            Role::Unrecognized => "unrecognized",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unrecognized)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            ROLE_ADMIN => Role::Admin,
            ROLE_USER => Role::User,
            _ => Role::Unrecognized,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
