//! Role gate: admits or rejects a request from its `Authorization` header.
//!
//! The checks run in a fixed order and the first failure wins:
//!
//! 1. header absent (or blank) -> [`GateRejection::MissingCredentials`]
//! 2. not exactly `Bearer <token>` -> [`GateRejection::MalformedHeader`]
//! 3. token fails validation -> [`GateRejection::InvalidToken`]
//! 4. no role claim, or an unknown one -> [`GateRejection::UnrecognizedRole`]
//! 5. role outside the gate's allowed set -> [`GateRejection::Forbidden`]
//!
//! Evaluation is synchronous and keeps no state between requests.

use axum::http::HeaderValue;
use filmlib_core::roles::Role;

use super::jwt::{TokenError, TokenValidator};

/// Identity of an admitted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// The token subject (account username).
    pub subject: String,
    /// Always a recognized role.
    pub role: Role,
}

/// Why the gate refused a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateRejection {
    #[error("Missing Authorization header")]
    MissingCredentials,

    #[error("Invalid Authorization header. Expected: Bearer <token>")]
    MalformedHeader,

    #[error("Invalid token: {0}")]
    InvalidToken(TokenError),

    #[error("Token carries no recognized role")]
    UnrecognizedRole,

    #[error("Role '{role}' is not permitted here")]
    Forbidden { role: Role },
}

impl GateRejection {
    /// `true` for every rejection that means "log in again" rather than
    /// "bad request" or "no access".
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            GateRejection::MissingCredentials
                | GateRejection::InvalidToken(_)
                | GateRejection::UnrecognizedRole
        )
    }
}

/// A gate configured with the set of roles it admits.
#[derive(Debug, Clone, Copy)]
pub struct RoleGate {
    allowed: &'static [Role],
}

/// Write endpoints.
pub const ADMIN_ONLY: RoleGate = RoleGate::new(&[Role::Admin]);

/// Read endpoints: any recognized role.
pub const ADMIN_OR_USER: RoleGate = RoleGate::new(&[Role::Admin, Role::User]);

impl RoleGate {
    pub const fn new(allowed: &'static [Role]) -> Self {
        Self { allowed }
    }

    pub fn allows(&self, role: Role) -> bool {
        role.is_recognized() && self.allowed.contains(&role)
    }

    /// Run the five checks against a raw `Authorization` header value.
    pub fn admit(
        &self,
        authorization: Option<&HeaderValue>,
        validator: &TokenValidator,
    ) -> Result<AuthUser, GateRejection> {
        let header = match authorization {
            None => return Err(GateRejection::MissingCredentials),
            Some(value) => value
                .to_str()
                .map_err(|_| GateRejection::MalformedHeader)?,
        };
        if header.trim().is_empty() {
            return Err(GateRejection::MissingCredentials);
        }

        let token = bearer_token(header).ok_or(GateRejection::MalformedHeader)?;

        let claims = validator
            .validate(token)
            .map_err(GateRejection::InvalidToken)?;

        let role = claims
            .role
            .as_deref()
            .map(Role::from)
            .filter(Role::is_recognized)
            .ok_or(GateRejection::UnrecognizedRole)?;

        if !self.allows(role) {
            return Err(GateRejection::Forbidden { role });
        }

        Ok(AuthUser {
            subject: claims.sub,
            role,
        })
    }
}

/// Split on whitespace and require exactly `Bearer <token>`.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}
