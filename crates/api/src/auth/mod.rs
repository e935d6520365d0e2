//! Authentication and authorization primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- access-token issuance and validation.
//! - [`gate`] -- the role gate run before every protected handler.

pub mod gate;
pub mod jwt;
pub mod password;
