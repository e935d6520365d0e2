//! Authorization extractors.
//!
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`rbac::RequireUser`] -- requires `user` or `admin`.

pub mod rbac;
