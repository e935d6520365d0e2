//! Domain logic for the film library catalog.
//!
//! Everything in this crate is pure: no I/O, no async, no shared state. The
//! storage and HTTP layers depend on it, never the other way around.

pub mod aggregate;
pub mod error;
pub mod merge;
pub mod models;
pub mod roles;
pub mod sorting;
pub mod types;
pub mod validation;
