//! Catalog operations over the storage traits.
//!
//! Each service takes already-decoded input and returns a value or a
//! classified [`AppError`](crate::error::AppError); none of them look at
//! headers or bodies.

pub mod accounts;
pub mod performers;
pub mod works;

pub use accounts::{AccountService, LoginOutcome};
pub use performers::PerformerService;
pub use works::WorkService;
