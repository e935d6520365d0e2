//! Postgres-backed repositories, one per table group.

pub mod account_repo;
pub mod performer_repo;
pub mod work_repo;

pub use account_repo::AccountRepo;
pub use performer_repo::PerformerRepo;
pub use work_repo::WorkRepo;
