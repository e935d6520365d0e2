//! Storage capabilities consumed by the service layer.
//!
//! The Postgres repositories in [`crate::repositories`] implement these, and
//! so do the in-memory doubles used by the API integration tests. Multi-row
//! results are returned as flat join rows; aggregation is the caller's job.

use async_trait::async_trait;
use filmlib_core::models::{Account, Performer, Work};
use filmlib_core::sorting::SortMode;
use filmlib_core::types::EntityId;

use crate::models::performer::PerformerWorkRow;
use crate::models::work::WorkPerformerRow;

#[async_trait]
pub trait PerformerStore: Send + Sync {
    /// Insert a performer row. The caller assigns the id.
    async fn create(&self, performer: &Performer) -> Result<(), sqlx::Error>;

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Performer>, sqlx::Error>;

    /// Overwrite every scalar column. Returns `false` if no row matched.
    async fn update(&self, performer: &Performer) -> Result<bool, sqlx::Error>;

    /// Delete the performer row only; links referencing it are left alone.
    /// Returns `false` if no row matched.
    async fn delete(&self, id: EntityId) -> Result<bool, sqlx::Error>;

    /// Every performer joined with its works, one row per pair.
    async fn list_with_works(&self) -> Result<Vec<PerformerWorkRow>, sqlx::Error>;
}

#[async_trait]
pub trait WorkStore: Send + Sync {
    /// Insert the work row and one link per entry in `work.performers`,
    /// atomically.
    async fn create(&self, work: &Work) -> Result<(), sqlx::Error>;

    /// Join rows for a single work (empty if it does not exist).
    async fn find_rows_by_id(&self, id: EntityId) -> Result<Vec<WorkPerformerRow>, sqlx::Error>;

    /// Overwrite the work row and replace its links, atomically.
    /// Returns `false` if no row matched (nothing is written).
    async fn update(&self, work: &Work) -> Result<bool, sqlx::Error>;

    /// Remove the work's links, then the work row, atomically.
    /// Returns `false` if no work row matched.
    async fn delete(&self, id: EntityId) -> Result<bool, sqlx::Error>;

    /// Every work joined with its performers, ordered by `mode`.
    async fn list_sorted(&self, mode: SortMode) -> Result<Vec<WorkPerformerRow>, sqlx::Error>;

    /// Works whose title contains `fragment`.
    async fn search_by_title(&self, fragment: &str) -> Result<Vec<WorkPerformerRow>, sqlx::Error>;

    /// Joined rows whose performer name contains `fragment`.
    async fn search_by_performer_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<WorkPerformerRow>, sqlx::Error>;
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn exists(&self, username: &str) -> Result<bool, sqlx::Error>;

    async fn create(&self, account: &Account) -> Result<(), sqlx::Error>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, sqlx::Error>;
}
