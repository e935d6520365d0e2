//! Repository for the `works` table and its `work_performers` links.
//!
//! Every write that touches both tables runs inside a single transaction;
//! an early return drops the transaction, which rolls it back.

use async_trait::async_trait;
use filmlib_core::models::{Performer, Work};
use filmlib_core::sorting::SortMode;
use filmlib_core::types::EntityId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::work::WorkPerformerRow;
use crate::store::WorkStore;

/// Work columns joined with (nullable) performer columns.
const JOINED_SELECT: &str = "SELECT w.id AS work_id, w.title AS work_title,
            w.description AS work_description, w.release_date AS work_release_date,
            w.rating AS work_rating,
            p.id AS performer_id, p.name AS performer_name,
            p.gender AS performer_gender, p.birth_date AS performer_birth_date
     FROM works w
     LEFT JOIN work_performers wp ON wp.work_id = w.id
     LEFT JOIN performers p ON p.id = wp.performer_id";

/// `ORDER BY` clause for a listing mode. No secondary key: ties keep
/// whatever order the database produces.
pub fn order_clause(mode: SortMode) -> &'static str {
    match mode {
        SortMode::TitleAsc => "ORDER BY w.title ASC",
        SortMode::ReleaseDateDesc => "ORDER BY w.release_date DESC NULLS LAST",
        SortMode::RatingDesc => "ORDER BY w.rating DESC",
    }
}

/// Provides CRUD and listing operations for works.
#[derive(Clone)]
pub struct WorkRepo {
    pool: PgPool,
}

impl WorkRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_joined(
        &self,
        filter_and_order: &str,
        bind: Option<&str>,
    ) -> Result<Vec<WorkPerformerRow>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} {filter_and_order}");
        let mut q = sqlx::query_as::<_, WorkPerformerRow>(&query);
        if let Some(value) = bind {
            q = q.bind(value);
        }
        q.fetch_all(&self.pool).await
    }
}

/// Insert one link row per performer, in list order. Duplicates in the list
/// produce duplicate links.
async fn insert_links(
    tx: &mut Transaction<'_, Postgres>,
    work_id: EntityId,
    performers: &[Performer],
) -> Result<(), sqlx::Error> {
    for performer in performers {
        sqlx::query("INSERT INTO work_performers (work_id, performer_id) VALUES ($1, $2)")
            .bind(work_id)
            .bind(performer.id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

#[async_trait]
impl WorkStore for WorkRepo {
    async fn create(&self, work: &Work) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO works (id, title, description, release_date, rating)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(work.id)
        .bind(&work.title)
        .bind(&work.description)
        .bind(work.release_date)
        .bind(work.rating)
        .execute(&mut *tx)
        .await?;

        insert_links(&mut tx, work.id, &work.performers).await?;

        tx.commit().await
    }

    async fn find_rows_by_id(&self, id: EntityId) -> Result<Vec<WorkPerformerRow>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE w.id = $1");
        sqlx::query_as::<_, WorkPerformerRow>(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await
    }

    async fn update(&self, work: &Work) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE works SET title = $2, description = $3, release_date = $4, rating = $5
             WHERE id = $1",
        )
        .bind(work.id)
        .bind(&work.title)
        .bind(&work.description)
        .bind(work.release_date)
        .bind(work.rating)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query("DELETE FROM work_performers WHERE work_id = $1")
            .bind(work.id)
            .execute(&mut *tx)
            .await?;

        insert_links(&mut tx, work.id, &work.performers).await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM work_performers WHERE work_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM works WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_sorted(&self, mode: SortMode) -> Result<Vec<WorkPerformerRow>, sqlx::Error> {
        self.fetch_joined(order_clause(mode), None).await
    }

    async fn search_by_title(&self, fragment: &str) -> Result<Vec<WorkPerformerRow>, sqlx::Error> {
        self.fetch_joined("WHERE w.title LIKE '%' || $1 || '%'", Some(fragment))
            .await
    }

    async fn search_by_performer_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<WorkPerformerRow>, sqlx::Error> {
        self.fetch_joined("WHERE p.name LIKE '%' || $1 || '%'", Some(fragment))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_mode_orders_by_its_column() {
        assert_eq!(order_clause(SortMode::TitleAsc), "ORDER BY w.title ASC");
        assert!(order_clause(SortMode::ReleaseDateDesc).starts_with("ORDER BY w.release_date DESC"));
        assert_eq!(order_clause(SortMode::RatingDesc), "ORDER BY w.rating DESC");
    }

    #[test]
    fn out_of_range_flag_orders_by_rating() {
        assert_eq!(
            order_clause(SortMode::from_flag(0)),
            order_clause(SortMode::RatingDesc)
        );
    }
}
