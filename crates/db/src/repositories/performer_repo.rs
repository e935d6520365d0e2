//! Repository for the `performers` table.

use async_trait::async_trait;
use filmlib_core::models::Performer;
use filmlib_core::types::EntityId;
use sqlx::PgPool;

use crate::models::performer::{PerformerRow, PerformerWorkRow};
use crate::store::PerformerStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, gender, birth_date";

/// Provides CRUD operations for performers.
#[derive(Clone)]
pub struct PerformerRepo {
    pool: PgPool,
}

impl PerformerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PerformerStore for PerformerRepo {
    async fn create(&self, performer: &Performer) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO performers (id, name, gender, birth_date) VALUES ($1, $2, $3, $4)")
            .bind(performer.id)
            .bind(&performer.name)
            .bind(&performer.gender)
            .bind(performer.birth_date)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Performer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM performers WHERE id = $1");
        let row = sqlx::query_as::<_, PerformerRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Performer::from))
    }

    async fn update(&self, performer: &Performer) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE performers SET name = $2, gender = $3, birth_date = $4 WHERE id = $1",
        )
        .bind(performer.id)
        .bind(&performer.name)
        .bind(&performer.gender)
        .bind(performer.birth_date)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM performers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_with_works(&self) -> Result<Vec<PerformerWorkRow>, sqlx::Error> {
        sqlx::query_as::<_, PerformerWorkRow>(
            "SELECT p.id AS performer_id, p.name AS performer_name,
                    p.gender AS performer_gender, p.birth_date AS performer_birth_date,
                    w.id AS work_id, w.title AS work_title,
                    w.description AS work_description, w.release_date AS work_release_date,
                    w.rating AS work_rating
             FROM performers p
             LEFT JOIN work_performers wp ON wp.performer_id = p.id
             LEFT JOIN works w ON w.id = wp.work_id",
        )
        .fetch_all(&self.pool)
        .await
    }
}
