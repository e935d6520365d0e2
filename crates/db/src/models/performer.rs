//! Performer rows and the performer -> works join row.

use chrono::NaiveDate;
use filmlib_core::aggregate::JoinRow;
use filmlib_core::models::{Performer, Work};
use filmlib_core::types::EntityId;
use sqlx::FromRow;

/// Row from the `performers` table.
#[derive(Debug, Clone, FromRow)]
pub struct PerformerRow {
    pub id: EntityId,
    pub name: String,
    pub gender: String,
    pub birth_date: Option<NaiveDate>,
}

impl From<PerformerRow> for Performer {
    fn from(row: PerformerRow) -> Self {
        Performer {
            id: row.id,
            name: row.name,
            gender: row.gender,
            birth_date: row.birth_date,
        }
    }
}

/// One (performer, work) pair from `performers LEFT JOIN work_performers LEFT JOIN works`.
///
/// All `work_*` columns are NULL when the performer appears in no work.
#[derive(Debug, Clone, FromRow)]
pub struct PerformerWorkRow {
    pub performer_id: EntityId,
    pub performer_name: String,
    pub performer_gender: String,
    pub performer_birth_date: Option<NaiveDate>,
    pub work_id: Option<EntityId>,
    pub work_title: Option<String>,
    pub work_description: Option<String>,
    pub work_release_date: Option<NaiveDate>,
    pub work_rating: Option<i32>,
}

impl JoinRow for PerformerWorkRow {
    type Key = EntityId;
    type Parent = Performer;
    type Child = Work;

    fn parent_key(&self) -> EntityId {
        self.performer_id
    }

    fn into_parts(self) -> (Performer, Option<Work>) {
        let performer = Performer {
            id: self.performer_id,
            name: self.performer_name,
            gender: self.performer_gender,
            birth_date: self.performer_birth_date,
        };
        let work = self.work_id.map(|id| Work {
            id,
            title: self.work_title.unwrap_or_default(),
            description: self.work_description.unwrap_or_default(),
            release_date: self.work_release_date,
            rating: self.work_rating.unwrap_or_default(),
            performers: Vec::new(),
        });
        (performer, work)
    }
}
