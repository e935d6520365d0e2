//! Work rows and the work -> performers join row.

use chrono::NaiveDate;
use filmlib_core::aggregate::JoinRow;
use filmlib_core::models::{Performer, Work};
use filmlib_core::types::EntityId;
use sqlx::FromRow;

/// One (work, performer) pair from `works LEFT JOIN work_performers LEFT JOIN performers`.
///
/// All `performer_*` columns are NULL when the work has no links, or when a
/// link points at a performer that has since been deleted.
#[derive(Debug, Clone, FromRow)]
pub struct WorkPerformerRow {
    pub work_id: EntityId,
    pub work_title: String,
    pub work_description: String,
    pub work_release_date: Option<NaiveDate>,
    pub work_rating: i32,
    pub performer_id: Option<EntityId>,
    pub performer_name: Option<String>,
    pub performer_gender: Option<String>,
    pub performer_birth_date: Option<NaiveDate>,
}

impl JoinRow for WorkPerformerRow {
    type Key = EntityId;
    type Parent = Work;
    type Child = Performer;

    fn parent_key(&self) -> EntityId {
        self.work_id
    }

    fn into_parts(self) -> (Work, Option<Performer>) {
        let work = Work {
            id: self.work_id,
            title: self.work_title,
            description: self.work_description,
            release_date: self.work_release_date,
            rating: self.work_rating,
            performers: Vec::new(),
        };
        let performer = self.performer_id.map(|id| Performer {
            id,
            name: self.performer_name.unwrap_or_default(),
            gender: self.performer_gender.unwrap_or_default(),
            birth_date: self.performer_birth_date,
        });
        (work, performer)
    }
}
