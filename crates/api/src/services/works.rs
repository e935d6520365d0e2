use std::sync::Arc;

use filmlib_core::aggregate::aggregate;
use filmlib_core::error::CoreError;
use filmlib_core::merge::PartialMerge;
use filmlib_core::models::Work;
use filmlib_core::sorting::SortMode;
use filmlib_core::types::EntityId;
use filmlib_db::models::work::WorkPerformerRow;
use filmlib_db::store::WorkStore;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

const ENTITY: &str = "Work";

fn not_found(id: EntityId) -> AppError {
    CoreError::NotFound { entity: ENTITY, id }.into()
}

/// Fold joined rows into works carrying their performers, preserving the
/// query's row order.
fn into_works(rows: Vec<WorkPerformerRow>) -> Vec<Work> {
    aggregate(rows)
        .into_iter()
        .map(|group| Work {
            performers: group.children,
            ..group.parent
        })
        .collect()
}

#[derive(Clone)]
pub struct WorkService {
    store: Arc<dyn WorkStore>,
}

impl WorkService {
    pub fn new(store: Arc<dyn WorkStore>) -> Self {
        Self { store }
    }

    /// Insert a work and its performer links under a freshly assigned id,
    /// then read it back so the performer list reflects stored values.
    ///
    /// Only the `id` of each supplied performer is used.
    pub async fn create(&self, input: Work) -> AppResult<Work> {
        let work = Work {
            id: Uuid::new_v4(),
            ..input
        };
        self.store.create(&work).await?;
        self.get(work.id).await
    }

    pub async fn get(&self, id: EntityId) -> AppResult<Work> {
        let rows = self.store.find_rows_by_id(id).await?;
        into_works(rows).into_iter().next().ok_or_else(|| not_found(id))
    }

    /// Merge the non-empty fields of `patch` onto the stored work. A
    /// non-empty performer list replaces the stored one wholesale.
    pub async fn update(&self, id: EntityId, patch: Work) -> AppResult<Work> {
        let merged = self.get(id).await?.merge_from(patch);
        if !self.store.update(&merged).await? {
            return Err(not_found(id));
        }
        self.get(id).await
    }

    /// Delete the work together with its performer links.
    pub async fn delete(&self, id: EntityId) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    pub async fn list_sorted(&self, mode: SortMode) -> AppResult<Vec<Work>> {
        Ok(into_works(self.store.list_sorted(mode).await?))
    }

    pub async fn search_by_title(&self, fragment: &str) -> AppResult<Vec<Work>> {
        Ok(into_works(self.store.search_by_title(fragment).await?))
    }

    /// Works with at least one performer whose name contains `fragment`.
    /// Each work lists only its matching performers.
    pub async fn search_by_performer_name(&self, fragment: &str) -> AppResult<Vec<Work>> {
        Ok(into_works(
            self.store.search_by_performer_name(fragment).await?,
        ))
    }
}
