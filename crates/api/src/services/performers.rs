use std::sync::Arc;

use filmlib_core::aggregate::aggregate;
use filmlib_core::error::CoreError;
use filmlib_core::merge::PartialMerge;
use filmlib_core::models::{Performer, PerformerWithWorks};
use filmlib_core::types::EntityId;
use filmlib_db::store::PerformerStore;
use uuid::Uuid;

use crate::error::AppResult;

const ENTITY: &str = "Performer";

#[derive(Clone)]
pub struct PerformerService {
    store: Arc<dyn PerformerStore>,
}

impl PerformerService {
    pub fn new(store: Arc<dyn PerformerStore>) -> Self {
        Self { store }
    }

    /// Insert a performer under a freshly assigned id. Any id in `input` is
    /// ignored.
    pub async fn create(&self, input: Performer) -> AppResult<Performer> {
        let performer = Performer {
            id: Uuid::new_v4(),
            ..input
        };
        self.store.create(&performer).await?;
        Ok(performer)
    }

    pub async fn get(&self, id: EntityId) -> AppResult<Performer> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: ENTITY, id }.into())
    }

    /// Merge the non-empty fields of `patch` onto the stored performer.
    pub async fn update(&self, id: EntityId, patch: Performer) -> AppResult<Performer> {
        let merged = self.get(id).await?.merge_from(patch);
        if !self.store.update(&merged).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }
        Ok(merged)
    }

    /// Delete the performer. Works that list it keep their link rows.
    pub async fn delete(&self, id: EntityId) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }
        Ok(())
    }

    pub async fn list_with_works(&self) -> AppResult<Vec<PerformerWithWorks>> {
        let rows = self.store.list_with_works().await?;
        Ok(aggregate(rows)
            .into_iter()
            .map(|group| PerformerWithWorks {
                performer: group.parent,
                works: group.children,
            })
            .collect())
    }
}
