//! Postgres-backed [`ScheduleStore`].

use courtside_core::query::ListQuery;
use courtside_core::schedule::{ScheduleEvent, ScheduleFields};
use courtside_core::types::DbId;
use uuid::Uuid;

use crate::models::schedule::ScheduleRow;
use crate::repositories::ScheduleRepo;
use crate::store::{ScheduleStore, StoreError};
use crate::DbPool;

/// [`ScheduleStore`] over a Postgres connection pool.
#[derive(Clone)]
pub struct PgScheduleStore {
    pool: DbPool,
}

impl PgScheduleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Constraint and type errors reported by Postgres are the store rejecting
/// the operation; everything else means the store could not be used.
fn classify(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => StoreError::Rejected(db_err.message().to_string()),
        sqlx::Error::RowNotFound => StoreError::Rejected("Row not found".into()),
        other => {
            tracing::error!(error = %other, "Schedule store failure");
            StoreError::Unavailable(other.to_string())
        }
    }
}

fn to_event(row: ScheduleRow) -> Result<ScheduleEvent, StoreError> {
    ScheduleEvent::try_from(row).map_err(|e| StoreError::Rejected(e.to_string()))
}

#[async_trait::async_trait]
impl ScheduleStore for PgScheduleStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<ScheduleEvent>, StoreError> {
        ScheduleRepo::list(&self.pool, query)
            .await
            .map_err(classify)?
            .into_iter()
            .map(to_event)
            .collect()
    }

    async fn insert(&self, fields: &ScheduleFields) -> Result<ScheduleEvent, StoreError> {
        let row = ScheduleRepo::create(&self.pool, Uuid::now_v7(), fields)
            .await
            .map_err(classify)?;
        to_event(row)
    }

    async fn update_by_id(
        &self,
        id: DbId,
        fields: &ScheduleFields,
    ) -> Result<ScheduleEvent, StoreError> {
        let row = ScheduleRepo::update(&self.pool, id, fields)
            .await
            .map_err(classify)?
            .ok_or(StoreError::NotFound(id))?;
        to_event(row)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        let deleted = ScheduleRepo::delete(&self.pool, id)
            .await
            .map_err(classify)?;
        if !deleted {
            tracing::debug!(schedule_id = %id, "Delete matched no rows");
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(classify)
    }
}
