use courtside_core::query::ListQuery;
use courtside_core::schedule::{ScheduleEvent, ScheduleFields};
use courtside_core::types::DbId;

/// Failure reported by a store adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// `update_by_id` targeted an id with no row.
    #[error("Schedule item {0} not found")]
    NotFound(DbId),

    /// The store refused the operation (constraint violation, bad value).
    #[error("{0}")]
    Rejected(String),

    /// The store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Access to the `schedules` table.
///
/// Every method is a single atomic store operation. There are no
/// transactions and no version checks: concurrent updates to the same row
/// are last-write-wins.
#[async_trait::async_trait]
pub trait ScheduleStore: Send + Sync {
    /// List records matching `query.filter` in `query.order`.
    async fn list(&self, query: &ListQuery) -> Result<Vec<ScheduleEvent>, StoreError>;

    /// Insert a record; the store assigns `id` and `created_at`.
    async fn insert(&self, fields: &ScheduleFields) -> Result<ScheduleEvent, StoreError>;

    /// Overwrite every mutable field of the record with `id`.
    async fn update_by_id(
        &self,
        id: DbId,
        fields: &ScheduleFields,
    ) -> Result<ScheduleEvent, StoreError>;

    /// Remove the record with `id`. Removing an absent id succeeds.
    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
