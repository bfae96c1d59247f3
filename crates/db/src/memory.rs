//! In-memory [`ScheduleStore`].
//!
//! Keeps rows in a vector behind an async lock. Used by the test suites and
//! as the local development fallback when no database is configured. A
//! fault can be injected to exercise the error paths of callers.

use std::sync::Mutex;

use chrono::{Duration, Utc};
use courtside_core::query::ListQuery;
use courtside_core::schedule::{ScheduleEvent, ScheduleFields};
use courtside_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{ScheduleStore, StoreError};

#[derive(Default)]
pub struct InMemoryScheduleStore {
    rows: RwLock<Vec<ScheduleEvent>>,
    fault: Mutex<Option<StoreError>>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `fault`, or clear it with `None`.
    pub fn inject_fault(&self, fault: Option<StoreError>) {
        *self.fault.lock().unwrap_or_else(|e| e.into_inner()) = fault;
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    fn check_fault(&self) -> Result<(), StoreError> {
        match self.fault.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
            Some(fault) => Err(fault.clone()),
            None => Ok(()),
        }
    }
}

/// Creation timestamps strictly increase so newest-first order is stable
/// even when inserts land within the clock's resolution.
fn next_created_at(rows: &[ScheduleEvent]) -> Timestamp {
    let now = Utc::now();
    match rows.iter().map(|r| r.created_at).max() {
        Some(latest) if latest >= now => latest + Duration::microseconds(1),
        _ => now,
    }
}

#[async_trait::async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<ScheduleEvent>, StoreError> {
        self.check_fault()?;
        let rows = self.rows.read().await;
        Ok(query.apply(rows.iter().cloned()))
    }

    async fn insert(&self, fields: &ScheduleFields) -> Result<ScheduleEvent, StoreError> {
        self.check_fault()?;
        let mut rows = self.rows.write().await;
        let event = ScheduleEvent::from_fields(Uuid::now_v7(), next_created_at(&rows), fields.clone());
        rows.push(event.clone());
        Ok(event)
    }

    async fn update_by_id(
        &self,
        id: DbId,
        fields: &ScheduleFields,
    ) -> Result<ScheduleEvent, StoreError> {
        self.check_fault()?;
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        row.replace_fields(fields.clone());
        Ok(row.clone())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        self.check_fault()?;
        self.rows.write().await.retain(|r| r.id != id);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.check_fault()
    }
}
