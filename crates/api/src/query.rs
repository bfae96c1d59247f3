//! Shared query parameter types for API handlers.

use courtside_core::error::CoreError;
use courtside_core::query::EventFilter;
use courtside_core::types::DbId;
use serde::Deserialize;

/// `?id=` selector for update and delete.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    /// The target id. Missing or blank is a validation error, as is a value
    /// that is not a UUID.
    pub fn require(&self) -> Result<DbId, CoreError> {
        let raw = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::Validation("ID parameter is required".into()))?;
        raw.parse()
            .map_err(|_| CoreError::Validation(format!("Invalid id '{raw}'")))
    }
}

/// `?event_type=` filter on list endpoints. Absent or `all` lists everything.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub event_type: Option<String>,
}

impl ListParams {
    pub fn filter(&self) -> Result<EventFilter, CoreError> {
        self.event_type
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .parse()
    }
}
