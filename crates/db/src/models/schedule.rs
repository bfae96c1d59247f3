//! Row mapping for the `schedules` table.

use chrono::{NaiveDate, NaiveTime};
use courtside_core::error::CoreError;
use courtside_core::schedule::ScheduleEvent;
use courtside_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `schedules` table.
///
/// Enum columns are `TEXT` with `CHECK` constraints, so they come back as
/// strings and are parsed in the [`TryFrom`] conversion.
#[derive(Debug, Clone, FromRow)]
pub struct ScheduleRow {
    pub id: DbId,
    pub title: String,
    pub event_type: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub day_of_week: Option<String>,
    pub is_recurring: bool,
    pub created_at: Timestamp,
}

impl TryFrom<ScheduleRow> for ScheduleEvent {
    type Error = CoreError;

    fn try_from(row: ScheduleRow) -> Result<Self, Self::Error> {
        Ok(ScheduleEvent {
            id: row.id,
            title: row.title,
            event_type: row.event_type.as_deref().map(str::parse).transpose()?,
            description: row.description,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            day_of_week: row.day_of_week.as_deref().map(str::parse).transpose()?,
            is_recurring: row.is_recurring,
            created_at: row.created_at,
        })
    }
}
