//! Repository for the `schedules` table.

use courtside_core::query::{EventFilter, ListQuery, ScheduleOrder};
use courtside_core::schedule::ScheduleFields;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::schedule::ScheduleRow;

/// Column list for `schedules` queries.
const COLUMNS: &str = "\
    id, title, event_type, description, date, start_time, end_time, \
    day_of_week, is_recurring, created_at";

/// Newest first.
const ORDER_CREATED_DESC: &str = "created_at DESC, id DESC";

/// Same order as `courtside_core::query::compare_for_display`.
const ORDER_DISPLAY_ASC: &str = "date ASC NULLS LAST, start_time ASC NULLS FIRST, created_at ASC";

/// Provides data access for schedule events.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// List rows, optionally restricted to one event type.
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<Vec<ScheduleRow>, sqlx::Error> {
        let order = match query.order {
            ScheduleOrder::CreatedDesc => ORDER_CREATED_DESC,
            ScheduleOrder::DisplayAsc => ORDER_DISPLAY_ASC,
        };
        let event_type = match query.filter {
            EventFilter::All => None,
            EventFilter::Only(t) => Some(t.as_str()),
        };

        let sql = format!(
            "SELECT {COLUMNS} FROM schedules \
             WHERE ($1::text IS NULL OR event_type = $1) \
             ORDER BY {order}"
        );
        sqlx::query_as::<_, ScheduleRow>(&sql)
            .bind(event_type)
            .fetch_all(pool)
            .await
    }

    /// Insert a new row with a caller-generated id.
    pub async fn create(
        pool: &PgPool,
        id: DbId,
        fields: &ScheduleFields,
    ) -> Result<ScheduleRow, sqlx::Error> {
        let sql = format!(
            "INSERT INTO schedules \
                 (id, title, event_type, description, date, start_time, end_time, \
                  day_of_week, is_recurring) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScheduleRow>(&sql)
            .bind(id)
            .bind(&fields.title)
            .bind(fields.event_type.map(|t| t.as_str()))
            .bind(&fields.description)
            .bind(fields.date)
            .bind(fields.start_time)
            .bind(fields.end_time)
            .bind(fields.day_of_week.map(|d| d.as_str()))
            .bind(fields.is_recurring)
            .fetch_one(pool)
            .await
    }

    /// Full replace of every mutable column.
    ///
    /// Returns `None` when no row has the given id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &ScheduleFields,
    ) -> Result<Option<ScheduleRow>, sqlx::Error> {
        let sql = format!(
            "UPDATE schedules SET \
                 title = $2, \
                 event_type = $3, \
                 description = $4, \
                 date = $5, \
                 start_time = $6, \
                 end_time = $7, \
                 day_of_week = $8, \
                 is_recurring = $9 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScheduleRow>(&sql)
            .bind(id)
            .bind(&fields.title)
            .bind(fields.event_type.map(|t| t.as_str()))
            .bind(&fields.description)
            .bind(fields.date)
            .bind(fields.start_time)
            .bind(fields.end_time)
            .bind(fields.day_of_week.map(|d| d.as_str()))
            .bind(fields.is_recurring)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
