//! The schedule event record and its request payloads.
//!
//! [`ScheduleEvent`] is one row of the `schedules` table. [`ScheduleInput`] is
//! the loosely-typed body accepted by create and update; it is normalized
//! into [`ScheduleFields`] before anything reaches a store adapter.
//!
//! `start_time` and `end_time` are time-of-day values. Full timestamps in
//! those fields are rejected rather than silently truncated.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: u64 = 200;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: u64 = 2000;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Kind of event shown on the public schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Tournament,
    OpenGym,
}

impl EventType {
    pub const ALL: [EventType; 2] = [EventType::Tournament, EventType::OpenGym];

    /// Wire and column representation.
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Tournament => "tournament",
            EventType::OpenGym => "open_gym",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tournament" => Ok(EventType::Tournament),
            "open_gym" => Ok(EventType::OpenGym),
            other => Err(CoreError::Validation(format!(
                "Invalid event_type '{other}'. Expected one of: tournament, open_gym"
            ))),
        }
    }
}

/// Day a recurring event repeats on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid day_of_week '{s}'. Expected Monday through Sunday"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored schedule event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: DbId,
    pub title: String,
    pub event_type: Option<EventType>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub day_of_week: Option<DayOfWeek>,
    pub is_recurring: bool,
    pub created_at: Timestamp,
}

impl ScheduleEvent {
    /// Build a record from normalized fields plus store-assigned identity.
    pub fn from_fields(id: DbId, created_at: Timestamp, fields: ScheduleFields) -> Self {
        Self {
            id,
            title: fields.title,
            event_type: fields.event_type,
            description: fields.description,
            date: fields.date,
            start_time: fields.start_time,
            end_time: fields.end_time,
            day_of_week: fields.day_of_week,
            is_recurring: fields.is_recurring,
            created_at,
        }
    }

    /// Overwrite every mutable field. Identity and `created_at` are kept.
    pub fn replace_fields(&mut self, fields: ScheduleFields) {
        self.title = fields.title;
        self.event_type = fields.event_type;
        self.description = fields.description;
        self.date = fields.date;
        self.start_time = fields.start_time;
        self.end_time = fields.end_time;
        self.day_of_week = fields.day_of_week;
        self.is_recurring = fields.is_recurring;
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request body for create and update.
///
/// Mirrors the admin form: every typed field arrives as a string and an
/// empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub day_of_week: Option<String>,
    #[serde(default)]
    pub is_recurring: Option<bool>,
}

/// Normalized, typed set of mutable fields handed to a store adapter.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ScheduleFields {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    pub event_type: Option<EventType>,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub day_of_week: Option<DayOfWeek>,
    pub is_recurring: bool,
}

impl ScheduleFields {
    /// Fields with only a title set, every optional field null.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            event_type: None,
            description: None,
            date: None,
            start_time: None,
            end_time: None,
            day_of_week: None,
            is_recurring: false,
        }
    }
}

impl ScheduleInput {
    /// Normalize into [`ScheduleFields`].
    ///
    /// Empty or missing optional values become `None`; `is_recurring`
    /// defaults to `false`. A missing or blank title is a validation error,
    /// as is any non-empty value that does not parse into its column type.
    pub fn into_fields(self) -> Result<ScheduleFields, CoreError> {
        let title = non_empty(self.title)
            .map(|t| t.trim().to_string())
            .ok_or_else(|| CoreError::Validation("Title is required".into()))?;

        let fields = ScheduleFields {
            title,
            event_type: non_empty(self.event_type)
                .map(|s| s.parse())
                .transpose()?,
            description: non_empty(self.description),
            date: non_empty(self.date)
                .map(|s| parse_date(&s))
                .transpose()?,
            start_time: non_empty(self.start_time)
                .map(|s| parse_time("start_time", &s))
                .transpose()?,
            end_time: non_empty(self.end_time)
                .map(|s| parse_time("end_time", &s))
                .transpose()?,
            day_of_week: non_empty(self.day_of_week)
                .map(|s| s.parse())
                .transpose()?,
            is_recurring: self.is_recurring.unwrap_or(false),
        };

        fields.validate().map_err(|errors| {
            let mut messages: Vec<String> = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            messages.sort();
            CoreError::Validation(messages.join("; "))
        })?;

        Ok(fields)
    }
}

impl From<&ScheduleEvent> for ScheduleInput {
    fn from(event: &ScheduleEvent) -> Self {
        Self {
            title: Some(event.title.clone()),
            event_type: event.event_type.map(|t| t.as_str().to_string()),
            description: event.description.clone(),
            date: event.date.map(|d| d.format("%Y-%m-%d").to_string()),
            start_time: event.start_time.map(format_time_of_day),
            end_time: event.end_time.map(format_time_of_day),
            day_of_week: event.day_of_week.map(|d| d.as_str().to_string()),
            is_recurring: Some(event.is_recurring),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Null-coalesce: `None` and whitespace-only strings both mean "not set".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CoreError::Validation(format!("Invalid date '{value}'. Expected YYYY-MM-DD"))
    })
}

/// Accepts `HH:MM` (what a time input submits) and `HH:MM:SS`.
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, CoreError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| {
            CoreError::Validation(format!(
                "Invalid {field} '{value}'. Expected a time of day (HH:MM)"
            ))
        })
}

/// `HH:MM`, the format a time input field expects, or `HH:MM:SS` when the
/// seconds are non-zero so the value parses back unchanged.
pub fn format_time_of_day(time: NaiveTime) -> String {
    if time.second() == 0 && time.nanosecond() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}
