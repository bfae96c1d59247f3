//! The admin create/edit form.

use courtside_core::schedule::{ScheduleEvent, ScheduleInput};

/// Form state as the inputs hold it: every typed field is a raw string and
/// an empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleForm {
    pub title: String,
    pub event_type: String,
    pub description: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub day_of_week: String,
    pub is_recurring: bool,
}

impl ScheduleForm {
    /// Copy every field of a stored record into the form.
    pub fn from_event(event: &ScheduleEvent) -> Self {
        let input = ScheduleInput::from(event);
        Self {
            title: input.title.unwrap_or_default(),
            event_type: input.event_type.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            date: input.date.unwrap_or_default(),
            start_time: input.start_time.unwrap_or_default(),
            end_time: input.end_time.unwrap_or_default(),
            day_of_week: input.day_of_week.unwrap_or_default(),
            is_recurring: input.is_recurring.unwrap_or(false),
        }
    }

    /// Request body for create or update. Empty strings are sent as-is; the
    /// server treats them as null.
    pub fn to_input(&self) -> ScheduleInput {
        ScheduleInput {
            title: Some(self.title.clone()),
            event_type: Some(self.event_type.clone()),
            description: Some(self.description.clone()),
            date: Some(self.date.clone()),
            start_time: Some(self.start_time.clone()),
            end_time: Some(self.end_time.clone()),
            day_of_week: Some(self.day_of_week.clone()),
            is_recurring: Some(self.is_recurring),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
