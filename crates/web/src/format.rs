//! Display formatting for schedule cards.

use chrono::{NaiveDate, NaiveTime};
use courtside_core::schedule::{EventType, ScheduleEvent};

/// `Saturday, June 1, 2024`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// `7:00 PM`
pub fn twelve_hour(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// `7:00 PM - 9:00 PM`, or whichever end is known.
pub fn time_range(start: Option<NaiveTime>, end: Option<NaiveTime>) -> Option<String> {
    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{} - {}", twelve_hour(s), twelve_hour(e))),
        (Some(s), None) => Some(twelve_hour(s)),
        (None, Some(e)) => Some(format!("Until {}", twelve_hour(e))),
        (None, None) => None,
    }
}

pub fn event_type_label(kind: EventType) -> &'static str {
    match kind {
        EventType::Tournament => "Tournament",
        EventType::OpenGym => "Open Gym",
    }
}

/// `Every Tuesday` for a recurring event with a day, `Recurring` without one.
pub fn recurrence_label(event: &ScheduleEvent) -> Option<String> {
    if !event.is_recurring {
        return None;
    }
    Some(match event.day_of_week {
        Some(day) => format!("Every {day}"),
        None => "Recurring".to_string(),
    })
}

/// One rendered schedule card. Absent parts are `None` and not shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub title: String,
    pub type_label: Option<&'static str>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub recurrence: Option<String>,
    pub description: Option<String>,
}

impl From<&ScheduleEvent> for EventCard {
    fn from(event: &ScheduleEvent) -> Self {
        Self {
            title: event.title.clone(),
            type_label: event.event_type.map(event_type_label),
            date: event.date.map(long_date),
            time: time_range(event.start_time, event.end_time),
            recurrence: recurrence_label(event),
            description: event.description.clone(),
        }
    }
}
