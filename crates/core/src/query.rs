//! List filtering and ordering rules.
//!
//! The store adapters and the public view both order and filter through
//! these functions, so the presentation order has a single definition.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::schedule::{EventType, ScheduleEvent};

/// Event-type selection on a schedule listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    All,
    Only(EventType),
}

impl EventFilter {
    /// A record passes iff the selection is `All` or its type equals the selection.
    /// Untyped records only pass `All`.
    pub fn matches(self, event: &ScheduleEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Only(wanted) => event.event_type == Some(wanted),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventFilter::All => "all",
            EventFilter::Only(t) => t.as_str(),
        }
    }
}

impl FromStr for EventFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(EventFilter::All),
            other => other.parse().map(EventFilter::Only),
        }
    }
}

/// Ordering of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOrder {
    /// Newest first. Used by the admin list.
    CreatedDesc,
    /// Chronological display order. Used by the public list.
    DisplayAsc,
}

/// A list request against a store adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: EventFilter,
    pub order: ScheduleOrder,
}

impl ListQuery {
    pub fn admin() -> Self {
        Self {
            filter: EventFilter::All,
            order: ScheduleOrder::CreatedDesc,
        }
    }

    pub fn public() -> Self {
        Self {
            filter: EventFilter::All,
            order: ScheduleOrder::DisplayAsc,
        }
    }

    pub fn with_filter(mut self, filter: EventFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Apply this query to an in-memory set of records.
    pub fn apply(&self, events: impl IntoIterator<Item = ScheduleEvent>) -> Vec<ScheduleEvent> {
        let mut out: Vec<ScheduleEvent> = events
            .into_iter()
            .filter(|e| self.filter.matches(e))
            .collect();
        match self.order {
            ScheduleOrder::CreatedDesc => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ScheduleOrder::DisplayAsc => out.sort_by(compare_for_display),
        }
        out
    }
}

/// Display order of the public schedule.
///
/// Primary key is `date` ascending with undated records after every dated
/// one. Ties compare `start_time` ascending with a missing time first.
/// `created_at` breaks any remaining tie so the order is total.
pub fn compare_for_display(a: &ScheduleEvent, b: &ScheduleEvent) -> Ordering {
    let by_date = match (a.date, b.date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    // Option's derived Ord already puts None first.
    by_date
        .then_with(|| a.start_time.cmp(&b.start_time))
        .then_with(|| a.created_at.cmp(&b.created_at))
}

/// Number of dated records on or after `today`. Undated records are ignored.
pub fn upcoming_count<'a>(events: impl IntoIterator<Item = &'a ScheduleEvent>, today: NaiveDate) -> usize {
    events
        .into_iter()
        .filter(|e| e.date.is_some_and(|d| d >= today))
        .count()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::schedule::ScheduleFields;

    fn event(title: &str, date: Option<&str>, start: Option<&str>, kind: Option<EventType>) -> ScheduleEvent {
        let mut fields = ScheduleFields::titled(title);
        fields.date = date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap());
        fields.start_time = start.map(|t| NaiveTime::parse_from_str(t, "%H:%M").unwrap());
        fields.event_type = kind;
        ScheduleEvent::from_fields(Uuid::now_v7(), Utc::now(), fields)
    }

    fn titles(events: &[ScheduleEvent]) -> Vec<&str> {
        events.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn earlier_start_time_sorts_first_on_same_date() {
        let ten = event("ten", Some("2024-06-01"), Some("10:00"), None);
        let nine = event("nine", Some("2024-06-01"), Some("09:00"), None);
        let undated = event("undated", None, Some("08:00"), None);

        let sorted = ListQuery::public().apply(vec![ten, undated, nine]);
        assert_eq!(titles(&sorted), ["nine", "ten", "undated"]);
    }

    #[test]
    fn missing_start_time_sorts_first_within_a_date() {
        let timed = event("timed", Some("2024-06-01"), Some("09:00"), None);
        let untimed = event("untimed", Some("2024-06-01"), None, None);

        let sorted = ListQuery::public().apply(vec![timed, untimed]);
        assert_eq!(titles(&sorted), ["untimed", "timed"]);
    }

    #[test]
    fn dates_dominate_start_times() {
        let late_day_early_time = event("b", Some("2024-06-02"), Some("06:00"), None);
        let early_day_late_time = event("a", Some("2024-06-01"), Some("20:00"), None);

        let sorted = ListQuery::public().apply(vec![late_day_early_time, early_day_late_time]);
        assert_eq!(titles(&sorted), ["a", "b"]);
    }

    #[test]
    fn admin_order_is_newest_first() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut old = event("old", None, None, None);
        old.created_at = base;
        let mut new = event("new", None, None, None);
        new.created_at = base + Duration::minutes(5);

        let sorted = ListQuery::admin().apply(vec![old, new]);
        assert_eq!(titles(&sorted), ["new", "old"]);
    }

    #[test]
    fn filter_selects_one_type_and_all_restores_everything() {
        let events = vec![
            event("cup", None, None, Some(EventType::Tournament)),
            event("gym", None, None, Some(EventType::OpenGym)),
            event("untyped", None, None, None),
        ];

        let tournaments = ListQuery::public()
            .with_filter(EventFilter::Only(EventType::Tournament))
            .apply(events.clone());
        assert_eq!(titles(&tournaments), ["cup"]);

        let all = ListQuery::public().with_filter(EventFilter::All).apply(events.clone());
        assert_eq!(all.len(), events.len());
    }

    #[test]
    fn filter_parses_all_and_event_types() {
        assert_eq!("all".parse::<EventFilter>().unwrap(), EventFilter::All);
        assert_eq!(
            "open_gym".parse::<EventFilter>().unwrap(),
            EventFilter::Only(EventType::OpenGym)
        );
        assert!("bogus".parse::<EventFilter>().is_err());
    }

    #[test]
    fn upcoming_count_includes_today_and_skips_undated() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let events = vec![
            event("yesterday", Some("2024-05-31"), None, None),
            event("today", Some("2024-06-01"), None, None),
            event("later", Some("2024-07-01"), None, None),
            event("undated", None, None, None),
        ];

        assert_eq!(upcoming_count(&events, today), 2);
    }
}
