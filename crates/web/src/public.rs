//! Public schedule view-model.

use chrono::{Local, NaiveDate};
use courtside_core::query::{self, EventFilter, ListQuery};
use courtside_core::schedule::ScheduleEvent;

use crate::client::ScheduleApi;
use crate::format::EventCard;

/// The list is fetched once per page load and filtered locally.
#[derive(Debug, Default)]
pub struct PublicScheduleView {
    events: Vec<ScheduleEvent>,
    filter: EventFilter,
    loaded: bool,
    load_error: Option<String>,
}

impl PublicScheduleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a filter already selected, e.g. from a navigation link.
    pub fn with_filter(filter: EventFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Fetch the full list. Only the first call does anything; a failed
    /// fetch leaves the list empty and records the error.
    pub async fn load<A: ScheduleApi + ?Sized>(&mut self, api: &A) {
        if self.loaded {
            return;
        }
        self.loaded = true;

        match api.list_public(EventFilter::All).await {
            Ok(events) => {
                tracing::debug!(count = events.len(), "Loaded public schedule");
                self.events = events;
                self.load_error = None;
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching schedules");
                self.events.clear();
                self.load_error = Some(err.to_string());
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn filter(&self) -> EventFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: EventFilter) {
        self.filter = filter;
    }

    /// Records passing the filter, in display order.
    pub fn visible(&self) -> Vec<ScheduleEvent> {
        ListQuery::public()
            .with_filter(self.filter)
            .apply(self.events.iter().cloned())
    }

    pub fn cards(&self) -> Vec<EventCard> {
        self.visible().iter().map(EventCard::from).collect()
    }

    /// Dated records on or after `today`, regardless of the filter.
    pub fn upcoming_count(&self, today: NaiveDate) -> usize {
        query::upcoming_count(&self.events, today)
    }

    /// [`upcoming_count`](Self::upcoming_count) from the start of the
    /// current local calendar day.
    pub fn upcoming_count_today(&self) -> usize {
        self.upcoming_count(Local::now().date_naive())
    }
}
