//! Cached admin list.
//!
//! Views read the list through a [`ListCache`]. Every successful mutation
//! invalidates it before re-fetching, so a stale list is never served after
//! a write made by this client.

use std::sync::{Arc, Mutex};

use courtside_core::schedule::ScheduleEvent;

pub trait ListCache: Send + Sync {
    fn get(&self) -> Option<Vec<ScheduleEvent>>;
    fn put(&self, events: Vec<ScheduleEvent>);
    fn invalidate(&self);
}

/// Single-slot in-memory [`ListCache`]. Clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryListCache {
    slot: Arc<Mutex<Option<Vec<ScheduleEvent>>>>,
}

impl MemoryListCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListCache for MemoryListCache {
    fn get(&self) -> Option<Vec<ScheduleEvent>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn put(&self, events: Vec<ScheduleEvent>) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(events);
    }

    fn invalidate(&self) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
