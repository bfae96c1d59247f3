//! Domain types and rules for the schedule resource.
//!
//! This crate has no internal dependencies so the store adapters, the HTTP
//! API and the client view-models all share one definition of what a
//! schedule event is and how lists are filtered and ordered.

pub mod error;
pub mod query;
pub mod schedule;
pub mod types;
