//! Client-side view-models for the public schedule, the admin panel and the
//! site navigation.
//!
//! Views talk to the server through the [`client::ScheduleApi`] trait;
//! [`client::HttpScheduleApi`] is the `reqwest` implementation. Browser
//! facilities (session storage, blocking alerts) sit behind small traits so
//! the views can be driven from tests.

pub mod admin;
pub mod cache;
pub mod client;
pub mod form;
pub mod format;
pub mod navigation;
pub mod prompt;
pub mod public;
pub mod session;
