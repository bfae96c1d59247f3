//! Database row structs.

pub mod schedule;
