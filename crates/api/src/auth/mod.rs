//! Authentication primitives.
//!
//! - [`session`] -- admin session token issue and validation.

pub mod session;
