//! Authorization extractors.
//!
//! - [`auth::RequireAdmin`] -- requires a valid admin session token.

pub mod auth;
