//! Route definitions for the admin password check.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/admin/auth`.
///
/// ```text
/// POST /  -> authenticate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(auth::authenticate))
}
