pub mod auth;
pub mod health;
pub mod schedule;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /schedule                  public list (GET)
///
/// /admin/auth                password check (POST)
/// /admin/schedule            list, create, update, delete (session token required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/schedule", schedule::public_router())
        .nest("/admin/auth", auth::router())
        .nest("/admin/schedule", schedule::admin_router())
}
