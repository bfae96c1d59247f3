//! Route definitions for the schedule resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Public routes mounted at `/schedule`.
///
/// ```text
/// GET /  -> list_public
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(schedule::list_public))
}

/// Admin routes mounted at `/admin/schedule`. The target of update and
/// delete is selected with `?id=`.
///
/// ```text
/// GET    /       -> list_admin
/// POST   /       -> create
/// PUT    /?id=   -> update
/// DELETE /?id=   -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(schedule::list_admin)
            .post(schedule::create)
            .put(schedule::update)
            .delete(schedule::delete),
    )
}
