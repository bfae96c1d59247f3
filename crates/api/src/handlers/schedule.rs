//! Handlers for the schedule resource.
//!
//! The public list is unauthenticated and returns a bare array in display
//! order. The admin endpoints require a session token and wrap payloads in
//! the `{ "data": ... }` envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use courtside_core::query::ListQuery;
use courtside_core::schedule::{ScheduleEvent, ScheduleInput};

use crate::error::AppResult;
use crate::middleware::auth::RequireAdmin;
use crate::query::{IdParams, ListParams};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/schedule
///
/// All events ordered by date (undated last), then start time.
/// Returns `[]` when there are none.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<ScheduleEvent>>> {
    let query = ListQuery::public().with_filter(params.filter()?);
    let events = state.store.list(&query).await?;
    Ok(Json(events))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/schedule
///
/// All events, newest first.
pub async fn list_admin(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<ScheduleEvent>>>> {
    let query = ListQuery::admin().with_filter(params.filter()?);
    let events = state.store.list(&query).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /api/admin/schedule
///
/// Create an event. Responds with the created record in a one-element array.
pub async fn create(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    payload: Result<Json<ScheduleInput>, JsonRejection>,
) -> AppResult<Json<DataResponse<Vec<ScheduleEvent>>>> {
    let Json(input) = payload?;
    let fields = input.into_fields()?;
    let event = state.store.insert(&fields).await?;

    tracing::info!(
        schedule_id = %event.id,
        title = %event.title,
        session = %session.jti,
        "Schedule item created",
    );

    Ok(Json(DataResponse { data: vec![event] }))
}

/// PUT /api/admin/schedule?id=
///
/// Full replace: every mutable field is overwritten by the body.
pub async fn update(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
    payload: Result<Json<ScheduleInput>, JsonRejection>,
) -> AppResult<Json<DataResponse<Vec<ScheduleEvent>>>> {
    let id = params.require()?;
    let Json(input) = payload?;
    let fields = input.into_fields()?;
    let event = state.store.update_by_id(id, &fields).await?;

    tracing::info!(
        schedule_id = %id,
        title = %event.title,
        session = %session.jti,
        "Schedule item updated",
    );

    Ok(Json(DataResponse { data: vec![event] }))
}

/// DELETE /api/admin/schedule?id=
pub async fn delete(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<MessageResponse>> {
    let id = params.require()?;
    state.store.delete_by_id(id).await?;

    tracing::info!(schedule_id = %id, session = %session.jti, "Schedule item deleted");

    Ok(Json(MessageResponse {
        message: "Schedule item deleted successfully".into(),
    }))
}
