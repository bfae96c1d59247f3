//! Handler for the admin password check.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use courtside_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::session::issue_session_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /admin/auth`.
///
/// `password` is taken as any JSON value; only a string equal to the
/// configured secret matches, everything else is a mismatch.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub password: Option<serde_json::Value>,
}

/// Successful check: the session token to present on admin requests.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// POST /api/admin/auth
///
/// Compare the submitted password to `ADMIN_PASSWORD`. A missing server
/// secret is a 500; a mismatch is a 401 with a generic message.
pub async fn authenticate(
    State(state): State<AppState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> AppResult<Json<AuthResponse>> {
    let Json(input) = payload?;

    let Some(expected) = state.config.admin_password.as_deref() else {
        return Err(AppError::Config(
            "ADMIN_PASSWORD environment variable not set".into(),
        ));
    };

    if input.password.as_ref().and_then(|p| p.as_str()) != Some(expected) {
        tracing::warn!("Rejected admin password");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let secret = state.config.session_secret().unwrap_or(expected);
    let expiry_mins = state.config.session.expiry_mins;
    let token = issue_session_token(secret, expiry_mins)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!("Admin session started");

    Ok(Json(AuthResponse {
        success: true,
        token,
        expires_in: expiry_mins * 60,
    }))
}
