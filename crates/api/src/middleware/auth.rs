//! Session-token extractor for admin handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use courtside_core::error::CoreError;

use crate::auth::session::{validate_session_token, SessionClaims};
use crate::error::AppError;
use crate::state::AppState;

/// Requires a valid admin session token in the `Authorization` header.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(session): RequireAdmin) -> AppResult<Json<()>> {
///     tracing::info!(session = %session.jti, "handling admin request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub SessionClaims);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let secret = state
            .config
            .session_secret()
            .ok_or_else(|| AppError::Config("No session secret or ADMIN_PASSWORD configured".into()))?;

        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_session_token(token, secret).map_err(|e| {
            tracing::debug!(error = %e, "Rejected admin session token");
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        Ok(RequireAdmin(claims))
    }
}
