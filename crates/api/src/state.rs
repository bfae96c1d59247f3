use std::sync::Arc;

use courtside_db::ScheduleStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Schedule store adapter (Postgres or in-memory).
    pub store: Arc<dyn ScheduleStore>,
    /// Server configuration (secrets, session settings).
    pub config: Arc<ServerConfig>,
}
