use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use family_budget_core::types::Timestamp;
use family_budget_db::DatabaseStatus;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database is reachable, otherwise `degraded`.
    pub status: &'static str,
    pub timestamp: Timestamp,
    pub database: DatabaseStatus,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /api/health -- returns service and database health.
///
/// Responds 500 with the same body when the database is not connected.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = family_budget_db::probe(&state.pool).await;

    let (code, status) = if database.is_healthy() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            timestamp: chrono::Utc::now(),
            database,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
