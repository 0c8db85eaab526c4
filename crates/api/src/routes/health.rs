use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database is reachable and fully migrated, else `degraded`.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
    /// Newest migration applied to the database.
    pub schema_version: Option<i64>,
    /// Whether the applied schema matches the migrations this build embeds.
    pub schema_current: bool,
    /// Row cap applied to `/api/v1/vids` lookups.
    pub sighting_limit: i64,
}

/// GET /health -- database reachability, schema state and lookup settings.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = fenscout_db::health_check(&state.pool).await.is_ok();

    let schema_version = if db_healthy {
        fenscout_db::applied_schema_version(&state.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Could not read applied schema version");
                None
            })
    } else {
        None
    };
    let schema_current =
        schema_version.is_some() && schema_version == fenscout_db::expected_schema_version();

    let status = if db_healthy && schema_current { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
        schema_current,
        sighting_limit: state.config.sighting_limit,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
