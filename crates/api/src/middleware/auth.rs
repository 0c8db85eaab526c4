//! Bearer-token extractor for the ingest endpoint.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use fenscout_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the configured `INGEST_TOKEN`.
///
/// Add it as a handler parameter to restrict the handler to the indexer:
///
/// ```ignore
/// async fn ingest(_auth: IngestAuth, Json(input): Json<IngestVideo>) -> AppResult<()> {
///     Ok(())
/// }
/// ```
///
/// When no token is configured every request is rejected.
#[derive(Debug, Clone, Copy)]
pub struct IngestAuth;

impl FromRequestParts<AppState> for IngestAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let expected = state.config.ingest_token.as_deref().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Ingest is disabled".into()))
        })?;

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing Authorization header".into()))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if token != expected {
            tracing::warn!("Rejected ingest request with invalid token");
            return Err(AppError::Core(CoreError::Unauthorized("Invalid ingest token".into())));
        }

        Ok(IngestAuth)
    }
}
