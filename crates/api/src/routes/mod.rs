pub mod health;
pub mod positions;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /vids?fen=                 videos containing a position (GET)
///
/// /videos                    list processed video ids (GET), ingest (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(positions::router())
        .nest("/videos", videos::router())
}
