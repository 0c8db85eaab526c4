//! Route definitions for indexed videos.
//!
//! Mounted at `/videos` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

/// Video routes mounted at `/videos`.
///
/// ```text
/// GET    /                      -> list_video_ids
/// POST   /                      -> ingest_video
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(videos::list_video_ids).post(videos::ingest_video))
}
