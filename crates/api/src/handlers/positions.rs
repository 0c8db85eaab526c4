//! Handlers for position lookups.
//!
//! Resolves a FEN to the videos in which its board placement was seen,
//! grouped per video with every timestamp.

use axum::extract::{Query, State};
use axum::Json;
use fenscout_core::position::position_key_or_default;
use fenscout_core::sighting::{aggregate, inconsistent_video_ids, VideoGroup};
use fenscout_db::repositories::SightingRepo;

use crate::error::AppResult;
use crate::query::PositionParams;
use crate::state::AppState;

/// GET /api/v1/vids?fen=
///
/// Returns a bare JSON array of videos. A missing or empty `fen` looks up
/// the starting position. Unknown positions yield `[]`.
pub async fn videos_for_position(
    State(state): State<AppState>,
    Query(params): Query<PositionParams>,
) -> AppResult<Json<Vec<VideoGroup>>> {
    let key = position_key_or_default(params.fen.as_deref());

    let rows =
        SightingRepo::find_by_position(&state.pool, key, state.config.sighting_limit).await?;
    let row_count = rows.len();

    let inconsistent = inconsistent_video_ids(&rows);
    if !inconsistent.is_empty() {
        tracing::warn!(
            fen = key,
            video_ids = ?inconsistent,
            "Sighting rows disagree on video metadata; using first row per video",
        );
    }

    let groups = aggregate(rows);

    tracing::debug!(
        fen = key,
        rows = row_count,
        videos = groups.len(),
        capped = (row_count as i64) >= state.config.sighting_limit,
        "Position lookup",
    );

    Ok(Json(groups))
}
