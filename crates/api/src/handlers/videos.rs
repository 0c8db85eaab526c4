//! Handlers for indexing processed videos.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fenscout_core::ingest;
use fenscout_db::models::video::IngestVideo;
use fenscout_db::repositories::VideoRepo;

use crate::error::AppResult;
use crate::middleware::auth::IngestAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Validate an ingest submission before anything is written.
fn validate_ingest_input(input: &IngestVideo) -> AppResult<()> {
    ingest::validate_external_id("Video id", &input.video_id)?;
    ingest::validate_external_id("Channel id", &input.channel_id)?;
    ingest::validate_title(&input.title)?;
    ingest::validate_length_secs(input.length_secs)?;
    for sighting in &input.sightings {
        ingest::position_key_for_ingest(&sighting.fen)?;
        ingest::validate_sec_into_video(sighting.sec_into_video)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// POST /videos
// ---------------------------------------------------------------------------

/// Store a processed video and its sightings. Replaces earlier sightings of
/// the same video. Requires the indexer's bearer token.
pub async fn ingest_video(
    _auth: IngestAuth,
    State(state): State<AppState>,
    Json(input): Json<IngestVideo>,
) -> AppResult<impl IntoResponse> {
    validate_ingest_input(&input)?;

    let summary = VideoRepo::ingest(&state.pool, &input).await?;

    tracing::info!(
        video_id = %summary.video_id,
        channel_id = %input.channel_id,
        sightings = summary.sighting_count,
        positions = summary.position_count,
        "Video indexed",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: summary })))
}

// ---------------------------------------------------------------------------
// GET /videos
// ---------------------------------------------------------------------------

/// List the ids of every processed video.
pub async fn list_video_ids(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ids = VideoRepo::list_ids(&state.pool).await?;
    Ok(Json(DataResponse { data: ids }))
}
