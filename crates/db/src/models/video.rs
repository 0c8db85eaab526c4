//! Video model and the ingest DTOs submitted by the indexer.

use fenscout_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: String,
    pub channel_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub length_secs: i32,
    pub views: Option<i64>,
    pub processed_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A processed video and every position extracted from it.
///
/// Re-submitting a video replaces its previous sightings. Omitted URLs keep
/// whatever is already stored and default to `""` on first insert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestVideo {
    pub video_id: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub length_secs: i32,
    pub views: Option<i64>,
    pub channel_id: String,
    pub channel_name: String,
    pub channel_url: Option<String>,
    #[serde(default)]
    pub sightings: Vec<IngestSighting>,
}

/// A position observed at an offset into the video.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestSighting {
    /// Full FEN or board field only; stored normalized.
    pub fen: String,
    pub sec_into_video: f64,
}

/// Result of a successful ingest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestSummary {
    pub video_id: String,
    pub sighting_count: usize,
    pub position_count: usize,
}
