//! Flat sighting rows produced by the position lookup join.

use fenscout_core::sighting::Sighting;
use sqlx::FromRow;

/// One `position_sightings` row joined with its video and channel.
#[derive(Debug, Clone, FromRow)]
pub struct SightingRow {
    pub video_id: String,
    pub video_title: String,
    pub video_length: i32,
    pub thumbnail_url: String,
    pub channel_name: String,
    pub channel_url: String,
    pub sec_into_video: f64,
}

impl From<SightingRow> for Sighting {
    fn from(row: SightingRow) -> Self {
        Sighting {
            video_id: row.video_id,
            video_title: row.video_title,
            video_length: row.video_length,
            thumbnail_url: row.thumbnail_url,
            channel_name: row.channel_name,
            channel_url: row.channel_url,
            sec_into_video: row.sec_into_video,
        }
    }
}
