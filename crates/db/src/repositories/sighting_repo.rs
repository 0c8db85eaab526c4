//! Repository for the `position_sightings` table and the position lookup.

use fenscout_core::sighting::Sighting;
use fenscout_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::sighting::SightingRow;

/// Provides the position lookup and sighting writes.
pub struct SightingRepo;

impl SightingRepo {
    /// Every sighting of a position, joined with video and channel metadata.
    ///
    /// Rows are contiguous per video (ordered by video id) and ascending by
    /// `sec_into_video` within a video. At most `limit` rows are returned,
    /// so a video near the cap may be cut short.
    ///
    /// `fen` must already be normalized to the board field.
    pub async fn find_by_position(
        pool: &PgPool,
        fen: &str,
        limit: i64,
    ) -> Result<Vec<Sighting>, sqlx::Error> {
        let rows = sqlx::query_as::<_, SightingRow>(
            "SELECT v.id AS video_id, v.title AS video_title, \
                    v.length_secs AS video_length, v.thumbnail_url, \
                    c.channel_name, c.channel_url, ps.sec_into_video \
             FROM positions p \
             JOIN position_sightings ps ON ps.position_id = p.id \
             JOIN videos v ON v.id = ps.video_id \
             JOIN channels c ON c.id = v.channel_id \
             WHERE p.fen = $1 \
             ORDER BY v.id, ps.sec_into_video, ps.id \
             LIMIT $2",
        )
        .bind(fen)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Sighting::from).collect())
    }

    /// Record one sighting.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        position_id: DbId,
        video_id: &str,
        sec_into_video: f64,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO position_sightings (position_id, video_id, sec_into_video) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(position_id)
        .bind(video_id)
        .bind(sec_into_video)
        .fetch_one(&mut **tx)
        .await?;
        Ok(id)
    }

    /// Remove every sighting recorded for a video. Returns the number removed.
    pub async fn delete_for_video(
        tx: &mut Transaction<'_, Postgres>,
        video_id: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM position_sightings WHERE video_id = $1")
            .bind(video_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }

    /// Count the sightings recorded for a video.
    pub async fn count_for_video(pool: &PgPool, video_id: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM position_sightings WHERE video_id = $1")
                .bind(video_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
