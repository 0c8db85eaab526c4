//! Repository for the `videos` table and the ingest transaction.

use std::collections::HashMap;

use fenscout_core::position::normalize_position_key;
use fenscout_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::video::{IngestSummary, IngestVideo, Video};
use crate::repositories::{ChannelRepo, PositionRepo, SightingRepo};

/// Column list for `videos` queries.
const COLUMNS: &str = "\
    id, channel_id, title, thumbnail_url, length_secs, views, \
    processed_at, created_at, updated_at";

/// Provides query operations for indexed videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Persist a processed video with its channel, positions and sightings.
    ///
    /// Runs in a single transaction. The channel and video rows are upserted
    /// and any sightings from an earlier run of the same video are replaced.
    /// Input is expected to have been validated by the caller.
    pub async fn ingest(pool: &PgPool, input: &IngestVideo) -> Result<IngestSummary, sqlx::Error> {
        let mut tx = pool.begin().await?;

        ChannelRepo::upsert(
            &mut tx,
            &input.channel_id,
            &input.channel_name,
            input.channel_url.as_deref(),
        )
        .await?;
        Self::upsert(&mut tx, input).await?;

        let replaced = SightingRepo::delete_for_video(&mut tx, &input.video_id).await?;

        let mut position_ids: HashMap<&str, DbId> = HashMap::new();
        for sighting in &input.sightings {
            let key = normalize_position_key(&sighting.fen);
            let position_id = match position_ids.get(key) {
                Some(&id) => id,
                None => {
                    let id = PositionRepo::find_or_create(&mut tx, key).await?;
                    position_ids.insert(key, id);
                    id
                }
            };
            SightingRepo::create(
                &mut tx,
                position_id,
                &input.video_id,
                sighting.sec_into_video,
            )
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(
            video_id = %input.video_id,
            sightings = input.sightings.len(),
            positions = position_ids.len(),
            replaced,
            "Video ingested",
        );

        Ok(IngestSummary {
            video_id: input.video_id.clone(),
            sighting_count: input.sightings.len(),
            position_count: position_ids.len(),
        })
    }

    /// Insert a video row, or refresh its metadata and `processed_at`.
    ///
    /// Omitted `thumbnail_url` and `views` keep their stored values.
    pub async fn upsert(
        tx: &mut Transaction<'_, Postgres>,
        input: &IngestVideo,
    ) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (id, channel_id, title, thumbnail_url, length_secs, views) \
             VALUES ($1, $2, $3, COALESCE($4, ''), $5, $6) \
             ON CONFLICT (id) DO UPDATE \
             SET channel_id = EXCLUDED.channel_id, \
                 title = EXCLUDED.title, \
                 thumbnail_url = COALESCE($4, videos.thumbnail_url), \
                 length_secs = EXCLUDED.length_secs, \
                 views = COALESCE(EXCLUDED.views, videos.views), \
                 processed_at = NOW(), \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.video_id)
            .bind(&input.channel_id)
            .bind(&input.title)
            .bind(&input.thumbnail_url)
            .bind(input.length_secs)
            .bind(input.views)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a video by its external id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Ids of every processed video, ascending.
    pub async fn list_ids(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT id FROM videos ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
