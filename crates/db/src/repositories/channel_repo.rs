//! Repository for the `channels` table.

use sqlx::{PgPool, Postgres, Transaction};

use crate::models::channel::Channel;

/// Column list for `channels` queries.
const COLUMNS: &str = "id, channel_name, channel_url, created_at, updated_at";

/// Provides query operations for uploading channels.
pub struct ChannelRepo;

impl ChannelRepo {
    /// Insert a channel, or refresh its display fields if it already exists.
    ///
    /// A `None` URL leaves the stored one untouched.
    pub async fn upsert(
        tx: &mut Transaction<'_, Postgres>,
        id: &str,
        channel_name: &str,
        channel_url: Option<&str>,
    ) -> Result<Channel, sqlx::Error> {
        let query = format!(
            "INSERT INTO channels (id, channel_name, channel_url) \
             VALUES ($1, $2, COALESCE($3, '')) \
             ON CONFLICT (id) DO UPDATE \
             SET channel_name = EXCLUDED.channel_name, \
                 channel_url = COALESCE($3, channels.channel_url), \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Channel>(&query)
            .bind(id)
            .bind(channel_name)
            .bind(channel_url)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a channel by its external id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Channel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM channels WHERE id = $1");
        sqlx::query_as::<_, Channel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
