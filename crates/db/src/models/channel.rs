use fenscout_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `channels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Channel {
    pub id: String,
    pub channel_name: String,
    pub channel_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
