//! Repository for the `positions` table.

use fenscout_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

/// Provides lookups and inserts for distinct position keys.
pub struct PositionRepo;

impl PositionRepo {
    /// Return the id for a position key, inserting it if it is new.
    ///
    /// `fen` must already be normalized to the board field.
    pub async fn find_or_create(
        tx: &mut Transaction<'_, Postgres>,
        fen: &str,
    ) -> Result<DbId, sqlx::Error> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO positions (fen) VALUES ($1) \
             ON CONFLICT (fen) DO UPDATE SET fen = EXCLUDED.fen \
             RETURNING id",
        )
        .bind(fen)
        .fetch_one(&mut **tx)
        .await?;
        Ok(id)
    }

    /// Find the id of a stored position key.
    pub async fn find_id_by_fen(pool: &PgPool, fen: &str) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM positions WHERE fen = $1")
            .bind(fen)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(id,)| id))
    }
}
