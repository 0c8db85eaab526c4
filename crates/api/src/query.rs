//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the position lookup (`?fen=`).
///
/// The full FEN is accepted; only the board field is used.
#[derive(Debug, Deserialize)]
pub struct PositionParams {
    pub fen: Option<String>,
}
