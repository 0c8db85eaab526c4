//! Route definitions for position lookups.

use axum::routing::get;
use axum::Router;

use crate::handlers::positions;
use crate::state::AppState;

/// ```text
/// GET    /vids                  -> videos_for_position
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/vids", get(positions::videos_for_position))
}
