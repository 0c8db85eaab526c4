//! Shared response envelope for API handlers.
//!
//! Indexing endpoints use a `{ "data": ... }` envelope. The position lookup
//! (`/vids`) returns a bare array because that is the shape its consumers read.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
