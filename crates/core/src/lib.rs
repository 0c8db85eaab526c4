//! Domain logic for fenscout: position keys, sighting aggregation, and the
//! validation rules applied when indexing videos.
//!
//! This crate has no I/O and no internal workspace dependencies so it can be
//! shared by the repository layer, the API, and any future indexing tooling.

pub mod error;
pub mod ingest;
pub mod position;
pub mod sighting;
pub mod timestamp;
pub mod types;
