//! Request extractors that guard write endpoints.
//!
//! - [`auth::IngestAuth`] -- Requires the indexer's bearer token.

pub mod auth;
