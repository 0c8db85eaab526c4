//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` (or an open transaction) as the first argument.

pub mod channel_repo;
pub mod position_repo;
pub mod sighting_repo;
pub mod video_repo;

pub use channel_repo::ChannelRepo;
pub use position_repo::PositionRepo;
pub use sighting_repo::SightingRepo;
pub use video_repo::VideoRepo;
