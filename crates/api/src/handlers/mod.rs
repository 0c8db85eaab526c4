pub mod positions;
pub mod videos;
