//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching a
//! database row and, where the API writes to the table, a `Deserialize` DTO.

pub mod channel;
pub mod sighting;
pub mod video;
