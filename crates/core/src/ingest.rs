//! Validation rules for indexing a processed video.
//!
//! The indexer submits one video at a time together with every position it
//! extracted from the video's frames. These checks run before anything is
//! written so a bad submission leaves no partial rows behind.

use crate::error::CoreError;
use crate::position::normalize_position_key;

/// Maximum length of a video or channel id.
pub const MAX_ID_LEN: usize = 64;

/// Validate a video or channel identifier.
///
/// `kind` names the field in the error message (e.g. `"Video id"`).
pub fn validate_external_id(kind: &str, id: &str) -> Result<(), CoreError> {
    if id.trim().is_empty() {
        return Err(CoreError::Validation(format!("{kind} must not be empty")));
    }
    if id.len() > MAX_ID_LEN {
        return Err(CoreError::Validation(format!(
            "{kind} must not exceed {MAX_ID_LEN} characters"
        )));
    }
    if id.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(format!("{kind} must not contain whitespace")));
    }
    Ok(())
}

/// Validate a video title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Video title must not be empty".to_string()));
    }
    Ok(())
}

/// Validate a video duration in seconds.
pub fn validate_length_secs(length_secs: i32) -> Result<(), CoreError> {
    if length_secs < 0 {
        return Err(CoreError::Validation(format!(
            "Video length must be non-negative, got {length_secs}"
        )));
    }
    Ok(())
}

/// Validate the offset of a sighting within its video.
pub fn validate_sec_into_video(sec_into_video: f64) -> Result<(), CoreError> {
    if !sec_into_video.is_finite() || sec_into_video < 0.0 {
        return Err(CoreError::Validation(format!(
            "secIntoVideo must be a finite, non-negative number, got {sec_into_video}"
        )));
    }
    Ok(())
}

/// Normalize a submitted FEN to its position key, rejecting blank input.
///
/// Uses the same normalization as lookups so stored keys always match.
pub fn position_key_for_ingest(fen: &str) -> Result<&str, CoreError> {
    let key = normalize_position_key(fen);
    if key.is_empty() {
        return Err(CoreError::Validation("fen must not be empty".to_string()));
    }
    Ok(key)
}
