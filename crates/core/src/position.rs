//! Position keys.
//!
//! Sightings are stored and looked up by the board-placement field of a FEN
//! string only. Side to move, castling rights, en-passant square and the move
//! counters are discarded so that the same arrangement of pieces matches
//! regardless of how the caller reached it.

/// Full FEN of the standard starting position, used when no `fen` is supplied.
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Default cap on the number of sighting rows returned for one position.
pub const DEFAULT_SIGHTING_LIMIT: i64 = 50;

/// Upper bound accepted for a configured sighting cap.
pub const MAX_SIGHTING_LIMIT: i64 = 1000;

/// Reduce a FEN string to its board-placement field.
///
/// Surrounding whitespace is trimmed, then everything from the first space
/// onward is dropped. No validation is performed: a string that is not a FEN
/// passes through unchanged apart from the trimming.
///
/// # Examples
///
/// ```
/// use fenscout_core::position::normalize_position_key;
/// assert_eq!(
///     normalize_position_key("  8/8/8/8/8/8/8/K6k w - - 0 1 "),
///     "8/8/8/8/8/8/8/K6k"
/// );
/// assert_eq!(normalize_position_key("8/8/8/8/8/8/8/K6k"), "8/8/8/8/8/8/8/K6k");
/// ```
pub fn normalize_position_key(fen: &str) -> &str {
    let trimmed = fen.trim();
    match trimmed.find(' ') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    }
}

/// Resolve the optional `fen` request parameter to a position key.
///
/// A missing or empty parameter falls back to [`STARTING_POSITION_FEN`].
pub fn position_key_or_default(fen: Option<&str>) -> &str {
    match fen {
        Some(fen) if !fen.is_empty() => normalize_position_key(fen),
        _ => normalize_position_key(STARTING_POSITION_FEN),
    }
}

/// Clamp a configured sighting cap to `1..=MAX_SIGHTING_LIMIT`.
pub fn clamp_sighting_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_SIGHTING_LIMIT)
        .clamp(1, MAX_SIGHTING_LIMIT)
}
