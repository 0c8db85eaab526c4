//! Display labels and deep links for sightings.

/// Base URL for watching a video by id.
pub const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Format a number of seconds as `MM:SS`, or `H:MM:SS` past the first hour.
///
/// Fractional seconds are floored. Negative and non-finite inputs render as
/// `00:00`.
///
/// # Examples
///
/// ```
/// use fenscout_core::timestamp::format_timestamp;
/// assert_eq!(format_timestamp(27.9), "00:27");
/// assert_eq!(format_timestamp(3725.0), "1:02:05");
/// ```
pub fn format_timestamp(total_secs: f64) -> String {
    let total = whole_seconds(total_secs);
    let hrs = total / 3600;
    let min = (total % 3600) / 60;
    let sec = total % 60;

    if hrs > 0 {
        format!("{hrs}:{min:02}:{sec:02}")
    } else {
        format!("{min:02}:{sec:02}")
    }
}

/// Link to a video.
pub fn video_url(video_id: &str) -> String {
    format!("{WATCH_URL_BASE}{video_id}")
}

/// Link to a video that starts playback at the given offset.
pub fn video_url_at(video_id: &str, sec_into_video: f64) -> String {
    format!("{}&t={}s", video_url(video_id), whole_seconds(sec_into_video))
}

fn whole_seconds(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_padded() {
        assert_eq!(format_timestamp(0.0), "00:00");
    }

    #[test]
    fn under_an_hour_has_no_hour_component() {
        assert_eq!(format_timestamp(59.99), "00:59");
        assert_eq!(format_timestamp(605.0), "10:05");
        assert_eq!(format_timestamp(3599.0), "59:59");
    }

    #[test]
    fn hours_are_not_padded() {
        assert_eq!(format_timestamp(3600.0), "1:00:00");
        assert_eq!(format_timestamp(36_061.5), "10:01:01");
    }

    #[test]
    fn invalid_inputs_render_as_zero() {
        assert_eq!(format_timestamp(-4.0), "00:00");
        assert_eq!(format_timestamp(f64::NAN), "00:00");
    }

    #[test]
    fn deep_link_floors_offset() {
        assert_eq!(
            video_url_at("GqdveDSL2SA", 27.9),
            "https://www.youtube.com/watch?v=GqdveDSL2SA&t=27s"
        );
    }

    #[test]
    fn plain_link() {
        assert_eq!(
            video_url("GqdveDSL2SA"),
            "https://www.youtube.com/watch?v=GqdveDSL2SA"
        );
    }
}
