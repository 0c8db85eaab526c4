//! Grouping of position sightings by video.
//!
//! The sighting query returns one flat row per (video, timestamp) pair with
//! the video's metadata repeated on every row. [`aggregate`] folds those rows
//! into one [`VideoGroup`] per video.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::timestamp::{format_timestamp, video_url, video_url_at};

/// One occurrence of a position in a video, with the video's metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sighting {
    pub video_id: String,
    pub video_title: String,
    /// Video duration in seconds.
    pub video_length: i32,
    pub thumbnail_url: String,
    pub channel_name: String,
    pub channel_url: String,
    pub sec_into_video: f64,
}

impl Sighting {
    /// Whether two rows agree on every video-level field.
    pub fn same_video_metadata(&self, other: &Sighting) -> bool {
        self.video_id == other.video_id
            && self.video_title == other.video_title
            && self.video_length == other.video_length
            && self.thumbnail_url == other.thumbnail_url
            && self.channel_name == other.channel_name
            && self.channel_url == other.channel_url
    }
}

/// A single sighting inside a [`VideoGroup`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSighting {
    pub sec_into_video: f64,
    /// `MM:SS` / `H:MM:SS` label for display.
    pub timestamp: String,
    /// Watch link starting at this sighting.
    pub url: String,
}

impl PositionSighting {
    pub fn new(video_id: &str, sec_into_video: f64) -> Self {
        Self {
            sec_into_video,
            timestamp: format_timestamp(sec_into_video),
            url: video_url_at(video_id, sec_into_video),
        }
    }
}

/// All sightings of a position within one video.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGroup {
    pub video_id: String,
    pub video_title: String,
    pub video_length: i32,
    pub video_url: String,
    pub thumbnail_url: String,
    pub channel_name: String,
    pub channel_url: String,
    /// Never empty.
    pub sightings: Vec<PositionSighting>,
}

impl VideoGroup {
    fn seed(first: Sighting) -> Self {
        let sighting = PositionSighting::new(&first.video_id, first.sec_into_video);
        Self {
            video_url: video_url(&first.video_id),
            video_id: first.video_id,
            video_title: first.video_title,
            video_length: first.video_length,
            thumbnail_url: first.thumbnail_url,
            channel_name: first.channel_name,
            channel_url: first.channel_url,
            sightings: vec![sighting],
        }
    }

    fn push(&mut self, sec_into_video: f64) {
        self.sightings.push(PositionSighting::new(&self.video_id, sec_into_video));
    }
}

/// Group flat sighting rows into one [`VideoGroup`] per distinct video id.
///
/// - Videos are emitted in the order their first row appears.
/// - Within a video, sightings keep input order. They are not re-sorted, so
///   chronological order relies on the query sorting by `sec_into_video`.
/// - Metadata comes from the first row of each video; later rows only
///   contribute their timestamp.
///
/// Duplicate timestamps are kept.
pub fn aggregate<I>(sightings: I) -> Vec<VideoGroup>
where
    I: IntoIterator<Item = Sighting>,
{
    let mut groups: IndexMap<String, VideoGroup> = IndexMap::new();

    for sighting in sightings {
        match groups.get_mut(&sighting.video_id) {
            Some(group) => group.push(sighting.sec_into_video),
            None => {
                let key = sighting.video_id.clone();
                groups.insert(key, VideoGroup::seed(sighting));
            }
        }
    }

    groups.into_values().collect()
}

/// Video ids whose rows disagree with the first row on video metadata.
///
/// Ids are returned once each, in first-seen order. An empty result means
/// every row satisfies the replication invariant.
pub fn inconsistent_video_ids(sightings: &[Sighting]) -> Vec<String> {
    let mut first_rows: IndexMap<&str, &Sighting> = IndexMap::new();
    let mut inconsistent: IndexSet<&str> = IndexSet::new();

    for sighting in sightings {
        match first_rows.get(sighting.video_id.as_str()) {
            Some(first) if !first.same_video_metadata(sighting) => {
                inconsistent.insert(sighting.video_id.as_str());
            }
            Some(_) => {}
            None => {
                first_rows.insert(sighting.video_id.as_str(), sighting);
            }
        }
    }

    inconsistent.into_iter().map(str::to_string).collect()
}
