//! Integration tests for ingest and the position lookup.
//!
//! Exercises the repository layer against a real database:
//! - Ingest writes channel, video, positions and sightings
//! - Re-ingesting a video replaces its sightings
//! - Lookup ordering (contiguous per video, ascending time) and the row cap

use fenscout_db::models::video::{IngestSighting, IngestVideo};
use fenscout_db::repositories::{ChannelRepo, PositionRepo, SightingRepo, VideoRepo};
use sqlx::PgPool;

const FEN_1: &str = "2kr3r/ppp2pp1/5n1p/4n1N1/2Pqp1b1/3P2P1/P1PQ1PBP/1RB2RK1";
const FEN_2: &str = "8/1pq2ppk/r1p1nn1p/p1b1p3/P1N1P1BP/2P1B1P1/1P2QPK1/3R4";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn video(video_id: &str, channel_id: &str, sightings: &[(&str, f64)]) -> IngestVideo {
    IngestVideo {
        video_id: video_id.to_string(),
        title: format!("{video_id} title"),
        thumbnail_url: Some(format!("https://i.ytimg.com/vi/{video_id}/sddefault.jpg")),
        length_secs: 754,
        views: Some(1200),
        channel_id: channel_id.to_string(),
        channel_name: format!("{channel_id} name"),
        channel_url: Some(format!("https://www.youtube.com/channel/{channel_id}")),
        sightings: sightings
            .iter()
            .map(|(fen, sec)| IngestSighting {
                fen: fen.to_string(),
                sec_into_video: *sec,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Ingest
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn ingest_persists_full_hierarchy(pool: PgPool) {
    let mut sightings = Vec::new();
    for i in 0..4 {
        sightings.push((FEN_1, i as f64));
    }
    for i in 0..4 {
        sightings.push((FEN_2, i as f64));
    }
    let input = video("TsR154sQMVo", "UCweCc7bSMX5J4jEH7HFImng", &sightings);

    let summary = VideoRepo::ingest(&pool, &input).await.unwrap();
    assert_eq!(summary.video_id, "TsR154sQMVo");
    assert_eq!(summary.sighting_count, 8);
    assert_eq!(summary.position_count, 2);

    let channel = ChannelRepo::find_by_id(&pool, "UCweCc7bSMX5J4jEH7HFImng")
        .await
        .unwrap()
        .expect("channel should exist");
    assert_eq!(channel.channel_name, "UCweCc7bSMX5J4jEH7HFImng name");

    let saved = VideoRepo::find_by_id(&pool, "TsR154sQMVo")
        .await
        .unwrap()
        .expect("video should exist");
    assert_eq!(saved.channel_id, channel.id);
    assert_eq!(saved.length_secs, 754);
    assert_eq!(saved.views, Some(1200));

    assert_eq!(
        SightingRepo::count_for_video(&pool, "TsR154sQMVo").await.unwrap(),
        8
    );
    assert!(PositionRepo::find_id_by_fen(&pool, FEN_1).await.unwrap().is_some());
    assert_eq!(VideoRepo::list_ids(&pool).await.unwrap(), vec!["TsR154sQMVo"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ingest_stores_normalized_position_keys(pool: PgPool) {
    let full_fen = format!("  {FEN_1} w - - 0 1");
    let input = video("vid1", "chan1", &[(full_fen.as_str(), 3.0)]);

    VideoRepo::ingest(&pool, &input).await.unwrap();

    assert!(PositionRepo::find_id_by_fen(&pool, FEN_1).await.unwrap().is_some());
    assert!(PositionRepo::find_id_by_fen(&pool, &full_fen).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reingest_replaces_sightings(pool: PgPool) {
    let first = video("vid1", "chan1", &[(FEN_1, 1.0), (FEN_1, 2.0), (FEN_2, 3.0)]);
    VideoRepo::ingest(&pool, &first).await.unwrap();

    let mut second = video("vid1", "chan1", &[(FEN_2, 10.0)]);
    second.title = "Updated title".to_string();
    second.views = None;
    VideoRepo::ingest(&pool, &second).await.unwrap();

    assert_eq!(SightingRepo::count_for_video(&pool, "vid1").await.unwrap(), 1);

    let saved = VideoRepo::find_by_id(&pool, "vid1").await.unwrap().unwrap();
    assert_eq!(saved.title, "Updated title");
    // Views are kept when the new submission omits them.
    assert_eq!(saved.views, Some(1200));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reingest_without_urls_keeps_stored_urls(pool: PgPool) {
    VideoRepo::ingest(&pool, &video("vid1", "chan1", &[(FEN_1, 1.0)]))
        .await
        .unwrap();

    // A second video on the same channel that omits both URLs.
    let mut other = video("vid2", "chan1", &[(FEN_1, 2.0)]);
    other.thumbnail_url = None;
    other.channel_url = None;
    VideoRepo::ingest(&pool, &other).await.unwrap();

    // The first video again, without its thumbnail.
    let mut again = video("vid1", "chan1", &[(FEN_1, 3.0)]);
    again.thumbnail_url = None;
    VideoRepo::ingest(&pool, &again).await.unwrap();

    let channel = ChannelRepo::find_by_id(&pool, "chan1").await.unwrap().unwrap();
    assert_eq!(channel.channel_url, "https://www.youtube.com/channel/chan1");

    let vid1 = VideoRepo::find_by_id(&pool, "vid1").await.unwrap().unwrap();
    assert_eq!(vid1.thumbnail_url, "https://i.ytimg.com/vi/vid1/sddefault.jpg");
    // First insert without a thumbnail stores an empty string.
    let vid2 = VideoRepo::find_by_id(&pool, "vid2").await.unwrap().unwrap();
    assert_eq!(vid2.thumbnail_url, "");

    let rows = SightingRepo::find_by_position(&pool, FEN_1, 50).await.unwrap();
    assert!(rows
        .iter()
        .all(|r| r.channel_url == "https://www.youtube.com/channel/chan1"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn positions_are_shared_across_videos(pool: PgPool) {
    VideoRepo::ingest(&pool, &video("vid1", "chan1", &[(FEN_1, 1.0)]))
        .await
        .unwrap();
    VideoRepo::ingest(&pool, &video("vid2", "chan2", &[(FEN_1, 5.0)]))
        .await
        .unwrap();

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM positions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_returns_rows_grouped_and_sorted(pool: PgPool) {
    VideoRepo::ingest(
        &pool,
        &video("bbb", "chan1", &[(FEN_1, 30.0), (FEN_2, 1.0), (FEN_1, 4.5)]),
    )
    .await
    .unwrap();
    VideoRepo::ingest(&pool, &video("aaa", "chan2", &[(FEN_1, 12.0), (FEN_1, 0.0)]))
        .await
        .unwrap();

    let rows = SightingRepo::find_by_position(&pool, FEN_1, 50).await.unwrap();
    let pairs: Vec<(&str, f64)> = rows
        .iter()
        .map(|r| (r.video_id.as_str(), r.sec_into_video))
        .collect();

    assert_eq!(
        pairs,
        vec![("aaa", 0.0), ("aaa", 12.0), ("bbb", 4.5), ("bbb", 30.0)]
    );
    assert_eq!(rows[0].channel_name, "chan2 name");
    assert_eq!(rows[2].video_title, "bbb title");
    assert_eq!(rows[2].video_length, 754);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_respects_limit(pool: PgPool) {
    let sightings: Vec<(&str, f64)> = (0..10).map(|i| (FEN_1, i as f64)).collect();
    VideoRepo::ingest(&pool, &video("vid1", "chan1", &sightings))
        .await
        .unwrap();

    let rows = SightingRepo::find_by_position(&pool, FEN_1, 3).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].sec_into_video, 2.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_of_unknown_position_is_empty(pool: PgPool) {
    let rows = SightingRepo::find_by_position(&pool, FEN_2, 50).await.unwrap();
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_succeeds(pool: PgPool) {
    fenscout_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn applied_schema_matches_embedded_migrations(pool: PgPool) {
    let applied = fenscout_db::applied_schema_version(&pool).await.unwrap();
    assert!(applied.is_some());
    assert_eq!(applied, fenscout_db::expected_schema_version());
}
