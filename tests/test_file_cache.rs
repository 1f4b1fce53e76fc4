//! On-disk cache freshness rules.

use chrono::{DateTime, Duration, Utc};
use std::fs::File;
use std::path::Path;
use std::time::SystemTime;
use wbgtwatch::domain::entities::report::PayloadOrigin;
use wbgtwatch::domain::ports::cache_reader::{CacheLookup, CacheReader};
use wbgtwatch::domain::values::feed_kind::FeedKind;
use wbgtwatch::infrastructure::cache::file_cache::FileCache;

fn write_snapshot(root: &Path, kind: FeedKind, key: &str, body: &str) -> DateTime<Utc> {
    let dir = root.join(kind.cache_dir());
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(key);
    std::fs::write(&path, body).unwrap();
    DateTime::<Utc>::from(std::fs::metadata(&path).unwrap().modified().unwrap())
}

fn backdate(root: &Path, kind: FeedKind, key: &str, hours: u64) {
    let path = root.join(kind.cache_dir()).join(key);
    let when = SystemTime::now() - std::time::Duration::from_secs(hours * 3600);
    File::options().write(true).open(path).unwrap().set_modified(when).unwrap();
}

#[tokio::test]
async fn test_fresh_file_is_hit_with_cache_origin() {
    let dir = tempfile::tempdir().unwrap();
    let modified = write_snapshot(dir.path(), FeedKind::ForecastWbgt, "yohou_kanagawa.csv", "h\n46106,x,301\n");
    let cache = FileCache::new(dir.path());

    match cache.read(FeedKind::ForecastWbgt, "yohou_kanagawa.csv", Utc::now()).await {
        CacheLookup::Hit(payload) => {
            assert_eq!(payload.bytes, b"h\n46106,x,301\n");
            assert_eq!(payload.origin, PayloadOrigin::OfficialCache);
            assert_eq!(payload.retrieved_at, modified);
        }
        other => panic!("expected hit, got {other:?}"),
    }
}

#[tokio::test]
async fn test_age_equal_to_bound_is_still_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let modified = write_snapshot(dir.path(), FeedKind::CurrentWbgt, "wbgt_kanagawa_202407.csv", "x");
    let cache = FileCache::new(dir.path());

    let at_bound = modified + Duration::hours(6);
    assert!(matches!(
        cache.read(FeedKind::CurrentWbgt, "wbgt_kanagawa_202407.csv", at_bound).await,
        CacheLookup::Hit(_)
    ));

    let past_bound = at_bound + Duration::seconds(1);
    assert!(matches!(
        cache.read(FeedKind::CurrentWbgt, "wbgt_kanagawa_202407.csv", past_bound).await,
        CacheLookup::Stale { .. }
    ));
}

#[tokio::test]
async fn test_bounds_differ_by_feed() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), FeedKind::CurrentWbgt, "snapshot.csv", "x");
    write_snapshot(dir.path(), FeedKind::AlertFlag, "snapshot.csv", "x");
    backdate(dir.path(), FeedKind::CurrentWbgt, "snapshot.csv", 7);
    backdate(dir.path(), FeedKind::AlertFlag, "snapshot.csv", 7);
    let cache = FileCache::new(dir.path());
    let now = Utc::now();

    match cache.read(FeedKind::CurrentWbgt, "snapshot.csv", now).await {
        CacheLookup::Stale { age_hours } => assert!(age_hours > 6.9 && age_hours < 7.1, "{age_hours}"),
        other => panic!("expected stale, got {other:?}"),
    }
    assert!(matches!(
        cache.read(FeedKind::AlertFlag, "snapshot.csv", now).await,
        CacheLookup::Hit(_)
    ));
}

#[tokio::test]
async fn test_missing_feed_dir() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path().join("does-not-exist"));
    assert_eq!(
        cache.read(FeedKind::AlertFlag, "alert_20240701_05.csv", Utc::now()).await,
        CacheLookup::Missing
    );
}
