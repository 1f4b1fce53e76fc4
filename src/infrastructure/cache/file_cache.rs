use crate::domain::entities::report::RawFeedPayload;
use crate::domain::ports::cache_reader::{CacheLookup, CacheReader};
use crate::domain::values::feed_kind::FeedKind;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Snapshots written by the downloader under `<root>/<feed dir>/<key>`.
/// This side only reads.
pub struct FileCache {
    root: PathBuf,
}

/// Age report for one cached file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheFreshness {
    pub feed_kind: FeedKind,
    pub path: PathBuf,
    pub exists: bool,
    pub age_hours: Option<f64>,
    pub fresh: bool,
}

fn age_hours(now: DateTime<Utc>, modified: DateTime<Utc>) -> f64 {
    (now - modified).num_seconds() as f64 / 3600.0
}

impl FileCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, kind: FeedKind, key: &str) -> PathBuf {
        self.root.join(kind.cache_dir()).join(key)
    }

    /// Modification time of a regular file, or `None` when there is nothing
    /// readable at `path`.
    async fn modified_at(&self, path: &Path) -> Option<DateTime<Utc>> {
        let meta = match tokio::fs::metadata(path).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cache file not accessible");
                return None;
            }
        };
        if !meta.is_file() {
            warn!(path = %path.display(), "cache path is not a regular file");
            return None;
        }
        match meta.modified() {
            Ok(time) => Some(DateTime::<Utc>::from(time)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cache file has no modification time");
                None
            }
        }
    }

    pub async fn freshness(&self, kind: FeedKind, key: &str, now: DateTime<Utc>) -> CacheFreshness {
        let path = self.path_for(kind, key);
        let modified = self.modified_at(&path).await;
        let age = modified.map(|at| age_hours(now, at));
        let bound_hours = kind.staleness_bound().num_seconds() as f64 / 3600.0;
        CacheFreshness {
            feed_kind: kind,
            exists: modified.is_some(),
            fresh: age.is_some_and(|hours| hours <= bound_hours),
            age_hours: age,
            path,
        }
    }
}

#[async_trait]
impl CacheReader for FileCache {
    async fn read(&self, kind: FeedKind, key: &str, now: DateTime<Utc>) -> CacheLookup {
        let path = self.path_for(kind, key);
        let Some(modified) = self.modified_at(&path).await else {
            return CacheLookup::Missing;
        };

        if now - modified > kind.staleness_bound() {
            return CacheLookup::Stale {
                age_hours: age_hours(now, modified),
            };
        }

        match tokio::fs::read(&path).await {
            Ok(bytes) => CacheLookup::Hit(RawFeedPayload::cached(bytes, modified)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cache file unreadable");
                CacheLookup::Missing
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path());
        let lookup = cache.read(FeedKind::CurrentWbgt, "wbgt_kanagawa_202407.csv", Utc::now()).await;
        assert_eq!(lookup, CacheLookup::Missing);
    }

    #[tokio::test]
    async fn test_directory_in_place_of_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("forecast").join("yohou_chiba.csv")).unwrap();
        let cache = FileCache::new(dir.path());
        let lookup = cache.read(FeedKind::ForecastWbgt, "yohou_chiba.csv", Utc::now()).await;
        assert_eq!(lookup, CacheLookup::Missing);
    }

    #[tokio::test]
    async fn test_path_layout() {
        let cache = FileCache::new("/data/csv");
        assert_eq!(
            cache.path_for(FeedKind::AlertFlag, "alert_20240701_05.csv"),
            PathBuf::from("/data/csv/alert/alert_20240701_05.csv")
        );
    }

    #[tokio::test]
    async fn test_freshness_of_new_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("timeseries")).unwrap();
        std::fs::write(dir.path().join("timeseries").join("yohou_46106.csv"), "x").unwrap();
        let cache = FileCache::new(dir.path());

        let report = cache.freshness(FeedKind::ForecastTimeseries, "yohou_46106.csv", Utc::now()).await;
        assert!(report.exists);
        assert!(report.fresh);

        let later = Utc::now() + Duration::hours(25);
        let report = cache.freshness(FeedKind::ForecastTimeseries, "yohou_46106.csv", later).await;
        assert!(!report.fresh);
        assert!(report.age_hours.unwrap() > 24.0);
    }
}
