use crate::domain::entities::report::RawFeedPayload;
use crate::domain::values::feed_kind::FeedKind;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Outcome of looking up a snapshot saved by the external downloader.
/// Stale and missing stay distinct so the resolver can say which branch fired.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    Hit(RawFeedPayload),
    Stale { age_hours: f64 },
    Missing,
}

/// Read-only view of the on-disk feed cache.
#[async_trait]
pub trait CacheReader: Send + Sync {
    /// Look up the snapshot for `kind` stored under `key`, judging freshness
    /// against `now` with the feed's staleness bound.
    async fn read(&self, kind: FeedKind, key: &str, now: DateTime<Utc>) -> CacheLookup;
}
