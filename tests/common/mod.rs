//! Shared test helpers.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use wbgtwatch::domain::entities::location::LocationRef;
use wbgtwatch::domain::entities::report::RawFeedPayload;
use wbgtwatch::domain::error::FetchError;
use wbgtwatch::domain::ports::cache_reader::{CacheLookup, CacheReader};
use wbgtwatch::domain::ports::source_fetcher::SourceFetcher;
use wbgtwatch::domain::values::feed_kind::FeedKind;
use wbgtwatch::infrastructure::config::WatchConfig;
use wbgtwatch::WbgtWatch;

pub const CURRENT_URL: &str = "https://www.wbgt.env.go.jp/est15WG/dl/wbgt_kanagawa_202407.csv";
pub const FORECAST_URL: &str = "https://www.wbgt.env.go.jp/prev15WG/dl/yohou_kanagawa.csv";
pub const TIMESERIES_URL: &str = "https://www.wbgt.env.go.jp/prev15WG/dl/yohou_46106.csv";
pub const ALERT_URL: &str = "https://www.wbgt.env.go.jp/alert/dl/2024/alert_20240701_05.csv";
pub const JMA_URL: &str = "https://www.jma.go.jp/bosai/forecast/data/forecast/140000.json";

pub const CURRENT_BODY: &str = "Date,Time,46106,45148\n2024/7/1,11:00,27.2,26.0\n2024/7/1,12:00,28.4,\n";
pub const FORECAST_BODY: &str = ",,2024070112,2024070115\n46106,2024070109,301,315\n";
pub const TIMESERIES_BODY: &str = ",,2024070112,2024070115,2024070118\n46106,2024070109,301,315,287\n";
pub const ALERT_BODY: &str = "\
Title,熱中症警戒情報,,,,,,
CreateDate,2024/07/01,,,,,,
14,神奈川県,0,140000,神奈川,0,1,0
";
pub const JMA_CLEAR_BODY: &str =
    r#"[{"reportDatetime":"2024-07-01T11:00:00+09:00","timeSeries":[{"areas":[{"weatherCodes":["100"],"weathers":["晴れ"]}]}]}]"#;

/// 2024-07-01 12:00 JST.
pub fn summer_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 3, 0, 0).unwrap()
}

pub fn yokohama() -> LocationRef {
    LocationRef::new("横浜", "神奈川県", "140000", "46106")
}

/// Serves canned bodies by exact URL; every other URL fails.
#[derive(Default)]
pub struct StubFetcher {
    responses: HashMap<String, Result<Vec<u8>, FetchError>>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), Ok(body.as_bytes().to_vec()));
        self
    }

    pub fn failing(mut self, url: &str, err: FetchError) -> Self {
        self.responses.insert(url.to_string(), Err(err));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls().iter().filter(|u| u.as_str() == url).count()
    }
}

#[async_trait]
impl SourceFetcher for StubFetcher {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch(&self, url: &str) -> Result<RawFeedPayload, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(Ok(bytes)) => Ok(RawFeedPayload::live(bytes.clone())),
            Some(Err(e)) => Err(e.clone()),
            None => Err(FetchError::Network("connection refused".into())),
        }
    }
}

/// In-memory cache; anything not registered is `Missing`.
#[derive(Default)]
pub struct StubCache {
    entries: HashMap<(FeedKind, String), CacheLookup>,
    reads: Mutex<Vec<(FeedKind, String)>>,
}

impl StubCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(mut self, kind: FeedKind, key: &str, body: &str) -> Self {
        let payload = RawFeedPayload::cached(body.as_bytes().to_vec(), summer_noon());
        self.entries.insert((kind, key.to_string()), CacheLookup::Hit(payload));
        self
    }

    pub fn stale(mut self, kind: FeedKind, key: &str, age_hours: f64) -> Self {
        self.entries
            .insert((kind, key.to_string()), CacheLookup::Stale { age_hours });
        self
    }

    pub fn reads(&self) -> Vec<(FeedKind, String)> {
        self.reads.lock().unwrap().clone()
    }
}

#[async_trait]
impl CacheReader for StubCache {
    async fn read(&self, kind: FeedKind, key: &str, _now: DateTime<Utc>) -> CacheLookup {
        self.reads.lock().unwrap().push((kind, key.to_string()));
        self.entries
            .get(&(kind, key.to_string()))
            .cloned()
            .unwrap_or(CacheLookup::Missing)
    }
}

pub fn setup(fetcher: Arc<StubFetcher>, cache: Arc<StubCache>) -> WbgtWatch {
    WbgtWatch::with_providers(WatchConfig::default(), fetcher, cache).unwrap()
}
