//! Fallback resolution for one (location, feed) pair.
//!
//! Stages run strictly in order and stop at the first that yields data:
//! live fetch, saved snapshot, weather estimate (numeric feeds only), then
//! unavailable. Nothing is remembered between calls, so a later call with
//! the same inputs starts again from the live fetch.

use crate::application::classify::classify;
use crate::application::endpoints::{cache_key, FeedEndpoints};
use crate::application::heuristic::estimate_wbgt;
use crate::application::parsers::jma_forecast::parse_weather_hint;
use crate::application::parsers::{decode_text, parse_feed, FeedData};
use crate::domain::entities::location::LocationRef;
use crate::domain::entities::report::{LocationSnapshot, ResolvedReport};
use crate::domain::entities::sample::HeatIndexSample;
use crate::domain::ports::cache_reader::{CacheLookup, CacheReader};
use crate::domain::ports::source_fetcher::SourceFetcher;
use crate::domain::values::feed_kind::FeedKind;
use crate::domain::values::provenance::Provenance;
use crate::domain::values::weather_category::WeatherCategory;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ResolveUseCase {
    fetcher: Arc<dyn SourceFetcher>,
    cache: Arc<dyn CacheReader>,
    endpoints: FeedEndpoints,
    metadata_prefixes: Vec<String>,
    utc_offset: FixedOffset,
}

impl ResolveUseCase {
    pub fn new(
        fetcher: Arc<dyn SourceFetcher>,
        cache: Arc<dyn CacheReader>,
        endpoints: FeedEndpoints,
        metadata_prefixes: Vec<String>,
        utc_offset: FixedOffset,
    ) -> Self {
        Self {
            fetcher,
            cache,
            endpoints,
            metadata_prefixes,
            utc_offset,
        }
    }

    pub fn local_time(&self, now: DateTime<Utc>) -> NaiveDateTime {
        now.with_timezone(&self.utc_offset).naive_local()
    }

    pub async fn resolve(&self, location: &LocationRef, kind: FeedKind) -> ResolvedReport {
        self.resolve_at(location, kind, Utc::now()).await
    }

    pub async fn resolve_at(
        &self,
        location: &LocationRef,
        kind: FeedKind,
        now: DateTime<Utc>,
    ) -> ResolvedReport {
        let local = self.local_time(now);

        match self.endpoints.url_for(kind, location, local) {
            Some(url) => {
                if let Some(report) = self.try_live(location, kind, &url).await {
                    return report;
                }
                if let Some(report) = self.try_cache(location, kind, &url, now).await {
                    return report;
                }
            }
            None => info!(
                location = %location.display_name,
                feed = %kind,
                prefecture = %location.prefecture_name,
                "no feed URL for location, skipping live and cache"
            ),
        }

        if kind.is_numeric() {
            return self.try_heuristic(location, kind, local).await;
        }

        info!(location = %location.display_name, feed = %kind, "feed unavailable");
        ResolvedReport::unavailable(location, kind)
    }

    /// All four feeds of one location, resolved concurrently.
    pub async fn snapshot_at(&self, location: &LocationRef, now: DateTime<Utc>) -> LocationSnapshot {
        let (current, forecast, timeseries, alert) = tokio::join!(
            self.resolve_at(location, FeedKind::CurrentWbgt, now),
            self.resolve_at(location, FeedKind::ForecastWbgt, now),
            self.resolve_at(location, FeedKind::ForecastTimeseries, now),
            self.resolve_at(location, FeedKind::AlertFlag, now),
        );
        LocationSnapshot {
            location: location.clone(),
            current,
            forecast,
            timeseries,
            alert,
        }
    }

    async fn try_live(&self, location: &LocationRef, kind: FeedKind, url: &str) -> Option<ResolvedReport> {
        let payload = match self.fetcher.fetch(url).await {
            Ok(payload) => payload,
            Err(e) => {
                info!(
                    location = %location.display_name,
                    feed = %kind,
                    fetcher = self.fetcher.name(),
                    error = %e,
                    "live fetch failed, trying cache"
                );
                return None;
            }
        };
        self.interpret(location, kind, &payload.bytes, Provenance::Official, "live")
    }

    async fn try_cache(
        &self,
        location: &LocationRef,
        kind: FeedKind,
        url: &str,
        now: DateTime<Utc>,
    ) -> Option<ResolvedReport> {
        let Some(key) = cache_key(url) else {
            info!(location = %location.display_name, feed = %kind, url, "no cache key for feed URL");
            return None;
        };
        match self.cache.read(kind, key, now).await {
            CacheLookup::Hit(payload) => {
                self.interpret(location, kind, &payload.bytes, Provenance::Cached, "cache")
            }
            CacheLookup::Stale { age_hours } => {
                info!(
                    location = %location.display_name,
                    feed = %kind,
                    key,
                    age_hours,
                    "cached snapshot is stale"
                );
                None
            }
            CacheLookup::Missing => {
                info!(location = %location.display_name, feed = %kind, key, "no cached snapshot");
                None
            }
        }
    }

    async fn try_heuristic(
        &self,
        location: &LocationRef,
        kind: FeedKind,
        local: NaiveDateTime,
    ) -> ResolvedReport {
        let category = self.weather_category(location).await;
        let value = estimate_wbgt(local.month(), category);
        info!(
            location = %location.display_name,
            feed = %kind,
            weather = %category,
            value,
            "using estimated WBGT"
        );

        ResolvedReport {
            location: location.clone(),
            feed_kind: kind,
            sample: Some(HeatIndexSample {
                value,
                location_code: location.wbgt_station_code.clone(),
                observed_or_updated_at: local.format("%Y-%m-%d %H:%M").to_string(),
                feed_kind: kind,
            }),
            classification: Some(classify(value)),
            alert: None,
            timeseries: Vec::new(),
            provenance: Provenance::Estimated,
        }
    }

    /// Sky condition from the JMA area forecast. Any failure is `Unknown`.
    async fn weather_category(&self, location: &LocationRef) -> WeatherCategory {
        let Some(url) = self.endpoints.jma_url(location) else {
            return WeatherCategory::Unknown;
        };
        let payload = match self.fetcher.fetch(&url).await {
            Ok(payload) => payload,
            Err(e) => {
                info!(location = %location.display_name, error = %e, "weather forecast fetch failed");
                return WeatherCategory::Unknown;
            }
        };
        match decode_text(&payload.bytes).and_then(parse_weather_hint) {
            Ok(Some(hint)) => hint.category,
            Ok(None) => WeatherCategory::Unknown,
            Err(e) => {
                info!(location = %location.display_name, error = %e, "weather forecast unreadable");
                WeatherCategory::Unknown
            }
        }
    }

    fn interpret(
        &self,
        location: &LocationRef,
        kind: FeedKind,
        bytes: &[u8],
        provenance: Provenance,
        stage: &str,
    ) -> Option<ResolvedReport> {
        match parse_feed(kind, bytes, location, &self.metadata_prefixes) {
            Ok(Some(data)) => {
                debug!(location = %location.display_name, feed = %kind, %provenance, "resolved");
                Some(build_report(location, kind, data, provenance))
            }
            Ok(None) => {
                info!(location = %location.display_name, feed = %kind, stage, "feed has no data for location");
                None
            }
            Err(e) => {
                info!(location = %location.display_name, feed = %kind, stage, error = %e, "feed could not be parsed");
                None
            }
        }
    }
}

fn build_report(
    location: &LocationRef,
    kind: FeedKind,
    data: FeedData,
    provenance: Provenance,
) -> ResolvedReport {
    let mut report = ResolvedReport::unavailable(location, kind);
    report.provenance = provenance;
    match data {
        FeedData::Heat { sample, timeseries } => {
            report.classification = Some(classify(sample.value));
            report.sample = Some(sample);
            report.timeseries = timeseries;
        }
        FeedData::Alert(status) => report.alert = Some(status),
    }
    report
}
