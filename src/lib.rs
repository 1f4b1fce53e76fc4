pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::classify::classify;
use crate::application::endpoints::cache_key;
use crate::application::resolve::ResolveUseCase;
use crate::application::schedule::{select_alert_file, AlertFileSelection};
use crate::domain::entities::location::LocationRef;
use crate::domain::entities::report::{LocationSnapshot, ResolvedReport};
use crate::domain::error::DomainError;
use crate::domain::ports::cache_reader::CacheReader;
use crate::domain::ports::source_fetcher::SourceFetcher;
use crate::domain::values::feed_kind::FeedKind;
use crate::domain::values::risk_level::RiskClassification;
use crate::infrastructure::cache::file_cache::{CacheFreshness, FileCache};
use crate::infrastructure::config::WatchConfig;
use crate::infrastructure::http::reqwest_fetcher::ReqwestFetcher;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Cache diagnostics for one location.
#[derive(Debug, Serialize)]
pub struct CacheStatus {
    pub location: String,
    pub feeds: Vec<CacheFreshness>,
}

pub struct WbgtWatch {
    config: WatchConfig,
    resolve_uc: ResolveUseCase,
    diagnostics: FileCache,
}

impl WbgtWatch {
    pub fn new(config: WatchConfig) -> Result<Self, DomainError> {
        let fetcher: Arc<dyn SourceFetcher> = Arc::new(ReqwestFetcher::new(
            Duration::from_secs(config.request_timeout_secs),
            &config.tls,
        )?);
        let cache: Arc<dyn CacheReader> = Arc::new(FileCache::new(config.cache_dir.clone()));
        Self::with_providers(config, fetcher, cache)
    }

    pub fn with_providers(
        config: WatchConfig,
        fetcher: Arc<dyn SourceFetcher>,
        cache: Arc<dyn CacheReader>,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        let resolve_uc = ResolveUseCase::new(
            fetcher,
            cache,
            config.endpoints.clone(),
            config.alert_metadata_prefixes.clone(),
            config.utc_offset()?,
        );
        Ok(Self {
            diagnostics: FileCache::new(config.cache_dir.clone()),
            resolve_uc,
            config,
        })
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn locations(&self) -> &[LocationRef] {
        &self.config.locations
    }

    /// Configured locations, or just the one named.
    pub fn select_locations(&self, name: Option<&str>) -> Result<Vec<LocationRef>, DomainError> {
        match name {
            Some(name) => Ok(vec![self.config.find_location(name)?.clone()]),
            None => Ok(self.config.locations.clone()),
        }
    }

    pub fn local_time(&self, now: DateTime<Utc>) -> NaiveDateTime {
        self.resolve_uc.local_time(now)
    }

    // Delegating methods
    pub async fn resolve(&self, location: &LocationRef, kind: FeedKind) -> ResolvedReport {
        self.resolve_uc.resolve(location, kind).await
    }

    pub async fn resolve_at(
        &self,
        location: &LocationRef,
        kind: FeedKind,
        now: DateTime<Utc>,
    ) -> ResolvedReport {
        self.resolve_uc.resolve_at(location, kind, now).await
    }

    pub async fn snapshot_at(&self, location: &LocationRef, now: DateTime<Utc>) -> LocationSnapshot {
        self.resolve_uc.snapshot_at(location, now).await
    }

    pub async fn snapshots(&self, name: Option<&str>) -> Result<Vec<LocationSnapshot>, DomainError> {
        let now = Utc::now();
        let mut snapshots = Vec::new();
        for location in self.select_locations(name)? {
            snapshots.push(self.snapshot_at(&location, now).await);
        }
        Ok(snapshots)
    }

    pub fn classify(&self, value: f64) -> Result<RiskClassification, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidInput(format!("WBGT must be a finite number, got {value}")));
        }
        Ok(classify(value))
    }

    pub fn schedule(&self, now: DateTime<Utc>) -> AlertFileSelection {
        select_alert_file(self.local_time(now))
    }

    pub async fn cache_status(&self, now: DateTime<Utc>) -> Vec<CacheStatus> {
        let local = self.local_time(now);
        let mut statuses = Vec::new();
        for location in &self.config.locations {
            let mut feeds = Vec::new();
            for kind in FeedKind::ALL {
                let url = self.config.endpoints.url_for(kind, location, local);
                if let Some(key) = url.as_deref().and_then(cache_key) {
                    feeds.push(self.diagnostics.freshness(kind, key, now).await);
                }
            }
            statuses.push(CacheStatus {
                location: location.display_name.clone(),
                feeds,
            });
        }
        statuses
    }
}
