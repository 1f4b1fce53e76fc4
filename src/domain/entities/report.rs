use crate::domain::entities::alert::AlertStatus;
use crate::domain::entities::location::LocationRef;
use crate::domain::entities::sample::{ForecastPoint, HeatIndexSample};
use crate::domain::values::feed_kind::FeedKind;
use crate::domain::values::provenance::Provenance;
use crate::domain::values::risk_level::RiskClassification;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadOrigin {
    OfficialLive,
    OfficialCache,
}

/// Raw feed body handed from a fetcher or cache to the parsers.
/// Lives for one resolution only.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeedPayload {
    pub bytes: Vec<u8>,
    pub retrieved_at: DateTime<Utc>,
    pub origin: PayloadOrigin,
}

impl RawFeedPayload {
    pub fn live(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            retrieved_at: Utc::now(),
            origin: PayloadOrigin::OfficialLive,
        }
    }

    pub fn cached(bytes: Vec<u8>, retrieved_at: DateTime<Utc>) -> Self {
        Self {
            bytes,
            retrieved_at,
            origin: PayloadOrigin::OfficialCache,
        }
    }
}

/// The unit handed to the display layer for one (location, feed) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedReport {
    pub location: LocationRef,
    pub feed_kind: FeedKind,
    pub sample: Option<HeatIndexSample>,
    pub classification: Option<RiskClassification>,
    pub alert: Option<AlertStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timeseries: Vec<ForecastPoint>,
    pub provenance: Provenance,
}

impl ResolvedReport {
    pub fn unavailable(location: &LocationRef, feed_kind: FeedKind) -> Self {
        Self {
            location: location.clone(),
            feed_kind,
            sample: None,
            classification: None,
            alert: None,
            timeseries: Vec::new(),
            provenance: Provenance::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        self.provenance != Provenance::Unavailable
    }
}

/// All four feeds of one location from a single polling cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSnapshot {
    pub location: LocationRef,
    pub current: ResolvedReport,
    pub forecast: ResolvedReport,
    pub timeseries: ResolvedReport,
    pub alert: ResolvedReport,
}

impl LocationSnapshot {
    /// Best numeric report: lowest provenance rank wins, current beats
    /// forecast on a tie.
    pub fn headline(&self) -> Option<&ResolvedReport> {
        [&self.current, &self.forecast]
            .into_iter()
            .filter(|report| report.sample.is_some())
            .min_by_key(|report| report.provenance.rank())
    }
}
