use crate::domain::values::feed_kind::FeedKind;
use crate::domain::values::risk_level::RiskLevel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One WBGT value (°C) for one station, as read from a feed or estimated.
///
/// Forecast feeds publish tenths of a degree; parsers have already divided
/// by 10 by the time a sample exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatIndexSample {
    pub value: f64,
    pub location_code: String,
    pub observed_or_updated_at: String,
    pub feed_kind: FeedKind,
}

/// One aligned (time label, value) pair of the forecast time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub at: NaiveDateTime,
    pub value: f64,
    pub level: RiskLevel,
}
