use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed upstream feeds the pipeline knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    CurrentWbgt,
    ForecastWbgt,
    ForecastTimeseries,
    AlertFlag,
}

impl FeedKind {
    pub const ALL: [FeedKind; 4] = [
        FeedKind::CurrentWbgt,
        FeedKind::ForecastWbgt,
        FeedKind::ForecastTimeseries,
        FeedKind::AlertFlag,
    ];

    /// Maximum cache file age before the file is rejected.
    pub fn staleness_bound(&self) -> Duration {
        match self {
            FeedKind::CurrentWbgt => Duration::hours(6),
            FeedKind::ForecastWbgt | FeedKind::ForecastTimeseries | FeedKind::AlertFlag => {
                Duration::hours(24)
            }
        }
    }

    /// Numeric feeds carry a WBGT value and may fall back to an estimate.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, FeedKind::AlertFlag)
    }

    /// Sub-directory of the cache root holding this feed's snapshots.
    pub fn cache_dir(&self) -> &'static str {
        match self {
            FeedKind::CurrentWbgt => "current",
            FeedKind::ForecastWbgt => "forecast",
            FeedKind::ForecastTimeseries => "timeseries",
            FeedKind::AlertFlag => "alert",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::CurrentWbgt => write!(f, "current"),
            FeedKind::ForecastWbgt => write!(f, "forecast"),
            FeedKind::ForecastTimeseries => write!(f, "timeseries"),
            FeedKind::AlertFlag => write!(f, "alert"),
        }
    }
}

impl FromStr for FeedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "current" | "current_wbgt" => Ok(FeedKind::CurrentWbgt),
            "forecast" | "forecast_wbgt" => Ok(FeedKind::ForecastWbgt),
            "timeseries" | "forecast_timeseries" => Ok(FeedKind::ForecastTimeseries),
            "alert" | "alert_flag" => Ok(FeedKind::AlertFlag),
            _ => Err(format!(
                "Unknown feed: {s}. Use current, forecast, timeseries or alert"
            )),
        }
    }
}
