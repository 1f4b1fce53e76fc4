//! Pure parsers for the fixed upstream feed formats.
//!
//! Every parser returns `Ok(None)` when the feed is well formed but has
//! nothing for the requested station or prefecture. Unexpected row shapes
//! are skipped, never fatal.

pub mod alert_flag;
pub mod current_grid;
pub mod forecast_grid;
pub mod jma_forecast;

use crate::domain::entities::alert::AlertStatus;
use crate::domain::entities::location::LocationRef;
use crate::domain::entities::sample::{ForecastPoint, HeatIndexSample};
use crate::domain::error::ParseError;
use crate::domain::values::feed_kind::FeedKind;

/// What a feed yielded for one location.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedData {
    Heat {
        sample: HeatIndexSample,
        timeseries: Vec<ForecastPoint>,
    },
    Alert(AlertStatus),
}

pub fn decode_text(bytes: &[u8]) -> Result<&str, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|_| ParseError::Encoding)?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// Non-blank lines; `lines()` already drops a trailing `\r`.
pub(crate) fn feed_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

/// Dispatch a feed body to the parser for `kind`.
pub fn parse_feed(
    kind: FeedKind,
    bytes: &[u8],
    location: &LocationRef,
    metadata_prefixes: &[String],
) -> Result<Option<FeedData>, ParseError> {
    let text = decode_text(bytes)?;
    let station = location.wbgt_station_code.as_str();

    let data = match kind {
        FeedKind::CurrentWbgt => current_grid::parse_current(text, station)?.map(|sample| {
            FeedData::Heat {
                sample,
                timeseries: Vec::new(),
            }
        }),
        FeedKind::ForecastWbgt => forecast_grid::parse_forecast(text, station)?.map(|sample| {
            FeedData::Heat {
                sample,
                timeseries: Vec::new(),
            }
        }),
        FeedKind::ForecastTimeseries => {
            forecast_grid::parse_timeseries(text, station)?.and_then(|series| {
                let first = series.points.first()?;
                Some(FeedData::Heat {
                    sample: HeatIndexSample {
                        value: first.value,
                        location_code: series.location_code.clone(),
                        observed_or_updated_at: series.updated_at.clone(),
                        feed_kind: FeedKind::ForecastTimeseries,
                    },
                    timeseries: series.points,
                })
            })
        }
        FeedKind::AlertFlag => {
            alert_flag::parse_alert(text, &location.prefecture_name, metadata_prefixes)?
                .map(FeedData::Alert)
        }
    };

    Ok(data)
}
