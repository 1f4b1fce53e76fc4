//! WBGT observed-value grid (`wbgt_<prefecture>_<YYYYMM>.csv`).
//!
//! The header cells after the date/time columns are station codes, so the
//! target column is found by exact match on the header. Rows are appended
//! over the month; the most recent non-empty cell for the column wins.
//! Values are already in °C.

use super::feed_lines;
use crate::domain::entities::sample::HeatIndexSample;
use crate::domain::error::ParseError;
use crate::domain::values::feed_kind::FeedKind;

/// Leading columns joined to form the observation time (`date time`).
const TIMESTAMP_COLUMNS: usize = 2;

pub fn parse_current(text: &str, station: &str) -> Result<Option<HeatIndexSample>, ParseError> {
    let lines: Vec<&str> = feed_lines(text).collect();
    let (header, rows) = lines.split_first().ok_or(ParseError::Empty)?;
    let station = station.trim();
    if station.is_empty() {
        return Ok(None);
    }

    let Some(column) = header.split(',').position(|cell| cell.trim() == station) else {
        return Ok(None);
    };

    let sample = rows.iter().rev().find_map(|line| {
        let fields: Vec<&str> = line.split(',').collect();
        let value = fields
            .get(column)?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())?;
        let observed_at = fields[..column.min(TIMESTAMP_COLUMNS)]
            .iter()
            .map(|f| f.trim())
            .collect::<Vec<_>>()
            .join(" ");
        Some(HeatIndexSample {
            value,
            location_code: station.to_string(),
            observed_or_updated_at: observed_at,
            feed_kind: FeedKind::CurrentWbgt,
        })
    });

    Ok(sample)
}
