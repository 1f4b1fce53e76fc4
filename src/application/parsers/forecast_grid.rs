//! WBGT forecast grid (`yohou_*.csv`).
//!
//! Line 1 is an hour-label header; each following line is
//! `stationCode,updateTime,v1,v2,...` with values in tenths of a degree.
//! In the time series header, columns 3+ are `YYYYMMDDHH` labels where hour
//! `24` means 00:00 of the next day.

use super::feed_lines;
use crate::application::classify::forecast_point;
use crate::domain::entities::sample::{ForecastPoint, HeatIndexSample};
use crate::domain::error::ParseError;
use crate::domain::values::feed_kind::FeedKind;
use chrono::{NaiveDate, NaiveDateTime};

const FIRST_VALUE_COLUMN: usize = 2;

/// Parsed time series for one station.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    pub location_code: String,
    pub updated_at: String,
    pub points: Vec<ForecastPoint>,
}

/// Raw tenths-of-a-degree cell to °C. Blank or non-integer cells are skipped.
fn parse_tenths(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse::<i64>().ok().map(|raw| raw as f64 / 10.0)
}

/// `YYYYMMDDHH` to a timestamp, normalizing hour 24 to the next midnight.
pub fn parse_time_label(label: &str) -> Option<NaiveDateTime> {
    let label = label.trim();
    if label.len() != 10 || !label.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let date = NaiveDate::parse_from_str(&label[..8], "%Y%m%d").ok()?;
    let hour: u32 = label[8..].parse().ok()?;
    match hour {
        0..=23 => date.and_hms_opt(hour, 0, 0),
        24 => date.succ_opt()?.and_hms_opt(0, 0, 0),
        _ => None,
    }
}

fn station_rows<'a>(
    lines: impl Iterator<Item = &'a str>,
    station: &str,
) -> impl Iterator<Item = Vec<&'a str>> {
    let station = station.trim().to_string();
    lines
        .map(|line| line.split(',').collect::<Vec<_>>())
        .filter(move |fields| {
            fields.len() > FIRST_VALUE_COLUMN && !station.is_empty() && fields[0].trim() == station
        })
}

/// First numeric value, left to right, of the station's row.
pub fn parse_forecast(text: &str, station: &str) -> Result<Option<HeatIndexSample>, ParseError> {
    let mut lines = feed_lines(text);
    lines.next().ok_or(ParseError::Empty)?;

    let sample = station_rows(lines, station).find_map(|fields| {
        let value = fields[FIRST_VALUE_COLUMN..]
            .iter()
            .find_map(|cell| parse_tenths(cell))?;
        Some(HeatIndexSample {
            value,
            location_code: fields[0].trim().to_string(),
            observed_or_updated_at: fields[1].trim().to_string(),
            feed_kind: FeedKind::ForecastWbgt,
        })
    });

    Ok(sample)
}

/// Every aligned (time label, value) pair of the station's row.
pub fn parse_timeseries(text: &str, station: &str) -> Result<Option<ForecastSeries>, ParseError> {
    let mut lines = feed_lines(text);
    let header = lines.next().ok_or(ParseError::Empty)?;
    let labels: Vec<Option<NaiveDateTime>> = header
        .split(',')
        .skip(FIRST_VALUE_COLUMN)
        .map(parse_time_label)
        .collect();

    let series = station_rows(lines, station).find_map(|fields| {
        let points: Vec<ForecastPoint> = labels
            .iter()
            .zip(fields.iter().skip(FIRST_VALUE_COLUMN))
            .filter_map(|(label, cell)| Some(forecast_point((*label)?, parse_tenths(cell)?)))
            .collect();
        if points.is_empty() {
            return None;
        }
        Some(ForecastSeries {
            location_code: fields[0].trim().to_string(),
            updated_at: fields[1].trim().to_string(),
            points,
        })
    });

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::risk_level::RiskLevel;

    const FORECAST: &str = "\
,,03,06,09,12
45132,2024010112,250,255,270,281
46106,2024010112,,,301,310
";

    #[test]
    fn test_first_value_is_divided_by_ten() {
        let sample = parse_forecast(FORECAST, "45132").unwrap().unwrap();
        assert_eq!(sample.value, 25.0);
        assert_eq!(sample.location_code, "45132");
        assert_eq!(sample.observed_or_updated_at, "2024010112");
        assert_eq!(sample.feed_kind, FeedKind::ForecastWbgt);
    }

    #[test]
    fn test_single_station_row() {
        let body = "header\n45132,2024010112,250,255\n";
        assert_eq!(parse_forecast(body, "45132").unwrap().unwrap().value, 25.0);
    }

    #[test]
    fn test_blank_cells_are_skipped() {
        let sample = parse_forecast(FORECAST, "46106").unwrap().unwrap();
        assert_eq!(sample.value, 30.1);
    }

    #[test]
    fn test_missing_station_is_no_data() {
        assert_eq!(parse_forecast(FORECAST, "99999").unwrap(), None);
        assert_eq!(parse_forecast(FORECAST, "").unwrap(), None);
    }

    #[test]
    fn test_row_without_numbers_is_no_data() {
        let body = "h\n45132,2024010112,,x,\n";
        assert_eq!(parse_forecast(body, "45132").unwrap(), None);
    }

    #[test]
    fn test_empty_body_is_error() {
        assert_eq!(parse_forecast("", "45132"), Err(ParseError::Empty));
        assert_eq!(parse_timeseries("\n\n", "45132"), Err(ParseError::Empty));
    }

    #[test]
    fn test_short_rows_do_not_panic() {
        let body = "h\n45132\n45132,x\n";
        assert_eq!(parse_forecast(body, "45132").unwrap(), None);
    }

    #[test]
    fn test_hour_24_is_next_midnight() {
        let at = parse_time_label("2024073124").unwrap();
        assert_eq!(at.to_string(), "2024-08-01 00:00:00");
        assert_eq!(parse_time_label("2024070115").unwrap().to_string(), "2024-07-01 15:00:00");
        assert_eq!(parse_time_label("2024070125"), None);
        assert_eq!(parse_time_label("20240701"), None);
    }

    #[test]
    fn test_timeseries_aligns_labels_and_values() {
        let body = "\
,,2024070121,2024070124,2024070203
45132,2024070118,281,,265
";
        let series = parse_timeseries(body, "45132").unwrap().unwrap();
        assert_eq!(series.updated_at, "2024070118");
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].at.to_string(), "2024-07-01 21:00:00");
        assert_eq!(series.points[0].value, 28.1);
        assert_eq!(series.points[0].level, RiskLevel::SevereWarning);
        assert_eq!(series.points[1].at.to_string(), "2024-07-02 03:00:00");
        assert_eq!(series.points[1].value, 26.5);
    }

    #[test]
    fn test_timeseries_skips_unlabelled_columns() {
        let body = ",,junk,2024070112\n45132,u,300,310\n";
        let series = parse_timeseries(body, "45132").unwrap().unwrap();
        assert_eq!(series.points.len(), 1);
        assert_eq!(series.points[0].value, 31.0);
    }
}
