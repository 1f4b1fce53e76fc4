//! Heat stroke alert CSV (`alert_<YYYYMMDD>_<HH>.csv`).
//!
//! The file opens with a variable block of metadata lines. A line is a data
//! row only when it does not start with a known metadata keyword AND has at
//! least eight fields. Both filters apply; neither alone is enough.
//!
//! Data row fields used: 4 = prefecture, 6 = today's flag, 7 = tomorrow's.

use super::feed_lines;
use crate::domain::entities::alert::{AlertDay, AlertStatus};
use crate::domain::error::ParseError;
use crate::domain::values::alert_flag::AlertFlag;
use crate::domain::values::prefecture::ADMIN_SUFFIXES;

pub const DEFAULT_METADATA_PREFIXES: [&str; 15] = [
    "Title,",
    "Encoding,",
    "TimeZone,",
    "CreateDate,",
    "CreateTime,",
    "PublishingOffice,",
    "ReportDate,",
    "ReportTime,",
    "TargetDate",
    "DurationTime",
    "BriefComment",
    "Key Message",
    "FlagExplanation",
    "Status",
    "InternalFlag",
];

pub const MIN_DATA_FIELDS: usize = 8;

const PREFECTURE_FIELD: usize = 4;
const TODAY_FIELD: usize = 6;
const TOMORROW_FIELD: usize = 7;

pub fn default_metadata_prefixes() -> Vec<String> {
    DEFAULT_METADATA_PREFIXES.iter().map(|p| p.to_string()).collect()
}

pub fn is_metadata_line(line: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| line.starts_with(prefix.as_str()))
}

/// Lines that pass both the keyword filter and the field-count filter.
pub fn data_rows<'a>(
    text: &'a str,
    prefixes: &'a [String],
) -> impl Iterator<Item = Vec<&'a str>> + 'a {
    feed_lines(text)
        .filter(move |line| !is_metadata_line(line, prefixes))
        .map(|line| line.split(',').collect::<Vec<_>>())
        .filter(|fields| fields.len() >= MIN_DATA_FIELDS)
}

/// Exact match, or substring either way after removing every administrative
/// suffix character from the target. The stripped form can be ambiguous
/// (`京都府` strips to `京`), so callers take the first matching row in
/// file order.
pub fn prefecture_matches(row_prefecture: &str, target: &str) -> bool {
    let row = row_prefecture.trim();
    let target = target.trim();
    if row.is_empty() || target.is_empty() {
        return false;
    }
    if row == target {
        return true;
    }
    let short: String = target.chars().filter(|c| !ADMIN_SUFFIXES.contains(c)).collect();
    !short.is_empty() && (row.contains(short.as_str()) || short.contains(row))
}

pub fn parse_alert(
    text: &str,
    target_prefecture: &str,
    metadata_prefixes: &[String],
) -> Result<Option<AlertStatus>, ParseError> {
    if feed_lines(text).next().is_none() {
        return Err(ParseError::Empty);
    }

    let status = data_rows(text, metadata_prefixes)
        .find(|fields| prefecture_matches(fields[PREFECTURE_FIELD], target_prefecture))
        .map(|fields| AlertStatus {
            prefecture: fields[PREFECTURE_FIELD].trim().to_string(),
            today: AlertDay::from(AlertFlag::from_code(fields.get(TODAY_FIELD).copied())),
            tomorrow: AlertDay::from(AlertFlag::from_code(fields.get(TOMORROW_FIELD).copied())),
        });

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = "\
Title,熱中症警戒情報,,,,,,,,
CreateDate,2024/07/01,,,,,,,,
CreateTime,05:00,,,,,,,,
PublishingOffice,環境省,気象庁,,,,,,,
ReportDate,2024/07/01,,,,,,,,
01,北海道,0,016000,北海道,0,0,0
13,東京都,0,130000,東京,0,9,9
14,神奈川県,0,140000,神奈川,0,1,0
";

    #[test]
    fn test_metadata_lines_are_not_data_rows() {
        let prefixes = default_metadata_prefixes();
        let rows: Vec<_> = data_rows(FEED, &prefixes).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| !r[0].starts_with("Title")));
    }

    #[test]
    fn test_kanagawa_alert_today_none_tomorrow() {
        let prefixes = default_metadata_prefixes();
        let status = parse_alert(FEED, "神奈川県", &prefixes).unwrap().unwrap();
        assert_eq!(status.prefecture, "神奈川");
        assert_eq!(status.today.level, 3);
        assert_eq!(status.today.flag, AlertFlag::Alert);
        assert_eq!(status.tomorrow.level, 0);
        assert_eq!(status.tomorrow.flag, AlertFlag::NoAlert);
    }

    #[test]
    fn test_outside_hours_flag() {
        let prefixes = default_metadata_prefixes();
        let status = parse_alert(FEED, "東京都", &prefixes).unwrap().unwrap();
        assert_eq!(status.today.flag, AlertFlag::OutsideHours);
        assert_eq!(status.today.message, "Outside alert hours");
    }

    #[test]
    fn test_short_lines_are_ignored_even_without_keyword() {
        let body = "Unexpected,header,line\n14,神奈川県,0,140000,神奈川,0,3,2\n";
        let status = parse_alert(body, "神奈川県", &[]).unwrap().unwrap();
        assert_eq!(status.today.level, 4);
        assert_eq!(status.tomorrow.level, 2);
    }

    #[test]
    fn test_keyword_filter_applies_to_wide_lines() {
        // Wide enough to be a data row, and field 4 would match; the keyword
        // filter must still exclude it.
        let body = "Status,x,x,x,神奈川,x,3,3\n14,神奈川県,0,140000,神奈川,0,0,1\n";
        let prefixes = default_metadata_prefixes();
        let status = parse_alert(body, "神奈川県", &prefixes).unwrap().unwrap();
        assert_eq!(status.today.level, 0);
        assert_eq!(status.tomorrow.level, 3);
    }

    #[test]
    fn test_unknown_flag_codes_map_to_no_information() {
        let body = "14,神奈川県,0,140000,神奈川,0,7,\n";
        let status = parse_alert(body, "神奈川県", &[]).unwrap().unwrap();
        assert_eq!(status.today.flag, AlertFlag::NoInformation);
        assert_eq!(status.tomorrow.flag, AlertFlag::NoInformation);
    }

    #[test]
    fn test_first_match_wins_on_ambiguous_short_name() {
        // 京都府 strips to 京, which is a substring of 東京; the earlier row is taken.
        let body = "\
13,東京都,0,130000,東京,0,1,1
26,京都府,0,260000,京都,0,3,3
";
        let status = parse_alert(body, "京都府", &[]).unwrap().unwrap();
        assert_eq!(status.prefecture, "東京");
    }

    #[test]
    fn test_unmatched_prefecture_is_no_data() {
        let prefixes = default_metadata_prefixes();
        assert_eq!(parse_alert(FEED, "沖縄県", &prefixes).unwrap(), None);
    }

    #[test]
    fn test_empty_prefecture_cell_never_matches() {
        let body = "14,x,0,140000,,0,1,1\n";
        assert_eq!(parse_alert(body, "神奈川県", &[]).unwrap(), None);
    }

    #[test]
    fn test_empty_feed_is_error() {
        assert_eq!(parse_alert(" \n", "神奈川県", &[]), Err(ParseError::Empty));
    }

    #[test]
    fn test_prefecture_matching_rules() {
        assert!(prefecture_matches("神奈川", "神奈川県"));
        assert!(prefecture_matches("神奈川県", "神奈川県"));
        assert!(prefecture_matches("千葉", "千葉県"));
        assert!(!prefecture_matches("千葉", "神奈川県"));
        assert!(prefecture_matches("Kanagawa", "Kanagawa"));
    }
}
