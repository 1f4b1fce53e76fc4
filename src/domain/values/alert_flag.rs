use serde::{Deserialize, Serialize};
use std::fmt;

/// Heat stroke alert flag as published in the alert CSV (TargetDate columns).
///
/// `level()` is the only ordering field. Strict order across the table:
/// NoAlert/OutsideHours/NoInformation (0) < SpecialAlertAssessment (2)
/// < Alert (3) < SpecialAlert (4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertFlag {
    NoAlert,
    Alert,
    SpecialAlertAssessment,
    SpecialAlert,
    OutsideHours,
    NoInformation,
}

impl AlertFlag {
    /// Maps a raw flag cell. Anything outside the five published codes,
    /// including a missing cell, is `NoInformation`.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some("0") => AlertFlag::NoAlert,
            Some("1") => AlertFlag::Alert,
            Some("2") => AlertFlag::SpecialAlertAssessment,
            Some("3") => AlertFlag::SpecialAlert,
            Some("9") => AlertFlag::OutsideHours,
            _ => AlertFlag::NoInformation,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            AlertFlag::NoAlert | AlertFlag::OutsideHours | AlertFlag::NoInformation => 0,
            AlertFlag::SpecialAlertAssessment => 2,
            AlertFlag::Alert => 3,
            AlertFlag::SpecialAlert => 4,
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            AlertFlag::NoAlert => "No Alert",
            AlertFlag::Alert => "Heat Stroke Alert",
            AlertFlag::SpecialAlertAssessment => "Heat Stroke Special Alert (Assessment)",
            AlertFlag::SpecialAlert => "Heat Stroke Special Alert",
            AlertFlag::OutsideHours => "Outside Alert Hours",
            AlertFlag::NoInformation => "No Information",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AlertFlag::NoAlert | AlertFlag::NoInformation => "",
            AlertFlag::Alert => "Please be alert for heat stroke",
            AlertFlag::SpecialAlertAssessment => "May reach heat stroke special alert criteria",
            AlertFlag::SpecialAlert => {
                "Heat stroke special alert issued. Dangerous heat conditions."
            }
            AlertFlag::OutsideHours => "Outside alert hours",
        }
    }
}

/// Display color for an alert level. Owned here so the display layer
/// never re-derives it.
pub fn alert_level_color(level: u8) -> &'static str {
    match level {
        1 => "orange",
        2 => "red",
        3 => "darkred",
        4 => "purple",
        _ => "gray",
    }
}

impl fmt::Display for AlertFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_table() {
        assert_eq!(AlertFlag::from_code(Some("0")).level(), 0);
        assert_eq!(AlertFlag::from_code(Some("1")).level(), 3);
        assert_eq!(AlertFlag::from_code(Some("2")).level(), 2);
        assert_eq!(AlertFlag::from_code(Some("3")).level(), 4);
        assert_eq!(AlertFlag::from_code(Some("9")), AlertFlag::OutsideHours);
        assert_eq!(AlertFlag::from_code(Some(" 1 ")), AlertFlag::Alert);
    }

    #[test]
    fn test_unknown_or_missing_code_is_no_information() {
        assert_eq!(AlertFlag::from_code(Some("5")), AlertFlag::NoInformation);
        assert_eq!(AlertFlag::from_code(Some("")), AlertFlag::NoInformation);
        assert_eq!(AlertFlag::from_code(None), AlertFlag::NoInformation);
        assert_eq!(AlertFlag::NoInformation.level(), 0);
    }

    #[test]
    fn test_level_order_is_strict_between_issued_flags() {
        assert!(AlertFlag::NoAlert.level() < AlertFlag::SpecialAlertAssessment.level());
        assert!(AlertFlag::SpecialAlertAssessment.level() < AlertFlag::Alert.level());
        assert!(AlertFlag::Alert.level() < AlertFlag::SpecialAlert.level());
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(alert_level_color(0), "gray");
        assert_eq!(alert_level_color(3), "darkred");
        assert_eq!(alert_level_color(4), "purple");
        assert_eq!(alert_level_color(42), "gray");
    }
}
