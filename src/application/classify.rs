use crate::domain::entities::sample::ForecastPoint;
use crate::domain::values::risk_level::{RiskClassification, RiskLevel};
use chrono::NaiveDateTime;

/// Static threshold lookup for a WBGT value in °C.
pub fn classify(value: f64) -> RiskClassification {
    RiskClassification::from(RiskLevel::from_wbgt(value))
}

pub fn forecast_point(at: NaiveDateTime, value: f64) -> ForecastPoint {
    ForecastPoint {
        at,
        value,
        level: RiskLevel::from_wbgt(value),
    }
}
