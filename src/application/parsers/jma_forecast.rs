//! JMA area forecast JSON (`bosai/forecast/data/forecast/<area>.json`).
//!
//! Only the first weather code and description of the first area in the
//! short-range forecast are read. Everything else in the document is ignored.

use crate::domain::error::ParseError;
use crate::domain::values::weather_category::WeatherCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastDocument {
    #[serde(default)]
    report_datetime: Option<String>,
    #[serde(default)]
    time_series: Vec<TimeSeries>,
}

#[derive(Debug, Deserialize)]
struct TimeSeries {
    #[serde(default)]
    areas: Vec<AreaForecast>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AreaForecast {
    #[serde(default)]
    weather_codes: Vec<String>,
    #[serde(default)]
    weathers: Vec<String>,
}

/// What the estimate needs from the JMA forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherHint {
    pub code: Option<String>,
    pub description: Option<String>,
    pub category: WeatherCategory,
    pub report_datetime: Option<String>,
}

fn categorize(code: Option<&str>, description: Option<&str>) -> WeatherCategory {
    match code.map(WeatherCategory::from_jma_code) {
        Some(category) if category != WeatherCategory::Unknown => category,
        _ => description
            .map(WeatherCategory::from_description)
            .unwrap_or(WeatherCategory::Unknown),
    }
}

pub fn parse_weather_hint(text: &str) -> Result<Option<WeatherHint>, ParseError> {
    let documents: Vec<ForecastDocument> =
        serde_json::from_str(text).map_err(|e| ParseError::Json(e.to_string()))?;

    let hint = documents.into_iter().next().and_then(|doc| {
        let area = doc.time_series.into_iter().next()?.areas.into_iter().next()?;
        let code = area.weather_codes.into_iter().next();
        let description = area.weathers.into_iter().next();
        if code.is_none() && description.is_none() {
            return None;
        }
        Some(WeatherHint {
            category: categorize(code.as_deref(), description.as_deref()),
            code,
            description,
            report_datetime: doc.report_datetime,
        })
    });

    Ok(hint)
}
