use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse sky condition used only by the WBGT estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Unknown,
}

impl WeatherCategory {
    /// JMA weather codes group by their first digit: 1xx clear, 2xx cloudy,
    /// 3xx rain, 4xx snow.
    pub fn from_jma_code(code: &str) -> Self {
        match code.trim().chars().next() {
            Some('1') => WeatherCategory::Clear,
            Some('2') => WeatherCategory::Cloudy,
            Some('3') => WeatherCategory::Rain,
            Some('4') => WeatherCategory::Snow,
            _ => WeatherCategory::Unknown,
        }
    }

    /// Keyword match on a free-text description, checked in the same
    /// precedence as the codes (clear before cloudy before rain before snow).
    pub fn from_description(description: &str) -> Self {
        let lowered = description.to_lowercase();
        if description.contains('晴') || lowered.contains("clear") || lowered.contains("sunny") {
            WeatherCategory::Clear
        } else if description.contains('曇') || description.contains("くもり") || lowered.contains("cloud") {
            WeatherCategory::Cloudy
        } else if description.contains('雨') || lowered.contains("rain") {
            WeatherCategory::Rain
        } else if description.contains('雪') || lowered.contains("snow") {
            WeatherCategory::Snow
        } else {
            WeatherCategory::Unknown
        }
    }

    /// (dry-bulb adjustment in °C, relative humidity in %)
    pub fn adjustment(&self) -> (f64, f64) {
        match self {
            WeatherCategory::Clear => (2.0, 50.0),
            WeatherCategory::Cloudy => (0.0, 65.0),
            WeatherCategory::Rain => (-3.0, 85.0),
            WeatherCategory::Snow => (-5.0, 80.0),
            WeatherCategory::Unknown => (0.0, 60.0),
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherCategory::Clear => write!(f, "clear"),
            WeatherCategory::Cloudy => write!(f, "cloudy"),
            WeatherCategory::Rain => write!(f, "rain"),
            WeatherCategory::Snow => write!(f, "snow"),
            WeatherCategory::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jma_codes() {
        assert_eq!(WeatherCategory::from_jma_code("100"), WeatherCategory::Clear);
        assert_eq!(WeatherCategory::from_jma_code("212"), WeatherCategory::Cloudy);
        assert_eq!(WeatherCategory::from_jma_code("313"), WeatherCategory::Rain);
        assert_eq!(WeatherCategory::from_jma_code("400"), WeatherCategory::Snow);
        assert_eq!(WeatherCategory::from_jma_code(""), WeatherCategory::Unknown);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(WeatherCategory::from_description("晴れ 時々 くもり"), WeatherCategory::Clear);
        assert_eq!(WeatherCategory::from_description("くもり 夜 雨"), WeatherCategory::Cloudy);
        assert_eq!(WeatherCategory::from_description("Light rain"), WeatherCategory::Rain);
        assert_eq!(WeatherCategory::from_description("fog"), WeatherCategory::Unknown);
    }
}
