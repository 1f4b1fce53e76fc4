//! WBGT estimate used when neither the live feed nor the cache has a value.
//!
//! Dry bulb comes from a seasonal base plus a sky-condition adjustment;
//! dew point from the Magnus saturation vapor pressure; then the no-radiation
//! outdoor approximation `0.7 * Td + 0.2 * T + 3.0`.

use crate::domain::values::weather_category::WeatherCategory;

/// Seasonal base dry bulb in °C for a calendar month (1-12).
pub fn seasonal_base(month: u32) -> f64 {
    match month {
        12 | 1 | 2 => 8.0,
        3..=5 => 18.0,
        6..=8 => 28.0,
        _ => 20.0,
    }
}

/// (dry bulb °C, relative humidity %). Dry bulb never goes below zero.
pub fn estimate_conditions(month: u32, category: WeatherCategory) -> (f64, f64) {
    let (temp_adj, humidity) = category.adjustment();
    ((seasonal_base(month) + temp_adj).max(0.0), humidity)
}

pub fn dew_point(temp_c: f64, humidity_pct: f64) -> f64 {
    let es = 6.112 * (17.67 * temp_c / (temp_c + 243.5)).exp();
    let e = es * humidity_pct / 100.0;
    let gamma = (e / 6.112).ln();
    243.5 * gamma / (17.67 - gamma)
}

/// WBGT rounded to one decimal place.
pub fn wbgt_from_conditions(temp_c: f64, humidity_pct: f64) -> f64 {
    let wbgt = 0.7 * dew_point(temp_c, humidity_pct) + 0.2 * temp_c + 3.0;
    (wbgt * 10.0).round() / 10.0
}

pub fn estimate_wbgt(month: u32, category: WeatherCategory) -> f64 {
    let (temp, humidity) = estimate_conditions(month, category);
    wbgt_from_conditions(temp, humidity)
}
