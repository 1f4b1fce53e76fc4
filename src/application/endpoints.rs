//! URL templates for the upstream feeds.
//!
//! Placeholders: `{prefecture}` (romanized slug), `{station}`, `{area}`,
//! `{yyyymm}`, `{year}`, `{date}` (`YYYYMMDD`), `{hour}` (alert publication
//! tag). A template whose placeholder has no value renders to `None`.

use crate::application::schedule::select_alert_file;
use crate::domain::entities::location::LocationRef;
use crate::domain::values::feed_kind::FeedKind;
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedEndpoints {
    pub current: String,
    pub forecast: String,
    pub timeseries: String,
    pub alert: String,
    pub jma_forecast: String,
}

impl Default for FeedEndpoints {
    fn default() -> Self {
        Self {
            current: "https://www.wbgt.env.go.jp/est15WG/dl/wbgt_{prefecture}_{yyyymm}.csv".into(),
            forecast: "https://www.wbgt.env.go.jp/prev15WG/dl/yohou_{prefecture}.csv".into(),
            timeseries: "https://www.wbgt.env.go.jp/prev15WG/dl/yohou_{station}.csv".into(),
            alert: "https://www.wbgt.env.go.jp/alert/dl/{year}/alert_{date}_{hour}.csv".into(),
            jma_forecast: "https://www.jma.go.jp/bosai/forecast/data/forecast/{area}.json".into(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn render(template: &str, vars: &[(&str, Option<String>)]) -> Option<String> {
    let mut url = template.to_string();
    for (name, value) in vars {
        let placeholder = format!("{{{name}}}");
        if url.contains(&placeholder) {
            url = url.replace(&placeholder, value.as_deref()?);
        }
    }
    Some(url)
}

impl FeedEndpoints {
    /// Renders the feed URL for `location` at local wall-clock time `now`.
    pub fn url_for(&self, kind: FeedKind, location: &LocationRef, now: NaiveDateTime) -> Option<String> {
        let template = match kind {
            FeedKind::CurrentWbgt => &self.current,
            FeedKind::ForecastWbgt => &self.forecast,
            FeedKind::ForecastTimeseries => &self.timeseries,
            FeedKind::AlertFlag => &self.alert,
        };
        let alert = select_alert_file(now);
        render(
            template,
            &[
                ("prefecture", location.slug()),
                ("station", non_empty(&location.wbgt_station_code)),
                ("area", non_empty(&location.jma_area_code)),
                ("yyyymm", Some(now.format("%Y%m").to_string())),
                ("year", Some(alert.target_date.year().to_string())),
                ("date", Some(alert.target_date.format("%Y%m%d").to_string())),
                ("hour", Some(alert.hour_tag.to_string())),
            ],
        )
    }

    pub fn jma_url(&self, location: &LocationRef) -> Option<String> {
        render(&self.jma_forecast, &[("area", non_empty(&location.jma_area_code))])
    }
}

/// Final path segment of a rendered URL, which is also the cache file name.
pub fn cache_key(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().filter(|segment| !segment.is_empty())
}
