use crate::domain::values::prefecture::prefecture_slug;
use serde::{Deserialize, Serialize};

/// A monitored location. Supplied by configuration and never mutated.
///
/// `prefecture_name` drives alert-row matching; `wbgt_station_code` picks the
/// row/column in the WBGT grids; `jma_area_code` selects the JMA forecast
/// used for the estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(alias = "prefecture")]
    pub prefecture_name: String,
    #[serde(alias = "area_code")]
    pub jma_area_code: String,
    #[serde(alias = "wbgt_location_code")]
    pub wbgt_station_code: String,
    /// Overrides the romanized prefecture used in WBGT file names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefecture_slug: Option<String>,
}

impl LocationRef {
    pub fn new(
        display_name: impl Into<String>,
        prefecture_name: impl Into<String>,
        jma_area_code: impl Into<String>,
        wbgt_station_code: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            prefecture_name: prefecture_name.into(),
            jma_area_code: jma_area_code.into(),
            wbgt_station_code: wbgt_station_code.into(),
            prefecture_slug: None,
        }
    }

    pub fn slug(&self) -> Option<String> {
        self.prefecture_slug
            .clone()
            .or_else(|| prefecture_slug(&self.prefecture_name).map(String::from))
    }
}
