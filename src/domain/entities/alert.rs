use crate::domain::values::alert_flag::{alert_level_color, AlertFlag};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDay {
    pub flag: AlertFlag,
    pub status_text: String,
    pub level: u8,
    pub color_key: String,
    pub message: String,
}

impl From<AlertFlag> for AlertDay {
    fn from(flag: AlertFlag) -> Self {
        Self {
            flag,
            status_text: flag.status_text().to_string(),
            level: flag.level(),
            color_key: alert_level_color(flag.level()).to_string(),
            message: flag.message().to_string(),
        }
    }
}

/// Heat stroke alert state for one prefecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStatus {
    pub prefecture: String,
    pub today: AlertDay,
    pub tomorrow: AlertDay,
}
