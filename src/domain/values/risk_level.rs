use serde::{Deserialize, Serialize};
use std::fmt;

/// Heat-stress band derived from a WBGT value in °C.
///
/// Bands follow the Ministry of the Environment guideline. Each lower bound
/// is inclusive: 21.0 is `Caution`, 20.9 is `Safe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Caution,
    Warning,
    SevereWarning,
    Dangerous,
}

impl RiskLevel {
    pub fn from_wbgt(value: f64) -> Self {
        if value >= 31.0 {
            RiskLevel::Dangerous
        } else if value >= 28.0 {
            RiskLevel::SevereWarning
        } else if value >= 25.0 {
            RiskLevel::Warning
        } else if value >= 21.0 {
            RiskLevel::Caution
        } else {
            RiskLevel::Safe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Caution => "Caution",
            RiskLevel::Warning => "Warning",
            RiskLevel::SevereWarning => "Severe Warning",
            RiskLevel::Dangerous => "Dangerous",
        }
    }

    pub fn color_key(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "blue",
            RiskLevel::Caution => "green",
            RiskLevel::Warning => "yellow",
            RiskLevel::SevereWarning => "orange",
            RiskLevel::Dangerous => "red",
        }
    }

    pub fn advisory(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Heat stroke risk is usually low",
            RiskLevel::Caution => {
                "Generally low risk but danger exists during intense exercise or heavy labor"
            }
            RiskLevel::Warning => "Take regular adequate rest during exercise or intense work",
            RiskLevel::SevereWarning => {
                "Avoid sun when outside, use air conditioning appropriately indoors"
            }
            RiskLevel::Dangerous => "Avoid going outside, move to cool indoor space",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display-ready classification of one WBGT value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskClassification {
    pub level: RiskLevel,
    pub level_label: String,
    pub severity_color_key: String,
    pub advisory_text: String,
}

impl From<RiskLevel> for RiskClassification {
    fn from(level: RiskLevel) -> Self {
        Self {
            level,
            level_label: level.label().to_string(),
            severity_color_key: level.color_key().to_string(),
            advisory_text: level.advisory().to_string(),
        }
    }
}
