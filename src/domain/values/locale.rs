//! Display strings for classifications and alert flags.
//!
//! The pipeline itself only carries locale-neutral enums; this is the
//! single lookup the CLI uses to render them in English or Japanese.

use super::alert_flag::AlertFlag;
use super::risk_level::RiskLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub fn risk_label(&self, level: RiskLevel) -> &'static str {
        match self {
            Locale::En => level.label(),
            Locale::Ja => match level {
                RiskLevel::Safe => "ほぼ安全",
                RiskLevel::Caution => "注意",
                RiskLevel::Warning => "警戒",
                RiskLevel::SevereWarning => "厳重警戒",
                RiskLevel::Dangerous => "危険",
            },
        }
    }

    pub fn risk_advisory(&self, level: RiskLevel) -> &'static str {
        match self {
            Locale::En => level.advisory(),
            Locale::Ja => match level {
                RiskLevel::Safe => "通常は熱中症の危険は小さい",
                RiskLevel::Caution => "一般に危険性は少ないが激しい運動や重労働時には発生する危険性",
                RiskLevel::Warning => "運動や激しい作業をする際は定期的に充分に休息",
                RiskLevel::SevereWarning => "外出時は炎天下を避け、室内では空調を適切に",
                RiskLevel::Dangerous => "外出は避け、涼しい室内に移動する",
            },
        }
    }

    pub fn alert_status(&self, flag: AlertFlag) -> &'static str {
        match self {
            Locale::En => flag.status_text(),
            Locale::Ja => match flag {
                AlertFlag::NoAlert => "発表なし",
                AlertFlag::Alert => "熱中症警戒情報",
                AlertFlag::SpecialAlertAssessment => "熱中症特別警戒情報（判定）",
                AlertFlag::SpecialAlert => "熱中症特別警戒情報",
                AlertFlag::OutsideHours => "発表時間外",
                AlertFlag::NoInformation => "情報なし",
            },
        }
    }

    pub fn alert_message(&self, flag: AlertFlag) -> &'static str {
        match self {
            Locale::En => flag.message(),
            Locale::Ja => match flag {
                AlertFlag::NoAlert | AlertFlag::NoInformation => "",
                AlertFlag::Alert => "熱中症に警戒してください",
                AlertFlag::SpecialAlertAssessment => {
                    "熱中症特別警戒情報の基準に達する可能性があります"
                }
                AlertFlag::SpecialAlert => "熱中症特別警戒情報が発表されています。危険な暑さです。",
                AlertFlag::OutsideHours => "発表時間外です",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ja => write!(f, "ja"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ja" | "jp" | "japanese" => Ok(Locale::Ja),
            _ => Err(format!("Unknown language: {s}. Use 'en' or 'ja'")),
        }
    }
}
