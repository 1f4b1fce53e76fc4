use serde::{Deserialize, Serialize};
use std::fmt;

/// Which fallback stage produced a resolved report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Official,
    Cached,
    Estimated,
    Unavailable,
}

impl Provenance {
    /// Lower is better. Used to pick a location's headline value.
    pub fn rank(&self) -> u8 {
        match self {
            Provenance::Official => 0,
            Provenance::Cached => 1,
            Provenance::Estimated => 2,
            Provenance::Unavailable => 3,
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Official => write!(f, "official"),
            Provenance::Cached => write!(f, "cached"),
            Provenance::Estimated => write!(f, "estimated"),
            Provenance::Unavailable => write!(f, "unavailable"),
        }
    }
}
