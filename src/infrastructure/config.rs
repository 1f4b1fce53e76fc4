use crate::application::endpoints::FeedEndpoints;
use crate::application::parsers::alert_flag::default_metadata_prefixes;
use crate::domain::entities::location::LocationRef;
use crate::domain::error::DomainError;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "WBGTWATCH_CONFIG";
pub const CACHE_DIR_ENV: &str = "WBGTWATCH_CACHE_DIR";
pub const TLS_VERIFY_ENV: &str = "WBGTWATCH_TLS_VERIFY";
pub const DEFAULT_CONFIG_PATH: &str = "./wbgtwatch.json";
/// One day; the feeds are published at most daily.
pub const MAX_UPDATE_INTERVAL_MINUTES: u64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    pub verify: bool,
    /// Extra PEM root certificate, for networks that re-sign TLS traffic.
    pub ca_cert_path: Option<PathBuf>,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            verify: true,
            ca_cert_path: None,
        }
    }
}

/// Everything the watcher needs, read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub locations: Vec<LocationRef>,
    pub update_interval_minutes: u64,
    pub cache_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub utc_offset_hours: i32,
    pub tls: TlsConfig,
    pub log_level: String,
    pub endpoints: FeedEndpoints,
    pub alert_metadata_prefixes: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            locations: vec![
                LocationRef::new("横浜", "神奈川県", "140000", "46106"),
                LocationRef::new("銚子", "千葉県", "120000", "45148"),
            ],
            update_interval_minutes: 30,
            cache_dir: PathBuf::from("data/csv"),
            request_timeout_secs: 10,
            utc_offset_hours: 9,
            tls: TlsConfig::default(),
            log_level: "info".into(),
            endpoints: FeedEndpoints::default(),
            alert_metadata_prefixes: default_metadata_prefixes(),
        }
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, DomainError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(DomainError::Config(format!("{name}: expected a boolean, got '{other}'"))),
    }
}

impl WatchConfig {
    /// Reads a JSON config file. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(DomainError::Config(format!("{}: {e}", path.display())));
            }
        };
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| DomainError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Config path from `WBGTWATCH_CONFIG`, then env overrides on top.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::load_with_env(None)
    }

    /// Like `from_env`, but an explicit path wins over `WBGTWATCH_CONFIG`.
    pub fn load_with_env(path: Option<&Path>) -> Result<Self, DomainError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(
                std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into()),
            ),
        };
        let mut config = Self::load(&path)?;
        config.apply_overrides(
            std::env::var(CACHE_DIR_ENV).ok(),
            std::env::var(TLS_VERIFY_ENV).ok(),
        )?;
        Ok(config)
    }

    pub fn apply_overrides(
        &mut self,
        cache_dir: Option<String>,
        tls_verify: Option<String>,
    ) -> Result<(), DomainError> {
        if let Some(dir) = cache_dir.filter(|d| !d.trim().is_empty()) {
            self.cache_dir = PathBuf::from(dir);
        }
        if let Some(raw) = tls_verify {
            self.tls.verify = parse_flag(TLS_VERIFY_ENV, &raw)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.update_interval_minutes == 0 {
            return Err(DomainError::Config("update_interval_minutes must be positive".into()));
        }
        if self.update_interval_minutes > MAX_UPDATE_INTERVAL_MINUTES {
            return Err(DomainError::Config(format!(
                "update_interval_minutes must be at most {MAX_UPDATE_INTERVAL_MINUTES}, got {}",
                self.update_interval_minutes
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(DomainError::Config("request_timeout_secs must be positive".into()));
        }
        self.utc_offset()?;
        Ok(())
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, DomainError> {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or_else(|| {
            DomainError::Config(format!("utc_offset_hours out of range: {}", self.utc_offset_hours))
        })
    }

    pub fn find_location(&self, name: &str) -> Result<&LocationRef, DomainError> {
        let wanted = name.trim();
        self.locations
            .iter()
            .find(|loc| {
                loc.display_name == wanted
                    || loc.display_name.eq_ignore_ascii_case(wanted)
                    || loc.wbgt_station_code == wanted
            })
            .ok_or_else(|| DomainError::NotFound(format!("location '{wanted}'")))
    }
}
