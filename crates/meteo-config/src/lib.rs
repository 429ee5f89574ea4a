use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    pub id: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub base_url: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub history_hours: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub station: Option<StationConfig>,
    pub feed: Option<FeedConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppConfig {
    /// Load configuration from METEO_CONFIG path (TOML) if present, with reasonable defaults
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("METEO_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let cfg = if path.as_ref().exists() {
            let s = fs::read_to_string(path)?;
            toml::from_str::<AppConfig>(&s)?
        } else {
            AppConfig::default()
        };
        Ok(cfg)
    }

    /// Feed base URL (defaults to the station's public tunnel)
    pub fn base_url(&self) -> String {
        self.feed
            .as_ref()
            .and_then(|f| f.base_url.clone())
            .unwrap_or_else(|| "https://meteomg-tunel.franquinho.info".to_string())
    }

    /// Live poll cadence (default 120 s)
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(
            self.feed
                .as_ref()
                .and_then(|f| f.poll_interval_secs)
                .unwrap_or(120),
        )
    }

    /// Trailing window requested from the history endpoint (default 24 h)
    pub fn history_hours(&self) -> u32 {
        self.feed
            .as_ref()
            .and_then(|f| f.history_hours)
            .unwrap_or(24)
    }

    /// Station identifier for logs
    pub fn station_id(&self) -> String {
        self.station
            .as_ref()
            .and_then(|s| s.id.clone())
            .unwrap_or_else(|| "station".to_string())
    }
}
