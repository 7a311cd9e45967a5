//! Per-site settings loaded from JSON.

use crate::fao56::constants::{DEFAULT_ALBEDO, DEFAULT_ALTITUDE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse configuration")]
    Parse(#[from] serde_json::Error),
}

/// Site constants and run settings.
///
/// ```
/// use et0::SiteConfig;
///
/// let config = SiteConfig::from_json_str(r#"{"site_id": "789"}"#).unwrap();
/// assert_eq!(config.altitude, 8.0);
/// assert_eq!(config.albedo, 0.23);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteConfig {
    pub site_id: String,
    /// Metres above sea level.
    #[serde(default = "default_altitude")]
    pub altitude: f64,
    #[serde(default = "default_albedo")]
    pub albedo: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,
}

fn default_altitude() -> f64 {
    DEFAULT_ALTITUDE
}

fn default_albedo() -> f64 {
    DEFAULT_ALBEDO
}

impl SiteConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Self::from_json_str(&contents)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}
