use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};
use serde::Deserialize;

use crate::errors::error_types::ErrorTypes;

pub const API_KEY_VAR: &str = "THUNDERFOREST_API_KEY";
pub const NO_HTTP_CACHE_VAR: &str = "NO_HTTP_CACHE";

/// Settings of the trail map. Every field falls back to its default when the
/// configuration file leaves it out.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Initial map center as `[lat, lon]`.
    pub center: [f64; 2],
    pub zoom: f64,
    /// Directory holding `interest`, `longway` and `quickway` datasets.
    pub data_dir: PathBuf,
    /// Thunderforest access key. Without it the map uses OpenStreetMap tiles.
    pub api_key: Option<String>,
    pub http_cache: Option<PathBuf>,
    /// Extra attribution lines shown next to the tile provider's one.
    pub attributions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            center: [47.580, 13.016],
            zoom: 14.0,
            data_dir: PathBuf::from("data"),
            api_key: None,
            http_cache: Some(PathBuf::from(".cache")),
            attributions: vec![
                "© Katarzyna Kowalik 2016".to_string(),
                "Routes data from alpenvereinaktiv.com".to_string(),
            ],
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// # Arguments
    /// * `path` - Optional path to a JSON configuration file. A missing file
    ///   yields the defaults; an unreadable or malformed one is an error.
    ///
    /// Environment variables are applied on top of the file.
    pub fn load(path: Option<&Path>) -> Result<Config, ErrorTypes> {
        let config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            Some(path) => {
                warn!(
                    "Config file {} not found, using defaults",
                    path.display()
                );
                Config::default()
            }
            None => Config::default(),
        };

        Ok(config.with_overrides(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(NO_HTTP_CACHE_VAR).is_ok(),
        ))
    }

    fn from_file(path: &Path) -> Result<Config, ErrorTypes> {
        let data = fs::read_to_string(path).map_err(|e| {
            ErrorTypes::new(
                101,
                format!("Error reading config {}: {}", path.display(), e),
            )
        })?;
        let config = Self::from_json(&data)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(data: &str) -> Result<Config, ErrorTypes> {
        serde_json::from_str(data)
            .map_err(|e| ErrorTypes::new(102, format!("Error parsing config: {}", e)))
    }

    /// Applies environment values. A non-empty key replaces the configured
    /// one; `no_http_cache` disables the tile cache. The cache is always off
    /// on Android.
    pub fn with_overrides(mut self, api_key: Option<String>, no_http_cache: bool) -> Config {
        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if no_http_cache || cfg!(target_os = "android") {
            self.http_cache = None;
        }
        self
    }

    pub fn center_lat(&self) -> f64 {
        self.center[0]
    }

    pub fn center_lon(&self) -> f64 {
        self.center[1]
    }
}
