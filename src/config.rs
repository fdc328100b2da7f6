use std::fs;
use std::str::FromStr;
use std::sync::Arc;
use chrono::FixedOffset;
use serde::Deserialize;
use crate::cache::{FileCache, ForecastCache, MemoryCache};
use crate::errors::WeatherError;

#[derive(Deserialize)]
struct RawConfig {
    site: Site,
    #[serde(default)]
    cache: CacheSettings,
}

#[derive(Deserialize)]
struct Site {
    sitename: String,
    utc_offset: Option<String>,
}

#[derive(Deserialize, Default)]
struct CacheSettings {
    backend: Option<CacheBackend>,
}

/// Selectable cache backend variants.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Memory,
    File,
}

/// Process-wide settings shared by every forecast store: the identifying
/// site name, the local UTC offset used for day boundaries, and the cache
/// handle. Built once and passed explicitly into each store.
#[derive(Clone)]
pub struct Config {
    pub sitename: String,
    pub utc_offset: FixedOffset,
    pub cache: Arc<dyn ForecastCache>,
}

impl Config {
    /// Returns a configuration around the given cache handle.
    ///
    /// # Arguments
    ///
    /// * 'sitename' - site identifier sent as the User-Agent, expected to
    ///   carry contact details
    /// * 'utc_offset' - local offset like "+02:00"
    /// * 'cache' - cache store shared by all stores built from this
    ///   configuration
    pub fn new(sitename: &str, utc_offset: &str, cache: Arc<dyn ForecastCache>) -> Result<Config, WeatherError> {
        let utc_offset = FixedOffset::from_str(utc_offset).map_err(|e| {
            WeatherError::Configuration(format!("invalid utc offset '{}': {}", utc_offset, e))
        })?;

        Ok(Config {
            sitename: sitename.to_string(),
            utc_offset,
            cache,
        })
    }
}

/// Loads the configuration file and returns the runtime configuration
/// with its cache backend constructed.
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, WeatherError> {
    let toml = fs::read_to_string(config_path)?;
    let raw: RawConfig = toml::from_str(&toml)?;

    let cache: Arc<dyn ForecastCache> = match raw.cache.backend.unwrap_or(CacheBackend::File) {
        CacheBackend::Memory => Arc::new(MemoryCache::new()),
        CacheBackend::File => Arc::new(FileCache::new()),
    };

    Config::new(
        &raw.site.sitename,
        raw.site.utc_offset.as_deref().unwrap_or("+00:00"),
        cache,
    )
}
