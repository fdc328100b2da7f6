use thiserror::Error;
use crate::manager_met::MetError;

/// Errors raised while loading or normalizing a forecast.
///
/// Configuration problems are fatal until reconfigured, fetch problems are
/// fatal for the one construction attempt (the caller owns any retry
/// policy), and document problems mean the upstream schema no longer
/// matches what the engine expects.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("error fetching forecast from api.met.no: {0}")]
    Fetch(String),
    #[error("forecast document error: {0}")]
    Document(String),
}

impl From<MetError> for WeatherError {
    fn from(e: MetError) -> Self {
        WeatherError::Fetch(e.to_string())
    }
}
impl From<serde_json::Error> for WeatherError {
    fn from(e: serde_json::Error) -> Self {
        WeatherError::Document(e.to_string())
    }
}
impl From<std::io::Error> for WeatherError {
    fn from(e: std::io::Error) -> Self {
        WeatherError::Configuration(e.to_string())
    }
}
impl From<toml::de::Error> for WeatherError {
    fn from(e: toml::de::Error) -> Self {
        WeatherError::Configuration(e.to_string())
    }
}
