use std::time::Duration;
use chrono::{DateTime, Utc};
use thiserror::Error;
use ureq::Agent;
use ureq::http::HeaderMap;

const MET_ENDPOINT: &str = "https://api.met.no/weatherapi/locationforecast/2.0/complete";

#[derive(Error, Debug)]
pub enum MetError {
    #[error("http request error: {0}")]
    Http(String),
    #[error("forecast response error: {0}")]
    Response(String),
}

impl From<ureq::Error> for MetError {
    fn from(e: ureq::Error) -> Self {
        MetError::Http(e.to_string())
    }
}

/// A raw upstream document together with the freshness headers the cache
/// layer needs.
pub struct FetchedForecast {
    pub body: String,
    pub expires: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

/// Client for the MET Norway location forecast API.
pub struct Met {
    agent: Agent,
}

impl Met {
    /// Returns a Met struct ready for fetching point forecasts.
    pub fn new() -> Met {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        let agent = config.into();

        Met { agent }
    }

    /// Retrieves the complete forecast document for the given point.
    ///
    /// Coordinates are sent with four decimals, the maximum precision the
    /// provider accepts, and the site name goes out as the User-Agent so
    /// the request identifies its sender as the provider's terms of
    /// service require.
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude for the point to get the forecast for
    /// * 'long' - longitude for the point to get the forecast for
    /// * 'user_agent' - identifying site name sent as the User-Agent header
    pub fn fetch(&self, lat: f64, long: f64, user_agent: &str) -> Result<FetchedForecast, MetError> {
        let url = format!("{}?lat={:.4}&lon={:.4}", MET_ENDPOINT, lat, long);

        let mut res = self.agent
            .get(url)
            .header("User-Agent", user_agent)
            .call()?;

        let expires = header_time(res.headers(), "expires")?;
        let last_modified = header_time(res.headers(), "last-modified")?;

        let body = res.body_mut().read_to_string()?;

        Ok(FetchedForecast { body, expires, last_modified })
    }
}

impl Default for Met {
    fn default() -> Met {
        Met::new()
    }
}

/// Parses an RFC 2822 date header. Both freshness headers are required,
/// since the cache time to live is derived from them.
///
/// # Arguments
///
/// * 'headers' - the response header map
/// * 'name' - the header to parse
fn header_time(headers: &HeaderMap, name: &str) -> Result<DateTime<Utc>, MetError> {
    let value = headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| MetError::Response(format!("missing {} header", name)))?;

    DateTime::parse_from_rfc2822(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| MetError::Response(format!("invalid {} header '{}': {}", name, value, e)))
}
