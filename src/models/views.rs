use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Document-level metadata for the loaded coordinate.
#[derive(Serialize, Clone)]
pub struct Metadata {
    pub forecast_updated_at: DateTime<Utc>,
    pub downloaded_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub start_of_day: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub units: Value,
}

/// Current conditions: the newest sample at or before the query time,
/// augmented with the derived wind fields and the sample's own one-hour
/// outlook.
#[derive(Serialize, Clone)]
pub struct Current {
    pub at: DateTime<Utc>,
    pub air_temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_from_direction: Option<f64>,
    pub wind_direction: Option<&'static str>,
    pub wind_description: Option<&'static str>,
    pub wind_speed_knots: Option<f64>,
    pub symbol_code: Option<String>,
    pub precipitation_amount: Option<f64>,
}

/// Summary statistics over one time range. Statistics whose inputs are
/// absent from every selected entry stay absent; precipitation accumulates
/// from zero.
#[derive(Serialize, Clone, Default)]
pub struct ForecastSummary {
    pub temperature_maximum: Option<f64>,
    pub temperature_minimum: Option<f64>,
    pub wind_speed_max: Option<f64>,
    pub wind_speed_max_knots: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_description: Option<&'static str>,
    pub wind_direction: Option<&'static str>,
    pub precipitation: f64,
}

/// Twelve-hour outlook: the range summary plus the modal hourly symbol
/// code over the same window.
#[derive(Serialize, Clone)]
pub struct Next12Hours {
    #[serde(flatten)]
    pub forecast: ForecastSummary,
    pub symbol: Option<String>,
}

/// One six-hour bucket on the day-start grid.
#[derive(Serialize, Clone)]
pub struct SixHourly {
    pub at: DateTime<Utc>,
    pub temperature_maximum: Option<f64>,
    pub temperature_minimum: Option<f64>,
    pub wind_speed_max: Option<f64>,
    pub wind_speed_max_knots: Option<f64>,
    pub wind_direction: Option<&'static str>,
    pub wind_description: Option<&'static str>,
    pub precipitation: Option<f64>,
    pub symbol_code: Option<String>,
}

/// One calendar-day bucket, tagged with its start.
#[derive(Serialize, Clone)]
pub struct Daily {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub forecast: ForecastSummary,
}

/// The whole series flattened to one-hour resolution, as parallel columns.
/// The hours column records how wide the source window of each row was.
#[derive(Serialize, Clone, Default)]
pub struct HourlyArrays {
    pub at: Vec<DateTime<Utc>>,
    pub temperature: Vec<Option<f64>>,
    pub wind_speed: Vec<Option<f64>>,
    pub wind_speed_knots: Vec<Option<f64>>,
    pub precipitation: Vec<f64>,
    pub hours: Vec<u32>,
}
