use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The normalized forecast document for one coordinate. The three
/// freshness fields are attached at download time from the response
/// headers and are not part of the upstream payload; the serialized form
/// of this struct is exactly what the cache stores.
///
/// The document is immutable once constructed and is only ever replaced
/// wholesale by a later store instance.
#[derive(Serialize, Deserialize, Clone)]
pub struct ForecastDocument {
    pub downloaded_at: DateTime<Utc>,
    pub expires: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub geometry: Geometry,
    pub properties: Properties,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Geometry {
    /// Longitude, latitude and elevation above mean sea level, in provider
    /// order.
    pub coordinates: [f64; 3],
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Properties {
    pub meta: Meta,
    pub timeseries: Vec<TimeSeriesEntry>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Meta {
    /// When the provider's weather model generated this forecast.
    pub updated_at: DateTime<Utc>,
    /// Unit labels per measurement name, passed through as delivered.
    pub units: Value,
}

/// One upstream sample: the instantaneous measurement bundle plus zero or
/// more forward-looking accumulation windows. Which windows are present
/// depends on how far the entry lies from the download time, so nothing
/// here may assume a fixed window per entry.
#[derive(Serialize, Deserialize, Clone)]
pub struct TimeSeriesEntry {
    pub time: DateTime<Utc>,
    pub data: EntryData,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct EntryData {
    pub instant: Instant,
    pub next_1_hours: Option<Period>,
    pub next_6_hours: Option<Period>,
    pub next_12_hours: Option<Period>,
}

impl EntryData {
    /// The first window carrying a precipitation amount, probed in
    /// resolution priority order, as (amount, covered hours).
    pub fn first_precipitation(&self) -> Option<(f64, i64)> {
        let windows = [
            (&self.next_1_hours, 1),
            (&self.next_6_hours, 6),
            (&self.next_12_hours, 12),
        ];
        for (period, hours) in windows {
            if let Some(amount) = period.as_ref().and_then(|p| p.precipitation_amount()) {
                return Some((amount, hours));
            }
        }
        None
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Instant {
    pub details: InstantDetails,
}

/// Instantaneous measurements. The bundle itself is always present in the
/// upstream schema, the individual fields are not.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct InstantDetails {
    pub air_temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_from_direction: Option<f64>,
}

/// A forward-looking accumulation window attached to an entry.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct Period {
    pub summary: Option<Summary>,
    pub details: Option<PeriodDetails>,
}

impl Period {
    pub fn precipitation_amount(&self) -> Option<f64> {
        self.details.as_ref().and_then(|d| d.precipitation_amount)
    }

    pub fn air_temperature_max(&self) -> Option<f64> {
        self.details.as_ref().and_then(|d| d.air_temperature_max)
    }

    pub fn air_temperature_min(&self) -> Option<f64> {
        self.details.as_ref().and_then(|d| d.air_temperature_min)
    }

    pub fn symbol_code(&self) -> Option<String> {
        self.summary.as_ref().and_then(|s| s.symbol_code.clone())
    }
}

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct Summary {
    pub symbol_code: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct PeriodDetails {
    pub precipitation_amount: Option<f64>,
    pub air_temperature_max: Option<f64>,
    pub air_temperature_min: Option<f64>,
}
