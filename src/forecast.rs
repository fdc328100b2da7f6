use std::collections::HashMap;
use std::time::Duration;
use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta, Timelike, Utc};
use log::{debug, warn};
use serde_json::Value;
use crate::aggregate::{self, Range};
use crate::config::Config;
use crate::convert::{degrees_to_bearing, round1, to_knots, wind_description};
use crate::errors::WeatherError;
use crate::manager_met::Met;
use crate::models::document::{ForecastDocument, TimeSeriesEntry};
use crate::models::views::{Current, Daily, ForecastSummary, HourlyArrays, Metadata, Next12Hours, SixHourly};
use crate::timevalues;

/// Floor for the cache time to live, so near-expiry responses and clock
/// skew do not thrash the upstream service.
const MIN_CACHE_SECONDS: i64 = 60;

/// Local hour from which the day boundary refers to the next day, the
/// provider's convention for late-evening requests.
const DAY_ROLLOVER_HOUR: u32 = 20;

/// A loaded point forecast for one coordinate.
///
/// Construction performs all I/O: the document comes from the configured
/// cache when a fresh copy exists and from the provider otherwise. After
/// that every view method is a pure read over the immutable document, so
/// a store can be queried freely. A store is never refreshed in place;
/// build a new one once the document's expiry has passed.
pub struct Forecast {
    doc: ForecastDocument,
    now: DateTime<Utc>,
    start_of_day: DateTime<Utc>,
}

impl Forecast {
    /// Loads the forecast for the given coordinate.
    ///
    /// Coordinates are rounded to four decimals, the precision the
    /// provider asks for, which also keys the cache so near-identical
    /// requests share one upstream call.
    ///
    /// # Arguments
    ///
    /// * 'latitude' - latitude of the point
    /// * 'longitude' - longitude of the point
    /// * 'config' - process-wide configuration carrying the cache handle
    pub fn new(latitude: f64, longitude: f64, config: &Config) -> Result<Forecast, WeatherError> {
        if !config.sitename.contains('@') {
            return Err(WeatherError::Configuration(
                "sitename must include contact details, e.g. an email address".to_string(),
            ));
        }

        let latitude = round4(latitude);
        let longitude = round4(longitude);
        let now = Utc::now();

        let doc = load_document(latitude, longitude, config, now)?;

        Ok(Forecast::assemble(doc, config.utc_offset, now))
    }

    /// Builds the store around an already loaded document and a pinned
    /// clock. The day start is the local midnight for the offset, pushed
    /// to the next day for late-evening clocks.
    fn assemble(doc: ForecastDocument, utc_offset: FixedOffset, now: DateTime<Utc>) -> Forecast {
        let local = now.with_timezone(&utc_offset);
        let midnight = NaiveDateTime::new(local.date_naive(), NaiveTime::MIN);
        let mut start_of_day =
            (midnight - TimeDelta::seconds(utc_offset.local_minus_utc() as i64)).and_utc();
        if local.hour() >= DAY_ROLLOVER_HOUR {
            start_of_day += TimeDelta::hours(24);
        }

        Forecast { doc, now, start_of_day }
    }

    /// The normalized document backing every view.
    pub fn document(&self) -> &ForecastDocument {
        &self.doc
    }

    /// Document-level metadata for the loaded coordinate.
    pub fn metadata(&self) -> Metadata {
        let coordinates = &self.doc.geometry.coordinates;

        Metadata {
            forecast_updated_at: self.doc.properties.meta.updated_at,
            downloaded_at: self.doc.downloaded_at,
            expires_at: self.doc.expires,
            start_of_day: self.start_of_day,
            latitude: coordinates[1],
            longitude: coordinates[0],
            elevation: coordinates[2],
            units: self.doc.properties.meta.units.clone(),
        }
    }

    /// Current conditions: the most recent sample at or before now,
    /// augmented with the derived wind fields and the sample's own
    /// one-hour precipitation and symbol code. None when the series only
    /// starts in the future.
    pub fn current(&self) -> Option<Current> {
        let node = self
            .series()
            .iter()
            .filter(|e| e.time <= self.now)
            .max_by_key(|e| e.time)?;

        let details = &node.data.instant.details;
        let hour = node.data.next_1_hours.as_ref();

        Some(Current {
            at: node.time,
            air_temperature: details.air_temperature,
            wind_speed: details.wind_speed,
            wind_from_direction: details.wind_from_direction,
            wind_direction: degrees_to_bearing(details.wind_from_direction),
            wind_description: wind_description(details.wind_speed),
            wind_speed_knots: to_knots(details.wind_speed),
            symbol_code: hour.and_then(|p| p.symbol_code()),
            precipitation_amount: hour.and_then(|p| p.precipitation_amount()),
        })
    }

    /// Aggregate outlook for the coming twelve hours, with the modal
    /// hourly symbol code over the same window.
    pub fn next_12_hours(&self) -> Next12Hours {
        let range = Range::new(self.now, self.now + TimeDelta::hours(12));

        let symbols: Vec<String> = aggregate::entries_in_range(self.series(), &range)
            .iter()
            .filter_map(|e| e.data.next_1_hours.as_ref().and_then(|p| p.symbol_code()))
            .collect();

        Next12Hours {
            forecast: aggregate::summarize(self.series(), &range),
            symbol: aggregate::modal(&symbols),
        }
    }

    /// Aggregate outlook for the coming three days. The wind description
    /// is trimmed from this view.
    pub fn three_days(&self) -> ForecastSummary {
        self.outlook_trimmed(TimeDelta::days(3))
    }

    /// Aggregate outlook for the coming week, trimmed like three_days.
    pub fn week(&self) -> ForecastSummary {
        self.outlook_trimmed(TimeDelta::days(7))
    }

    fn outlook_trimmed(&self, ahead: TimeDelta) -> ForecastSummary {
        let range = Range::new(self.now, self.now + ahead);
        let mut summary = aggregate::summarize(self.series(), &range);
        summary.wind_description = None;
        summary
    }

    /// Up to twenty six-hour buckets aligned to the six-hour grid of the
    /// day start, beginning with the first grid point whose bucket has not
    /// wholly passed. Grid points with no matching six-hour entry are
    /// skipped, so the sequence is finite and possibly sparse.
    pub fn six_hourly(&self) -> Vec<SixHourly> {
        let mut start = self.start_of_day;
        while start + TimeDelta::hours(6) <= self.now {
            start += TimeDelta::hours(6);
        }

        let nodes: HashMap<DateTime<Utc>, &TimeSeriesEntry> = self
            .series()
            .iter()
            .filter(|e| e.data.next_6_hours.is_some())
            .map(|e| (e.time, e))
            .collect();

        (0..20)
            .filter_map(|i| nodes.get(&(start + TimeDelta::hours(6 * i))))
            .map(|node| {
                let details = &node.data.instant.details;
                let six = node.data.next_6_hours.as_ref();

                SixHourly {
                    at: node.time,
                    temperature_maximum: six.and_then(|p| p.air_temperature_max()),
                    temperature_minimum: six.and_then(|p| p.air_temperature_min()),
                    wind_speed_max: details.wind_speed,
                    wind_speed_max_knots: to_knots(details.wind_speed),
                    wind_direction: degrees_to_bearing(details.wind_from_direction),
                    wind_description: wind_description(details.wind_speed),
                    precipitation: six.and_then(|p| p.precipitation_amount()),
                    symbol_code: six.and_then(|p| p.symbol_code()),
                }
            })
            .collect()
    }

    /// Eight calendar-day buckets from the day start, each tagged with its
    /// bucket start. Buckets beyond the available data carry empty
    /// aggregates rather than erroring.
    pub fn daily(&self) -> Vec<Daily> {
        (0..8)
            .map(|day| {
                let start = self.start_of_day + TimeDelta::hours(24 * day);
                let range = Range::new(start, start + TimeDelta::hours(24));

                Daily {
                    at: start,
                    forecast: aggregate::summarize(self.series(), &range),
                }
            })
            .collect()
    }

    /// The whole series flattened to one-hour resolution parallel columns.
    /// Each entry's best-available precipitation window is apportioned
    /// evenly across the hours it covers and the instantaneous fields are
    /// repeated over those hours; an entry with no window contributes a
    /// single hour.
    pub fn arrays(&self) -> HourlyArrays {
        let mut out = HourlyArrays::default();

        for node in self.series() {
            let details = &node.data.instant.details;
            let (amount, hours) = node.data.first_precipitation().unwrap_or((0.0, 1));
            let per_hour = round1(amount / hours as f64);

            for i in 0..hours {
                out.at.push(node.time + TimeDelta::hours(i));
                out.temperature.push(details.air_temperature);
                out.wind_speed.push(details.wind_speed);
                out.wind_speed_knots.push(to_knots(details.wind_speed));
                out.precipitation.push(per_hour);
                out.hours.push(hours as u32);
            }
        }

        out
    }

    fn series(&self) -> &[TimeSeriesEntry] {
        &self.doc.properties.timeseries
    }
}

/// Deterministic cache key for a coordinate at the provider's four-decimal
/// precision.
///
/// # Arguments
///
/// * 'latitude' - rounded latitude
/// * 'longitude' - rounded longitude
fn cache_key(latitude: f64, longitude: f64) -> String {
    format!("yr_weather.{:.4}.{:.4}", latitude, longitude)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Seconds to keep a document cached: the time until it expires, rounded
/// up, floored at one minute.
///
/// # Arguments
///
/// * 'expires' - the document expiry from the response headers
/// * 'now' - the download time
fn cache_ttl(expires: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    let seconds = ((expires - now).num_milliseconds() + 999).div_euclid(1000);
    Duration::from_secs(seconds.max(MIN_CACHE_SECONDS) as u64)
}

/// Serves the document from cache when a fresh copy exists, otherwise
/// fetches, normalizes and writes through. Cache trouble only logs and
/// degrades to a fetch, since the cache is an optimization, not a source
/// of truth.
fn load_document(
    latitude: f64,
    longitude: f64,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<ForecastDocument, WeatherError> {
    let key = cache_key(latitude, longitude);

    if let Some(raw) = config.cache.read(&key) {
        match parse_document(&raw) {
            Ok(doc) if doc.expires > now => {
                debug!("serving {} from cache", key);
                return Ok(doc);
            }
            Ok(_) => debug!("cached document for {} has expired", key),
            Err(e) => warn!("discarding unreadable cached document for {}: {}", key, e),
        }
    }

    let met = Met::new();
    let fetched = met.fetch(latitude, longitude, &config.sitename)?;

    let body: Value = serde_json::from_str(&fetched.body)
        .map_err(|e| WeatherError::Fetch(format!("unparseable response body: {}", e)))?;
    let Value::Object(mut augmented) = body else {
        return Err(WeatherError::Fetch("response body is not a json object".to_string()));
    };

    // The freshness fields live next to the upstream payload in the
    // normalized document, exactly as the cache later returns them.
    for (field, time) in [
        ("downloaded_at", now),
        ("expires", fetched.expires),
        ("last_modified", fetched.last_modified),
    ] {
        augmented.insert(
            field.to_string(),
            Value::String(time.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
    }

    let normalized = timevalues::normalize(Value::Object(augmented))?;
    let doc: ForecastDocument = serde_json::from_value(normalized)?;

    match serde_json::to_string(&doc) {
        Ok(json) => {
            if let Err(e) = config.cache.write(&key, &json, cache_ttl(doc.expires, now)) {
                warn!("failed writing forecast cache for {}: {}", key, e);
            }
        }
        Err(e) => warn!("failed serializing forecast for cache: {}", e),
    }

    Ok(doc)
}

/// Re-normalizes a persisted document. The cached JSON loses the typed
/// timestamps, so it goes through the same time-value pass as a fresh
/// download.
///
/// # Arguments
///
/// * 'raw' - the serialized document as read from the cache
fn parse_document(raw: &str) -> Result<ForecastDocument, WeatherError> {
    let value: Value = serde_json::from_str(raw)?;
    let normalized = timevalues::normalize(value)?;

    Ok(serde_json::from_value(normalized)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::sync::Arc;
    use serde_json::json;
    use crate::cache::{CacheError, ForecastCache};

    /// Serialized document shaped like the upstream payload after the
    /// store has attached the freshness fields.
    fn fixture(expires: &str) -> String {
        json!({
            "type": "Feature",
            "downloaded_at": "2026-08-07T10:00:00Z",
            "expires": expires,
            "last_modified": "2026-08-07T09:30:00Z",
            "geometry": {
                "type": "Point",
                "coordinates": [18.4806, -33.9531, 42.0]
            },
            "properties": {
                "meta": {
                    "updated_at": "2026-08-07T09:00:00Z",
                    "units": { "air_temperature": "celsius", "precipitation_amount": "mm" }
                },
                "timeseries": [
                    {
                        "time": "2026-08-07T08:00:00Z",
                        "data": {
                            "instant": { "details": { "air_temperature": 10.0, "wind_speed": 2.0, "wind_from_direction": 350.0 } },
                            "next_1_hours": { "summary": { "symbol_code": "cloudy" }, "details": { "precipitation_amount": 0.0 } }
                        }
                    },
                    {
                        "time": "2026-08-07T09:00:00Z",
                        "data": {
                            "instant": { "details": { "air_temperature": 11.0, "wind_speed": 3.0, "wind_from_direction": 10.0 } },
                            "next_1_hours": { "summary": { "symbol_code": "lightrain" }, "details": { "precipitation_amount": 0.1 } }
                        }
                    },
                    {
                        "time": "2026-08-07T10:00:00Z",
                        "data": {
                            "instant": { "details": { "air_temperature": 12.5, "wind_speed": 4.0, "wind_from_direction": 20.0 } },
                            "next_1_hours": { "summary": { "symbol_code": "rain" }, "details": { "precipitation_amount": 0.2 } },
                            "next_6_hours": {
                                "summary": { "symbol_code": "rain" },
                                "details": { "precipitation_amount": 1.2, "air_temperature_max": 13.0, "air_temperature_min": 9.0 }
                            }
                        }
                    },
                    {
                        "time": "2026-08-07T11:00:00Z",
                        "data": {
                            "instant": { "details": { "air_temperature": 13.0, "wind_speed": 5.0, "wind_from_direction": 30.0 } },
                            "next_1_hours": { "summary": { "symbol_code": "rain" }, "details": { "precipitation_amount": 0.3 } }
                        }
                    },
                    {
                        "time": "2026-08-07T12:00:00Z",
                        "data": {
                            "instant": { "details": { "air_temperature": 12.0, "wind_speed": 6.0, "wind_from_direction": 40.0 } },
                            "next_1_hours": { "summary": { "symbol_code": "cloudy" }, "details": { "precipitation_amount": 0.0 } }
                        }
                    },
                    {
                        "time": "2026-08-07T16:00:00Z",
                        "data": {
                            "instant": { "details": { "air_temperature": 9.0, "wind_speed": 7.5, "wind_from_direction": 180.0 } },
                            "next_6_hours": {
                                "summary": { "symbol_code": "heavyrain" },
                                "details": { "precipitation_amount": 2.4, "air_temperature_max": 12.0, "air_temperature_min": 8.0 }
                            }
                        }
                    }
                ]
            }
        })
        .to_string()
    }

    fn noon_store() -> Forecast {
        let doc = parse_document(&fixture("2026-08-07T11:00:00Z")).unwrap();
        let offset = FixedOffset::from_str("+02:00").unwrap();
        let now = timevalues::parse_time("2026-08-07T10:30:00Z").unwrap();
        Forecast::assemble(doc, offset, now)
    }

    #[test]
    fn day_starts_at_local_midnight() {
        let store = noon_store();
        // Local time is 12:30 at +02:00, so the day started at 22:00 UTC
        // the evening before.
        assert_eq!(
            store.start_of_day,
            timevalues::parse_time("2026-08-06T22:00:00Z").unwrap()
        );
    }

    #[test]
    fn day_rolls_over_for_late_evening_clocks() {
        let doc = parse_document(&fixture("2026-08-07T11:00:00Z")).unwrap();
        let offset = FixedOffset::from_str("+02:00").unwrap();
        let now = timevalues::parse_time("2026-08-07T18:30:00Z").unwrap();

        let store = Forecast::assemble(doc, offset, now);

        // 20:30 local is past the rollover hour, so "today" is tomorrow.
        assert_eq!(
            store.start_of_day,
            timevalues::parse_time("2026-08-07T22:00:00Z").unwrap()
        );
    }

    #[test]
    fn metadata_reads_the_coordinate_triple() {
        let meta = noon_store().metadata();

        assert_eq!(meta.latitude, -33.9531);
        assert_eq!(meta.longitude, 18.4806);
        assert_eq!(meta.elevation, 42.0);
        assert_eq!(
            meta.forecast_updated_at,
            timevalues::parse_time("2026-08-07T09:00:00Z").unwrap()
        );
        assert_eq!(meta.units["air_temperature"], "celsius");
    }

    #[test]
    fn current_picks_the_newest_sample_not_in_the_future() {
        let current = noon_store().current().unwrap();

        assert_eq!(current.at, timevalues::parse_time("2026-08-07T10:00:00Z").unwrap());
        assert_eq!(current.air_temperature, Some(12.5));
        assert_eq!(current.wind_speed, Some(4.0));
        assert_eq!(current.wind_speed_knots, Some(7.8));
        assert_eq!(current.wind_direction, Some("N"));
        assert_eq!(current.wind_description, Some("gentle breeze"));
        assert_eq!(current.symbol_code.as_deref(), Some("rain"));
        assert_eq!(current.precipitation_amount, Some(0.2));
    }

    #[test]
    fn current_is_absent_for_an_all_future_series() {
        let doc = parse_document(&fixture("2026-08-07T11:00:00Z")).unwrap();
        let offset = FixedOffset::from_str("+00:00").unwrap();
        let now = timevalues::parse_time("2026-08-01T00:00:00Z").unwrap();

        assert!(Forecast::assemble(doc, offset, now).current().is_none());
    }

    #[test]
    fn next_12_hours_aggregates_and_votes_on_symbols() {
        let view = noon_store().next_12_hours();

        assert_eq!(view.forecast.temperature_maximum, Some(13.0));
        assert_eq!(view.forecast.temperature_minimum, Some(9.0));
        assert_eq!(view.forecast.wind_speed_max, Some(7.5));
        assert_eq!(view.forecast.wind_speed_max_knots, Some(14.6));
        assert_eq!(view.forecast.wind_description, Some("moderate breeze"));
        assert_eq!(view.forecast.wind_direction, Some("NE"));
        assert_eq!(view.forecast.precipitation, 0.3 + 2.4);
        // "rain" and "cloudy" appear once each in range; first one wins.
        assert_eq!(view.symbol.as_deref(), Some("rain"));
    }

    #[test]
    fn three_day_and_week_views_trim_the_description() {
        let store = noon_store();

        let three = store.three_days();
        let week = store.week();

        assert_eq!(three.wind_description, None);
        assert_eq!(week.wind_description, None);
        assert_eq!(three.temperature_maximum, Some(13.0));
        assert_eq!(week.temperature_maximum, Some(13.0));
        assert!(serde_json::to_value(&three).unwrap().get("wind_description").is_none());
    }

    #[test]
    fn six_hourly_walks_the_grid_and_skips_gaps() {
        let buckets = noon_store().six_hourly();

        // Grid from the day start lands on 10:00 and 16:00 UTC; the later
        // grid points have no six-hour entries and are skipped.
        assert_eq!(buckets.len(), 2);

        assert_eq!(buckets[0].at, timevalues::parse_time("2026-08-07T10:00:00Z").unwrap());
        assert_eq!(buckets[0].temperature_maximum, Some(13.0));
        assert_eq!(buckets[0].temperature_minimum, Some(9.0));
        assert_eq!(buckets[0].precipitation, Some(1.2));
        assert_eq!(buckets[0].symbol_code.as_deref(), Some("rain"));

        assert_eq!(buckets[1].at, timevalues::parse_time("2026-08-07T16:00:00Z").unwrap());
        assert_eq!(buckets[1].wind_speed_max, Some(7.5));
        assert_eq!(buckets[1].wind_speed_max_knots, Some(14.6));
        assert_eq!(buckets[1].wind_direction, Some("S"));
        assert_eq!(buckets[1].wind_description, Some("moderate breeze"));
    }

    #[test]
    fn daily_always_returns_eight_buckets() {
        let days = noon_store().daily();

        assert_eq!(days.len(), 8);
        assert_eq!(days[0].at, timevalues::parse_time("2026-08-06T22:00:00Z").unwrap());
        assert_eq!(days[0].forecast.temperature_maximum, Some(13.0));
        assert_eq!(days[0].forecast.temperature_minimum, Some(9.0));

        // The document covers one day; the tail buckets stay empty
        // instead of erroring.
        for day in &days[2..] {
            assert_eq!(day.forecast.temperature_maximum, None);
            assert_eq!(day.forecast.wind_speed_max, None);
            assert_eq!(day.forecast.precipitation, 0.0);
        }
    }

    #[test]
    fn arrays_apportion_windows_across_their_hours() {
        let arrays = noon_store().arrays();

        // Five hourly entries plus one six-hour entry spread over six
        // rows.
        assert_eq!(arrays.at.len(), 11);
        assert_eq!(arrays.temperature.len(), 11);
        assert_eq!(arrays.precipitation.len(), 11);

        // The hourly entry at 11:00 keeps its full amount.
        assert_eq!(arrays.at[3], timevalues::parse_time("2026-08-07T11:00:00Z").unwrap());
        assert_eq!(arrays.precipitation[3], 0.3);
        assert_eq!(arrays.hours[3], 1);

        // The six-hour entry repeats its instant fields over 16:00-21:00
        // with the precipitation split evenly.
        for i in 5..11 {
            assert_eq!(
                arrays.at[i],
                timevalues::parse_time("2026-08-07T16:00:00Z").unwrap() + TimeDelta::hours(i as i64 - 5)
            );
            assert_eq!(arrays.temperature[i], Some(9.0));
            assert_eq!(arrays.wind_speed_knots[i], Some(14.6));
            assert_eq!(arrays.precipitation[i], 0.4);
            assert_eq!(arrays.hours[i], 6);
        }
    }

    #[test]
    fn cache_key_uses_four_decimals() {
        assert_eq!(
            cache_key(round4(-33.9531096408383), round4(18.4806353422955)),
            "yr_weather.-33.9531.18.4806"
        );
        assert_eq!(cache_key(round4(59.0), round4(10.75)), "yr_weather.59.0000.10.7500");
    }

    #[test]
    fn cache_ttl_is_floored_at_one_minute() {
        let now = timevalues::parse_time("2026-08-07T10:00:00Z").unwrap();

        let near = cache_ttl(now + TimeDelta::seconds(10), now);
        let normal = cache_ttl(now + TimeDelta::seconds(300), now);
        let passed = cache_ttl(now - TimeDelta::seconds(30), now);

        assert_eq!(near, Duration::from_secs(60));
        assert_eq!(normal, Duration::from_secs(300));
        assert_eq!(passed, Duration::from_secs(60));
    }

    #[test]
    fn persisted_documents_round_trip_through_normalization() {
        let doc = parse_document(&fixture("2026-08-07T11:00:00Z")).unwrap();

        let json = serde_json::to_string(&doc).unwrap();
        let again = parse_document(&json).unwrap();

        assert_eq!(doc.expires, again.expires);
        assert_eq!(doc.downloaded_at, again.downloaded_at);
        assert_eq!(
            doc.properties.timeseries.iter().map(|e| e.time).collect::<Vec<_>>(),
            again.properties.timeseries.iter().map(|e| e.time).collect::<Vec<_>>()
        );
    }

    struct SeededCache(String);

    impl ForecastCache for SeededCache {
        fn read(&self, _key: &str) -> Option<String> {
            Some(self.0.clone())
        }

        fn write(&self, _key: &str, _document: &str, _ttl: Duration) -> Result<(), CacheError> {
            Ok(())
        }
    }

    #[test]
    fn construction_serves_a_fresh_cache_hit_without_fetching() {
        let cache = Arc::new(SeededCache(fixture("2099-01-01T00:00:00Z")));
        let config = Config::new("team@example.org", "+02:00", cache).unwrap();

        let store = Forecast::new(-33.95310964, 18.48063534, &config).unwrap();

        assert_eq!(store.document().properties.timeseries.len(), 6);
        assert_eq!(store.metadata().latitude, -33.9531);
    }

    #[test]
    fn construction_requires_a_contact_marker_in_the_sitename() {
        let cache = Arc::new(SeededCache(fixture("2099-01-01T00:00:00Z")));
        let config = Config::new("just-a-name", "+00:00", cache).unwrap();

        let result = Forecast::new(0.0, 0.0, &config);

        assert!(matches!(result, Err(WeatherError::Configuration(_))));
    }

    #[test]
    fn unreadable_cache_hits_are_treated_as_misses() {
        // A cached body whose timestamps no longer parse must not be
        // served; parse_document surfaces the schema problem.
        let result = parse_document("{\"expires\": \"2099-99-99T00:00:00Z\"}");

        assert!(matches!(result, Err(WeatherError::Document(_))));
    }
}
