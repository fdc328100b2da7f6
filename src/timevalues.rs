use std::sync::OnceLock;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use regex::Regex;
use serde_json::Value;
use crate::errors::WeatherError;

/// Scalars matching this pattern are provider timestamps. Matched anywhere
/// in the string, with or without a trailing offset.
const TIME_PATTERN: &str = r"\d{4}-\d{2}-\d{2}[ T]\d{2}:\d{2}:\d{2}";

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TIME_PATTERN).expect("timestamp pattern is a valid regex"))
}

/// Recursively normalizes a decoded JSON document so that every scalar
/// matching the provider's date-time pattern holds the canonical RFC 3339
/// UTC form. Mappings keep their key set, sequences keep their order and
/// all other scalars pass through untouched.
///
/// A scalar that looks like a timestamp but does not parse is an error
/// rather than a passthrough: downstream aggregation relies on every time
/// value being resolvable, so a malformed one signals an incompatible
/// upstream schema.
///
/// # Arguments
///
/// * 'node' - the decoded JSON node to normalize
pub fn normalize(node: Value) -> Result<Value, WeatherError> {
    match node {
        Value::Object(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                out.insert(key, normalize(value)?);
            }
            Ok(Value::Object(out))
        }
        Value::Array(seq) => {
            let mut out = Vec::with_capacity(seq.len());
            for value in seq {
                out.push(normalize(value)?);
            }
            Ok(Value::Array(out))
        }
        Value::String(s) if time_regex().is_match(&s) => {
            let parsed = parse_time(&s)?;
            Ok(Value::String(parsed.to_rfc3339_opts(SecondsFormat::Secs, true)))
        }
        other => Ok(other),
    }
}

/// Parses a single date-time scalar. Accepts RFC 3339 (the upstream wire
/// form) and the space-separated variant; values without an offset are
/// taken as UTC.
///
/// # Arguments
///
/// * 'value' - the scalar to parse
pub fn parse_time(value: &str) -> Result<DateTime<Utc>, WeatherError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%:z") {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt.and_utc());
        }
    }

    Err(WeatherError::Document(format!("unparseable timestamp: {}", value)))
}
