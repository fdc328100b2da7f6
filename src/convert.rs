/// The eight compass points in clockwise order from north.
const COMPASS_BEARINGS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Width of one compass arc in degrees.
const ARC: f64 = 360.0 / COMPASS_BEARINGS.len() as f64;

/// Wind force bands as (exclusive upper bound in m/s, description), probed
/// in order. Speeds at or beyond the last bound are hurricane force.
const WIND_FORCES: [(f64, &str); 12] = [
    (0.5, "calm"),
    (1.5, "light air"),
    (3.3, "light breeze"),
    (5.5, "gentle breeze"),
    (7.9, "moderate breeze"),
    (10.7, "fresh breeze"),
    (13.8, "strong breeze"),
    (17.1, "high wind"),
    (20.7, "gale"),
    (24.4, "strong gale"),
    (28.4, "storm"),
    (32.6, "violent storm"),
];

/// Conversion factor from meters per second to knots.
const KNOTS_PER_MS: f64 = 1.943844;

/// Converts a wind origin in degrees to the nearest of the eight compass
/// points. Values outside 0-360 wrap around the circle.
///
/// # Arguments
///
/// * 'degrees' - wind direction in degrees, if reported
pub fn degrees_to_bearing(degrees: Option<f64>) -> Option<&'static str> {
    degrees.map(|d| {
        let arc = (d / ARC).round() as i64;
        COMPASS_BEARINGS[arc.rem_euclid(COMPASS_BEARINGS.len() as i64) as usize]
    })
}

/// Converts meters per second to knots, rounded to one decimal.
///
/// # Arguments
///
/// * 'ms' - wind speed in meters per second, if reported
pub fn to_knots(ms: Option<f64>) -> Option<f64> {
    ms.map(|v| round1(v * KNOTS_PER_MS))
}

/// Returns the qualitative wind force description for a wind speed. The
/// speed is rounded to one decimal and the first band whose upper bound
/// exceeds it wins, so every band is closed at its lower edge.
///
/// # Arguments
///
/// * 'ms' - wind speed in meters per second, if reported
pub fn wind_description(ms: Option<f64>) -> Option<&'static str> {
    ms.map(|v| {
        let rounded = round1(v);
        WIND_FORCES
            .iter()
            .find(|(bound, _)| rounded < *bound)
            .map_or("hurricane force", |(_, name)| name)
    })
}

/// Rounds a value to one decimal place.
///
/// # Arguments
///
/// * 'value' - the value to round
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
