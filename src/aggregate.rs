use chrono::{DateTime, TimeDelta, Utc};
use crate::convert::{degrees_to_bearing, to_knots, wind_description};
use crate::models::document::TimeSeriesEntry;
use crate::models::views::ForecastSummary;

/// A closed interval of two instants, used only as an aggregation query.
#[derive(Clone, Copy)]
pub struct Range {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Range {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Range {
        Range { start, end }
    }

    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Selects the entries whose sample time falls in the range, in series
/// order.
///
/// # Arguments
///
/// * 'series' - the document's time series
/// * 'range' - the query range
pub fn entries_in_range<'a>(series: &'a [TimeSeriesEntry], range: &Range) -> Vec<&'a TimeSeriesEntry> {
    series.iter().filter(|e| range.contains(e.time)).collect()
}

/// Computes the summary statistics over one range: temperature extremes
/// and maximum wind over the instantaneous samples, the modal wind
/// bearing, and the accumulated precipitation. Entries lacking a field are
/// excluded from that statistic only, never from the whole result.
///
/// # Arguments
///
/// * 'series' - the document's time series
/// * 'range' - the query range
pub fn summarize(series: &[TimeSeriesEntry], range: &Range) -> ForecastSummary {
    let nodes = entries_in_range(series, range);

    let temperatures: Vec<f64> = nodes
        .iter()
        .filter_map(|e| e.data.instant.details.air_temperature)
        .collect();
    let winds: Vec<f64> = nodes
        .iter()
        .filter_map(|e| e.data.instant.details.wind_speed)
        .collect();
    let bearings: Vec<&'static str> = nodes
        .iter()
        .filter_map(|e| degrees_to_bearing(e.data.instant.details.wind_from_direction))
        .collect();

    let wind_max = winds.iter().copied().reduce(f64::max);

    ForecastSummary {
        temperature_maximum: temperatures.iter().copied().reduce(f64::max),
        temperature_minimum: temperatures.iter().copied().reduce(f64::min),
        wind_speed_max: wind_max,
        wind_speed_max_knots: to_knots(wind_max),
        wind_description: wind_description(wind_max),
        wind_direction: modal(&bearings),
        precipitation: accumulate_precipitation(&nodes, range),
    }
}

/// Returns the most frequent value, ties broken by the first value
/// encountered in iteration order. Deliberately not a stable statistical
/// mode; callers rely on the first-encountered winner.
///
/// # Arguments
///
/// * 'values' - the values to count
pub fn modal<T: PartialEq + Clone>(values: &[T]) -> Option<T> {
    let mut winner: Option<(&T, usize)> = None;
    for value in values {
        let count = values.iter().filter(|other| *other == value).count();
        if winner.map_or(true, |(_, best)| count > best) {
            winner = Some((value, count));
        }
    }
    winner.map(|(value, _)| value.clone())
}

/// Accumulates precipitation over the range without counting any period
/// twice across the overlapping window resolutions.
///
/// A moving cursor starts at the range start. Each entry at or past the
/// cursor contributes the amount of its first present window (one hour,
/// then six, then twelve) and pushes the cursor forward by that window's
/// length. Entries behind the cursor were already covered by an earlier,
/// coarser window and are skipped; the cursor never rewinds.
///
/// # Arguments
///
/// * 'nodes' - the entries selected for the range, in chronological order
/// * 'range' - the query range
fn accumulate_precipitation(nodes: &[&TimeSeriesEntry], range: &Range) -> f64 {
    let mut cursor = range.start;
    let mut total = 0.0;

    for node in nodes {
        if node.time < cursor {
            continue;
        }
        if let Some((amount, hours)) = node.data.first_precipitation() {
            total += amount;
            cursor += TimeDelta::hours(hours);
        }
    }

    total
}
