//! Forecast Request Builder
//!
//! Validates raw user input (horizon text, start time text) and turns it into
//! the payload the prediction service expects. Pure: no state, no I/O.

use chrono::{Local, NaiveDateTime, Timelike};

use crate::constants::{MAX_HORIZON_DAYS, MIN_HORIZON_DAYS, START_TIME_FORMAT};
use crate::domain::forecast::{ForecastPayload, ForecastQuery};
use crate::error::{ForecastError, ForecastResult};

/// Accepted start time layouts, most specific first
const START_TIME_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a start time and truncate it to the minute
pub fn parse_start_time(input: &str) -> ForecastResult<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ForecastError::InvalidQuery {
            reason: "start time is empty".to_string(),
        });
    }

    START_TIME_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .and_then(|dt| dt.with_second(0))
        .and_then(|dt| dt.with_nanosecond(0))
        .ok_or_else(|| ForecastError::InvalidQuery {
            reason: format!("start time '{input}' is not a local date-time (expected YYYY-MM-DDTHH:MM)"),
        })
}

/// Parse a horizon typed by the user
///
/// Integral floats such as "7.0" are accepted; fractions, NaN, infinities and
/// anything outside the allowed range are not.
pub fn parse_horizon(input: &str) -> ForecastResult<u32> {
    let input = input.trim();
    let value: f64 = input.parse().map_err(|_| ForecastError::InvalidQuery {
        reason: format!("horizon '{input}' is not a number"),
    })?;

    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ForecastError::InvalidQuery {
            reason: format!("horizon '{input}' is not a whole number of days"),
        });
    }
    if value < f64::from(MIN_HORIZON_DAYS) || value > f64::from(MAX_HORIZON_DAYS) {
        return Err(horizon_out_of_range(value));
    }

    Ok(value as u32)
}

fn horizon_out_of_range(value: impl std::fmt::Display) -> ForecastError {
    ForecastError::InvalidQuery {
        reason: format!(
            "horizon must be between {MIN_HORIZON_DAYS} and {MAX_HORIZON_DAYS} days, got {value}"
        ),
    }
}

/// Validate raw input into a query
pub fn parse_query(horizon: &str, start_time: &str) -> ForecastResult<ForecastQuery> {
    let horizon_days = parse_horizon(horizon)?;
    let start_time = parse_start_time(start_time)?;
    Ok(ForecastQuery {
        start_time,
        horizon_days,
    })
}

/// Build the request payload for a query
///
/// Out-of-range horizons are rejected, never clamped.
pub fn build(query: &ForecastQuery) -> ForecastResult<ForecastPayload> {
    if !(MIN_HORIZON_DAYS..=MAX_HORIZON_DAYS).contains(&query.horizon_days) {
        return Err(horizon_out_of_range(query.horizon_days));
    }

    let query = ForecastQuery {
        start_time: query
            .start_time
            .with_second(0)
            .and_then(|dt| dt.with_nanosecond(0))
            .unwrap_or(query.start_time),
        horizon_days: query.horizon_days,
    };

    Ok(ForecastPayload::from_query(&query))
}

/// Current local time in the start time input format
pub fn default_start_time() -> String {
    Local::now()
        .naive_local()
        .format(START_TIME_FORMAT)
        .to_string()
}
