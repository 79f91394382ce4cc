use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/* ----- REFERENCE DATA ----- */

/// A trading venue as reported in ticker search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exchange {
    /// One-letter venue code used by the provider (e.g. `"Q"`).
    pub id: &'static str,
    /// Human readable venue name.
    pub name: &'static str,
}

/// A tradable symbol with descriptive metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ticker {
    /// The trading symbol.
    pub id: String,
    /// Security description; empty when the payload has none.
    pub name: String,
    /// Venue code, see [`Exchange::id`]; empty when the payload has none.
    pub exchange_id: String,
}

/* ----- QUOTES ----- */

/// Value used for optional price fields the provider did not report.
pub const MISSING_PRICE: f64 = -1.0;

/// A snapshot of current trading statistics for one symbol.
///
/// `open`, `high`, `low` and `close` are [`MISSING_PRICE`] when the provider omitted them
/// (typically before the session opens).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub last: f64,
    pub change: f64,
    pub change_percent: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Default for Quote {
    fn default() -> Self {
        Self {
            last: 0.0,
            change: 0.0,
            change_percent: 0.0,
            open: MISSING_PRICE,
            high: MISSING_PRICE,
            low: MISSING_PRICE,
            close: MISSING_PRICE,
            volume: 0,
        }
    }
}

/* ----- HISTORY ----- */

/// One OHLCV bar for a fixed time bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Granule {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    /// Volume-weighted average price over the bucket.
    pub price: f64,
}

/// Sampling resolution for historical price data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Granularity {
    Minute,
    FiveMinutes,
    FifteenMinutes,
    Day,
}

impl Granularity {
    /// Width of one bucket.
    pub fn width(self) -> TimeDelta {
        match self {
            Granularity::Minute => TimeDelta::minutes(1),
            Granularity::FiveMinutes => TimeDelta::minutes(5),
            Granularity::FifteenMinutes => TimeDelta::minutes(15),
            Granularity::Day => TimeDelta::days(1),
        }
    }

    /// The time & sales `interval` token, `None` for granularities the endpoint lacks.
    pub fn interval(self) -> Option<&'static str> {
        match self {
            Granularity::Minute => Some("1min"),
            Granularity::FiveMinutes => Some("5min"),
            Granularity::FifteenMinutes => Some("15min"),
            Granularity::Day => None,
        }
    }
}

/* ----- OUTCOME ----- */

/// Outcome of one asynchronous operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Ok,
    Failure,
}

impl Status {
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}
