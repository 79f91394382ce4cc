//! Payload → model conversions for the Tradier market endpoints.
//!
//! The list endpoint is lenient: a payload without matches has a missing or `null`
//! container, so anything that does not have the expected shape reads as "no results".
//! Quotes and time & sales are strict and reject any missing or mistyped required field.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::core::TdError;
use crate::core::models::{Granule, MISSING_PRICE, Quote, Ticker};

/// Timestamp format of `series.data[].time`.
const SERIES_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/* ---------------- ticker search ---------------- */

/// Parses `securities.security[]`. Elements without a string `symbol` are skipped.
pub fn parse_ticker_list(json: &Value) -> Vec<Ticker> {
    let Some(security) = json
        .as_object()
        .and_then(|root| root.get("securities"))
        .and_then(Value::as_object)
        .and_then(|securities| securities.get("security"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    security
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|o| {
            let symbol = o.get("symbol").and_then(Value::as_str)?;
            Some(Ticker {
                id: symbol.to_string(),
                name: opt_string(o, "description"),
                exchange_id: opt_string(o, "exchange"),
            })
        })
        .collect()
}

fn opt_string(o: &Map<String, Value>, key: &str) -> String {
    o.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

/* ---------------- quotes ---------------- */

/// Parses `quotes.quote` into a [`Quote`].
pub fn parse_quote(json: &Value) -> Result<Quote, TdError> {
    let root = object(json, "root")?;
    let quotes = object(field(root, "quotes")?, "quotes")?;
    let quote = object(field(quotes, "quote")?, "quote")?;

    Ok(Quote {
        last: number(quote, "last")?,
        change: number(quote, "change")?,
        change_percent: number(quote, "change_percentage")?,
        close: price_or_missing(quote, "close"),
        open: price_or_missing(quote, "open"),
        high: price_or_missing(quote, "high"),
        low: price_or_missing(quote, "low"),
        volume: unsigned(quote, "volume")?,
    })
}

fn price_or_missing(o: &Map<String, Value>, key: &str) -> f64 {
    o.get(key).and_then(Value::as_f64).unwrap_or(MISSING_PRICE)
}

/* ---------------- time & sales ---------------- */

/// Parses `series.data[]` into granules, in payload order.
///
/// Every element must carry all of `time`, `volume`, `open`, `close`, `high`, `low` and
/// `vwap`; a single bad element fails the whole series.
pub fn parse_prices(json: &Value) -> Result<Vec<Granule>, TdError> {
    let root = object(json, "root")?;
    let series = object(field(root, "series")?, "series")?;
    let data = field(series, "data")?
        .as_array()
        .ok_or_else(|| TdError::Data("`data` is not an array".into()))?;

    data.iter()
        .map(|point| {
            let o = object(point, "data[]")?;
            let time = field(o, "time")?
                .as_str()
                .ok_or_else(|| TdError::Data("`time` is not a string".into()))?;
            Ok(Granule {
                timestamp: parse_datetime(time)?,
                volume: unsigned(o, "volume")?,
                open: number(o, "open")?,
                close: number(o, "close")?,
                high: number(o, "high")?,
                low: number(o, "low")?,
                price: number(o, "vwap")?,
            })
        })
        .collect()
}

/// Parses a series timestamp such as `2021-06-01T09:30:00` as UTC.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, TdError> {
    NaiveDateTime::parse_from_str(s, SERIES_TIME_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|e| TdError::Data(format!("bad timestamp `{s}`: {e}")))
}

/* ---------------- helpers ---------------- */

fn object<'a>(v: &'a Value, what: &str) -> Result<&'a Map<String, Value>, TdError> {
    v.as_object()
        .ok_or_else(|| TdError::Data(format!("`{what}` is not an object")))
}

fn field<'a>(o: &'a Map<String, Value>, key: &str) -> Result<&'a Value, TdError> {
    o.get(key)
        .ok_or_else(|| TdError::Data(format!("missing field `{key}`")))
}

fn number(o: &Map<String, Value>, key: &str) -> Result<f64, TdError> {
    field(o, key)?
        .as_f64()
        .ok_or_else(|| TdError::Data(format!("`{key}` is not a number")))
}

/// Unsigned count; integral non-negative floats (`1200.0`) are accepted as well.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unsigned(o: &Map<String, Value>, key: &str) -> Result<u64, TdError> {
    let v = field(o, key)?;
    if let Some(u) = v.as_u64() {
        return Ok(u);
    }
    match v.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        _ => Err(TdError::Data(format!(
            "`{key}` is not an unsigned integer"
        ))),
    }
}
