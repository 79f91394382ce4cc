//! Query window for time & sales requests.

use chrono::{DateTime, DurationRound, TimeDelta, Utc};

use crate::core::models::Granularity;

/// Number of buckets a history request spans, whatever the granularity.
///
/// One trading day at one-minute resolution has 390 regular-session bars, so this keeps a
/// response at a few thousand points at most.
pub const MAX_GRANULES: i32 = 1440;

/// Format used for the `start`/`end` query parameters.
pub(crate) const QUERY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Truncates `t` to whole minutes.
pub fn floor_to_minute(t: DateTime<Utc>) -> DateTime<Utc> {
    t.duration_trunc(TimeDelta::minutes(1)).unwrap_or(t)
}

/// Start of the query window ending at `to`: [`MAX_GRANULES`] buckets of `gran` earlier,
/// floored to the minute.
pub fn start_time(to: DateTime<Utc>, gran: Granularity) -> DateTime<Utc> {
    let span = gran.width() * MAX_GRANULES;
    let start = to.checked_sub_signed(span).unwrap_or(DateTime::<Utc>::MIN_UTC);
    floor_to_minute(start)
}

pub(crate) fn format_query_time(t: DateTime<Utc>) -> String {
    floor_to_minute(t).format(QUERY_TIME_FORMAT).to_string()
}
