//! Timestamps for state bookkeeping and event records.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp used for `last_changed`, `last_updated`, press times and events.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as RFC 3339 with millisecond precision.
///
/// Used as the state value of push-button entities.
#[must_use]
pub fn to_state_string(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
