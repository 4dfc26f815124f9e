//! Wall-clock port.
//!
//! # Responsibility
//! - Provide the single time source used for note ids, timestamps, the
//!   sound throttle and notification windows.
//! - Keep time injectable so tests can drive it deterministically.

use chrono::{DateTime, SecondsFormat, Utc};

/// Time source injected into the store and notification layer.
pub trait Clock {
    /// Current wall-clock instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current instant as epoch milliseconds.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Current instant as an ISO-8601 string with millisecond precision
    /// and a `Z` offset, e.g. `2026-08-30T12:00:00.000Z`.
    fn now_iso(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
