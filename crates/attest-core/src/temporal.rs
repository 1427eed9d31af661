//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines [`Timestamp`], a UTC-only timestamp truncated to seconds
//! precision. The host environment supplies the current time at call time;
//! in practice it is monotonic non-decreasing across calls but not
//! guaranteed strictly increasing between two calls in the same second.
//!
//! The `Default` value is the unix epoch — the zero timestamp the read
//! path reports for records that were never created.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp, truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// The unix epoch — the zero timestamp.
    pub fn epoch() -> Self {
        Self(DateTime::UNIX_EPOCH)
    }

    /// Construct from unix seconds. Returns `None` if out of the
    /// representable range.
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// The timestamp as unix seconds.
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// Access the inner `chrono` value.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::epoch()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    // with_nanosecond(0) only fails for out-of-range values, which 0 is not.
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_epoch() {
        assert_eq!(Timestamp::default(), Timestamp::epoch());
        assert_eq!(Timestamp::default().unix(), 0);
    }

    #[test]
    fn test_now_has_no_subseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_unix_round_trip() {
        let ts = Timestamp::from_unix(1_700_000_000).unwrap();
        assert_eq!(ts.unix(), 1_700_000_000);
    }

    #[test]
    fn test_display_z_suffix() {
        let ts = Timestamp::epoch();
        assert_eq!(ts.to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_ordering() {
        let a = Timestamp::from_unix(10).unwrap();
        let b = Timestamp::from_unix(11).unwrap();
        assert!(a < b);
    }
}
