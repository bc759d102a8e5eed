//! Inclusive millisecond windows used to cut a bundle down to a selected period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::KurssiError;

/// Milliseconds in one UTC day.
pub const DAY_MS: i64 = 86_400_000;

/// Slack added past the end day's midnight so its boundary sample is included.
pub const END_SLACK_MS: i64 = 3_600_000;

/// Inclusive window `[start_ms, end_ms]` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start_ms: i64,
    end_ms: i64,
}

impl DateRange {
    /// Create a window from raw epoch milliseconds.
    ///
    /// # Errors
    /// Returns `Err(KurssiError::InvalidArg)` if `start_ms > end_ms`.
    pub fn new(start_ms: i64, end_ms: i64) -> Result<Self, KurssiError> {
        if start_ms > end_ms {
            return Err(KurssiError::invalid_arg(format!(
                "range start {start_ms} is after end {end_ms}"
            )));
        }
        Ok(Self { start_ms, end_ms })
    }

    /// Window from UTC midnight of `start` to UTC midnight of `end`, plus one hour.
    ///
    /// # Errors
    /// Returns `Err(KurssiError::InvalidArg)` if `start` is after `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, KurssiError> {
        if start > end {
            return Err(KurssiError::invalid_arg(format!(
                "range start {start} is after end {end}"
            )));
        }
        Self::new(midnight_ms(start), midnight_ms(end) + END_SLACK_MS)
    }

    /// Parse two `yyyy-mm-dd` dates, as produced by an HTML date input.
    ///
    /// # Errors
    /// Returns `Err(KurssiError::InvalidArg)` if either date fails to parse or
    /// the start is after the end.
    pub fn parse(start: &str, end: &str) -> Result<Self, KurssiError> {
        let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d")?;
        let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d")?;
        Self::from_dates(start, end)
    }

    /// Start bound in epoch milliseconds.
    #[must_use]
    pub const fn start_ms(&self) -> i64 {
        self.start_ms
    }

    /// End bound in epoch milliseconds.
    #[must_use]
    pub const fn end_ms(&self) -> i64 {
        self.end_ms
    }

    /// True when `ts` lies within the window.
    #[must_use]
    pub const fn contains(&self, ts: i64) -> bool {
        self.start_ms <= ts && ts <= self.end_ms
    }
}

fn midnight_ms(date: NaiveDate) -> i64 {
    // and_hms_opt(0, 0, 0) is always representable
    date.and_hms_opt(0, 0, 0)
        .map_or(0, |dt| dt.and_utc().timestamp_millis())
}

/// Round an epoch-millisecond timestamp down to its UTC midnight.
#[must_use]
pub const fn floor_to_midnight(ts: i64) -> i64 {
    ts.div_euclid(DAY_MS) * DAY_MS
}

/// Milliseconds elapsed since the UTC midnight preceding `ts`.
#[must_use]
pub const fn ms_since_midnight(ts: i64) -> i64 {
    ts.rem_euclid(DAY_MS)
}
