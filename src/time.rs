//! Time value object - validated Unix-epoch-seconds wrapper.
//!
//! DDD: Value object - immutable, compared by value.
//! Supported instants span 1970-01-01T00:00:00Z through 2100-12-31T23:59:59Z
//! inclusive; everything outside that window is rejected at construction.

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_EPOCH_SECONDS, MIN_EPOCH_SECONDS};
use crate::errors::{I18nError, I18nResult};
use crate::timezone::Timezone;

/// An absolute instant in epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Time {
    epoch_seconds: i64,
}

impl From<Time> for i64 {
    fn from(time: Time) -> Self {
        time.epoch_seconds
    }
}

impl TryFrom<i64> for Time {
    type Error = I18nError;

    fn try_from(epoch_seconds: i64) -> Result<Self, Self::Error> {
        Time::new(epoch_seconds)
    }
}

impl Time {
    /// Build a time from epoch seconds.
    ///
    /// # Errors
    /// Returns `OutOfRangeTime` when the epoch falls outside 1970-2100.
    pub fn new(epoch_seconds: i64) -> I18nResult<Self> {
        if !(MIN_EPOCH_SECONDS..=MAX_EPOCH_SECONDS).contains(&epoch_seconds) {
            return Err(I18nError::out_of_range_time(format!(
                "epoch {} outside supported range {}..={}",
                epoch_seconds, MIN_EPOCH_SECONDS, MAX_EPOCH_SECONDS
            )));
        }
        Ok(Self { epoch_seconds })
    }

    /// The current instant.
    ///
    /// # Errors
    /// Returns `OutOfRangeTime` if the host clock reports an instant
    /// outside the supported window.
    pub fn now() -> I18nResult<Self> {
        Self::new(Utc::now().timestamp())
    }

    /// Build from a chrono UTC date-time.
    ///
    /// # Errors
    /// Returns `OutOfRangeTime` when the instant is outside 1970-2100.
    pub fn from_datetime(datetime: DateTime<Utc>) -> I18nResult<Self> {
        Self::new(datetime.timestamp())
    }

    /// The instant as a chrono UTC date-time.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        // In-range by construction, so the conversion cannot fail
        DateTime::from_timestamp(self.epoch_seconds, 0).unwrap_or_default()
    }

    /// The raw epoch seconds.
    pub fn epoch_seconds(&self) -> i64 {
        self.epoch_seconds
    }

    /// Render with a strftime layout, shifted into the given timezone's
    /// cached offset (UTC when `None`). The cached offset is used as a fixed
    /// offset; there is no live DST lookup here.
    pub fn format(&self, layout: &str, timezone: Option<&Timezone>) -> String {
        let utc = self.to_datetime();
        match timezone {
            Some(tz) => match FixedOffset::east_opt(tz.offset_minutes() * 60) {
                Some(offset) => utc.with_timezone(&offset).format(layout).to_string(),
                // Offsets are bounds-checked at Timezone construction,
                // so this branch is unreachable for valid values
                None => utc.format(layout).to_string(),
            },
            None => utc.format(layout).to_string(),
        }
    }

    /// Shift by a duration, revalidating the 1970-2100 window.
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` on i64 overflow and `OutOfRangeTime`
    /// when the shifted instant leaves the window.
    pub fn add(&self, duration: Duration) -> I18nResult<Self> {
        let shifted = self
            .epoch_seconds
            .checked_add(duration.num_seconds())
            .ok_or_else(|| {
                I18nError::overflow(format!(
                    "adding {}s to epoch {}",
                    duration.num_seconds(),
                    self.epoch_seconds
                ))
            })?;
        Self::new(shifted)
    }

    /// Strict epoch comparison.
    pub fn is_before(&self, other: &Time) -> bool {
        self.epoch_seconds < other.epoch_seconds
    }

    /// Strict epoch comparison.
    pub fn is_after(&self, other: &Time) -> bool {
        self.epoch_seconds > other.epoch_seconds
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.epoch_seconds)
    }
}
