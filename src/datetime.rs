//! LocalizedDateTime value object - one absolute instant plus the timezone
//! frame it is displayed in.
//!
//! DDD: Value object - immutable, compared by value.
//! Ordering and duration math use the underlying epoch only; the timezone
//! never affects which of two instants is earlier.

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{I18nError, I18nResult};
use crate::time::Time;
use crate::timezone::Timezone;

/// An instant paired with a display timezone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedDateTime {
    time: Time,
    timezone: Timezone,
}

impl LocalizedDateTime {
    /// Pair an already-validated time and timezone.
    pub fn new(time: Time, timezone: Timezone) -> Self {
        Self { time, timezone }
    }

    /// Rebuild from the primitive `(epoch seconds, zone id)` pair.
    ///
    /// # Errors
    /// Returns `CompositeValidation` naming the failing member when the
    /// epoch is out of range or the zone id does not resolve.
    pub fn from_parts(epoch_seconds: i64, timezone_id: &str) -> I18nResult<Self> {
        let time = Time::new(epoch_seconds).map_err(|e| I18nError::composite("time", e))?;
        let timezone =
            Timezone::from_id(timezone_id).map_err(|e| I18nError::composite("timezone", e))?;
        Ok(Self { time, timezone })
    }

    /// The underlying instant.
    pub fn time(&self) -> &Time {
        &self.time
    }

    /// The display timezone.
    pub fn timezone(&self) -> &Timezone {
        &self.timezone
    }

    /// Render with a strftime layout in the held timezone's frame.
    pub fn format(&self, layout: &str) -> String {
        self.time.format(layout, Some(&self.timezone))
    }

    /// The instant in the held timezone's wall-clock frame.
    pub fn to_local(&self) -> DateTime<FixedOffset> {
        let offset_seconds = self.timezone.offset_minutes() * 60;
        match FixedOffset::east_opt(offset_seconds) {
            Some(offset) => self.time.to_datetime().with_timezone(&offset),
            // Offsets are bounds-checked at Timezone construction
            None => self.time.to_datetime().fixed_offset(),
        }
    }

    /// The instant in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.time.to_datetime()
    }

    /// Shift forward, keeping the same timezone.
    ///
    /// # Errors
    /// Returns `OutOfRangeTime`/`ArithmeticOverflow` per [`Time::add`].
    pub fn add(&self, duration: Duration) -> I18nResult<Self> {
        Ok(Self {
            time: self.time.add(duration)?,
            timezone: self.timezone.clone(),
        })
    }

    /// Shift backward, keeping the same timezone.
    ///
    /// # Errors
    /// Returns `OutOfRangeTime`/`ArithmeticOverflow` per [`Time::add`].
    pub fn subtract(&self, duration: Duration) -> I18nResult<Self> {
        self.add(-duration)
    }

    /// Strict epoch comparison; timezones are irrelevant to ordering.
    pub fn is_before(&self, other: &LocalizedDateTime) -> bool {
        self.time.is_before(&other.time)
    }

    /// Strict epoch comparison; timezones are irrelevant to ordering.
    pub fn is_after(&self, other: &LocalizedDateTime) -> bool {
        self.time.is_after(&other.time)
    }

    /// Epoch equality; two instants in different zones can be equal.
    pub fn is_equal(&self, other: &LocalizedDateTime) -> bool {
        self.time == other.time
    }

    /// Signed duration from `other` to `self`.
    pub fn duration_since(&self, other: &LocalizedDateTime) -> Duration {
        Duration::seconds(self.time.epoch_seconds() - other.time.epoch_seconds())
    }

    /// The primitive storage pair.
    pub fn to_parts(&self) -> (i64, &str) {
        (self.time.epoch_seconds(), self.timezone.id())
    }
}

impl fmt::Display for LocalizedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.format("%Y-%m-%d %H:%M:%S"), self.timezone.id())
    }
}
