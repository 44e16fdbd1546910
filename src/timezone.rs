//! Timezone value object - IANA zone identifier with a cached UTC offset.
//!
//! DDD: Value object - immutable, compared by value.
//! The offset is captured from "now" when the value is constructed and is
//! never re-derived: a DST transition after construction is not reflected in
//! an existing instance. Callers needing a live offset build a new value.

use std::fmt;

use chrono::{Duration, Offset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_OFFSET_MINUTES;
use crate::errors::{I18nError, I18nResult};

/// An IANA timezone with display label and cached offset in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimezoneWire")]
pub struct Timezone {
    id: String,
    name: String,
    offset_minutes: i32,
}

/// Raw wire shape; validated on deserialization.
#[derive(Deserialize)]
struct TimezoneWire {
    id: String,
    name: String,
    offset_minutes: i32,
}

impl TryFrom<TimezoneWire> for Timezone {
    type Error = I18nError;

    fn try_from(wire: TimezoneWire) -> Result<Self, Self::Error> {
        Timezone::new(wire.id, wire.name, wire.offset_minutes)
    }
}

impl Timezone {
    /// Resolve an IANA zone id (`America/New_York`) against the zone
    /// database, caching the current UTC offset and abbreviation.
    ///
    /// # Errors
    /// Returns `UnsupportedTimezone` when the id is not in the database.
    pub fn from_id(id: &str) -> I18nResult<Self> {
        let tz: Tz = id.parse().map_err(|_| {
            I18nError::unsupported_timezone(format!("unknown zone id: {:?}", id))
        })?;

        let now = Utc::now().with_timezone(&tz);
        let offset_minutes = now.offset().fix().local_minus_utc() / 60;
        let name = now.format("%Z").to_string();

        Self::build(id.to_string(), name, offset_minutes)
    }

    /// Build a timezone from explicit fields, for zones outside the IANA
    /// database or for pinning an offset independent of "now".
    ///
    /// # Errors
    /// Returns `UnsupportedTimezone` when id or name is empty, or the
    /// offset is not strictly inside (-1440, 1440) minutes.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        offset_minutes: i32,
    ) -> I18nResult<Self> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() {
            return Err(I18nError::unsupported_timezone("id must not be empty"));
        }
        if name.is_empty() {
            return Err(I18nError::unsupported_timezone("name must not be empty"));
        }
        Self::build(id, name, offset_minutes)
    }

    fn build(id: String, name: String, offset_minutes: i32) -> I18nResult<Self> {
        // Open interval: exactly +/-24h is rejected
        if offset_minutes <= -MAX_OFFSET_MINUTES || offset_minutes >= MAX_OFFSET_MINUTES {
            return Err(I18nError::unsupported_timezone(format!(
                "offset must be inside (-{}, {}) minutes, got {}",
                MAX_OFFSET_MINUTES, MAX_OFFSET_MINUTES, offset_minutes
            )));
        }
        Ok(Self {
            id,
            name,
            offset_minutes,
        })
    }

    /// The IANA zone id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display label (zone abbreviation for resolved zones).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cached UTC offset in minutes.
    pub fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// Render the offset as `+HH:MM` / `-HH:MM`, always signed, always
    /// two-digit fields.
    pub fn format_offset(&self) -> String {
        let sign = if self.offset_minutes < 0 { '-' } else { '+' };
        let magnitude = self.offset_minutes.unsigned_abs();
        format!("{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60)
    }

    /// The cached offset as a duration, for date-time arithmetic.
    pub fn offset_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.offset_minutes))
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
