//! Naive wall-clock timestamp policy.
//!
//! # Responsibility
//! - Parse and render `YYYY-MM-DD` dates and `YYYY-MM-DDTHH:MM` timestamps.
//! - Describe the current date for callers resolving relative dates.
//! - Provide serde adapters so model types keep chrono values internally.
//!
//! # Invariants
//! - No timezone conversion is applied anywhere; values are local wall clock.
//! - The calendar date of a timestamp is its date component, nothing else.
//! - Day boundaries are half-open: a day covers `[00:00, next day 00:00)`.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Date-only wire format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Canonical date-time wire format.
pub const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M";
const WALL_CLOCK_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Timestamp parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    InvalidDate(String),
    InvalidDateTime(String),
}

impl Display for TimestampError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::InvalidDateTime(value) => {
                write!(f, "invalid timestamp `{value}`; expected YYYY-MM-DDTHH:MM")
            }
        }
    }
}

impl Error for TimestampError {}

/// Parses a date-time value in `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS` form.
///
/// Date-only strings are rejected: an event boundary always needs a time.
pub fn parse_wall_clock(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, WALL_CLOCK_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, WALL_CLOCK_SECONDS_FORMAT))
        .map_err(|_| TimestampError::InvalidDateTime(trimmed.to_string()))
}

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD`, or a full wall-clock timestamp whose date component
/// is taken as-is.
pub fn parse_date(value: &str) -> Result<NaiveDate, TimestampError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    parse_wall_clock(trimmed)
        .map(|timestamp| timestamp.date())
        .map_err(|_| TimestampError::InvalidDate(trimmed.to_string()))
}

/// Renders a timestamp in canonical form. Seconds appear only when non-zero.
pub fn format_wall_clock(value: NaiveDateTime) -> String {
    if value.second() == 0 && value.nanosecond() == 0 {
        value.format(WALL_CLOCK_FORMAT).to_string()
    } else {
        value.format(WALL_CLOCK_SECONDS_FORMAT).to_string()
    }
}

pub fn format_date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calendar date with its English weekday and long-form rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayInfo {
    pub date: NaiveDate,
    /// `Monday` .. `Sunday`.
    pub day_of_week: String,
    /// `March 19, 2024`.
    pub formatted: String,
}

pub fn today_info(date: NaiveDate) -> TodayInfo {
    TodayInfo {
        date,
        day_of_week: date.format("%A").to_string(),
        formatted: date.format("%B %-d, %Y").to_string(),
    }
}

/// Serde adapter for `NaiveDateTime` fields using the canonical wire format.
pub mod serde_wall_clock {
    use super::{format_wall_clock, parse_wall_clock};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_wall_clock(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_wall_clock(&raw).map_err(serde::de::Error::custom)
    }
}
