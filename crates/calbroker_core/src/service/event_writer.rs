//! Booking validation and event construction.
//!
//! # Responsibility
//! - Validate booking requests in a fixed order.
//! - Detect overlap against every stored event.
//! - Build new events with generated opaque ids.
//!
//! # Invariants
//! - Validation order is format, then range, then conflict; first failure wins.
//! - Nothing here mutates storage; the service appends under its write gate.

use crate::model::event::{Event, EventId};
use crate::model::wall_clock::{parse_wall_clock, TimestampError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Caller input for booking one event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventRequest {
    pub title: String,
    /// `YYYY-MM-DDTHH:MM` local wall clock.
    pub start_time: String,
    /// `YYYY-MM-DDTHH:MM` local wall clock.
    pub end_time: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl NewEventRequest {
    pub fn new(
        title: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            description: None,
            attendees: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_attendees<I, A>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.attendees = attendees.into_iter().map(Into::into).collect();
        self
    }
}

/// Coarse booking failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidFormat,
    InvalidRange,
    Conflict,
}

impl ErrorKind {
    /// Stable identifier used in log lines and tool payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::InvalidRange => "invalid_range",
            Self::Conflict => "conflict",
        }
    }
}

/// Booking failure. The store is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    InvalidFormat(TimestampError),
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    Conflict {
        existing_id: EventId,
        existing_start: NaiveDateTime,
        existing_end: NaiveDateTime,
    },
}

impl ScheduleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
            Self::Conflict { .. } => ErrorKind::Conflict,
        }
    }
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(err) => write!(f, "invalid date format: {err}"),
            Self::InvalidRange { start, end } => {
                write!(f, "end time ({end}) must be after start time ({start})")
            }
            Self::Conflict {
                existing_id,
                existing_start,
                existing_end,
            } => write!(
                f,
                "time slot conflicts with existing event {existing_id} ({existing_start} - {existing_end})"
            ),
        }
    }
}

impl Error for ScheduleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFormat(err) => Some(err),
            Self::InvalidRange { .. } => None,
            Self::Conflict { .. } => None,
        }
    }
}

impl From<TimestampError> for ScheduleError {
    fn from(value: TimestampError) -> Self {
        Self::InvalidFormat(value)
    }
}

/// Parses and range-checks the requested window.
///
/// Both timestamps are parsed before the range check, so a bad end time
/// reports `InvalidFormat` even when the start is also later than the end.
pub fn parse_window(
    request: &NewEventRequest,
) -> Result<(NaiveDateTime, NaiveDateTime), ScheduleError> {
    let start = parse_wall_clock(&request.start_time)?;
    let end = parse_wall_clock(&request.end_time)?;
    if end <= start {
        return Err(ScheduleError::InvalidRange { start, end });
    }
    Ok((start, end))
}

/// Returns the first stored event overlapping `[start, end)`, scanning every
/// date in the store.
pub fn find_conflict(
    events: &[Event],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Option<&Event> {
    events.iter().find(|event| event.overlaps(start, end))
}

/// Checks `[start, end)` against the store snapshot.
pub fn check_conflict(
    events: &[Event],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<(), ScheduleError> {
    match find_conflict(events, start, end) {
        Some(existing) => Err(ScheduleError::Conflict {
            existing_id: existing.id.clone(),
            existing_start: existing.start_time,
            existing_end: existing.end_time,
        }),
        None => Ok(()),
    }
}

/// Builds the stored record for a validated request.
pub fn build_event(
    request: &NewEventRequest,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Event {
    Event {
        id: generate_event_id(),
        title: request.title.clone(),
        start_time: start,
        end_time: end,
        description: request.description.clone(),
        attendees: request.attendees.clone(),
    }
}

fn generate_event_id() -> EventId {
    Uuid::new_v4().to_string()
}
