//! Calendar event model.
//!
//! # Responsibility
//! - Define the canonical record stored by the event store.
//! - Provide the interval helpers used by reader, finder and writer.
//!
//! # Invariants
//! - `id` is non-empty and never reused for another event.
//! - `end_time` is strictly after `start_time`.
//! - `attendees` keeps caller order.

use crate::model::wall_clock::serde_wall_clock;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque event identifier.
///
/// Seeded events use short numeric strings, generated events use UUIDs.
pub type EventId = String;

/// Scheduled event on the managed calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "EventRecord")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(with = "serde_wall_clock")]
    pub start_time: NaiveDateTime,
    #[serde(with = "serde_wall_clock")]
    pub end_time: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub attendees: Vec<String>,
}

/// Event shape validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    EmptyId,
    InvalidWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "event id cannot be empty"),
            Self::InvalidWindow { start, end } => {
                write!(f, "event end ({end}) must be after start ({start})")
            }
        }
    }
}

impl Error for EventValidationError {}

impl Event {
    /// Creates a validated event without description or attendees.
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start_time,
            end_time,
            description: None,
            attendees: Vec::new(),
        };
        event.validate()?;
        Ok(event)
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

    /// Checks the id and time-window invariants.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.id.trim().is_empty() {
            return Err(EventValidationError::EmptyId);
        }
        if self.end_time <= self.start_time {
            return Err(EventValidationError::InvalidWindow {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// Calendar date the event is filed under: the date of its start.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Half-open overlap test against `[start, end)`.
    ///
    /// Back-to-back intervals (`end == self.start_time`) do not overlap.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end_time && end > self.start_time
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    id: EventId,
    title: String,
    #[serde(with = "serde_wall_clock")]
    start_time: NaiveDateTime,
    #[serde(with = "serde_wall_clock")]
    end_time: NaiveDateTime,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    attendees: Vec<String>,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventValidationError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let event = Self {
            id: record.id,
            title: record.title,
            start_time: record.start_time,
            end_time: record.end_time,
            description: record.description,
            attendees: record.attendees,
        };
        event.validate()?;
        Ok(event)
    }
}
