//! Read-only schedule projections.
//!
//! # Responsibility
//! - Shape day-by-day views and candidate slots for callers.
//!
//! # Invariants
//! - `DailySchedule::events` is sorted ascending by start time.
//! - `ScheduleView::schedules` holds contiguous dates.
//! - A `Slot` is a candidate only; it is never stored.

use crate::model::event::Event;
use crate::model::wall_clock::{format_wall_clock, serde_wall_clock};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Events filed under one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySchedule {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

impl DailySchedule {
    pub fn is_free(&self) -> bool {
        self.events.is_empty()
    }
}

/// Contiguous range of daily schedules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleView {
    pub schedules: Vec<DailySchedule>,
}

impl ScheduleView {
    /// Returns the schedule for one date, when it falls inside the view.
    pub fn day(&self, date: NaiveDate) -> Option<&DailySchedule> {
        self.schedules.iter().find(|schedule| schedule.date == date)
    }

    /// Total events across all days in the view.
    pub fn event_count(&self) -> usize {
        self.schedules
            .iter()
            .map(|schedule| schedule.events.len())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

/// Candidate free interval of the requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(with = "serde_wall_clock")]
    pub start_time: NaiveDateTime,
    #[serde(with = "serde_wall_clock")]
    pub end_time: NaiveDateTime,
}

impl Slot {
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Whether this candidate collides with an existing event.
    pub fn conflicts_with(&self, event: &Event) -> bool {
        event.overlaps(self.start_time, self.end_time)
    }

    /// Canonical `YYYY-MM-DDTHH:MM` start, as handed to booking callers.
    pub fn start_label(&self) -> String {
        format_wall_clock(self.start_time)
    }
}
