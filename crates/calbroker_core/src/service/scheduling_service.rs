//! Scheduling use-case service.
//!
//! # Responsibility
//! - Own one event store, the engine settings and the booking write gate.
//! - Expose schedule reads, slot search, suggestions and bookings.
//!
//! # Invariants
//! - Conflict check and append for one booking run inside one critical
//!   section; two overlapping concurrent bookings cannot both succeed.
//! - Reads never take the write gate and always see a whole snapshot.
//! - Notifiers run after the critical section and cannot fail a booking.

use crate::config::{ConfigError, EngineConfig};
use crate::model::event::Event;
use crate::model::schedule::{ScheduleView, Slot};
use crate::model::wall_clock::{parse_date, today, today_info, TodayInfo};
use crate::notify::{BookingNotice, BookingNotifier};
use crate::service::event_writer::{
    build_event, check_conflict, parse_window, NewEventRequest, ScheduleError,
};
use crate::service::schedule_reader::build_schedule_view;
use crate::service::slot_finder::find_slots;
use crate::store::EventStore;
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, PoisonError};

/// Slot search input. Omitted fields fall back to the service settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub start_hour: Option<u32>,
    #[serde(default)]
    pub end_hour: Option<u32>,
}

impl SlotRequest {
    pub fn new(date: NaiveDate, duration_minutes: u32) -> Self {
        Self {
            date,
            duration_minutes: Some(duration_minutes),
            start_hour: None,
            end_hour: None,
        }
    }

    pub fn with_hours(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.start_hour = Some(start_hour);
        self.end_hour = Some(end_hour);
        self
    }
}

/// Top suggestion for a slot request plus the day it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSuggestion {
    pub schedule: ScheduleView,
    pub suggested_slot: Option<Slot>,
    pub duration_minutes: u32,
}

impl SlotSuggestion {
    /// Start of the suggested slot in canonical form, if any.
    pub fn suggested_time(&self) -> Option<String> {
        self.suggested_slot.map(|slot| slot.start_label())
    }
}

/// Side-channel result attached to a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "detail")]
pub enum NotificationOutcome {
    Sent,
    Skipped,
    Failed(String),
}

/// Successful booking with its day context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    pub event: Event,
    pub schedule: ScheduleView,
    pub notification: NotificationOutcome,
}

/// Rejected booking with the schedule the caller can offer alternatives from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRejection {
    pub error: ScheduleError,
    /// One-day schedule of the requested start date, when that date parses.
    pub schedule: Option<ScheduleView>,
}

impl Display for BookingRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl Error for BookingRejection {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

/// Caller-owned handle over one managed calendar.
pub struct SchedulingService<S: EventStore> {
    store: S,
    config: EngineConfig,
    write_gate: Mutex<()>,
}

impl<S: EventStore> SchedulingService<S> {
    /// Creates a service with default settings.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: EngineConfig::default(),
            write_gate: Mutex::new(()),
        }
    }

    /// Creates a service with validated custom settings.
    pub fn with_config(store: S, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            write_gate: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn event_count(&self) -> usize {
        self.store.len()
    }

    /// Describes the current local date, for resolving relative dates.
    pub fn today(&self) -> TodayInfo {
        let info = today_info(today());
        debug!("event=today_read module=service status=ok date={}", info.date);
        info
    }

    /// Returns the day-by-day view.
    ///
    /// # Contract
    /// - `start_date = None` means today (local).
    /// - `day_count = None` means the configured default (5).
    /// - Never fails; empty days have empty event lists.
    pub fn get_schedule(
        &self,
        start_date: Option<NaiveDate>,
        day_count: Option<u32>,
    ) -> ScheduleView {
        let start_date = start_date.unwrap_or_else(today);
        let day_count = day_count.unwrap_or(self.config.default_day_count);
        let snapshot = self.store.snapshot();
        let view = build_schedule_view(&snapshot, start_date, day_count);

        debug!(
            "event=schedule_read module=reader status=ok start_date={} days={} events={}",
            start_date,
            day_count,
            view.event_count()
        );
        view
    }

    /// Returns candidate slots for one date, top suggestion first.
    pub fn find_available_slots(&self, request: &SlotRequest) -> Vec<Slot> {
        let duration = request
            .duration_minutes
            .unwrap_or(self.config.default_duration_minutes);
        let hours = self
            .config
            .business_hours
            .with_overrides(request.start_hour, request.end_hour);
        let snapshot = self.store.snapshot();
        let slots = find_slots(&snapshot, request.date, duration, hours);

        debug!(
            "event=slot_search module=finder status=ok date={} duration_min={} hours={}-{} slots={}",
            request.date,
            duration,
            hours.start_hour,
            hours.end_hour,
            slots.len()
        );
        slots
    }

    /// Picks the first available slot and attaches the day's schedule.
    pub fn suggest_time(&self, request: &SlotRequest) -> SlotSuggestion {
        let duration_minutes = request
            .duration_minutes
            .unwrap_or(self.config.default_duration_minutes);
        let suggested_slot = self.find_available_slots(request).first().copied();

        SlotSuggestion {
            schedule: self.get_schedule(Some(request.date), Some(1)),
            suggested_slot,
            duration_minutes,
        }
    }

    /// Validates and stores one event.
    ///
    /// # Contract
    /// - Fails with `InvalidFormat`, `InvalidRange` or `Conflict`, in that
    ///   order of precedence.
    /// - On failure the store is unchanged.
    /// - On success the returned event is already visible to readers.
    pub fn add_event(&self, request: &NewEventRequest) -> Result<Event, ScheduleError> {
        let result = self.commit(request);
        match &result {
            Ok(event) => info!(
                "event=event_add module=writer status=ok event_id={} duration_min={} attendees={}",
                event.id,
                event.duration_minutes(),
                event.attendees.len()
            ),
            Err(err) => info!(
                "event=event_add module=writer status=rejected kind={}",
                err.kind().as_str()
            ),
        }
        result
    }

    /// Books one event, then notifies.
    ///
    /// The receipt and rejection both carry the one-day schedule so callers
    /// can confirm the booking or offer another time.
    pub fn book_event(
        &self,
        request: &NewEventRequest,
        notifier: &dyn BookingNotifier,
    ) -> Result<BookingReceipt, BookingRejection> {
        let event = match self.add_event(request) {
            Ok(event) => event,
            Err(error) => {
                let schedule = parse_date(&request.start_time)
                    .ok()
                    .map(|date| self.get_schedule(Some(date), Some(1)));
                return Err(BookingRejection { error, schedule });
            }
        };

        let notification = self.dispatch_notice(&event, notifier);
        let schedule = self.get_schedule(Some(event.start_date()), Some(1));

        Ok(BookingReceipt {
            event,
            schedule,
            notification,
        })
    }

    fn commit(&self, request: &NewEventRequest) -> Result<Event, ScheduleError> {
        let (start, end) = parse_window(request)?;

        let _gate = self
            .write_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let snapshot = self.store.snapshot();
        check_conflict(&snapshot, start, end)?;

        let event = build_event(request, start, end);
        self.store.append(event.clone());
        Ok(event)
    }

    fn dispatch_notice(
        &self,
        event: &Event,
        notifier: &dyn BookingNotifier,
    ) -> NotificationOutcome {
        if !notifier.is_enabled() {
            return NotificationOutcome::Skipped;
        }

        let notice = BookingNotice::from_event(event);
        match notifier.notify_booked(&notice) {
            Ok(()) => NotificationOutcome::Sent,
            Err(err) => {
                warn!(
                    "event=booking_notify module=notify status=error event_id={} error={}",
                    event.id, err
                );
                NotificationOutcome::Failed(err.to_string())
            }
        }
    }
}
