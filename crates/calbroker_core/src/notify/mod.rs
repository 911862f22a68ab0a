//! Post-booking notification hooks.
//!
//! # Responsibility
//! - Define the side-channel invoked after an event is committed.
//! - Render the human-readable booking notice.
//!
//! # Invariants
//! - Notifiers run only after the booking is stored and the write gate is
//!   released.
//! - A notifier failure never changes the booking result.
//! - Log output stays metadata-only; notice bodies are not logged.

use crate::model::event::{Event, EventId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Notification delivery errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// Transport is not configured (missing recipient, credentials, ...).
    NotConfigured(String),
    /// Transport accepted the call but delivery failed.
    Delivery(String),
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured(details) => write!(f, "notifier not configured: {details}"),
            Self::Delivery(details) => write!(f, "notification delivery failed: {details}"),
        }
    }
}

impl Error for NotifyError {}

/// Rendered notice for one committed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingNotice {
    pub event_id: EventId,
    pub body: String,
}

impl BookingNotice {
    /// Renders the notice text, e.g.
    /// `New event scheduled: Sync on 2024-03-19 at 10:00`, followed by
    /// optional description and attendee lines.
    pub fn from_event(event: &Event) -> Self {
        let mut body = format!(
            "New event scheduled: {} on {} at {}",
            event.title,
            event.start_time.format("%Y-%m-%d"),
            event.start_time.format("%H:%M")
        );
        if let Some(description) = event.description.as_deref() {
            body.push_str("\nDescription: ");
            body.push_str(description);
        }
        if !event.attendees.is_empty() {
            body.push_str("\nAttendees: ");
            body.push_str(&event.attendees.join(", "));
        }

        Self {
            event_id: event.id.clone(),
            body,
        }
    }
}

/// Outbound side-channel called after a successful booking.
pub trait BookingNotifier: Send + Sync {
    /// Whether this notifier should be invoked at all.
    fn is_enabled(&self) -> bool {
        true
    }

    fn notify_booked(&self, notice: &BookingNotice) -> Result<(), NotifyError>;
}

/// Notifier used when no transport is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl BookingNotifier for NoopNotifier {
    fn is_enabled(&self) -> bool {
        false
    }

    fn notify_booked(&self, _notice: &BookingNotice) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Notifier that records booking notices in the core log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl BookingNotifier for LogNotifier {
    fn notify_booked(&self, notice: &BookingNotice) -> Result<(), NotifyError> {
        info!(
            "event=booking_notice module=notify status=ok event_id={} body_chars={}",
            notice.event_id,
            notice.body.chars().count()
        );
        Ok(())
    }
}
