//! Scheduling engine for calbroker.
//! This crate owns slot search, conflict-checked booking and the event store.

pub mod config;
pub mod logging;
pub mod model;
pub mod notify;
pub mod service;
pub mod store;

pub use config::{BusinessHours, ConfigError, EngineConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventId, EventValidationError};
pub use model::schedule::{DailySchedule, ScheduleView, Slot};
pub use model::wall_clock::{
    format_date, format_wall_clock, parse_date, parse_wall_clock, today_info, TimestampError,
    TodayInfo,
};
pub use notify::{BookingNotice, BookingNotifier, LogNotifier, NoopNotifier, NotifyError};
pub use service::event_writer::{ErrorKind, NewEventRequest, ScheduleError};
pub use service::scheduling_service::{
    BookingReceipt, BookingRejection, NotificationOutcome, SchedulingService, SlotRequest,
    SlotSuggestion,
};
pub use service::slot_finder::SLOT_STRIDE_MINUTES;
pub use store::memory::InMemoryEventStore;
pub use store::{EventSnapshot, EventStore};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
