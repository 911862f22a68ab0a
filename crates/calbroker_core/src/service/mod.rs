//! Scheduling use-case services.
//!
//! # Responsibility
//! - Project stored events into schedules and candidate slots.
//! - Validate and commit bookings through the event store contract.
//!
//! # Invariants
//! - Services depend on `EventStore` only, never on a concrete backend.
//! - Reader and finder are pure functions over a snapshot.

pub mod event_writer;
pub mod schedule_reader;
pub mod scheduling_service;
pub mod slot_finder;
