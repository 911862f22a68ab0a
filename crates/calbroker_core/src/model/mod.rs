//! Calendar domain model for the scheduling engine.
//!
//! # Responsibility
//! - Define the canonical event record owned by the event store.
//! - Define read-only projections (daily schedules, views, slots).
//! - Own the single naive wall-clock timestamp policy.
//!
//! # Invariants
//! - Every stored event has `end_time > start_time`.
//! - Projections are derived on demand and never stored.

pub mod event;
pub mod schedule;
pub mod wall_clock;
