//! Event storage contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the read-all/append-one capability the engine depends on.
//! - Keep storage swappable without touching slot search or booking logic.
//!
//! # Invariants
//! - Readers always observe a whole snapshot, never a partial append.
//! - The store has no delete or update path.
//! - Conflict checking is the writer's job; `append` stores what it is given.

pub mod memory;
pub mod seed;

use crate::model::event::Event;
use std::sync::Arc;

/// Shared, immutable view of every stored event.
pub type EventSnapshot = Arc<Vec<Event>>;

/// Storage capability for managed-calendar events.
pub trait EventStore: Send + Sync {
    /// Returns the current event collection in insertion order.
    fn snapshot(&self) -> EventSnapshot;

    /// Appends one event atomically with respect to `snapshot`.
    fn append(&self, event: Event);

    fn len(&self) -> usize {
        self.snapshot().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: EventStore + ?Sized> EventStore for Arc<T> {
    fn snapshot(&self) -> EventSnapshot {
        (**self).snapshot()
    }

    fn append(&self, event: Event) {
        (**self).append(event)
    }
}
