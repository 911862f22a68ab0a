//! Process-lifetime in-memory event store.

use crate::model::event::Event;
use crate::store::seed::seed_events;
use crate::store::{EventSnapshot, EventStore};
use std::sync::{Arc, PoisonError, RwLock};

/// Copy-on-write event store.
///
/// Each append builds a new collection and swaps it in, so snapshots handed
/// out earlier stay unchanged.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: RwLock<EventSnapshot>,
}

impl InMemoryEventStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store preloaded with the managed calendar's fixed seed events.
    pub fn seeded() -> Self {
        Self::with_events(seed_events())
    }

    /// Store preloaded with caller-provided events.
    ///
    /// Events are taken as-is; overlap rules apply to later appends only.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(Arc::new(events)),
        }
    }
}

impl EventStore for InMemoryEventStore {
    fn snapshot(&self) -> EventSnapshot {
        // A poisoned lock still guards a complete collection: swaps are one
        // pointer assignment.
        let guard = self.events.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    fn append(&self, event: Event) {
        let mut guard = self.events.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(event);
        *guard = Arc::new(next);
    }
}
