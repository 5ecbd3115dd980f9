use std::iter::FusedIterator;
use std::ops::Bound;
use std::sync::Arc;

use tracing::debug;

use kairos_core::{
    error::{Error, Result},
    Event, Timestamp,
};

use super::table::EventStore;
use super::types::{Partition, TimeRange};

#[derive(Debug, Clone, PartialEq, Eq)]
enum CursorState {
    Fresh,
    Positioned(Event),
    /// The event under the cursor was removed; the position is kept.
    Removed,
    Exhausted,
}

/// Forward-only cursor over one type's events within a [`TimeRange`].
///
/// Each step re-reads the partition from the last visited timestamp, so
/// events inserted ahead of the cursor are seen and events removed ahead
/// of it are skipped. A cursor is meant for a single owner.
pub struct EventCursor {
    event_type: String,
    partition: Arc<Partition>,
    range: TimeRange,
    resume: Bound<Timestamp>,
    state: CursorState,
    store: EventStore,
}

impl EventCursor {
    pub(crate) fn new(
        event_type: String,
        partition: Arc<Partition>,
        range: TimeRange,
        store: EventStore,
    ) -> Self {
        Self {
            event_type,
            partition,
            resume: Bound::Included(range.start()),
            range,
            state: CursorState::Fresh,
            store,
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Advance to the next event; returns `false` once the range is used up.
    pub fn move_next(&mut self) -> bool {
        if self.state == CursorState::Exhausted {
            return false;
        }

        let next = self
            .partition
            .range(self.range.bounds_from(self.resume))
            .next()
            .map(|entry| entry.value().clone());

        match next {
            Some(event) => {
                debug_assert!(self.range.contains(event.timestamp()));
                self.resume = Bound::Excluded(event.timestamp());
                self.state = CursorState::Positioned(event);
                true
            }
            None => {
                self.state = CursorState::Exhausted;
                false
            }
        }
    }

    /// The event the cursor is positioned on.
    pub fn current(&self) -> Result<&Event> {
        match &self.state {
            CursorState::Positioned(event) => Ok(event),
            _ => Err(Error::NoCurrentElement),
        }
    }

    /// Remove the current event from the store.
    ///
    /// The cursor stays where it is; call [`move_next`](Self::move_next)
    /// to continue.
    pub fn remove(&mut self) -> Result<()> {
        let timestamp = self.current()?.timestamp();
        self.store.remove_event(&self.event_type, timestamp)?;

        debug!(event_type = %self.event_type, timestamp, "Cursor removed event");
        self.state = CursorState::Removed;
        Ok(())
    }

    /// Release the cursor. It holds nothing beyond its own state.
    pub fn close(self) {}
}

impl Iterator for EventCursor {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if self.move_next() {
            self.current().ok().cloned()
        } else {
            None
        }
    }
}

impl FusedIterator for EventCursor {}

impl std::fmt::Debug for EventCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCursor")
            .field("event_type", &self.event_type)
            .field("range", &self.range)
            .field("state", &self.state)
            .finish()
    }
}
