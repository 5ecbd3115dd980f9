use std::ops::Bound;

use crossbeam_skiplist::SkipMap;
use kairos_core::{
    error::{Error, Result},
    Event, Timestamp,
};

/// Ordered events of a single type, keyed by timestamp
pub type Partition = SkipMap<Timestamp, Event>;

/// Half-open time window `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: Timestamp,
    end: Timestamp,
}

impl TimeRange {
    /// Build a range, rejecting empty or inverted windows
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self> {
        if start >= end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.start <= timestamp && timestamp < self.end
    }

    /// Bounds of the part of the window that lies after `resume`
    pub(crate) fn bounds_from(
        &self,
        resume: Bound<Timestamp>,
    ) -> (Bound<Timestamp>, Bound<Timestamp>) {
        (resume, Bound::Excluded(self.end))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub type_count: usize,
    pub event_count: usize,
}
