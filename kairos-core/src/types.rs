//! # Core Types
//!
//! The event value stored by Kairos. Events carry no identity beyond
//! their `(type, timestamp)` pair, which the store uses as a composite key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp type used throughout the system.
///
/// An arbitrary signed domain value; nothing assumes wall-clock time.
pub type Timestamp = i64;

/// Immutable, typed, timestamped event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    event_type: String,
    timestamp: Timestamp,
}

impl Event {
    pub fn new(event_type: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp,
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event of type \"{}\" with timestamp {}",
            self.event_type, self.timestamp
        )
    }
}
