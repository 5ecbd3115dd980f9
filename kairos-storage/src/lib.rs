//! # Kairos Storage Engine
//!
//! Concurrent in-memory store for typed, timestamped events.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Write Path                             │
//! │                                                             │
//! │  insert(event) ──> type slot ──> timestamp skip list        │
//! │  remove_all(type) ──> detach type slot                      │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Read Path                              │
//! │                                                             │
//! │  query(type, start, end) ──> EventCursor over [start, end)  │
//! │              │                                              │
//! │              ▼                                              │
//! │   move_next / current / remove (back into the store)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod store;

pub use kairos_core::{Error, Event, Result, Timestamp};
pub use store::{EventCursor, EventStore, StoreStats, TimeRange};
