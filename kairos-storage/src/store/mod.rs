//! # Event Store - In-Memory Typed Event Storage
//!
//! Events are partitioned by type. Each partition is a concurrent skip
//! list keyed by timestamp; the partitions themselves live in a sharded
//! concurrent map keyed by type.
//!
//! ## Module Structure
//!
//! - `types.rs` - Partition alias, time ranges and stats
//! - `table.rs` - EventStore implementation
//! - `cursor.rs` - Range cursor with in-place removal
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        EventStore                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  DashMap<type, Arc<SkipMap<timestamp, Event>>>              │
//! │                                                             │
//! │   shard 0 ── "login"  ──> 3 -> 8 -> 19 -> 25                │
//! │   shard 1 ── "logout" ──> 4 -> 11                           │
//! │   shard 2 ── "click"  ──> 1 -> 2 -> 5 -> 9 -> 40            │
//! │                              ▲                              │
//! │                              │ query("click", 2, 10)        │
//! │                        ┌─────┴──────┐                       │
//! │                        │ EventCursor│── remove() ──┐        │
//! │                        └────────────┘              │        │
//! │                                                    ▼        │
//! │                          remove_event: delete timestamp,    │
//! │                          drop the type if it is now empty   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//!
//! - A type key exists only while its partition holds events
//! - Writes to one type only contend on that type's shard
//! - Cursors read live data; there is no snapshot isolation

mod cursor;
mod table;
mod types;

pub use cursor::EventCursor;
pub use table::EventStore;
pub use types::{Partition, StoreStats, TimeRange};
