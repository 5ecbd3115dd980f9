//! # Kairos Core
//!
//! Fundamental building blocks shared by the Kairos crates:
//! - Event type
//! - Error types
//! - Store configuration
//! - Operation metrics
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   kairos-core                   │
//! ├─────────────────────────────────────────────────┤
//! │  • types   - Event and Timestamp               │
//! │  • error   - Error handling                    │
//! │  • config  - Store tunables                    │
//! │  • metrics - Operation counters                │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod types;

// Re-export commonly used types
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use metrics::{Metrics, MetricsSnapshot};
pub use types::{Event, Timestamp};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
