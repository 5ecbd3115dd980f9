//! # Configuration Management
//!
//! Tunables for the in-memory store. Every field has a default, so a
//! partial JSON document is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of event types to pre-allocate room for
    pub initial_capacity: usize,
    /// Number of lock shards in the type map; `None` picks one from the CPU count
    pub shard_amount: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            shard_amount: None,
        }
    }
}

impl StoreConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(shards) = self.shard_amount {
            if shards < 2 || !shards.is_power_of_two() {
                return Err(Error::Configuration {
                    message: format!(
                        "shard_amount must be a power of two greater than 1, got {}",
                        shards
                    ),
                });
            }
        }
        Ok(())
    }
}
