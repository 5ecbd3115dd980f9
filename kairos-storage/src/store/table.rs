use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, info, trace};

use kairos_core::{
    config::StoreConfig,
    error::{Error, Result},
    metrics::Metrics,
    Event, Timestamp,
};

use super::cursor::EventCursor;
use super::types::{Partition, StoreStats, TimeRange};

/// Concurrent in-memory store of typed, timestamped events.
///
/// Cloning is cheap and every clone shares the same partitions.
#[derive(Clone)]
pub struct EventStore {
    partitions: Arc<DashMap<String, Arc<Partition>>>,
    metrics: Arc<Metrics>,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            partitions: Arc::new(DashMap::new()),
            metrics: Arc::new(Metrics::new()),
        }
    }

    pub fn with_config(config: StoreConfig, metrics: Arc<Metrics>) -> Result<Self> {
        config.validate()?;

        let partitions = match config.shard_amount {
            Some(shards) => {
                DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards)
            }
            None => DashMap::with_capacity(config.initial_capacity),
        };

        info!(
            initial_capacity = config.initial_capacity,
            shard_amount = ?config.shard_amount,
            "Event store created"
        );

        Ok(Self {
            partitions: Arc::new(partitions),
            metrics,
        })
    }

    /// Insert an event, replacing any event with the same type and timestamp.
    pub fn insert(&self, event: Event) {
        let timestamp = event.timestamp();

        // The slot guard is held across the partition write so a concurrent
        // drain of this type cannot detach the partition underneath us.
        let slot = self
            .partitions
            .entry(event.event_type().to_owned())
            .or_insert_with(|| {
                debug!(event_type = %event.event_type(), "Creating partition");
                Arc::new(Partition::new())
            });

        let partition = slot.value();
        let overwrote = partition.contains_key(&timestamp);
        partition.insert(timestamp, event);
        drop(slot);

        trace!(timestamp, overwrote, "Event inserted");
        self.metrics.record_insert(overwrote);
    }

    /// Remove every event of `event_type`.
    pub fn remove_all(&self, event_type: &str) -> Result<()> {
        let (_, partition) = self
            .partitions
            .remove(event_type)
            .ok_or_else(|| Error::not_found(event_type))?;

        debug!(event_type, removed = partition.len(), "Removed all events of type");
        self.metrics.record_type_removed();
        Ok(())
    }

    /// Open a cursor over events of `event_type` with timestamps in `[start, end)`.
    ///
    /// The cursor reads the live partition; it is not a snapshot.
    pub fn query(&self, event_type: &str, start: Timestamp, end: Timestamp) -> Result<EventCursor> {
        self.metrics.record_query();

        let opened = TimeRange::new(start, end).and_then(|range| {
            let partition = self
                .partitions
                .get(event_type)
                .map(|slot| Arc::clone(slot.value()))
                .ok_or_else(|| Error::not_found(event_type))?;
            Ok((range, partition))
        });

        match opened {
            Ok((range, partition)) => {
                debug!(event_type, start, end, "Query opened");
                Ok(EventCursor::new(event_type.to_owned(), partition, range, self.clone()))
            }
            Err(e) => {
                self.metrics.record_query_error();
                Err(e)
            }
        }
    }

    /// Total number of events across all types.
    ///
    /// Types are summed one at a time, so concurrent writers may be
    /// partially reflected.
    pub fn size(&self) -> usize {
        self.partitions.iter().map(|slot| slot.value().len()).sum()
    }

    pub fn contains_type(&self, event_type: &str) -> bool {
        self.partitions.contains_key(event_type)
    }

    pub fn type_count(&self) -> usize {
        self.partitions.len()
    }

    pub fn stats(&self) -> StoreStats {
        let mut stats = StoreStats::default();
        for slot in self.partitions.iter() {
            stats.type_count += 1;
            stats.event_count += slot.value().len();
        }
        stats
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Remove one event and drop its partition if that left it empty.
    ///
    /// Both steps run under the type's slot guard. A timestamp that is
    /// already gone is not an error; a missing type is.
    pub(crate) fn remove_event(&self, event_type: &str, timestamp: Timestamp) -> Result<()> {
        match self.partitions.entry(event_type.to_owned()) {
            Entry::Vacant(_) => Err(Error::not_found(event_type)),
            Entry::Occupied(slot) => {
                let removed = slot.get().remove(&timestamp).is_some();

                if slot.get().is_empty() {
                    slot.remove();
                    debug!(event_type, "Partition drained");
                }

                if removed {
                    self.metrics.record_event_removed();
                }
                Ok(())
            }
        }
    }
}
