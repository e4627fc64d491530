//! Store — holds the latest [`Dataset`] snapshot and swaps it atomically.
//!
//! The store is the single source of truth; the query engine reads from it,
//! never from a loader directly. Readers take an `Arc` to the current
//! snapshot and keep it for as long as they like; a replace never mutates a
//! snapshot in place.
//!
//! Loads are ticketed. A load commits only if no load that started after it
//! has already committed, so the newest request wins even when responses
//! arrive out of order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::FetchError;
use crate::types::Dataset;

/// A source the store can load a whole dataset from.
#[async_trait]
pub trait DatasetLoader: Send + Sync {
    /// Fetch and normalise the full dataset.
    async fn load(&self) -> Result<Dataset, FetchError>;

    /// Human-readable source name for logs.
    fn describe(&self) -> String;
}

/// One immutable generation of the dataset.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// 0 for the initial empty dataset, then the ticket of the load that
    /// produced it.
    pub generation: u64,
    pub loaded_at: DateTime<Utc>,
    pub dataset: Arc<Dataset>,
}

impl Snapshot {
    fn initial() -> Self {
        Self {
            generation: 0,
            loaded_at: Utc::now(),
            dataset: Arc::new(Dataset::empty()),
        }
    }
}

/// Result of handing a completed load to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The dataset is now current.
    Applied { generation: u64 },
    /// A newer load had already committed; the dataset was discarded.
    Stale { ticket: u64, current: u64 },
}

/// Single-writer holder of the current [`Snapshot`].
#[derive(Debug)]
pub struct DatasetStore {
    current: RwLock<Arc<Snapshot>>,
    next_ticket: AtomicU64,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetStore {
    /// A store holding the empty dataset at generation 0.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot::initial())),
            next_ticket: AtomicU64::new(1),
        }
    }

    /// The latest committed snapshot.
    pub fn current(&self) -> Arc<Snapshot> {
        // A poisoned lock still holds a complete snapshot; swaps are a
        // single pointer assignment.
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Shortcut for `current().dataset`.
    pub fn dataset(&self) -> Arc<Dataset> {
        self.current().dataset.clone()
    }

    /// Reserve a ticket for a load that is about to start.
    pub fn begin_load(&self) -> u64 {
        self.next_ticket.fetch_add(1, Ordering::SeqCst)
    }

    /// Commit the result of the load holding `ticket`.
    pub fn commit(&self, ticket: u64, dataset: Dataset) -> Commit {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if ticket <= current.generation {
            tracing::debug!(ticket, current = current.generation, "dropping stale load");
            return Commit::Stale {
                ticket,
                current: current.generation,
            };
        }

        let records = dataset.len();
        let loaded_at = Utc::now();
        *current = Arc::new(Snapshot {
            generation: ticket,
            loaded_at,
            dataset: Arc::new(dataset),
        });
        tracing::info!(generation = ticket, records, %loaded_at, "dataset replaced");
        Commit::Applied { generation: ticket }
    }

    /// Swap in `dataset` immediately. Returns the new generation.
    pub fn replace(&self, dataset: Dataset) -> u64 {
        let ticket = self.begin_load();
        match self.commit(ticket, dataset) {
            Commit::Applied { generation } => generation,
            // Only reachable when a concurrent load with a later ticket won.
            Commit::Stale { current, .. } => current,
        }
    }

    /// Load from `loader` and swap the result in.
    ///
    /// On failure the previous snapshot stays current and the error is
    /// returned. If a later refresh committed first, this load's result is
    /// discarded and the current (newer) snapshot is returned.
    pub async fn refresh(&self, loader: &dyn DatasetLoader) -> Result<Arc<Snapshot>, FetchError> {
        let ticket = self.begin_load();
        let source = loader.describe();
        tracing::debug!(ticket, %source, "load started");

        match loader.load().await {
            Ok(dataset) => {
                if let Commit::Stale { current, .. } = self.commit(ticket, dataset) {
                    tracing::info!(ticket, current, %source, "load superseded by a newer one");
                }
                Ok(self.current())
            }
            Err(err) => {
                tracing::warn!(
                    ticket,
                    %source,
                    error = %err,
                    kept_generation = self.current().generation,
                    "load failed; keeping previous dataset"
                );
                Err(err)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
