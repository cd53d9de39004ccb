use std::sync::atomic::{AtomicBool, Ordering};

use felicity_model::HappinessRecord;
use tokio::sync::RwLock;

/// In-memory dataset, populated once at startup and read-only afterwards.
///
/// Requests racing the load observe the rows pushed so far; `ready` flips
/// only after the source file has been fully streamed. There is no
/// transition back.
#[derive(Debug, Default)]
pub struct DatasetStore {
    records: RwLock<Vec<HappinessRecord>>,
    ready: AtomicBool,
}

impl DatasetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full dataset in load order.
    pub async fn snapshot(&self) -> Vec<HappinessRecord> {
        self.records.read().await.clone()
    }

    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Appends one record from the loader thread.
    ///
    /// Must not be called from an async context; the loader runs on the
    /// blocking pool.
    pub fn blocking_push(&self, record: HappinessRecord) {
        self.records.blocking_write().push(record);
    }

    pub async fn extend(&self, records: impl IntoIterator<Item = HappinessRecord>) {
        self.records.write().await.extend(records);
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}
