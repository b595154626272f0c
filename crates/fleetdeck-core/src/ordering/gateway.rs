//! Sync Gateway: the boundary between local ordering state and the remote
//! record store.
//!
//! Persistence failures are surfaced (status channel + log) but never rolled
//! back locally; the authoritative collection corrects the view on the next
//! refetch.

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::AppResult;
use crate::store::{CollectionCache, RecordStore};
use fleetdeck_types::Host;

/// Last-known synchronization state, observable by the presentation layer
/// for non-blocking failure notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// Nothing pending, nothing failed.
    Idle,
    /// A batch or create call is in flight.
    Syncing,
    /// The last outbound call succeeded; `count` records were written.
    Synced { count: usize },
    /// The last outbound call failed; the local view may be ahead of the
    /// server until the next refetch.
    Failed(String),
}

/// Issues batched and single writes against the record store and keeps the
/// cache layer informed.
pub struct SyncGateway {
    store: Arc<dyn RecordStore>,
    cache: Arc<dyn CollectionCache>,
    collection_key: String,
    status_tx: watch::Sender<SyncStatus>,
}

impl SyncGateway {
    pub fn new(
        store: Arc<dyn RecordStore>,
        cache: Arc<dyn CollectionCache>,
        collection_key: impl Into<String>,
    ) -> Arc<Self> {
        let (status_tx, _) = watch::channel(SyncStatus::Idle);
        Arc::new(Self { store, cache, collection_key: collection_key.into(), status_tx })
    }

    /// Subscribe to synchronization status changes.
    pub fn status(&self) -> watch::Receiver<SyncStatus> {
        self.status_tx.subscribe()
    }

    /// Fetch the authoritative host collection.
    pub async fn fetch_all(&self) -> AppResult<Vec<Host>> {
        self.store.list().await
    }

    /// Persist a batch of priority updates in one bulk call.
    ///
    /// Records without identity cannot be addressed remotely and are dropped
    /// from the batch. No rollback on failure: the error is surfaced and the
    /// (possibly diverged) local view stands until the next refetch.
    pub async fn persist_batch(&self, hosts: &[Host]) -> AppResult<()> {
        let batch: Vec<Host> = hosts.iter().filter(|h| h.is_sortable()).cloned().collect();
        if batch.is_empty() {
            tracing::debug!("Skipping empty priority batch");
            return Ok(());
        }

        let _ = self.status_tx.send(SyncStatus::Syncing);
        match self.store.modify_many(&batch).await {
            Ok(()) => {
                tracing::debug!("Persisted priority batch of {} hosts", batch.len());
                let _ = self.status_tx.send(SyncStatus::Synced { count: batch.len() });
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Priority batch of {} hosts failed: {}", batch.len(), e);
                let _ = self.status_tx.send(SyncStatus::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Create a host (a synthesized duplicate or a brand-new record) on the
    /// remote store.
    ///
    /// On success the cached collection is invalidated so the next fetch
    /// replaces the local copy with the server-assigned identity.
    pub async fn create_host(&self, host: &Host) -> AppResult<Host> {
        let _ = self.status_tx.send(SyncStatus::Syncing);
        match self.store.create(host).await {
            Ok(created) => {
                tracing::debug!(
                    "Created host '{}' with id {:?}",
                    created.remark,
                    created.id
                );
                let _ = self.status_tx.send(SyncStatus::Synced { count: 1 });
                self.invalidate();
                Ok(created)
            }
            Err(e) => {
                tracing::warn!("Create of host '{}' failed: {}", host.remark, e);
                let _ = self.status_tx.send(SyncStatus::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Mark the cached host collection stale.
    pub fn invalidate(&self) {
        self.cache.invalidate(&self.collection_key);
    }

    /// Direct access to the underlying store for single-record operations.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}
