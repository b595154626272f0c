//! Boundary traits toward the remote record store and the cache layer.
//!
//! The ordering engine never talks HTTP itself: it consumes a [`RecordStore`]
//! (implemented over the admin API by `fleetdeck-client`, or in-memory in
//! tests) and notifies a [`CollectionCache`] when the authoritative host
//! collection becomes stale.

use async_trait::async_trait;

use crate::error::AppResult;
use fleetdeck_types::{Host, HostId};

/// Cache key of the host collection.
pub const HOSTS_COLLECTION: &str = "hosts";

/// Asynchronous CRUD access to the remote host collection.
///
/// All operations may fail with a transport-level error; the engine recovers
/// at the boundary and never panics on store failures.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the full host collection in server order.
    async fn list(&self) -> AppResult<Vec<Host>>;

    /// Create a new host; the returned record carries the server-assigned id.
    async fn create(&self, host: &Host) -> AppResult<Host>;

    /// Replace a single host by id.
    async fn modify(&self, id: HostId, host: &Host) -> AppResult<Host>;

    /// Bulk-update many hosts in one call (priority batches).
    async fn modify_many(&self, hosts: &[Host]) -> AppResult<()>;

    /// Delete a host by id.
    async fn remove(&self, id: HostId) -> AppResult<()>;
}

/// Invalidation hook toward whatever query/cache layer the embedding UI runs.
///
/// Invalidation means the next consumer of `list()` must refetch rather than
/// serve cached data. A no-op implementation is fine when no such layer
/// exists.
pub trait CollectionCache: Send + Sync {
    /// Mark the named collection stale.
    fn invalidate(&self, collection_key: &str);
}

/// No-op cache for embeddings without a query layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl CollectionCache for NoCache {
    fn invalidate(&self, collection_key: &str) {
        tracing::trace!("No cache layer, skipping invalidation of '{}'", collection_key);
    }
}
