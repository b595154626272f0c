//! Host list editing session: reorder controller, duplicate flow, and the
//! rest of the record lifecycle.
//!
//! One session owns the local host list for as long as the list view is
//! active. All mutations run on the caller's task (`&mut self`), the only
//! suspension points are record-store calls, so last-write-wins falls out of
//! the overlay/refetch-replaces-all rule without locking.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::watch;

use super::assigner::{self, Placement};
use super::debounce::SyncDebouncer;
use super::gateway::{SyncGateway, SyncStatus};
use super::view;
use crate::error::{AppError, AppResult};
use fleetdeck_types::{Host, HostId, SyncConfig};

/// Interactive editing session over the remote-backed host list.
pub struct HostListSession {
    gateway: Arc<SyncGateway>,
    debouncer: SyncDebouncer,
    /// Local overlay, kept in last-known server order (the tie-break basis).
    hosts: Vec<Host>,
}

impl HostListSession {
    /// Open a session: fetch the authoritative list and start the debounce
    /// timer. Dropping the session cancels any pending batch.
    pub async fn open(gateway: Arc<SyncGateway>, config: &SyncConfig) -> AppResult<Self> {
        let hosts = gateway.fetch_all().await?;
        let debouncer = SyncDebouncer::spawn(Arc::clone(&gateway), config.quiet_period());
        tracing::debug!("Host list session opened with {} hosts", hosts.len());
        Ok(Self { gateway, debouncer, hosts })
    }

    /// Hosts in last-known server order.
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    /// Hosts in display order (ascending priority, stable ties).
    pub fn ordered(&self) -> Vec<&Host> {
        view::ordered(&self.hosts)
    }

    /// Subscribe to synchronization status changes.
    pub fn status(&self) -> watch::Receiver<SyncStatus> {
        self.gateway.status()
    }

    /// Handle a completed drag: move `active_id` to the slot `over_id`
    /// occupied, renumber the whole sortable sequence to contiguous
    /// `0..N-1`, and schedule a debounced persist.
    ///
    /// No-op when `over_id` is absent, equals `active_id`, or either id is
    /// unknown. Never fails locally.
    pub fn drag_end(&mut self, active_id: HostId, over_id: Option<HostId>) {
        let Some(over_id) = over_id else { return };
        if over_id == active_id {
            return;
        }

        let mut ids = view::sortable_ids(&self.hosts);
        let (Some(from), Some(to)) = (
            ids.iter().position(|id| *id == active_id),
            ids.iter().position(|id| *id == over_id),
        ) else {
            return;
        };

        view::array_move(&mut ids, from, to);
        self.apply_priorities(&assigner::assign_sequential(&ids));

        tracing::debug!("Reordered host {} to slot of {}", active_id, over_id);
        self.debouncer.schedule(self.snapshot());
    }

    /// Duplicate a host, reinserting the copy right after the original.
    ///
    /// A cascade (when no priority gap exists after the anchor) is persisted
    /// as a batch before the create call; a create failure therefore leaves
    /// the bumps in place without the copy, corrected by the next refetch.
    /// The synthesized copy never enters the local list: on success the
    /// refetch brings in the authoritative record instead.
    pub async fn duplicate(&mut self, id: HostId) -> AppResult<Host> {
        let source = self
            .hosts
            .iter()
            .find(|h| h.id == Some(id))
            .cloned()
            .ok_or_else(|| AppError::Host(format!("Host not found: {}", id)))?;

        let placement = match self.placement_after(id) {
            Some(placement) => placement,
            None => {
                // Integer room exhausted around the anchor: renumber the
                // whole list to contiguous priorities, then place again.
                tracing::debug!("No integer room after host {}, renumbering list", id);
                self.renumber().await?;
                self.placement_after(id)
                    .ok_or_else(|| AppError::Host("No integer room after renumber".to_string()))?
            }
        };

        if !placement.cascade.is_empty() {
            let bumps: Vec<Host> = placement
                .cascade
                .iter()
                .filter_map(|(bump_id, priority)| {
                    self.hosts.iter().find(|h| h.id == Some(*bump_id)).map(|h| {
                        let mut bumped = h.clone();
                        bumped.priority = *priority;
                        bumped
                    })
                })
                .collect();
            self.gateway.persist_batch(&bumps).await?;
            let mapping: HashMap<HostId, i64> = placement.cascade.iter().copied().collect();
            self.apply_priorities(&mapping);
        }

        let mut copy = source.duplicated();
        copy.priority = placement.priority;
        let created = self.gateway.create_host(&copy).await?;

        self.refresh().await?;
        Ok(created)
    }

    /// Add a brand-new host at the front of the display order.
    pub async fn add(&mut self, mut host: Host) -> AppResult<Host> {
        host.priority = assigner::prepend_new(&view::ordered(&self.hosts));
        let created = self.gateway.create_host(&host).await?;
        self.refresh().await?;
        Ok(created)
    }

    /// Edit a single host in place (explicit save, not debounced).
    pub async fn update(&mut self, host: Host) -> AppResult<Host> {
        let id = host
            .id
            .ok_or_else(|| AppError::Host("Cannot modify a host without id".to_string()))?;
        let modified = self.gateway.store().modify(id, &host).await?;

        // Replace in place so the last-known index (tie-break) is preserved.
        if let Some(local) = self.hosts.iter_mut().find(|h| h.id == Some(id)) {
            *local = modified.clone();
        }
        Ok(modified)
    }

    /// Delete a host remotely and drop it from the local overlay.
    pub async fn remove(&mut self, id: HostId) -> AppResult<()> {
        self.gateway.store().remove(id).await?;
        self.hosts.retain(|h| h.id != Some(id));
        self.gateway.invalidate();
        Ok(())
    }

    /// Discard the local overlay and rebuild it from the server response.
    ///
    /// Cancels any pending debounced batch first so nothing stale goes out
    /// after the authoritative state lands. Never merges field-by-field.
    pub async fn refresh(&mut self) -> AppResult<()> {
        self.debouncer.cancel();
        self.hosts = self.gateway.fetch_all().await?;
        tracing::debug!("Host list refreshed, {} hosts", self.hosts.len());
        Ok(())
    }

    fn placement_after(&self, anchor_id: HostId) -> Option<Placement> {
        let sorted = view::sortable(&self.hosts);
        assigner::insert_after(&sorted, anchor_id)
    }

    /// Renumber the whole sortable list to contiguous `0..N-1` and persist
    /// the result immediately.
    async fn renumber(&mut self) -> AppResult<()> {
        let ids = view::sortable_ids(&self.hosts);
        self.apply_priorities(&assigner::assign_sequential(&ids));
        self.gateway.persist_batch(&self.snapshot()).await
    }

    fn apply_priorities(&mut self, mapping: &HashMap<HostId, i64>) {
        for host in &mut self.hosts {
            if let Some(priority) = host.id.and_then(|id| mapping.get(&id)) {
                host.priority = *priority;
            }
        }
    }

    /// Snapshot of the persistable records, captured for the debouncer.
    fn snapshot(&self) -> Vec<Host> {
        self.hosts.iter().filter(|h| h.is_sortable()).cloned().collect()
    }
}
