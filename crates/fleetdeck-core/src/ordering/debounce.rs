//! Change debouncer: collapses bursts of local mutations into one outbound
//! batch.
//!
//! Classic debounce, not throttle: every scheduled snapshot replaces the
//! previous one and restarts the quiet-period timer, so N rapid drags
//! produce exactly one `persist_batch` call. The timer task lives for the
//! owning session and is torn down on drop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use super::gateway::SyncGateway;
use fleetdeck_types::Host;

enum DebounceMsg {
    /// Replace the pending snapshot and restart the quiet period.
    Schedule(Vec<Host>),
    /// Drop the pending snapshot without flushing (teardown, refetch).
    Cancel,
}

/// One outstanding quiet-period timer over the latest local snapshot.
pub struct SyncDebouncer {
    tx: mpsc::UnboundedSender<DebounceMsg>,
    task: JoinHandle<()>,
}

impl SyncDebouncer {
    /// Spawn the timer task. `quiet` is the debounce window; a flush calls
    /// [`SyncGateway::persist_batch`] with the latest snapshot.
    pub fn spawn(gateway: Arc<SyncGateway>, quiet: Duration) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let mut pending: Option<Vec<Host>> = None;
            let mut deadline = Instant::now();

            loop {
                tokio::select! {
                    msg = rx.recv() => match msg {
                        Some(DebounceMsg::Schedule(snapshot)) => {
                            pending = Some(snapshot);
                            deadline = Instant::now() + quiet;
                        }
                        Some(DebounceMsg::Cancel) => {
                            pending = None;
                        }
                        None => break,
                    },
                    () = time::sleep_until(deadline), if pending.is_some() => {
                        if let Some(snapshot) = pending.take() {
                            // At most one batch in flight from this session:
                            // the await here holds the loop, and mutations
                            // arriving meanwhile queue up for a later flush.
                            if let Err(e) = gateway.persist_batch(&snapshot).await {
                                tracing::warn!("Debounced sync failed: {}", e);
                            }
                        }
                    }
                }
            }
        });

        Self { tx, task }
    }

    /// Capture a new snapshot and restart the quiet period.
    pub fn schedule(&self, snapshot: Vec<Host>) {
        let _ = self.tx.send(DebounceMsg::Schedule(snapshot));
    }

    /// Discard any pending snapshot; nothing stale goes out after a refetch.
    pub fn cancel(&self) {
        let _ = self.tx.send(DebounceMsg::Cancel);
    }
}

impl Drop for SyncDebouncer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
