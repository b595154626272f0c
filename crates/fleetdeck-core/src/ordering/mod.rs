//! Host ordering and synchronization engine.
//!
//! ```text
//! drag end / duplicate click
//!         │
//!         ▼
//!   session.rs ──── assigner.rs (pure priority math)
//!         │                │
//!         ▼                ▼
//!   local host list ── view.rs (stable display order)
//!         │
//!         ▼
//!   debounce.rs (quiet-period timer, latest snapshot wins)
//!         │
//!         ▼
//!   gateway.rs ──► RecordStore (persist batch / create)
//!                        │
//!                        ▼
//!            refetch replaces local state wholesale
//! ```

pub mod assigner;
pub mod debounce;
pub mod gateway;
pub mod session;
pub mod view;

#[cfg(test)]
mod tests;

use fleetdeck_types::{Host, HostId};

/// A record the ordering engine can manage: stable optional identity plus an
/// integer display priority. The payload stays opaque.
pub trait OrderedRecord {
    /// Remote-store identity, absent for records not yet persisted.
    fn identity(&self) -> Option<HostId>;

    /// Display priority, lower sorts first.
    fn priority(&self) -> i64;

    /// Replace the display priority.
    fn set_priority(&mut self, priority: i64);
}

impl OrderedRecord for Host {
    fn identity(&self) -> Option<HostId> {
        self.id
    }

    fn priority(&self) -> i64 {
        self.priority
    }

    fn set_priority(&mut self, priority: i64) {
        self.priority = priority;
    }
}
