//! Synchronization configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the debounced host-list synchronization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncConfig {
    /// Quiet period in milliseconds: a burst of local edits produces one
    /// outbound batch once no new edit has arrived for this long.
    #[serde(default = "default_quiet_period_ms")]
    pub quiet_period_ms: u64,
    /// Cache key of the host collection, passed to the cache layer on
    /// invalidation.
    #[serde(default = "default_collection_key")]
    pub collection_key: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            quiet_period_ms: default_quiet_period_ms(),
            collection_key: default_collection_key(),
        }
    }
}

impl SyncConfig {
    /// Quiet period as a [`Duration`].
    pub const fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }
}

fn default_quiet_period_ms() -> u64 {
    1500
}

fn default_collection_key() -> String {
    "hosts".to_string()
}
