//! # Fleetdeck Types
//!
//! Shared domain models for the Fleetdeck console: inbound hosts and the
//! synchronization configuration consumed by `fleetdeck-core`.

pub mod models;

pub use models::{Host, HostId, HostSecurity, SyncConfig};
