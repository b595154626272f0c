//! Core domain models for Fleetdeck.
//!
//! This module contains the data structures shared across the Fleetdeck
//! workspace.

mod config;
mod host;

// Re-export all models
pub use config::SyncConfig;
pub use host::{Host, HostId, HostSecurity};
