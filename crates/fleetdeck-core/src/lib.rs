//! # Fleetdeck Core
//!
//! Host ordering and synchronization engine for the Fleetdeck console.
//!
//! ## Architecture
//!
//! ```text
//! fleetdeck-core/src/
//! ├── ordering/
//! │   ├── assigner.rs   # Pure priority math (sequential, insert-after, prepend)
//! │   ├── view.rs       # Stable display order + drag-eligible subset
//! │   ├── session.rs    # Reorder controller, duplicate flow, lifecycle
//! │   ├── debounce.rs   # Quiet-period timer, latest snapshot wins
//! │   └── gateway.rs    # Batched writes, status surface, reconciliation
//! ├── store.rs          # RecordStore / CollectionCache boundary traits
//! └── error.rs          # Unified AppError
//! ```
//!
//! The engine maintains a user-manipulable priority order over remote-backed
//! host records: drag reordering renumbers the list to contiguous
//! priorities, duplication reinserts a copy right after its anchor (bumping
//! followers when no integer gap exists), and local edits converge to the
//! server through debounced batch writes. The server stays authoritative:
//! every refetch replaces the local overlay wholesale.

pub mod error;
pub mod ordering;
pub mod store;

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use ordering::gateway::{SyncGateway, SyncStatus};
pub use ordering::session::HostListSession;
pub use ordering::OrderedRecord;
pub use store::{CollectionCache, NoCache, RecordStore, HOSTS_COLLECTION};
