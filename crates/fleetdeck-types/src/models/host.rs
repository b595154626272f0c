//! Host model and related types.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a host by the remote store.
pub type HostId = i64;

/// TLS behavior for an inbound host entry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HostSecurity {
    /// Inherit whatever the inbound itself is configured with.
    #[default]
    InboundDefault,
    /// Force plain transport.
    None,
    /// Force TLS.
    Tls,
}

/// An inbound host entry: one connection endpoint shown to end users.
///
/// `priority` controls display order (lower sorts first). It is a plain
/// signed integer: no uniqueness or contiguity is guaranteed, the ordering
/// engine only keeps it contiguous after an explicit full reorder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Host {
    /// Remote-store identity. `None` for records not yet persisted
    /// (e.g. a duplicate whose create call has not resolved).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<HostId>,
    /// Human-readable label shown in client apps
    pub remark: String,
    /// Address end users connect to
    pub address: String,
    /// Optional port override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Tag of the inbound this host fronts
    pub inbound_tag: String,
    /// Display priority, lower sorts first
    #[serde(default)]
    pub priority: i64,
    /// TLS behavior
    #[serde(default)]
    pub security: HostSecurity,
    /// Optional SNI override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sni: Option<String>,
    /// Optional Host header override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_header: Option<String>,
    /// Optional transport path override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Whether the host is hidden from end users
    #[serde(default)]
    pub is_disabled: bool,
}

impl Host {
    /// Create a new host with the given remark, address, and inbound tag.
    pub fn new(
        remark: impl Into<String>,
        address: impl Into<String>,
        inbound_tag: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            remark: remark.into(),
            address: address.into(),
            port: None,
            inbound_tag: inbound_tag.into(),
            priority: 0,
            security: HostSecurity::default(),
            sni: None,
            host_header: None,
            path: None,
            is_disabled: false,
        }
    }

    /// Synthesize an unsaved copy of this host.
    ///
    /// Identity is cleared and the remark gets a distinguishing suffix so
    /// the copy is tellable apart from the original in the list.
    pub fn duplicated(&self) -> Self {
        let mut copy = self.clone();
        copy.id = None;
        copy.remark = format!("{} (copy)", self.remark);
        copy
    }

    /// Whether this host can take part in drag reordering and bulk sync.
    /// Records without identity cannot be addressed on the remote store.
    pub const fn is_sortable(&self) -> bool {
        self.id.is_some()
    }
}
