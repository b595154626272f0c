//! Test fixtures shared across the ordering engine tests.

mod view_tests;

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::ordering::gateway::SyncGateway;
use crate::ordering::session::HostListSession;
use crate::store::{CollectionCache, RecordStore, HOSTS_COLLECTION};
use fleetdeck_types::{Host, HostId, SyncConfig};

pub(crate) fn host(id: HostId, remark: &str, priority: i64) -> Host {
    let mut host = Host::new(remark, format!("{remark}.example.com"), "vless-tcp");
    host.id = Some(id);
    host.priority = priority;
    host
}

/// In-memory record store with call counters and failure injection.
#[derive(Default)]
pub(crate) struct MemoryStore {
    pub hosts: Mutex<Vec<Host>>,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub modify_many_calls: AtomicUsize,
    pub last_batch: Mutex<Vec<Host>>,
    pub invalidations: AtomicUsize,
    pub fail_create: AtomicBool,
    pub fail_modify_many: AtomicBool,
    /// Artificial latency for bulk writes, for in-flight interleaving tests.
    pub modify_delay_ms: AtomicU64,
}

impl MemoryStore {
    pub fn with_hosts(hosts: Vec<Host>) -> Arc<Self> {
        let store = Self::default();
        *store.hosts.lock().unwrap() = hosts;
        Arc::new(store)
    }

    pub fn server_hosts(&self) -> Vec<Host> {
        self.hosts.lock().unwrap().clone()
    }

    pub fn last_batch(&self) -> Vec<Host> {
        self.last_batch.lock().unwrap().clone()
    }

    fn next_id(&self) -> HostId {
        self.hosts
            .lock()
            .unwrap()
            .iter()
            .filter_map(|h| h.id)
            .max()
            .unwrap_or(0)
            + 1
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Host>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.server_hosts())
    }

    async fn create(&self, host: &Host) -> AppResult<Host> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(AppError::Store("injected create failure".to_string()));
        }
        let mut created = host.clone();
        created.id = Some(self.next_id());
        self.hosts.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn modify(&self, id: HostId, host: &Host) -> AppResult<Host> {
        let mut hosts = self.hosts.lock().unwrap();
        let slot = hosts
            .iter_mut()
            .find(|h| h.id == Some(id))
            .ok_or_else(|| AppError::Store(format!("no such host: {id}")))?;
        *slot = host.clone();
        slot.id = Some(id);
        Ok(slot.clone())
    }

    async fn modify_many(&self, batch: &[Host]) -> AppResult<()> {
        self.modify_many_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.modify_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.fail_modify_many.load(Ordering::SeqCst) {
            return Err(AppError::Store("injected batch failure".to_string()));
        }
        *self.last_batch.lock().unwrap() = batch.to_vec();
        let mut hosts = self.hosts.lock().unwrap();
        for update in batch {
            if let Some(slot) = hosts.iter_mut().find(|h| h.id == update.id) {
                *slot = update.clone();
            }
        }
        Ok(())
    }

    async fn remove(&self, id: HostId) -> AppResult<()> {
        let mut hosts = self.hosts.lock().unwrap();
        let before = hosts.len();
        hosts.retain(|h| h.id != Some(id));
        if hosts.len() == before {
            return Err(AppError::Store(format!("no such host: {id}")));
        }
        Ok(())
    }
}

impl CollectionCache for MemoryStore {
    fn invalidate(&self, collection_key: &str) {
        assert_eq!(collection_key, HOSTS_COLLECTION);
        self.invalidations.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fleetdeck_core=debug")
        .with_test_writer()
        .try_init();
}

pub(crate) fn gateway_over(store: &Arc<MemoryStore>) -> Arc<SyncGateway> {
    SyncGateway::new(
        Arc::clone(store) as Arc<dyn RecordStore>,
        Arc::clone(store) as Arc<dyn CollectionCache>,
        HOSTS_COLLECTION,
    )
}

pub(crate) async fn open_session(store: &Arc<MemoryStore>, quiet_ms: u64) -> HostListSession {
    init_tracing();
    let config = SyncConfig { quiet_period_ms: quiet_ms, ..SyncConfig::default() };
    HostListSession::open(gateway_over(store), &config)
        .await
        .expect("session open")
}
