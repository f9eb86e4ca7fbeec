use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use moka::future::Cache;
use prova_core::store::{PracticeStore, SnapshotProvider, StateLogProvider};
use prova_core::{Capability, ProvaError, SelectorId, StateLog, TimeWindow};
use prova_types::CacheConfig;

/// Identity of one log-slice fetch for caching discrimination.
///
/// The window edges are part of the key: two fetches only share an entry
/// when they ask for the same selector over the same `[start, end)` at the
/// same revision. Advancing "now" changes the key, so nothing is ever
/// memoized on time alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SliceKey {
    selector: String,
    start: i64,
    end: i64,
    revision: u64,
}

/// Caching wrapper around a `PracticeStore`.
///
/// A roster-wide report asks for the identical log slice once per player;
/// this wrapper collapses those duplicates into a single store call per
/// poll tick. Snapshot calls delegate uncached so availability stays live.
///
/// Invalidation is explicit: [`invalidate`](CachingStore::invalidate) bumps
/// the selector's revision (stale entries age out of the capacity/TTL
/// bounds), and [`clear`](CachingStore::clear) drops every entry.
pub struct CachingStore {
    inner: Arc<dyn PracticeStore>,
    cache: Cache<SliceKey, StateLog>,
    revisions: Mutex<HashMap<String, u64>>,
}

impl CachingStore {
    /// Wrap a store with the default cache configuration.
    #[must_use]
    pub fn new(inner: Arc<dyn PracticeStore>) -> Self {
        Self::with_config(inner, CacheConfig::default())
    }

    /// Wrap a store with an explicit cache configuration.
    #[must_use]
    pub fn with_config(inner: Arc<dyn PracticeStore>, cfg: CacheConfig) -> Self {
        let mut builder = Cache::builder().max_capacity(cfg.capacity);
        if let Some(ttl) = cfg.ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            inner,
            cache: builder.build(),
            revisions: Mutex::new(HashMap::new()),
        }
    }

    /// Invalidate every cached slice for `selector`.
    ///
    /// Hosts call this when they append to the selector's log, so the next
    /// fetch re-reads the store instead of serving a stale slice.
    pub fn invalidate(&self, selector: &SelectorId) {
        let mut revisions = self
            .revisions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *revisions.entry(selector.as_str().to_string()).or_insert(0) += 1;
    }

    /// Drop every cached slice.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    fn revision_of(&self, selector: &str) -> u64 {
        self.revisions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(selector)
            .copied()
            .unwrap_or(0)
    }
}

impl PracticeStore for CachingStore {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn as_state_log_provider(&self) -> Option<&dyn StateLogProvider> {
        // Capability mirrors the wrapped store: no inner provider, no cache.
        self.inner
            .as_state_log_provider()
            .map(|_| self as &dyn StateLogProvider)
    }

    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        self.inner.as_snapshot_provider()
    }
}

#[async_trait]
impl StateLogProvider for CachingStore {
    async fn state_changes(
        &self,
        selector: &SelectorId,
        window: TimeWindow,
    ) -> Result<StateLog, ProvaError> {
        let inner = self
            .inner
            .as_state_log_provider()
            .ok_or_else(|| ProvaError::unsupported(Capability::StateLog.as_str()))?;
        let key = SliceKey {
            selector: selector.as_str().to_string(),
            start: window.start().timestamp(),
            end: window.end().timestamp(),
            revision: self.revision_of(selector.as_str()),
        };
        if let Some(hit) = self.cache.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(selector = %selector, "serving state-change slice from cache");
            return Ok(hit);
        }
        let log = inner.state_changes(selector, window).await?;
        self.cache.insert(key, log.clone()).await;
        Ok(log)
    }
}
