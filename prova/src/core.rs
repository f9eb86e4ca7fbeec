use std::sync::Arc;
use std::time::Duration;

use prova_core::store::{PracticeStore, SnapshotProvider, StateLogProvider};
use prova_core::{Capability, Period, ProvaError, Roster, SelectorId, TrackerConfig};

/// Orchestrator that evaluates practice durations against a registered store.
pub struct Prova {
    pub(crate) store: Arc<dyn PracticeStore>,
    pub(crate) selector: SelectorId,
    pub(crate) roster: Roster,
    pub(crate) cfg: TrackerConfig,
}

impl std::fmt::Debug for Prova {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prova")
            .field("selector", &self.selector)
            .field("roster", &self.roster)
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a `Prova` orchestrator with custom configuration.
pub struct ProvaBuilder {
    store: Option<Arc<dyn PracticeStore>>,
    selector: Option<SelectorId>,
    roster: Option<Roster>,
    cfg: TrackerConfig,
}

impl Default for ProvaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no store; you must register one via [`store`].
    /// - Defaults are conservative: UTC midnight anchoring, all four standard
    ///   periods, fallback-to-today for unknown period ids, 5s store timeout,
    ///   no overall report deadline.
    ///
    /// [`store`]: ProvaBuilder::store
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            selector: None,
            roster: None,
            cfg: TrackerConfig::default(),
        }
    }

    /// Register the practice-data store.
    #[must_use]
    pub fn store(mut self, store: Arc<dyn PracticeStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Derive the selector id from a tracker display name,
    /// e.g. "Band Practice" → `band_practice.current_player`.
    #[must_use]
    pub fn tracker_name(mut self, name: &str) -> Self {
        self.selector = Some(SelectorId::for_tracker(name));
        self
    }

    /// Use an explicit selector id instead of deriving one.
    #[must_use]
    pub fn selector(mut self, selector: SelectorId) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Set the player roster.
    #[must_use]
    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Timezone anchoring the today/yesterday midnight boundary.
    #[must_use]
    pub fn timezone(mut self, tz: chrono_tz::Tz) -> Self {
        self.cfg.timezone = tz;
        self
    }

    /// Periods evaluated by default in reports. Duplicates are dropped,
    /// keeping first occurrence order.
    #[must_use]
    pub fn periods(mut self, periods: &[Period]) -> Self {
        self.cfg.periods = dedup_periods(periods);
        self
    }

    /// Policy for unrecognized period identifiers.
    #[must_use]
    pub fn unknown_period_policy(mut self, policy: prova_core::UnknownPeriodPolicy) -> Self {
        self.cfg.unknown_period_policy = policy;
        self
    }

    /// Timeout for individual store calls.
    #[must_use]
    pub const fn store_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.store_timeout = timeout;
        self
    }

    /// Optional overall deadline for fan-out reports.
    #[must_use]
    pub const fn request_timeout(mut self, deadline: Option<Duration>) -> Self {
        self.cfg.request_timeout = deadline;
        self
    }

    /// Build the `Prova` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no store was registered, no selector was
    /// provided (directly or via [`tracker_name`]), no roster was set, or no
    /// periods remain after de-duplication.
    ///
    /// [`tracker_name`]: ProvaBuilder::tracker_name
    pub fn build(self) -> Result<Prova, ProvaError> {
        let store = self.store.ok_or_else(|| {
            ProvaError::InvalidArg("no store registered; add one via store(...)".to_string())
        })?;
        let selector = self.selector.ok_or_else(|| {
            ProvaError::InvalidArg(
                "no selector configured; set tracker_name(...) or selector(...)".to_string(),
            )
        })?;
        let roster = self.roster.ok_or_else(|| {
            ProvaError::InvalidArg("no roster configured; set roster(...)".to_string())
        })?;
        if self.cfg.periods.is_empty() {
            return Err(ProvaError::InvalidArg(
                "no periods configured; set periods(...)".to_string(),
            ));
        }
        Ok(Prova {
            store,
            selector,
            roster,
            cfg: self.cfg,
        })
    }
}

fn dedup_periods(periods: &[Period]) -> Vec<Period> {
    let mut out: Vec<Period> = Vec::with_capacity(periods.len());
    for &p in periods {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

impl Prova {
    /// Start building a new `Prova` instance.
    #[must_use]
    pub fn builder() -> ProvaBuilder {
        ProvaBuilder::new()
    }

    /// The configured selector id.
    #[must_use]
    pub const fn selector(&self) -> &SelectorId {
        &self.selector
    }

    /// The configured roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Wrap a store future with the per-call timeout and standardized
    /// timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "prova::core::store_call_with_timeout",
            skip(fut),
            fields(
                store = store_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn store_call_with_timeout<T, Fut>(
        store_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, ProvaError>
    where
        Fut: core::future::Future<Output = Result<T, ProvaError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(ProvaError::store_timeout(store_name, capability.as_str())))
    }

    pub(crate) fn state_log_provider(&self) -> Result<&dyn StateLogProvider, ProvaError> {
        self.store
            .as_state_log_provider()
            .ok_or_else(|| ProvaError::unsupported(Capability::StateLog.as_str()))
    }

    pub(crate) fn snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        self.store.as_snapshot_provider()
    }
}

/// Apply an optional overall deadline to a future. Call sites remap the
/// generic "request" label to their capability.
pub(crate) async fn with_request_deadline<F>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<F::Output, ProvaError>
where
    F: core::future::Future,
{
    match deadline {
        Some(d) => (tokio::time::timeout(d, fut).await)
            .map_err(|_| ProvaError::request_timeout("request")),
        None => Ok(fut.await),
    }
}
