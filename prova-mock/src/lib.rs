//! Mock store for CI-safe examples and tests. Serves deterministic
//! state-change logs from static fixtures or caller-seeded entries.

use std::collections::HashMap;

use async_trait::async_trait;
use prova_core::store::{PracticeStore, SnapshotProvider, StateLogProvider};
use prova_core::{ProvaError, SelectorId, StateLog, TimeWindow};

pub mod fixtures;

/// In-memory store with deterministic behavior.
///
/// Magic selector prefixes force error paths:
/// - ids starting with `fail` make every call fail with a store error;
/// - ids starting with `slow` delay each call by 200ms, so orchestrator
///   timeouts can be exercised.
///
/// Unknown selectors have no snapshot (`Ok(None)`) and an empty log:
/// existence is the snapshot's concern, absence of history reads as zero.
pub struct MockStore {
    logs: HashMap<String, StateLog>,
    current: HashMap<String, String>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    /// Store pre-seeded with the demo fixture log.
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .with_log(fixtures::DEMO_SELECTOR, fixtures::demo_log())
            .with_current(fixtures::DEMO_SELECTOR, fixtures::DEMO_CURRENT)
    }

    /// Store with no selectors at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            logs: HashMap::new(),
            current: HashMap::new(),
        }
    }

    /// Seed a selector's state-change log.
    #[must_use]
    pub fn with_log(mut self, selector: &str, log: StateLog) -> Self {
        self.logs.insert(selector.to_string(), log);
        self
    }

    /// Seed a selector's current value, making the selector exist.
    #[must_use]
    pub fn with_current(mut self, selector: &str, value: &str) -> Self {
        self.current
            .insert(selector.to_string(), value.to_string());
        self
    }

    async fn maybe_fail_or_stall(selector: &str, capability: &'static str) -> Result<(), ProvaError> {
        if selector.starts_with("fail") {
            return Err(ProvaError::store(
                "prova-mock",
                format!("forced failure: {capability}"),
            ));
        }
        if selector.starts_with("slow") {
            // Simulate store latency; orchestrator may time out depending on config
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        }
        Ok(())
    }

    /// Slice a seeded log the way a history backend would: every change
    /// inside the window plus the latest change at or before its start.
    fn slice(log: &StateLog, window: TimeWindow) -> StateLog {
        let changes = log.changes();
        let first_inside = changes.partition_point(|c| c.at < window.start());
        // Keep one pre-window entry so the value in force at the edge is known.
        let from = first_inside.saturating_sub(1);
        changes[from..]
            .iter()
            .filter(|c| c.at < window.end())
            .cloned()
            .collect()
    }
}

impl PracticeStore for MockStore {
    fn name(&self) -> &'static str {
        "prova-mock"
    }

    fn as_state_log_provider(&self) -> Option<&dyn StateLogProvider> {
        Some(self)
    }

    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        Some(self)
    }
}

#[async_trait]
impl StateLogProvider for MockStore {
    async fn state_changes(
        &self,
        selector: &SelectorId,
        window: TimeWindow,
    ) -> Result<StateLog, ProvaError> {
        Self::maybe_fail_or_stall(selector.as_str(), "state-log").await?;
        Ok(self
            .logs
            .get(selector.as_str())
            .map_or_else(StateLog::empty, |log| Self::slice(log, window)))
    }
}

#[async_trait]
impl SnapshotProvider for MockStore {
    async fn current_value(&self, selector: &SelectorId) -> Result<Option<String>, ProvaError> {
        Self::maybe_fail_or_stall(selector.as_str(), "snapshot").await?;
        Ok(self.current.get(selector.as_str()).cloned())
    }
}
