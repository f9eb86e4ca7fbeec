#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use prova::{
    PracticeStore, ProvaError, SelectorId, SnapshotProvider, StateChange, StateLog,
    StateLogProvider, TimeWindow,
};

/// Simple in-memory store used by integration tests.
/// Tailor behavior (capabilities, failures, latency) via the fields below.
pub struct TestStore {
    pub logs: HashMap<String, StateLog>,
    pub current: Option<String>,
    pub log_capability: bool,
    pub snapshot_capability: bool,
    pub fail_snapshot: bool,
    /// Fail any state-log fetch whose window starts at this instant.
    pub fail_window_start: Option<DateTime<Utc>>,
    pub delay: Option<Duration>,
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            logs: HashMap::new(),
            current: Some("None".to_string()),
            log_capability: true,
            snapshot_capability: true,
            fail_snapshot: false,
            fail_window_start: None,
            delay: None,
        }
    }

    pub fn with_log(mut self, selector: &str, entries: Vec<StateChange>) -> Self {
        self.logs.insert(selector.to_string(), entries.into());
        self
    }

    pub fn with_current(mut self, value: Option<&str>) -> Self {
        self.current = value.map(str::to_string);
        self
    }
}

impl PracticeStore for TestStore {
    fn name(&self) -> &'static str {
        "test-store"
    }

    fn as_state_log_provider(&self) -> Option<&dyn StateLogProvider> {
        self.log_capability.then_some(self as &dyn StateLogProvider)
    }

    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        self.snapshot_capability
            .then_some(self as &dyn SnapshotProvider)
    }
}

#[async_trait]
impl StateLogProvider for TestStore {
    async fn state_changes(
        &self,
        selector: &SelectorId,
        window: TimeWindow,
    ) -> Result<StateLog, ProvaError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_window_start == Some(window.start()) {
            return Err(ProvaError::store("test-store", "forced failure"));
        }
        Ok(self
            .logs
            .get(selector.as_str())
            .cloned()
            .unwrap_or_else(StateLog::empty))
    }
}

#[async_trait]
impl SnapshotProvider for TestStore {
    async fn current_value(&self, _selector: &SelectorId) -> Result<Option<String>, ProvaError> {
        if self.fail_snapshot {
            return Err(ProvaError::store("test-store", "snapshot failure"));
        }
        Ok(self.current.clone())
    }
}
