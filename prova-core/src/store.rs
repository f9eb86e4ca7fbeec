use async_trait::async_trait;

use crate::ProvaError;
use prova_types::{SelectorId, StateLog, TimeWindow};

/// Focused role trait for stores that serve selector state-change logs.
#[async_trait]
pub trait StateLogProvider: Send + Sync {
    /// Fetch the ordered state-change log for `selector` overlapping `window`.
    ///
    /// The returned slice must contain every change with a timestamp inside
    /// the window and should also carry the most recent change at or before
    /// `window.start()`, so the value in force at the window edge is known.
    /// Retrieval may be slow or blocking on the store side; callers keep it
    /// off latency-sensitive paths and apply their own timeout.
    async fn state_changes(
        &self,
        selector: &SelectorId,
        window: TimeWindow,
    ) -> Result<StateLog, ProvaError>;
}

/// Focused role trait for stores that can report the selector's live value.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Current value of the selector.
    ///
    /// `Ok(None)` means the selector entity does not exist at all, the
    /// signal that downgrades readings to unavailable. An existing selector
    /// always has a value (idle is itself an option).
    async fn current_value(&self, selector: &SelectorId) -> Result<Option<String>, ProvaError>;
}

/// A pluggable practice-data store.
///
/// Stores advertise capabilities by returning trait object references from
/// the `as_*` accessors; the default implementations advertise nothing.
pub trait PracticeStore: Send + Sync {
    /// A stable identifier for diagnostics (e.g., "prova-mock").
    fn name(&self) -> &'static str;

    /// Advertise state-log capability by returning a usable trait object
    /// reference when supported.
    fn as_state_log_provider(&self) -> Option<&dyn StateLogProvider> {
        None
    }

    /// Advertise snapshot capability by returning a usable trait object
    /// reference when supported.
    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        None
    }
}
