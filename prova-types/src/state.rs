use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded change of the selector's value.
///
/// The value holds from `at` until the next change's timestamp (or the
/// query end, for the last entry in a log).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    /// The value the selector switched to.
    pub value: String,
    /// Instant of the change.
    pub at: DateTime<Utc>,
}

impl StateChange {
    /// Build a state change.
    pub fn new(value: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            at,
        }
    }
}

/// A state-change entry as delivered by an external store, before validation.
///
/// Entries lacking either field are malformed and are dropped (with a
/// diagnostic) by `prova_core::timeseries::durations::sanitize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStateChange {
    /// The recorded value, if usable.
    pub value: Option<String>,
    /// The recorded timestamp, if usable.
    pub at: Option<DateTime<Utc>>,
}

/// An ordered state-change log for one selector.
///
/// Entries ascend by timestamp. Normalization uses a stable sort, so entries
/// sharing a timestamp keep their original log order; the log order stays
/// authoritative for ties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateLog {
    changes: Vec<StateChange>,
}

impl StateLog {
    /// Build a log from entries, normalizing order.
    #[must_use]
    pub fn new(mut changes: Vec<StateChange>) -> Self {
        changes.sort_by_key(|c| c.at);
        Self { changes }
    }

    /// The empty log.
    #[must_use]
    pub const fn empty() -> Self {
        Self { changes: Vec::new() }
    }

    /// Append an entry, re-normalizing only if it lands out of order.
    pub fn push(&mut self, change: StateChange) {
        let in_order = self.changes.last().is_none_or(|last| last.at <= change.at);
        self.changes.push(change);
        if !in_order {
            self.changes.sort_by_key(|c| c.at);
        }
    }

    /// Ordered view of the entries.
    #[must_use]
    pub fn changes(&self) -> &[StateChange] {
        &self.changes
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &StateChange> {
        self.changes.iter()
    }
}

impl From<Vec<StateChange>> for StateLog {
    fn from(changes: Vec<StateChange>) -> Self {
        Self::new(changes)
    }
}

impl FromIterator<StateChange> for StateLog {
    fn from_iter<I: IntoIterator<Item = StateChange>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(sec: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(sec, 0).unwrap()
    }

    #[test]
    fn new_normalizes_order() {
        let log = StateLog::new(vec![
            StateChange::new("b", t(20)),
            StateChange::new("a", t(10)),
        ]);
        let values: Vec<_> = log.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["a", "b"]);
    }

    #[test]
    fn ties_keep_log_order() {
        let log = StateLog::new(vec![
            StateChange::new("first", t(10)),
            StateChange::new("second", t(10)),
        ]);
        let values: Vec<_> = log.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["first", "second"]);
    }

    #[test]
    fn push_keeps_order() {
        let mut log = StateLog::empty();
        log.push(StateChange::new("a", t(20)));
        log.push(StateChange::new("b", t(10)));
        let ats: Vec<_> = log.iter().map(|c| c.at).collect();
        assert_eq!(ats, [t(10), t(20)]);
    }
}
