use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProvaError;

/// A half-open `[start, end)` evaluation window.
///
/// Invariant: `start <= end`. Construct via [`TimeWindow::try_new`], which
/// rejects inverted pairs, or [`TimeWindow::clamped`], which collapses them
/// to an empty window anchored at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Build a window, rejecting `end < start`.
    ///
    /// # Errors
    /// Returns `ProvaError::InvalidArg` when `end` precedes `start`.
    pub fn try_new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ProvaError> {
        if end < start {
            return Err(ProvaError::InvalidArg(format!(
                "window end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Build a window, collapsing an inverted pair to an empty window at `end`.
    #[must_use]
    pub fn clamped(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: start.min(end),
            end,
        }
    }

    /// Inclusive start instant.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end instant.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Window length in whole seconds.
    #[must_use]
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Window length in hours.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.duration_seconds() as f64 / 3600.0
    }

    /// Whether `at` falls inside `[start, end)`.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    /// Whether the window spans zero time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(sec: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(sec, 0).unwrap()
    }

    #[test]
    fn rejects_inverted_pair() {
        assert!(TimeWindow::try_new(t(100), t(50)).is_err());
        assert!(TimeWindow::try_new(t(50), t(50)).is_ok());
    }

    #[test]
    fn clamped_collapses_to_empty() {
        let w = TimeWindow::clamped(t(100), t(50));
        assert!(w.is_empty());
        assert_eq!(w.start(), t(50));
    }

    #[test]
    fn half_open_contains() {
        let w = TimeWindow::try_new(t(0), t(3600)).unwrap();
        assert!(w.contains(t(0)));
        assert!(w.contains(t(3599)));
        assert!(!w.contains(t(3600)));
        assert_eq!(w.duration_seconds(), 3600);
        assert!((w.hours() - 1.0).abs() < f64::EPSILON);
    }
}
