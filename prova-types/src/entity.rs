//! Deterministic key derivation for selectors and readings.
//!
//! Naming by string concatenation is host plumbing, not aggregation logic;
//! it lives here so the core stays free of identifier policy.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::period::Period;

/// Lowercase a display name and replace whitespace runs with underscores.
#[must_use]
pub fn slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Typed identifier of the shared "current player" selector entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectorId(String);

impl SelectorId {
    /// Wrap a pre-derived identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Derive the selector id for a tracker display name,
    /// e.g. "Band Practice" → `band_practice.current_player`.
    #[must_use]
    pub fn for_tracker(tracker_name: &str) -> Self {
        Self(format!("{}.current_player", slug(tracker_name)))
    }

    /// The underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key for one (player, period) reading, e.g. `band_practice.anna.7_days`.
#[must_use]
pub fn reading_key(tracker_name: &str, player: &str, period: Period) -> String {
    format!("{}.{}.{}", slug(tracker_name), slug(player), period.as_str())
}

/// Key for a per-period total, e.g. `band_practice.total.7_days`.
#[must_use]
pub fn total_key(tracker_name: &str, period: Period) -> String {
    format!("{}.total.{}", slug(tracker_name), period.as_str())
}
