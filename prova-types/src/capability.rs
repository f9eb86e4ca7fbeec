use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for errors and telemetry.
///
/// These map one-to-one with store/orchestrator entry points and allow
/// consistent Display formatting when tagging failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Ordered state-change log slice for a selector and window.
    StateLog,
    /// Point-in-time snapshot of the selector's current value.
    Snapshot,
    /// Single (player, period) duration query.
    PlayerHours,
    /// Full roster × periods practice report.
    Report,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StateLog => "state-log",
            Self::Snapshot => "snapshot",
            Self::PlayerHours => "player-hours",
            Self::Report => "report",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
