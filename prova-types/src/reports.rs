//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::ProvaError;
use crate::period::Period;
use crate::reading::Reading;

/// One (player, period) duration reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerHours {
    /// Player display name.
    pub player: String,
    /// Period the reading covers.
    pub period: Period,
    /// Hours the selector held this player's name within the period.
    pub reading: Reading,
}

/// Cross-player total for one period.
///
/// The total is available as soon as at least one player reading for the
/// period is valid; it is unavailable only when every input is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotal {
    /// Period the total covers.
    pub period: Period,
    /// Number of players contributing (valid or not).
    pub player_count: usize,
    /// Summed hours across valid player readings.
    pub reading: Reading,
}

/// Full roster × periods practice report.
///
/// Per-entry failures degrade to unavailable readings and surface in
/// `warnings` instead of aborting the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PracticeReport {
    /// Per-(player, period) readings, roster order then period order.
    pub players: Vec<PlayerHours>,
    /// Per-period totals, period order.
    pub totals: Vec<PeriodTotal>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<ProvaError>,
}

impl PracticeReport {
    /// Look up one player's reading for a period.
    #[must_use]
    pub fn player(&self, name: &str, period: Period) -> Option<&PlayerHours> {
        self.players
            .iter()
            .find(|p| p.player == name && p.period == period)
    }

    /// Look up the total for a period.
    #[must_use]
    pub fn total(&self, period: Period) -> Option<&PeriodTotal> {
        self.totals.iter().find(|t| t.period == period)
    }
}
