use chrono::{DateTime, Utc};

use crate::Prova;
use prova_core::timeseries::durations::held_hours;
use prova_core::timeseries::window::resolve_window;
use prova_core::{Capability, Period, ProvaError};

impl Prova {
    /// Current value of the selector, or `None` when the selector entity
    /// does not exist.
    ///
    /// # Errors
    /// Returns `Unsupported` when the store lacks the snapshot capability,
    /// or the store's own failure/timeout.
    pub async fn current_player(&self) -> Result<Option<String>, ProvaError> {
        let snapshot = self
            .snapshot_provider()
            .ok_or_else(|| ProvaError::unsupported(Capability::Snapshot.as_str()))?;
        Self::store_call_with_timeout(
            self.store.name(),
            Capability::Snapshot,
            self.cfg.store_timeout,
            snapshot.current_value(&self.selector),
        )
        .await
    }

    /// Hours the selector held `player` within `period`, evaluated at the
    /// current instant.
    ///
    /// # Errors
    /// See [`player_hours_at`](Prova::player_hours_at).
    pub async fn player_hours(&self, player: &str, period: Period) -> Result<f64, ProvaError> {
        self.player_hours_at(player, period, Utc::now()).await
    }

    /// Hours the selector held `player` within `period`, evaluated at a
    /// caller-supplied instant.
    ///
    /// The result is recomputed from the store's log slice on every call;
    /// nothing is memoized between invocations.
    ///
    /// # Errors
    /// - `InvalidArg` when `player` is not on the roster.
    /// - `Unsupported` when the store lacks the state-log capability.
    /// - `NotFound` when the store's snapshot reports the selector missing;
    ///   callers surface this as an unavailable reading, distinct from zero.
    /// - `StoreTimeout` / store-tagged errors from the log fetch.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "prova::tracker",
            skip(self),
            fields(selector = %self.selector, player = player, period = %period),
        )
    )]
    pub async fn player_hours_at(
        &self,
        player: &str,
        period: Period,
        now: DateTime<Utc>,
    ) -> Result<f64, ProvaError> {
        if !self.roster.contains(player) {
            return Err(ProvaError::InvalidArg(format!(
                "player '{player}' is not on the roster"
            )));
        }
        let provider = self.state_log_provider()?;
        self.ensure_selector_exists().await?;

        let window = resolve_window(period, now, self.cfg.timezone);
        let log = Self::store_call_with_timeout(
            self.store.name(),
            Capability::StateLog,
            self.cfg.store_timeout,
            provider.state_changes(&self.selector, window),
        )
        .await?;
        Ok(held_hours(&log, window, player))
    }

    /// Verify the selector entity exists, when the store can tell.
    ///
    /// Stores without the snapshot capability skip the check: absence of
    /// history still reads as zero hours, per the aggregation contract.
    pub(crate) async fn ensure_selector_exists(&self) -> Result<(), ProvaError> {
        let Some(snapshot) = self.snapshot_provider() else {
            return Ok(());
        };
        let current = Self::store_call_with_timeout(
            self.store.name(),
            Capability::Snapshot,
            self.cfg.store_timeout,
            snapshot.current_value(&self.selector),
        )
        .await?;
        if current.is_none() {
            return Err(ProvaError::not_found(format!(
                "selector {}",
                self.selector
            )));
        }
        Ok(())
    }
}
