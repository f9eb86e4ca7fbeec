use chrono::{DateTime, Utc};
use futures::future::join_all;

use crate::Prova;
use crate::core::with_request_deadline;
use prova_core::timeseries::durations::held_hours;
use prova_core::timeseries::sum::sum_readings;
use prova_core::timeseries::window::resolve_window;
use prova_core::{
    Capability, Period, PeriodTotal, PlayerHours, PracticeReport, ProvaError, Reading,
};

/// Builder to orchestrate a full roster × periods practice report.
pub struct ReportBuilder<'a> {
    prova: &'a Prova,
    periods: Vec<Period>,
    at: Option<DateTime<Utc>>,
}

impl Prova {
    /// Start building a practice report over the configured periods.
    #[must_use]
    pub fn report(&self) -> ReportBuilder<'_> {
        ReportBuilder {
            prova: self,
            periods: self.cfg.periods.clone(),
            at: None,
        }
    }
}

impl ReportBuilder<'_> {
    /// Replace the period list. Duplicates are dropped, keeping first
    /// occurrence order.
    #[must_use]
    pub fn periods(mut self, periods: &[Period]) -> Self {
        let mut out: Vec<Period> = Vec::with_capacity(periods.len());
        for &p in periods {
            if !out.contains(&p) {
                out.push(p);
            }
        }
        self.periods = out;
        self
    }

    /// Evaluate at a fixed instant instead of the wall clock.
    #[must_use]
    pub const fn at(mut self, now: DateTime<Utc>) -> Self {
        self.at = Some(now);
        self
    }

    /// Execute the report across the roster and aggregate results.
    ///
    /// Behavior and trade-offs:
    /// - One snapshot call gates the whole report: a missing selector turns
    ///   every reading and every total unavailable, with a single warning,
    ///   rather than failing the call.
    /// - Otherwise each (player, period) pair is evaluated concurrently from
    ///   its own immutable log slice; evaluations share no mutable state.
    /// - Per-pair failures degrade to unavailable readings and populate
    ///   `warnings` without aborting the batch.
    /// - Totals go through the summation core, so a period's total is
    ///   available as soon as one player reading for it is.
    ///
    /// # Errors
    /// Returns an error only when no periods are selected, the store lacks
    /// the state-log capability, or the overall request deadline elapses.
    pub async fn run(self) -> Result<PracticeReport, ProvaError> {
        if self.periods.is_empty() {
            return Err(ProvaError::InvalidArg(
                "no periods selected for report".to_string(),
            ));
        }
        let prova = self.prova;
        let now = self.at.unwrap_or_else(Utc::now);

        if let Err(reason) = prova.ensure_selector_exists().await {
            return Ok(unavailable_report(prova, &self.periods, reason));
        }
        let provider = prova.state_log_provider()?;

        let mut tasks = Vec::with_capacity(prova.roster.len() * self.periods.len());
        for player in prova.roster.players() {
            for &period in &self.periods {
                tasks.push(async move {
                    let window = resolve_window(period, now, prova.cfg.timezone);
                    let fetched = Prova::store_call_with_timeout(
                        prova.store.name(),
                        Capability::StateLog,
                        prova.cfg.store_timeout,
                        provider.state_changes(&prova.selector, window),
                    )
                    .await;
                    let result = fetched.map(|log| held_hours(&log, window, player));
                    (player.as_str(), period, result)
                });
            }
        }

        let joined = with_request_deadline(prova.cfg.request_timeout, join_all(tasks))
            .await
            .map_err(|_| ProvaError::request_timeout(Capability::Report.as_str()))?;

        let mut players = Vec::with_capacity(joined.len());
        let mut warnings = Vec::new();
        for (player, period, result) in joined {
            let reading = match result {
                Ok(hours) => Reading::Hours(hours),
                Err(err) => {
                    warnings.push(err);
                    Reading::Unavailable
                }
            };
            players.push(PlayerHours {
                player: player.to_string(),
                period,
                reading,
            });
        }

        let totals = self
            .periods
            .iter()
            .map(|&period| PeriodTotal {
                period,
                player_count: prova.roster.len(),
                reading: sum_readings(
                    players
                        .iter()
                        .filter(|p| p.period == period)
                        .map(|p| (p.player.as_str(), p.reading)),
                ),
            })
            .collect();

        Ok(PracticeReport {
            players,
            totals,
            warnings,
        })
    }
}

/// Report shape when the selector entity is missing or unverifiable:
/// every reading and total unavailable, with the gate failure as the one
/// warning.
fn unavailable_report(prova: &Prova, periods: &[Period], reason: ProvaError) -> PracticeReport {
    let mut players = Vec::with_capacity(prova.roster.len() * periods.len());
    for player in prova.roster.players() {
        for &period in periods {
            players.push(PlayerHours {
                player: player.clone(),
                period,
                reading: Reading::Unavailable,
            });
        }
    }
    let totals = periods
        .iter()
        .map(|&period| PeriodTotal {
            period,
            player_count: prova.roster.len(),
            reading: Reading::Unavailable,
        })
        .collect();
    PracticeReport {
        players,
        totals,
        warnings: vec![reason],
    }
}
