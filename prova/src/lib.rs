//! Prova evaluates per-player practice time from a shared selector's
//! state-change history.
//!
//! Overview
//! - One selector entity names the "currently practicing" player at any
//!   instant; its append-only state-change log is owned by a pluggable
//!   store implementing the `prova_core` contracts.
//! - Named rolling periods (today, yesterday, 7 days, 28 days) resolve to
//!   concrete `[start, end)` windows at evaluation time, anchored to local
//!   midnight in a configurable timezone.
//! - Every duration is re-derived from the log slice on each call, a pure
//!   function of log and window, with no persisted aggregates to drift.
//!
//! Key behaviors and trade-offs
//! - Availability: a missing selector entity yields unavailable readings,
//!   a distinct condition from a valid zero-hour reading; a per-period
//!   total is available as soon as one player reading for it is.
//! - Fan-out: reports evaluate roster × periods concurrently; each task
//!   owns an immutable log snapshot, so no coordination is needed. An
//!   optional request deadline bounds the whole batch; per-call store
//!   timeouts bound each fetch.
//! - Partial failures degrade to unavailable readings plus warnings rather
//!   than aborting the report.
//! - Unknown period identifiers either fall back to the today window (the
//!   default, diagnosed) or are rejected, per `UnknownPeriodPolicy`.
//!
//! Examples
//! Building an orchestrator against a store:
//! ```rust,ignore
//! use std::sync::Arc;
//! use prova::{Prova, Roster};
//!
//! let store = Arc::new(prova_mock::MockStore::new());
//! let prova = Prova::builder()
//!     .store(store)
//!     .tracker_name("Band Practice")
//!     .roster(Roster::new(["Anna", "Bruno", "Carla", "Dario"])?)
//!     .timezone(chrono_tz::Europe::Rome)
//!     .build()?;
//! ```
//!
//! Querying a single player and a full report:
//! ```rust,ignore
//! use prova::Period;
//!
//! let hours = prova.player_hours("Anna", Period::Today).await?;
//! let report = prova.report().run().await?;
//! for total in &report.totals {
//!     println!("{}: {}", total.period.label(), total.reading);
//! }
//! ```
//!
//! See `prova/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod tracker;

pub use core::{Prova, ProvaBuilder};
pub use tracker::ReportBuilder;
pub use tracker::util::join_with_deadline;

// Re-export core types for convenience
pub use prova_core::{
    // Store contracts
    PracticeStore,
    SnapshotProvider,
    StateLogProvider,
    // Foundational types
    Capability,
    ProvaError,
    // Periods & windows
    DEFAULT_PERIODS,
    Period,
    TimeWindow,
    UnknownPeriodPolicy,
    // Logs & readings
    RawStateChange,
    Reading,
    StateChange,
    StateLog,
    // Roster & keys
    IDLE_OPTION,
    MAX_PLAYERS,
    MIN_PLAYERS,
    Roster,
    SelectorId,
    reading_key,
    slug,
    total_key,
    // Config & reports
    CacheConfig,
    PeriodTotal,
    PlayerHours,
    PracticeReport,
    TrackerConfig,
    // Aggregation core
    held_hours,
    held_hours_by_value,
    resolve_window,
    resolve_window_id,
    round_hours,
    sanitize,
    sum_raw,
    sum_readings,
};
