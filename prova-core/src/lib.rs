//! prova-core
//!
//! Store contracts and time-series utilities shared across the prova
//! ecosystem.
//!
//! - `types`: common data structures (periods, windows, logs, readings).
//! - `store`: the `PracticeStore` trait and capability provider traits.
//! - `timeseries`: the pure aggregation core: window resolution, duration
//!   walks, and cross-player summation.
//!
//! Every function in `timeseries` is a pure, synchronous function of its
//! inputs: no internal mutable state, no clocks, no hidden caches. A result
//! is re-derived from the log and window on every call, so concurrent
//! evaluations (one per player, one per period) share nothing and need no
//! coordination. The only blocking concern, fetching the log from a
//! potentially slow store, sits behind the async `StateLogProvider`
//! boundary, outside the computation path.
#![warn(missing_docs)]

/// Store capability traits and the primary `PracticeStore` interface.
pub mod store;
/// Time-series utilities: window resolution, duration walks, summation.
pub mod timeseries;
pub mod types;

pub use store::{PracticeStore, SnapshotProvider, StateLogProvider};
pub use timeseries::durations::{held_hours, held_hours_by_value, round_hours, sanitize};
pub use timeseries::sum::{sum_raw, sum_readings};
pub use timeseries::window::{resolve_window, resolve_window_id};
pub use types::*;
