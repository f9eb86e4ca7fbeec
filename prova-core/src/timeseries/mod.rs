//! Time-series utilities shared by stores and the orchestrator.
//!
//! Modules include:
//! - `window`: resolve named periods to concrete `[start, end)` windows
//! - `durations`: walk a state-change log and accumulate clipped held time
//! - `sum`: combine per-player readings into a per-period total

/// Duration aggregation over ordered state-change logs.
pub mod durations;
/// Cross-player summation of duration readings.
pub mod sum;
/// Period-to-window resolution.
pub mod window;
