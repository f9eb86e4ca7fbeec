//! Re-export of foundational types from `prova-types`.
// Consolidated re-exports so downstream crates can depend on `prova-core` only

pub use prova_types::{Capability, ProvaError};

pub use prova_types::{CacheConfig, TrackerConfig, UnknownPeriodPolicy};
pub use prova_types::{DEFAULT_PERIODS, Period, TimeWindow};
pub use prova_types::{IDLE_OPTION, MAX_PLAYERS, MIN_PLAYERS, Roster};
pub use prova_types::{PeriodTotal, PlayerHours, PracticeReport, Reading};
pub use prova_types::{RawStateChange, StateChange, StateLog};
pub use prova_types::{SelectorId, reading_key, slug, total_key};
