//! Configuration types shared by the orchestrator and store wrappers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::period::{DEFAULT_PERIODS, Period};

/// Policy for resolving a period identifier the tracker does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownPeriodPolicy {
    /// Resolve unknown identifiers to the today window, with a diagnostic.
    /// Compatible with hosts that treat the period id as free-form text.
    #[default]
    FallbackToToday,
    /// Reject unknown identifiers with `InvalidArg`.
    Reject,
}

/// Global configuration for a tracker orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Timezone anchoring the today/yesterday midnight boundary.
    pub timezone: chrono_tz::Tz,
    /// Periods evaluated by default in reports.
    pub periods: Vec<Period>,
    /// Policy for unrecognized period identifiers.
    pub unknown_period_policy: UnknownPeriodPolicy,
    /// Timeout for individual store calls.
    pub store_timeout: Duration,
    /// Optional overall deadline for fan-out reports.
    pub request_timeout: Option<Duration>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::UTC,
            periods: DEFAULT_PERIODS.to_vec(),
            unknown_period_policy: UnknownPeriodPolicy::default(),
            store_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}

/// Configuration for the log-slice cache wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached log slices.
    pub capacity: u64,
    /// Time-to-live for cached slices. `None` keeps entries until they are
    /// evicted or explicitly invalidated.
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 256,
            ttl: Some(Duration::from_secs(60)),
        }
    }
}
