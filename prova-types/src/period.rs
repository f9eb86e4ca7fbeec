use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProvaError;

/// Named rolling time range, resolved to concrete instants at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Period {
    /// From local midnight until now.
    #[serde(rename = "today")]
    Today,
    /// The 24h slice ending at today's local midnight.
    #[serde(rename = "yesterday")]
    Yesterday,
    /// The last 7×24h, ending now.
    #[serde(rename = "7_days")]
    SevenDays,
    /// The last 28×24h, ending now.
    #[serde(rename = "28_days")]
    TwentyEightDays,
}

/// Every standard period, in reporting order.
pub const DEFAULT_PERIODS: [Period; 4] = [
    Period::Today,
    Period::Yesterday,
    Period::SevenDays,
    Period::TwentyEightDays,
];

impl Period {
    /// Stable identifier used in keys and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::SevenDays => "7_days",
            Self::TwentyEightDays => "28_days",
        }
    }

    /// Human-readable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::SevenDays => "7 Days",
            Self::TwentyEightDays => "28 Days",
        }
    }

    /// Look up a period by its stable identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        DEFAULT_PERIODS.iter().copied().find(|p| p.as_str() == id)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ProvaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ProvaError::InvalidArg(format!("unknown period id: {s}")))
    }
}
