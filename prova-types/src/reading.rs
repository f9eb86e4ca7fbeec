use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProvaError;

/// Sentinel states an external polling layer reports for entities that
/// currently carry no numeric value.
const UNAVAILABLE_SENTINELS: [&str; 3] = ["unavailable", "unknown", "none"];

/// A duration reading: hours rounded to two decimals, or the unavailable
/// marker.
///
/// `Unavailable` means the source selector itself could not be found, a
/// distinct condition from a valid reading of zero hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reading {
    /// A valid duration, in hours.
    Hours(f64),
    /// No underlying source; distinct from zero recorded time.
    Unavailable,
}

impl Reading {
    /// Whether this reading carries a numeric value.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Hours(_))
    }

    /// The numeric value, if available.
    #[must_use]
    pub const fn hours(self) -> Option<f64> {
        match self {
            Self::Hours(h) => Some(h),
            Self::Unavailable => None,
        }
    }

    /// Parse a raw polled value.
    ///
    /// Sentinel states ("unavailable", "unknown", "none", case-insensitive)
    /// map to [`Reading::Unavailable`].
    ///
    /// # Errors
    /// Returns `ProvaError::InvalidArg` for text that is neither a sentinel
    /// nor a finite number.
    pub fn parse(raw: &str) -> Result<Self, ProvaError> {
        let trimmed = raw.trim();
        if UNAVAILABLE_SENTINELS
            .iter()
            .any(|s| trimmed.eq_ignore_ascii_case(s))
        {
            return Ok(Self::Unavailable);
        }
        match trimmed.parse::<f64>() {
            Ok(h) if h.is_finite() => Ok(Self::Hours(h)),
            _ => Err(ProvaError::InvalidArg(format!(
                "not a numeric reading: {trimmed:?}"
            ))),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours(h) => write!(f, "{h}"),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}
