use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;

use crate::ProvaError;
use prova_types::{Period, TimeWindow, UnknownPeriodPolicy};

const DAY: i64 = 86_400;

/// Resolve a named period against a caller-supplied "now".
///
/// - `Today`: `[local midnight, now)`.
/// - `Yesterday`: the exact 24h slice ending at today's local midnight.
/// - `SevenDays` / `TwentyEightDays`: rolling `7×24h` / `28×24h` lookbacks
///   ending at `now`.
///
/// `now` is an argument rather than a clock read so the function stays pure
/// and testable. Local midnight is computed in `tz`; around a DST fall-back
/// the earlier of the two candidate midnights wins, and when a transition
/// removes midnight entirely the UTC day start stands in.
#[must_use]
pub fn resolve_window(period: Period, now: DateTime<Utc>, tz: Tz) -> TimeWindow {
    match period {
        Period::Today => TimeWindow::clamped(local_midnight(now, tz), now),
        Period::Yesterday => {
            let midnight = local_midnight(now, tz);
            TimeWindow::clamped(midnight - Duration::hours(24), midnight)
        }
        Period::SevenDays => TimeWindow::clamped(now - Duration::hours(7 * 24), now),
        Period::TwentyEightDays => TimeWindow::clamped(now - Duration::hours(28 * 24), now),
    }
}

/// Resolve a raw period identifier, applying `policy` to unknown ids.
///
/// With [`UnknownPeriodPolicy::FallbackToToday`] an unknown id resolves to
/// the today window (and emits a diagnostic); with
/// [`UnknownPeriodPolicy::Reject`] it fails.
///
/// # Errors
/// Returns `ProvaError::InvalidArg` for an unknown id under the `Reject`
/// policy.
pub fn resolve_window_id(
    id: &str,
    policy: UnknownPeriodPolicy,
    now: DateTime<Utc>,
    tz: Tz,
) -> Result<TimeWindow, ProvaError> {
    match Period::from_id(id) {
        Some(period) => Ok(resolve_window(period, now, tz)),
        None => match policy {
            UnknownPeriodPolicy::FallbackToToday => {
                #[cfg(feature = "tracing")]
                tracing::warn!(period = id, "unknown period id, falling back to today");
                Ok(resolve_window(Period::Today, now, tz))
            }
            UnknownPeriodPolicy::Reject => {
                Err(ProvaError::InvalidArg(format!("unknown period id: {id}")))
            }
        },
    }
}

/// UTC instant of the most recent local midnight at or before `now`.
fn local_midnight(now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let local = now.with_timezone(&tz);
    let Some(naive_midnight) = local.date_naive().and_hms_opt(0, 0, 0) else {
        return utc_day_start(now);
    };
    match tz.from_local_datetime(&naive_midnight) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(dt1, _) => dt1.with_timezone(&Utc),
        LocalResult::None => {
            // Transition removed midnight; use UTC day start as a conservative default
            utc_day_start(now)
        }
    }
}

fn utc_day_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let day = now.timestamp().div_euclid(DAY);
    DateTime::from_timestamp(day * DAY, 0).unwrap_or(now)
}
