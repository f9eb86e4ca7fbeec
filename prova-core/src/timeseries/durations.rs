use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use prova_types::{RawStateChange, StateChange, StateLog, TimeWindow};

const SECS_PER_HOUR: f64 = 3600.0;

/// Round hours to two decimal places, half away from zero.
#[must_use]
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Total hours the selector held `target` within `window`.
///
/// Walks the log once, in order. Each entry holds its value from its own
/// timestamp until the next entry's timestamp (or `window.end()` for the
/// last entry), clipped to the window. Entries whose clipped interval is
/// empty (including any entry at or past `window.end()`) contribute
/// nothing; an entry that started before `window.start()` still counts from
/// the window edge onward.
///
/// An empty log yields `0.0`: absence of history means zero held time, a
/// different condition from "the selector does not exist", which callers
/// decide before ever invoking the walk.
#[must_use]
pub fn held_hours(log: &StateLog, window: TimeWindow, target: &str) -> f64 {
    let changes = log.changes();
    let mut total_seconds: i64 = 0;
    for (i, change) in changes.iter().enumerate() {
        if change.value != target {
            continue;
        }
        let held_until = changes.get(i + 1).map_or(window.end(), |next| next.at);
        total_seconds += clipped_seconds(change.at, held_until, window);
    }
    round_hours(total_seconds as f64 / SECS_PER_HOUR)
}

/// Held hours for every distinct value observed in the log, in one walk.
///
/// Values whose clipped intervals are all empty do not appear. Together the
/// returned durations partition the window, minus any head gap before the
/// first entry.
#[must_use]
pub fn held_hours_by_value(log: &StateLog, window: TimeWindow) -> BTreeMap<String, f64> {
    let changes = log.changes();
    let mut seconds: BTreeMap<&str, i64> = BTreeMap::new();
    for (i, change) in changes.iter().enumerate() {
        let held_until = changes.get(i + 1).map_or(window.end(), |next| next.at);
        let clipped = clipped_seconds(change.at, held_until, window);
        if clipped > 0 {
            *seconds.entry(change.value.as_str()).or_insert(0) += clipped;
        }
    }
    seconds
        .into_iter()
        .map(|(value, secs)| (value.to_string(), round_hours(secs as f64 / SECS_PER_HOUR)))
        .collect()
}

/// Whole seconds of `[start, end)` that fall inside `window`.
fn clipped_seconds(start: DateTime<Utc>, end: DateTime<Utc>, window: TimeWindow) -> i64 {
    let effective_start = start.max(window.start());
    let effective_end = end.min(window.end());
    if effective_start >= effective_end {
        return 0;
    }
    (effective_end - effective_start).num_seconds()
}

/// Validate raw store entries into an ordered log.
///
/// Entries lacking a value or a timestamp are skipped with a diagnostic;
/// one bad entry never discards the rest of the history.
pub fn sanitize<I>(raw: I) -> StateLog
where
    I: IntoIterator<Item = RawStateChange>,
{
    let mut changes = Vec::new();
    for entry in raw {
        match (entry.value, entry.at) {
            (Some(value), Some(at)) => changes.push(StateChange::new(value, at)),
            (_value, _at) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    has_value = _value.is_some(),
                    has_timestamp = _at.is_some(),
                    "skipping malformed state-change entry"
                );
            }
        }
    }
    StateLog::new(changes)
}
