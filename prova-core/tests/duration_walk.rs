use chrono::{DateTime, Utc};
use prova_core::{
    RawStateChange, StateChange, StateLog, TimeWindow, held_hours, held_hours_by_value, sanitize,
};

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn window(start: &str, end: &str) -> TimeWindow {
    TimeWindow::try_new(utc(start), utc(end)).unwrap()
}

fn log(entries: &[(&str, &str)]) -> StateLog {
    entries
        .iter()
        .map(|(value, at)| StateChange::new(*value, utc(at)))
        .collect()
}

#[test]
fn splits_window_between_players() {
    let log = log(&[
        ("Anna", "2024-03-01T00:00:00Z"),
        ("Bruno", "2024-03-01T01:00:00Z"),
    ]);
    let w = window("2024-03-01T00:00:00Z", "2024-03-01T02:00:00Z");
    assert_eq!(held_hours(&log, w, "Anna"), 1.0);
    assert_eq!(held_hours(&log, w, "Bruno"), 1.0);
}

#[test]
fn clips_intervals_that_started_before_the_window() {
    // Selected at 23:00 yesterday, still selected; only the in-window hour
    // counts.
    let log = log(&[("Anna", "2024-02-29T23:00:00Z")]);
    let w = window("2024-03-01T00:00:00Z", "2024-03-01T01:00:00Z");
    assert_eq!(held_hours(&log, w, "Anna"), 1.0);
}

#[test]
fn empty_log_yields_zero_not_unavailable() {
    let w = window("2024-03-01T00:00:00Z", "2024-03-01T02:00:00Z");
    assert_eq!(held_hours(&StateLog::empty(), w, "Anna"), 0.0);
    assert!(held_hours_by_value(&StateLog::empty(), w).is_empty());
}

#[test]
fn event_past_window_end_contributes_nothing() {
    let log = log(&[("Anna", "2024-03-01T03:00:00Z")]);
    let w = window("2024-03-01T00:00:00Z", "2024-03-01T02:00:00Z");
    assert_eq!(held_hours(&log, w, "Anna"), 0.0);
    assert!(held_hours_by_value(&log, w).is_empty());
}

#[test]
fn event_exactly_at_window_start_is_included() {
    let log = log(&[("Anna", "2024-03-01T00:00:00Z")]);
    let w = window("2024-03-01T00:00:00Z", "2024-03-01T02:00:00Z");
    assert_eq!(held_hours(&log, w, "Anna"), 2.0);
}

#[test]
fn open_ended_last_interval_runs_to_window_end() {
    let log = log(&[
        ("Anna", "2024-03-01T00:00:00Z"),
        ("Bruno", "2024-03-01T00:30:00Z"),
    ]);
    let w = window("2024-03-01T00:00:00Z", "2024-03-01T03:00:00Z");
    assert_eq!(held_hours(&log, w, "Bruno"), 2.5);
}

#[test]
fn resumed_selections_accumulate() {
    let log = log(&[
        ("Anna", "2024-03-01T00:00:00Z"),
        ("Bruno", "2024-03-01T01:00:00Z"),
        ("Anna", "2024-03-01T01:30:00Z"),
    ]);
    let w = window("2024-03-01T00:00:00Z", "2024-03-01T02:00:00Z");
    assert_eq!(held_hours(&log, w, "Anna"), 1.5);
    assert_eq!(held_hours(&log, w, "Bruno"), 0.5);
}

#[test]
fn tie_timestamps_keep_log_order() {
    // The earlier entry's interval degenerates to zero width; the later one
    // carries forward.
    let log = log(&[
        ("Anna", "2024-03-01T10:00:00Z"),
        ("Bruno", "2024-03-01T10:00:00Z"),
    ]);
    let w = window("2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z");
    assert_eq!(held_hours(&log, w, "Anna"), 0.0);
    assert_eq!(held_hours(&log, w, "Bruno"), 1.0);
}

#[test]
fn by_value_partitions_the_covered_window() {
    let log = log(&[
        ("Anna", "2024-03-01T00:30:00Z"),
        ("Bruno", "2024-03-01T01:00:00Z"),
    ]);
    let w = window("2024-03-01T00:00:00Z", "2024-03-01T02:00:00Z");
    let by_value = held_hours_by_value(&log, w);
    assert_eq!(by_value.get("Anna"), Some(&0.5));
    assert_eq!(by_value.get("Bruno"), Some(&1.0));
    // 0.5h head gap before the first entry is covered by nobody.
    let covered: f64 = by_value.values().sum();
    assert!((covered - (w.hours() - 0.5)).abs() < 1e-9);
}

#[test]
fn degenerate_window_yields_zero() {
    let log = log(&[("Anna", "2024-03-01T00:00:00Z")]);
    let w = window("2024-03-01T01:00:00Z", "2024-03-01T01:00:00Z");
    assert_eq!(held_hours(&log, w, "Anna"), 0.0);
}

#[test]
fn unsorted_input_is_normalized_before_the_walk() {
    let log = log(&[
        ("Bruno", "2024-03-01T01:00:00Z"),
        ("Anna", "2024-03-01T00:00:00Z"),
    ]);
    let w = window("2024-03-01T00:00:00Z", "2024-03-01T02:00:00Z");
    assert_eq!(held_hours(&log, w, "Anna"), 1.0);
    assert_eq!(held_hours(&log, w, "Bruno"), 1.0);
}

#[test]
fn sub_hour_intervals_round_to_two_decimals() {
    // 100 seconds = 0.0277..h -> 0.03
    let log = log(&[
        ("Anna", "2024-03-01T00:00:00Z"),
        ("Bruno", "2024-03-01T00:01:40Z"),
    ]);
    let w = window("2024-03-01T00:00:00Z", "2024-03-01T01:00:00Z");
    assert_eq!(held_hours(&log, w, "Anna"), 0.03);
}

#[test]
fn sanitize_skips_malformed_entries() {
    let raw = vec![
        RawStateChange {
            value: Some("Anna".to_string()),
            at: Some(utc("2024-03-01T00:00:00Z")),
        },
        RawStateChange {
            value: None,
            at: Some(utc("2024-03-01T00:30:00Z")),
        },
        RawStateChange {
            value: Some("Bruno".to_string()),
            at: None,
        },
        RawStateChange {
            value: Some("Bruno".to_string()),
            at: Some(utc("2024-03-01T01:00:00Z")),
        },
    ];
    let log = sanitize(raw);
    assert_eq!(log.len(), 2);
    let w = window("2024-03-01T00:00:00Z", "2024-03-01T02:00:00Z");
    assert_eq!(held_hours(&log, w, "Anna"), 1.0);
    assert_eq!(held_hours(&log, w, "Bruno"), 1.0);
}
