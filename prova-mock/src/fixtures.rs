use chrono::NaiveDateTime;
use prova_core::{StateChange, StateLog};

/// Selector id the fixture log is registered under.
pub const DEMO_SELECTOR: &str = "band_practice.current_player";

/// Player the fixture selector currently points at.
pub const DEMO_CURRENT: &str = "Anna";

/// Deterministic selector history: an evening rehearsal on 2024-03-01 with
/// every player taking a turn, and a shorter session the next morning.
#[must_use]
pub fn demo_log() -> StateLog {
    build(vec![
        ("2024-03-01 17:00", "Anna"),
        ("2024-03-01 18:30", "Bruno"),
        ("2024-03-01 19:00", "Carla"),
        ("2024-03-01 20:15", "Dario"),
        ("2024-03-01 21:00", "None"),
        ("2024-03-02 09:00", "Anna"),
        ("2024-03-02 09:45", "Bruno"),
        ("2024-03-02 10:30", "None"),
        ("2024-03-02 11:00", "Anna"),
    ])
}

fn build(rows: Vec<(&str, &str)>) -> StateLog {
    rows.into_iter()
        .map(|(at, player)| {
            StateChange::new(
                player,
                NaiveDateTime::parse_from_str(at, "%Y-%m-%d %H:%M")
                    .unwrap()
                    .and_utc(),
            )
        })
        .collect()
}
