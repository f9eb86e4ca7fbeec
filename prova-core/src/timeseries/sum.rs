use prova_types::Reading;

use super::durations::round_hours;

/// Sum per-player readings for one period into a total reading.
///
/// Unavailable and non-finite entries are skipped; the total is available
/// as soon as at least one entry is a valid number: a roster of all-zero
/// readings totals `Hours(0.0)`, while a roster with no valid reading at
/// all totals `Unavailable`. The two must never collapse into each other.
#[must_use]
pub fn sum_readings<'a, I>(values: I) -> Reading
where
    I: IntoIterator<Item = (&'a str, Reading)>,
{
    let mut total = 0.0_f64;
    let mut any_valid = false;
    for (_player, reading) in values {
        match reading {
            Reading::Hours(hours) if hours.is_finite() => {
                total += hours;
                any_valid = true;
            }
            Reading::Hours(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(player = _player, "skipping non-finite reading in total");
            }
            Reading::Unavailable => {}
        }
    }
    if any_valid {
        Reading::Hours(round_hours(total))
    } else {
        Reading::Unavailable
    }
}

/// Sum raw polled readings, as string states from an external layer.
///
/// Sentinel states parse to unavailable; non-numeric text is excluded from
/// the sum with a diagnostic rather than failing the whole total.
#[must_use]
pub fn sum_raw<'a, I>(values: I) -> Reading
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    sum_readings(values.into_iter().map(|(player, raw)| {
        match Reading::parse(raw) {
            Ok(reading) => (player, reading),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    player = player,
                    error = %_err,
                    "invalid numeric reading excluded from total"
                );
                (player, Reading::Unavailable)
            }
        }
    }))
}
