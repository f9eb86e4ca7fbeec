use prova_core::{Reading, sum_raw, sum_readings};

#[test]
fn total_is_unavailable_only_when_no_input_is_valid() {
    let all_missing = [
        ("Anna", Reading::Unavailable),
        ("Bruno", Reading::Unavailable),
    ];
    assert_eq!(sum_readings(all_missing), Reading::Unavailable);

    let one_valid = [
        ("Anna", Reading::Unavailable),
        ("Bruno", Reading::Hours(0.0)),
    ];
    assert_eq!(sum_readings(one_valid), Reading::Hours(0.0));
}

#[test]
fn all_zero_but_available_totals_zero() {
    // Distinct from all-unavailable: the total must stay a valid number.
    let readings = [("Anna", Reading::Hours(0.0)), ("Bruno", Reading::Hours(0.0))];
    assert_eq!(sum_readings(readings), Reading::Hours(0.0));
}

#[test]
fn sums_only_valid_entries() {
    let readings = [
        ("Anna", Reading::Hours(1.25)),
        ("Bruno", Reading::Unavailable),
        ("Carla", Reading::Hours(2.5)),
    ];
    assert_eq!(sum_readings(readings), Reading::Hours(3.75));
}

#[test]
fn total_is_rounded_to_two_decimals() {
    let readings = [("Anna", Reading::Hours(0.1)), ("Bruno", Reading::Hours(0.2))];
    assert_eq!(sum_readings(readings), Reading::Hours(0.3));
}

#[test]
fn non_finite_readings_are_excluded() {
    let readings = [
        ("Anna", Reading::Hours(f64::NAN)),
        ("Bruno", Reading::Hours(1.0)),
    ];
    assert_eq!(sum_readings(readings), Reading::Hours(1.0));

    let only_nan = [("Anna", Reading::Hours(f64::NAN))];
    assert_eq!(sum_readings(only_nan), Reading::Unavailable);
}

#[test]
fn raw_states_parse_sentinels_and_skip_garbage() {
    let states = [
        ("Anna", "1.5"),
        ("Bruno", "unavailable"),
        ("Carla", "not a number"),
        ("Dario", "0"),
    ];
    assert_eq!(sum_raw(states), Reading::Hours(1.5));
}

#[test]
fn raw_states_with_no_numeric_entry_total_unavailable() {
    let states = [("Anna", "unknown"), ("Bruno", "oops"), ("Carla", "none")];
    assert_eq!(sum_raw(states), Reading::Unavailable);
}

#[test]
fn empty_input_totals_unavailable() {
    assert_eq!(
        sum_readings(std::iter::empty::<(&str, Reading)>()),
        Reading::Unavailable
    );
}
