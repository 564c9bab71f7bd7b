//! End-to-end scenarios through the public surface.

use q21_types::{Decision, Q21};

#[test]
fn unknown_two_pushes_crystallizes_b() {
    let state = Q21::unknown().observe(2).observe(2);
    assert_eq!(state, 4_i32);
    assert_eq!(state.state_name(), "OPTB_HIGH");
    assert_eq!(state.crystallize(), Some(Decision::B));
}

#[test]
fn opta_max_weak_push_stops_on_barrier() {
    let state = Q21::new(-5).unwrap().observe(-1);
    assert_eq!(state, -6_i32);
    assert_eq!(state.state_name(), "NONE_MIN");
}

#[test]
fn opta_max_strong_push_crosses_barrier() {
    let state = Q21::new(-5).unwrap().observe(-3);
    assert_eq!(state, -8_i32);
    assert_eq!(state.crystallize(), Some(Decision::None));
}

#[test]
fn both_med_decides_both_low_does_not() {
    assert_eq!(Q21::new(8).unwrap().crystallize(), Some(Decision::Both));
    assert_eq!(Q21::new(7).unwrap().crystallize(), None);
}

#[test]
fn confidence_level_spot_checks() {
    assert_eq!(Q21::new(0).unwrap().confidence_level(), 0);
    assert_eq!(Q21::new(-8).unwrap().confidence_level(), 3);
}

#[test]
fn contradictory_evidence_returns_through_unknown() {
    let state = Q21::unknown().observe(3).observe(-3);
    assert!(state.is_unknown());
    assert_eq!(state.crystallize(), None);

    let state = state.observe(7);
    assert_eq!(state, 7_i32);
    assert_eq!(state.state_name(), "BOTH_LOW");
    assert_eq!(state.crystallize(), None);

    let state = state.observe(1);
    assert_eq!(state.crystallize(), Some(Decision::Both));
}

#[test]
fn sensor_readings_fold_in_order() {
    let readings = [1, 1, 1, -1, 2];
    let state = Q21::unknown().observe_all(readings);
    assert_eq!(state, 4_i32);
    assert_eq!(state.to_string(), "Q21( +4) = OPTB_HIGH (confidence: 4/5)");
}

#[test]
fn upstream_failure_poisons_until_reset() {
    let mut state = Q21::optb(3).unwrap();
    state.set(i32::from(Q21::ERROR_SENTINEL)).unwrap();
    state.observe_in_place(5);
    assert!(state.is_error());
    assert_eq!(state.crystallize(), None);
    assert_eq!(state.confidence_level(), -1);

    state.reset();
    state.observe_in_place(-4);
    assert_eq!(state.crystallize(), Some(Decision::A));
}
