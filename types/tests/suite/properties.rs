//! Exhaustive checks over the full 21-state space.

use std::collections::HashSet;

use q21_types::{
    BarrierContact, BarrierPolicy, Confidence, Decision, NEGATIVE_BARRIER, POSITIVE_BARRIER, Q21,
    Q21Error, Region,
};

type Builder = fn(i32) -> Result<Q21, Q21Error>;

const BUILDERS: [(Region, Builder); 4] = [
    (Region::None, Q21::none),
    (Region::OptA, Q21::opta),
    (Region::OptB, Q21::optb),
    (Region::Both, Q21::both),
];

#[test]
fn every_legal_value_has_region_level_and_unique_name() {
    let mut names = HashSet::new();
    for raw in -10..=10 {
        let state = Q21::new(raw).unwrap();
        assert!(state.region().is_some());
        assert!((0..=5).contains(&state.confidence_level()));
        assert!(names.insert(state.state_name()), "duplicate name at {raw}");
    }
    assert_eq!(names.len(), 21);
}

#[test]
fn builders_report_their_level_back() {
    for (region, build) in BUILDERS {
        let mut raws = HashSet::new();
        for level in 1..=5 {
            let state = build(level).unwrap();
            assert_eq!(state.region(), Some(region));
            assert_eq!(i32::from(state.confidence_level()), level);
            raws.insert(state.raw());
        }
        assert_eq!(raws.len(), 5, "{region} levels must map to distinct raws");
    }
}

#[test]
fn raw_round_trips_through_variant() {
    for state in Q21::all() {
        assert_eq!(Q21::new(i32::from(state.raw())).unwrap(), state);
    }
    assert_eq!(Q21::all().count(), 21);
}

#[test]
fn crystallization_is_monotonic_within_region() {
    for (_, build) in BUILDERS {
        let mut decided = false;
        for confidence in Confidence::ALL {
            let state = build(i32::from(confidence.level())).unwrap();
            let decision = state.crystallize();
            if decided {
                assert!(decision.is_some(), "{state} fell back to undecided");
            }
            decided |= decision.is_some();
        }
        assert!(decided);
    }
}

#[test]
fn crystallized_label_matches_region() {
    for state in Q21::all() {
        let Some(decision) = state.crystallize() else {
            continue;
        };
        let expected = match state.region() {
            Some(Region::None) => Decision::None,
            Some(Region::OptA) => Decision::A,
            Some(Region::OptB) => Decision::B,
            Some(Region::Both) => Decision::Both,
            other => panic!("{state} decided from {other:?}"),
        };
        assert_eq!(decision, expected);
    }
}

#[test]
fn reset_always_lands_on_undecided_zero() {
    for mut state in Q21::all().chain([Q21::error()]) {
        state.reset();
        assert_eq!(state.crystallize(), None);
        assert_eq!(state.confidence_level(), 0);
    }
}

#[test]
fn error_survives_any_evidence_sequence() {
    let mut state = Q21::error();
    for evidence in [-100, -3, -1, 0, 1, 2, 9, 100] {
        state = state.observe(evidence);
        assert!(state.is_error());
        assert_eq!(state.crystallize(), None);
    }
}

#[test]
fn weak_evidence_never_jumps_a_barrier() {
    for contact in [BarrierContact::Strict, BarrierContact::Holding] {
        let policy = BarrierPolicy::new(2, contact).unwrap();
        for state in Q21::all() {
            for evidence in [-1, 1] {
                let from = state.raw();
                let to = state.observe_with(evidence, &policy).raw();
                for barrier in [NEGATIVE_BARRIER, POSITIVE_BARRIER] {
                    let jumped =
                        (from < barrier && to > barrier) || (from > barrier && to < barrier);
                    assert!(!jumped, "{contact:?}: {from} -> {to} jumped {barrier}");
                }
            }
        }
    }
}

#[test]
fn barrier_value_regression_pins_contact_modes() {
    let holding = BarrierPolicy::new(2, BarrierContact::Holding).unwrap();
    let strict = BarrierPolicy::new(2, BarrierContact::Strict).unwrap();
    let on_negative = Q21::none(1).unwrap();
    let on_positive = Q21::both(1).unwrap();

    assert_eq!(on_negative.observe_with(-1, &holding), -6_i32);
    assert_eq!(on_negative.observe_with(1, &holding), -6_i32);
    assert_eq!(on_positive.observe_with(1, &holding), 6_i32);
    assert_eq!(on_positive.observe_with(-1, &holding), 6_i32);

    assert_eq!(on_negative.observe_with(-1, &strict), -7_i32);
    assert_eq!(on_negative.observe_with(1, &strict), -5_i32);
    assert_eq!(on_positive.observe_with(1, &strict), 7_i32);
    assert_eq!(on_positive.observe_with(-1, &strict), 5_i32);
}
