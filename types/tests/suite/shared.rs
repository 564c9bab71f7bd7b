//! Sharing one logical state between threads.

use std::sync::{Arc, Mutex};
use std::thread;

use q21_types::{Decision, Q21};

#[test]
fn mutex_serializes_concurrent_observers() {
    let shared = Arc::new(Mutex::new(Q21::unknown()));
    let handles: Vec<_> = [1, 1, 1, -1]
        .into_iter()
        .map(|evidence| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut state = shared.lock().unwrap();
                state.observe_in_place(evidence);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // The walk never approaches a barrier, so order does not matter.
    let state = *shared.lock().unwrap();
    assert_eq!(state, 2_i32);
    assert_eq!(state.crystallize(), None);
}

#[test]
fn independent_copies_need_no_coordination() {
    let base = Q21::optb(1).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(move || base.observe_all([1, 1])))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().crystallize(), Some(Decision::B));
    }
    assert_eq!(base, 1_i32);
}
