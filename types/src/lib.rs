//! Q21: a bounded symmetric confidence type.
//!
//! A `Q21` answers a binary question ("is it A, B, neither, or both") with a
//! graded strength. It has 21 legal states across five regions plus a
//! sticky error state. This crate has no IO and no async.
//!
//! ```text
//! Q21::new / builders -> observe(evidence)* -> crystallize() -> Option<Decision>
//! ```
//!
//! # Concurrency
//!
//! `Q21` is a `Copy` value with no interior mutability. Independent copies
//! need no coordination. A single logical state shared between observers
//! must be serialized by the caller (a `Mutex<Q21>` or a single writer),
//! since `observe` is a read-modify-write.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod confidence;
mod crystallize;
mod evidence;
mod state;

pub use confidence::{Confidence, Region};
pub use crystallize::{CRYSTALLIZE_LEVEL, Decision};
pub use evidence::{
    BARRIER_CROSSING_STRENGTH, BarrierContact, BarrierPolicy, BarrierPolicyError,
    DEFAULT_BARRIER_CONTACT, NEGATIVE_BARRIER, POSITIVE_BARRIER,
};
pub use state::{Q21, Q21Error};
