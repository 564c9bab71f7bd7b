//! Evidence accumulation with saturation barriers.
//!
//! `observe` walks the raw value by a signed evidence amount. Two barriers,
//! at -6 (OPTA/NONE) and +6 (OPTB/BOTH), separate the single-option regions
//! from the compound ones. A push weaker than
//! [`BARRIER_CROSSING_STRENGTH`] that would carry the value past a barrier
//! stops on the barrier instead. The boundary at 0 is not gated.
//!
//! ```text
//!   -10 ....... -6 | -5 ....... -1   0   1 ....... 5 | 6 ....... 10
//!      NONE      ^      OPTA      UNKNOWN     OPTB    ^     BOTH
//!             barrier                               barrier
//! ```

use thiserror::Error;

use crate::Q21;

/// Minimum evidence magnitude that may carry a value across a barrier.
pub const BARRIER_CROSSING_STRENGTH: u32 = 2;

/// Barrier between OPTA and NONE.
pub const NEGATIVE_BARRIER: i8 = -6;

/// Barrier between OPTB and BOTH.
pub const POSITIVE_BARRIER: i8 = 6;

/// How a value resting exactly on a barrier is treated.
pub const DEFAULT_BARRIER_CONTACT: BarrierContact = BarrierContact::Holding;

/// Whether the barrier value itself is protected from weak pushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarrierContact {
    /// Crossing is only detected when the start lies strictly on one side
    /// of the barrier. A value resting on the barrier moves freely.
    Strict,
    /// A value resting on the barrier is held there by weak pushes in
    /// either direction. Repeated weak evidence saturates on the barrier.
    Holding,
}

impl BarrierContact {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BarrierContact::Strict => "strict",
            BarrierContact::Holding => "holding",
        }
    }

    /// Parse a contact mode from its config spelling.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(BarrierContact::Strict),
            "holding" | "hold" => Some(BarrierContact::Holding),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BarrierPolicyError {
    #[error("barrier crossing strength must be at least 1")]
    ZeroStrength,
}

/// Barrier rules applied by [`Q21::observe_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BarrierPolicy {
    crossing_strength: u32,
    contact: BarrierContact,
}

impl BarrierPolicy {
    pub fn new(
        crossing_strength: u32,
        contact: BarrierContact,
    ) -> Result<Self, BarrierPolicyError> {
        if crossing_strength == 0 {
            return Err(BarrierPolicyError::ZeroStrength);
        }
        Ok(Self {
            crossing_strength,
            contact,
        })
    }

    #[must_use]
    pub const fn crossing_strength(&self) -> u32 {
        self.crossing_strength
    }

    #[must_use]
    pub const fn contact(&self) -> BarrierContact {
        self.contact
    }

    /// Clamp `candidate` onto `barrier` if a weak push would carry `from`
    /// across it.
    fn hold(&self, from: i32, candidate: i32, evidence: i32, barrier: i8) -> i32 {
        if evidence.unsigned_abs() >= self.crossing_strength {
            return candidate;
        }
        let barrier = i32::from(barrier);
        let (starts_above, starts_below) = match self.contact {
            BarrierContact::Strict => (from > barrier, from < barrier),
            BarrierContact::Holding => (from >= barrier, from <= barrier),
        };
        let crosses_down = starts_above && candidate < barrier;
        let crosses_up = starts_below && candidate > barrier;
        if crosses_down || crosses_up {
            tracing::trace!(
                from,
                candidate,
                evidence,
                barrier,
                "weak evidence held at saturation barrier"
            );
            barrier
        } else {
            candidate
        }
    }
}

impl Default for BarrierPolicy {
    fn default() -> Self {
        Self {
            crossing_strength: BARRIER_CROSSING_STRENGTH,
            contact: DEFAULT_BARRIER_CONTACT,
        }
    }
}

impl Q21 {
    /// Accumulate one observation under the default barrier policy.
    ///
    /// Positive evidence pushes toward OPTB/BOTH, negative toward OPTA/NONE.
    /// The error state is returned unchanged.
    #[must_use]
    pub fn observe(self, evidence: i32) -> Q21 {
        self.observe_with(evidence, &BarrierPolicy::default())
    }

    /// Accumulate one observation under an explicit barrier policy.
    #[must_use]
    pub fn observe_with(self, evidence: i32, policy: &BarrierPolicy) -> Q21 {
        if self.is_error() {
            return self;
        }

        let from = i32::from(self.raw());
        let candidate = from.saturating_add(evidence);
        let candidate = policy.hold(from, candidate, evidence, NEGATIVE_BARRIER);
        let candidate = policy.hold(from, candidate, evidence, POSITIVE_BARRIER);
        let next = candidate.clamp(i32::from(Q21::MIN_VALUE), i32::from(Q21::MAX_VALUE));

        // `next` is already inside the legal range.
        Q21::new(next).unwrap_or(self)
    }

    /// In-place form of [`Q21::observe`] for callers holding a mutable slot.
    pub fn observe_in_place(&mut self, evidence: i32) {
        *self = self.observe(evidence);
    }

    /// Fold a sequence of observations, in order, under the default policy.
    #[must_use]
    pub fn observe_all<I>(self, evidence: I) -> Q21
    where
        I: IntoIterator<Item = i32>,
    {
        evidence.into_iter().fold(self, Q21::observe)
    }
}
