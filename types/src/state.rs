//! The Q21 value: representation, validation, classification and builders.
//!
//! A `Q21` is a closed sum type. The flat raw integer (-10..=10, plus the
//! error sentinel) is only a wire/display encoding; every legal raw value
//! corresponds to exactly one variant, and every variant encodes to exactly
//! one raw value.
//!
//! # Invariants
//!
//! - `raw()` is always in [-10, 10] or equal to [`Q21::ERROR_SENTINEL`]
//! - Region and confidence queries are pure functions of the variant
//! - Within each region, the five confidence sublevels map bijectively
//!   onto five raw values

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::confidence::{Confidence, Region};

/// Width of each confidence band. NONE/BOTH sit one band further out than
/// OPTA/OPTB.
const BAND: i8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Q21Error {
    #[error(
        "Q21 value must be {min} to {max} or {sentinel} (ERR), got {value}",
        sentinel = Q21::ERROR_SENTINEL
    )]
    OutOfRange { value: i32, min: i8, max: i8 },
    #[error("confidence must be 1-5, got {level}")]
    InvalidConfidence { level: i32 },
}

/// Bounded symmetric confidence over a binary question.
///
/// Answers "is it A, B, neither, or both" with a graded strength, plus a
/// genuine-uncertainty state and a sticky error state.
///
/// | Variant        | Raw range    |
/// |----------------|--------------|
/// | `None(c)`      | -10 ..= -6   |
/// | `OptA(c)`      | -5 ..= -1    |
/// | `Unknown`      | 0            |
/// | `OptB(c)`      | 1 ..= 5      |
/// | `Both(c)`      | 6 ..= 10     |
/// | `Error`        | -128         |
///
/// # Serde
///
/// Serializes as the bare raw integer. Deserialization goes through
/// [`Q21::new`], so out-of-range integers are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i8")]
pub enum Q21 {
    /// Certain it is neither option.
    None(Confidence),
    /// Confident it is option A.
    OptA(Confidence),
    #[default]
    Unknown,
    /// Confident it is option B.
    OptB(Confidence),
    /// Certain it is both options.
    Both(Confidence),
    /// An upstream observation pipeline failed. Sticky until reset.
    Error,
}

impl Q21 {
    pub const MIN_VALUE: i8 = -10;
    pub const MAX_VALUE: i8 = 10;
    pub const ERROR_SENTINEL: i8 = i8::MIN;
    /// Reported by [`Q21::confidence_level`] for the error state.
    pub const INVALID_LEVEL: i8 = -1;

    /// Validate a raw value and build the matching state.
    pub fn new(raw: i32) -> Result<Self, Q21Error> {
        let state = match raw {
            raw if raw == i32::from(Self::ERROR_SENTINEL) => Some(Q21::Error),
            -10..=-6 => Confidence::from_offset(-raw - 5).map(Q21::None),
            -5..=-1 => Confidence::from_offset(-raw).map(Q21::OptA),
            0 => Some(Q21::Unknown),
            1..=5 => Confidence::from_offset(raw).map(Q21::OptB),
            6..=10 => Confidence::from_offset(raw - 5).map(Q21::Both),
            _ => None,
        };
        state.ok_or(Q21Error::OutOfRange {
            value: raw,
            min: Self::MIN_VALUE,
            max: Self::MAX_VALUE,
        })
    }

    /// Replace the current value with a validated raw value.
    ///
    /// On failure the current value is left untouched.
    pub fn set(&mut self, raw: i32) -> Result<(), Q21Error> {
        *self = Self::new(raw)?;
        Ok(())
    }

    #[must_use]
    pub const fn raw(self) -> i8 {
        match self {
            Q21::None(c) => -(BAND + c.level() as i8),
            Q21::OptA(c) => -(c.level() as i8),
            Q21::Unknown => 0,
            Q21::OptB(c) => c.level() as i8,
            Q21::Both(c) => BAND + c.level() as i8,
            Q21::Error => Self::ERROR_SENTINEL,
        }
    }

    // ------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Q21::Error)
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Q21::Unknown)
    }

    #[must_use]
    pub const fn is_none_region(self) -> bool {
        matches!(self, Q21::None(_))
    }

    #[must_use]
    pub const fn is_opta_region(self) -> bool {
        matches!(self, Q21::OptA(_))
    }

    #[must_use]
    pub const fn is_optb_region(self) -> bool {
        matches!(self, Q21::OptB(_))
    }

    #[must_use]
    pub const fn is_both_region(self) -> bool {
        matches!(self, Q21::Both(_))
    }

    /// Region of this state; `None` only for the error state.
    #[must_use]
    pub const fn region(self) -> Option<Region> {
        match self {
            Q21::None(_) => Some(Region::None),
            Q21::OptA(_) => Some(Region::OptA),
            Q21::Unknown => Some(Region::Unknown),
            Q21::OptB(_) => Some(Region::OptB),
            Q21::Both(_) => Some(Region::Both),
            Q21::Error => None,
        }
    }

    #[must_use]
    pub const fn confidence(self) -> Option<Confidence> {
        match self {
            Q21::None(c) | Q21::OptA(c) | Q21::OptB(c) | Q21::Both(c) => Some(c),
            Q21::Unknown | Q21::Error => None,
        }
    }

    /// Confidence on the shared 0-5 scale.
    ///
    /// UNKNOWN reports 0 and the error state reports [`Q21::INVALID_LEVEL`].
    /// NONE and BOTH report `|raw| - 5`, OPTA and OPTB report `|raw|`, so
    /// every region uses the same 1-5 steps.
    #[must_use]
    pub const fn confidence_level(self) -> i8 {
        match self {
            Q21::Error => Self::INVALID_LEVEL,
            Q21::Unknown => 0,
            Q21::None(c) | Q21::OptA(c) | Q21::OptB(c) | Q21::Both(c) => c.level() as i8,
        }
    }

    /// Canonical label such as `NONE_MED` or `OPTB_MAX`.
    #[must_use]
    pub const fn state_name(self) -> &'static str {
        match self {
            Q21::Error => "ERR",
            Q21::Unknown => "UNKNOWN",
            Q21::None(c) => match c {
                Confidence::Min => "NONE_MIN",
                Confidence::Low => "NONE_LOW",
                Confidence::Med => "NONE_MED",
                Confidence::High => "NONE_HIGH",
                Confidence::Max => "NONE_MAX",
            },
            Q21::OptA(c) => match c {
                Confidence::Min => "OPTA_MIN",
                Confidence::Low => "OPTA_LOW",
                Confidence::Med => "OPTA_MED",
                Confidence::High => "OPTA_HIGH",
                Confidence::Max => "OPTA_MAX",
            },
            Q21::OptB(c) => match c {
                Confidence::Min => "OPTB_MIN",
                Confidence::Low => "OPTB_LOW",
                Confidence::Med => "OPTB_MED",
                Confidence::High => "OPTB_HIGH",
                Confidence::Max => "OPTB_MAX",
            },
            Q21::Both(c) => match c {
                Confidence::Min => "BOTH_MIN",
                Confidence::Low => "BOTH_LOW",
                Confidence::Med => "BOTH_MED",
                Confidence::High => "BOTH_HIGH",
                Confidence::Max => "BOTH_MAX",
            },
        }
    }

    // ------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn unknown() -> Self {
        Q21::Unknown
    }

    #[must_use]
    pub const fn error() -> Self {
        Q21::Error
    }

    /// Certain it is neither option, at `level` 1-5.
    pub fn none(level: i32) -> Result<Self, Q21Error> {
        Confidence::try_from(level).map(Q21::None)
    }

    /// Confident it is option A, at `level` 1-5.
    pub fn opta(level: i32) -> Result<Self, Q21Error> {
        Confidence::try_from(level).map(Q21::OptA)
    }

    /// Confident it is option B, at `level` 1-5.
    pub fn optb(level: i32) -> Result<Self, Q21Error> {
        Confidence::try_from(level).map(Q21::OptB)
    }

    /// Certain it is both options, at `level` 1-5.
    pub fn both(level: i32) -> Result<Self, Q21Error> {
        Confidence::try_from(level).map(Q21::Both)
    }

    /// Reinitialize to UNKNOWN, clearing any error.
    pub fn reset(&mut self) {
        *self = Q21::Unknown;
    }

    /// Every legal state ordered by raw value, excluding the error state.
    #[must_use]
    pub fn all() -> impl Iterator<Item = Q21> {
        (Self::MIN_VALUE..=Self::MAX_VALUE).filter_map(|raw| Self::new(i32::from(raw)).ok())
    }
}

impl TryFrom<i32> for Q21 {
    type Error = Q21Error;

    fn try_from(raw: i32) -> Result<Self, Q21Error> {
        Self::new(raw)
    }
}

impl TryFrom<i8> for Q21 {
    type Error = Q21Error;

    fn try_from(raw: i8) -> Result<Self, Q21Error> {
        Self::new(i32::from(raw))
    }
}

impl From<Q21> for i8 {
    fn from(value: Q21) -> Self {
        value.raw()
    }
}

impl PartialEq<i8> for Q21 {
    fn eq(&self, other: &i8) -> bool {
        self.raw() == *other
    }
}

impl PartialEq<i32> for Q21 {
    fn eq(&self, other: &i32) -> bool {
        i32::from(self.raw()) == *other
    }
}

impl fmt::Display for Q21 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_error() {
            return f.write_str("Q21(ERR)");
        }
        write!(
            f,
            "Q21({:+3}) = {} (confidence: {}/5)",
            self.raw(),
            self.state_name(),
            self.confidence_level()
        )
    }
}
