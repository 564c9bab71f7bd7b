//! Confidence sublevels and the five raw-value regions.
//!
//! Every non-UNKNOWN region carries the same five-step scale, so a
//! [`Confidence`] means the same thing whether it qualifies NONE, OPTA,
//! OPTB or BOTH.

use std::fmt;
use std::ops::RangeInclusive;

use crate::Q21Error;

/// One of the five graded strengths inside a non-UNKNOWN region.
///
/// `Min` sits next to the region boundary nearest UNKNOWN; `Max` sits on the
/// outer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Confidence {
    Min = 1,
    Low = 2,
    Med = 3,
    High = 4,
    Max = 5,
}

impl Confidence {
    /// All sublevels, weakest first.
    pub const ALL: [Confidence; 5] = [
        Confidence::Min,
        Confidence::Low,
        Confidence::Med,
        Confidence::High,
        Confidence::Max,
    ];

    /// Integer level on the shared 1-5 scale.
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Nominal confidence percentage (20/40/60/80/100).
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.level() * 20
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Confidence::Min => "MIN",
            Confidence::Low => "LOW",
            Confidence::Med => "MED",
            Confidence::High => "HIGH",
            Confidence::Max => "MAX",
        }
    }

    /// Map a magnitude offset (1-5) to a sublevel.
    pub(crate) const fn from_offset(offset: i32) -> Option<Self> {
        match offset {
            1 => Some(Confidence::Min),
            2 => Some(Confidence::Low),
            3 => Some(Confidence::Med),
            4 => Some(Confidence::High),
            5 => Some(Confidence::Max),
            _ => None,
        }
    }
}

impl TryFrom<i32> for Confidence {
    type Error = Q21Error;

    fn try_from(level: i32) -> Result<Self, Self::Error> {
        Self::from_offset(level).ok_or(Q21Error::InvalidConfidence { level })
    }
}

impl TryFrom<u8> for Confidence {
    type Error = Q21Error;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::try_from(i32::from(level))
    }
}

impl From<Confidence> for u8 {
    fn from(value: Confidence) -> Self {
        value.level()
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contiguous slice of the raw value space with a single interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// Certain the answer is neither option.
    None,
    /// Confident the answer is option A.
    OptA,
    /// Genuine uncertainty. Holds exactly one raw value.
    Unknown,
    /// Confident the answer is option B.
    OptB,
    /// Certain the answer is both options at once.
    Both,
}

impl Region {
    /// All regions ordered by raw value.
    pub const ALL: [Region; 5] = [
        Region::None,
        Region::OptA,
        Region::Unknown,
        Region::OptB,
        Region::Both,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Region::None => "NONE",
            Region::OptA => "OPTA",
            Region::Unknown => "UNKNOWN",
            Region::OptB => "OPTB",
            Region::Both => "BOTH",
        }
    }

    /// Inclusive raw bounds of this region.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<i8> {
        match self {
            Region::None => -10..=-6,
            Region::OptA => -5..=-1,
            Region::Unknown => 0..=0,
            Region::OptB => 1..=5,
            Region::Both => 6..=10,
        }
    }

    /// Region containing `raw`, or `None` outside [-10, 10].
    #[must_use]
    pub fn of(raw: i32) -> Option<Self> {
        let raw = i8::try_from(raw).ok()?;
        Self::ALL
            .into_iter()
            .find(|region| region.range().contains(&raw))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
