//! Collapsing a graded state into a definitive answer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Q21;
use crate::confidence::Confidence;

/// A region must reach this sublevel (60%) before it crystallizes.
pub const CRYSTALLIZE_LEVEL: Confidence = Confidence::Med;

/// Definitive answer produced by [`Q21::crystallize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    /// Neither option.
    None,
    A,
    B,
    /// Both options at once.
    Both,
}

impl Decision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Decision::None => "NONE",
            Decision::A => "A",
            Decision::B => "B",
            Decision::Both => "BOTH",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Q21 {
    /// Collapse to a decision once the state's own region reaches
    /// [`CRYSTALLIZE_LEVEL`].
    ///
    /// In raw terms: -10..=-8 is NONE, -5..=-3 is A, 3..=5 is B and 8..=10
    /// is BOTH. Everything else, including UNKNOWN and the error state,
    /// is undecided.
    #[must_use]
    pub fn crystallize(self) -> Option<Decision> {
        let (decision, confidence) = match self {
            Q21::None(c) => (Decision::None, c),
            Q21::OptA(c) => (Decision::A, c),
            Q21::OptB(c) => (Decision::B, c),
            Q21::Both(c) => (Decision::Both, c),
            Q21::Unknown | Q21::Error => return None,
        };
        (confidence >= CRYSTALLIZE_LEVEL).then_some(decision)
    }
}
