//! Additions to and removals from a dice pool.

use serde::{Deserialize, Serialize};

use super::pool::DicePool;

/// A change applied to a dice pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DicePoolModification {
    /// Add every die of the payload pool.
    AddDice(DicePool),
    /// Remove this many dice, smallest type first.
    RemoveDice(u32),
}

impl DicePoolModification {
    /// The modification granted by a level: `n >= 0` adds `n`d6, a negative
    /// level removes `|n|` dice.
    pub fn from_level(level: i32) -> Self {
        if level < 0 {
            Self::RemoveDice(level.unsigned_abs())
        } else {
            Self::AddDice(DicePool::d6(level.unsigned_abs()))
        }
    }

    /// Net number of dice this modification adds (negative for removals).
    pub fn net_dice(&self) -> i64 {
        match self {
            Self::AddDice(pool) => i64::from(pool.sum()),
            Self::RemoveDice(n) => -i64::from(*n),
        }
    }

    /// Decode a tagged string such as `"AddDice 2d6"` or `"RemoveDice 1"`.
    ///
    /// Anything that does not carry a recognised tag decodes to
    /// `RemoveDice(0)`, which leaves a pool unchanged.
    pub fn parse(s: &str) -> Self {
        if let Some(rest) = s.trim().strip_prefix("AddDice ") {
            Self::AddDice(DicePool::parse(rest))
        } else if let Some(rest) = s.trim().strip_prefix("RemoveDice ") {
            Self::RemoveDice(rest.trim().parse().unwrap_or(0))
        } else {
            Self::RemoveDice(0)
        }
    }

    /// Like [`parse`](Self::parse), but `"None"` means no modification at all.
    pub fn parse_optional(s: &str) -> Option<Self> {
        if s.trim() == "None" {
            None
        } else {
            Some(Self::parse(s))
        }
    }
}

impl std::fmt::Display for DicePoolModification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AddDice(pool) => write!(f, "AddDice {pool}"),
            Self::RemoveDice(n) => write!(f, "RemoveDice {n}"),
        }
    }
}
