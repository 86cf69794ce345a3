//! Attribute, skill, and vocation levels.

use serde::{Deserialize, Serialize};

use crate::dice::DicePoolModification;

/// A progression level between -1 and 4.
///
/// `NegOne` is the unset level; `Zero` is a real, attainable level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Level {
    /// Level -1, the default.
    #[default]
    NegOne,
    /// Level 0.
    Zero,
    /// Level 1.
    One,
    /// Level 2.
    Two,
    /// Level 3.
    Three,
    /// Level 4.
    Four,
}

impl Level {
    /// Convert an integer, or `None` if it is outside -1..=4.
    pub fn new(n: i32) -> Option<Self> {
        match n {
            -1 => Some(Self::NegOne),
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Convert an integer, falling back to `NegOne` when out of range.
    pub fn from_i32(n: i32) -> Self {
        Self::new(n).unwrap_or_default()
    }

    /// The numeric level.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::NegOne => -1,
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// The dice this level adds to (or removes from) a roll.
    pub fn dice_modification(self) -> DicePoolModification {
        DicePoolModification::from_level(self.as_i32())
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}
