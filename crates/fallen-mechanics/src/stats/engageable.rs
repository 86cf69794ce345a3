//! Engageable opponents: how many targets a roll can take on at once.

use serde::{Deserialize, Serialize};

use super::divide_floor;
use crate::error::MechResult;

/// One engageable opponent per `divisor` dice, up to an optional cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngageableOpponentsCalculation {
    /// Formula name.
    pub desc: String,
    /// Dice needed per opponent.
    pub divisor: u32,
    /// Upper bound on the result, if any.
    pub max: Option<u32>,
}

/// An engageable-opponents rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngageableOpponents {
    /// Scales with the dice total.
    Formula(EngageableOpponentsCalculation),
    /// A flat value.
    Fixed(u32),
}

impl EngageableOpponents {
    /// Resolve against a dice total.
    pub fn resolve(&self, dice_total: u32) -> MechResult<u32> {
        match self {
            Self::Fixed(value) => Ok(*value),
            Self::Formula(calc) => {
                let opponents = divide_floor(dice_total, calc.divisor, "engageable opponents")?;
                Ok(calc.max.map_or(opponents, |max| opponents.min(max)))
            }
        }
    }

    /// Decode the optional cap column: `"MaxEO 3"` is a cap of 3, anything
    /// else means uncapped.
    pub fn parse_max(s: &str) -> Option<u32> {
        s.trim()
            .strip_prefix("MaxEO ")
            .and_then(|n| n.trim().parse().ok())
    }
}

impl Default for EngageableOpponents {
    fn default() -> Self {
        Self::Fixed(0)
    }
}
