//! Effective and maximum range of a roll, in feet.

use serde::{Deserialize, Serialize};

use super::divide_ceil;
use crate::error::MechResult;

/// A resolved range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedRange {
    /// Range name (e.g., "Short", "Longbow").
    pub desc: String,
    /// Effective range in feet.
    pub effective: u32,
    /// Maximum range in feet.
    pub max: u32,
}

impl std::fmt::Display for CalculatedRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.effective, self.max)
    }
}

/// A range formula: `ft_per_unit` feet for every `dice_per_unit` dice,
/// counting a partial unit as a whole one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeCalculation {
    /// Range name.
    pub desc: String,
    /// Dice needed per range unit.
    pub dice_per_unit: u32,
    /// Feet gained per range unit.
    pub ft_per_unit: u32,
    /// Rounding flag from the rule table. Resolution always rounds up.
    pub round_up: bool,
    /// Maximum range in feet. Carried through, not clamped against.
    pub max: u32,
}

/// A range rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Range {
    /// A range that does not depend on the dice.
    Fixed(CalculatedRange),
    /// A range that grows with the dice total.
    Formula(RangeCalculation),
}

impl Range {
    /// The rule's name.
    pub fn desc(&self) -> &str {
        match self {
            Self::Fixed(range) => &range.desc,
            Self::Formula(calc) => &calc.desc,
        }
    }

    /// Resolve against a dice total.
    pub fn resolve(&self, dice_total: u32) -> MechResult<CalculatedRange> {
        match self {
            Self::Fixed(range) => Ok(range.clone()),
            Self::Formula(calc) => {
                let units = divide_ceil(dice_total, calc.dice_per_unit, "range")?;
                Ok(CalculatedRange {
                    desc: calc.desc.clone(),
                    effective: units.saturating_mul(calc.ft_per_unit),
                    max: calc.max,
                })
            }
        }
    }

    /// Resolve the primary range and an optional override, keeping whichever
    /// has the longer effective range. Ties go to the primary.
    pub fn greatest(dice_total: u32, primary: &Range, secondary: Option<&Range>) -> MechResult<CalculatedRange> {
        let primary = primary.resolve(dice_total)?;
        let Some(secondary) = secondary else {
            return Ok(primary);
        };
        let secondary = secondary.resolve(dice_total)?;
        if primary.effective >= secondary.effective {
            Ok(primary)
        } else {
            Ok(secondary)
        }
    }
}
