//! Penetration: how much of a target's defense a roll ignores.

use serde::{Deserialize, Serialize};

use super::divide_floor;
use crate::error::MechResult;

/// A named penetration formula: one point per `divisor` dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenetrationCalculation {
    /// Formula name (e.g., "Longbow").
    pub desc: String,
    /// Dice needed per point of penetration.
    pub divisor: u32,
}

/// A penetration rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Penetration {
    /// Scales with the dice total.
    Formula(PenetrationCalculation),
    /// A flat value.
    Fixed(u32),
}

impl Penetration {
    /// Resolve against a dice total.
    pub fn resolve(&self, dice_total: u32) -> MechResult<u32> {
        match self {
            Self::Fixed(value) => Ok(*value),
            Self::Formula(calc) => divide_floor(dice_total, calc.divisor, "penetration"),
        }
    }

    /// Combine a weapon or combat-type penetration with an equipped
    /// resource's or conduit's.
    ///
    /// A fixed secondary stacks on top of the resolved primary, saturating at
    /// `u32::MAX`. A formula secondary replaces the primary outright.
    pub fn compose(dice_total: u32, primary: &Penetration, secondary: &Penetration) -> MechResult<u32> {
        match secondary {
            Self::Fixed(bonus) => Ok(bonus.saturating_add(primary.resolve(dice_total)?)),
            Self::Formula(_) => secondary.resolve(dice_total),
        }
    }
}

impl Default for Penetration {
    fn default() -> Self {
        Self::Fixed(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MechError;
    use proptest::prelude::*;

    fn formula(divisor: u32) -> Penetration {
        Penetration::Formula(PenetrationCalculation {
            desc: "x".to_string(),
            divisor,
        })
    }

    #[test]
    fn fixed_ignores_dice() {
        assert_eq!(Penetration::Fixed(4).resolve(100).unwrap(), 4);
    }

    #[test]
    fn formula_rounds_down() {
        assert_eq!(formula(3).resolve(10).unwrap(), 3);
        assert_eq!(formula(3).resolve(2).unwrap(), 0);
    }

    #[test]
    fn fixed_secondary_is_additive() {
        let pen = Penetration::compose(10, &formula(3), &Penetration::Fixed(2)).unwrap();
        assert_eq!(pen, 5);
    }

    #[test]
    fn formula_secondary_overrides() {
        let pen = Penetration::compose(10, &formula(3), &formula(5)).unwrap();
        assert_eq!(pen, 2);
    }

    proptest! {
        #[test]
        fn fixed_bonus_saturates(primary in any::<u32>(), bonus in any::<u32>(), dice in 0u32..200) {
            let pen = Penetration::compose(
                dice,
                &Penetration::Fixed(primary),
                &Penetration::Fixed(bonus),
            )
            .unwrap();
            prop_assert_eq!(pen, primary.saturating_add(bonus));
        }
    }

    #[test]
    fn max_bonus_does_not_overflow() {
        let pen = Penetration::compose(u32::MAX, &formula(1), &Penetration::Fixed(u32::MAX)).unwrap();
        assert_eq!(pen, u32::MAX);
    }

    #[test]
    fn zero_divisor_fails() {
        assert!(matches!(
            formula(0).resolve(10),
            Err(MechError::DivisionByZero(_))
        ));
    }
}
