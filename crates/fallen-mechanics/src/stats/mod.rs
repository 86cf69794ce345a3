//! Combat stats derived from a roll's dice total.
//!
//! Each stat is either a fixed value or a formula over the number of dice
//! in the final pool:
//! - **Penetration**: floor of dice / divisor, stacking with resource bonuses
//! - **Range**: dice per range unit, rounded up, times feet per unit
//! - **Engageable opponents**: floor of dice / divisor, optionally capped
//! - **Area of effect**: a cone or sphere sized by the dice total

pub mod engageable;
pub mod penetration;
pub mod range;
pub mod shape;

pub use engageable::{EngageableOpponents, EngageableOpponentsCalculation};
pub use penetration::{Penetration, PenetrationCalculation};
pub use range::{CalculatedRange, Range, RangeCalculation};
pub use shape::{AreaOfEffect, ConeShape, Shape, SphereShape};

use crate::error::{MechError, MechResult};

/// Integer division rounded down, failing on a zero divisor.
pub(crate) fn divide_floor(dice_total: u32, divisor: u32, formula: &'static str) -> MechResult<u32> {
    dice_total
        .checked_div(divisor)
        .ok_or(MechError::DivisionByZero(formula))
}

/// Integer division rounded up, failing on a zero divisor.
pub(crate) fn divide_ceil(dice_total: u32, divisor: u32, formula: &'static str) -> MechResult<u32> {
    if divisor == 0 {
        return Err(MechError::DivisionByZero(formula));
    }
    Ok(dice_total.div_ceil(divisor))
}
