//! Combat rolls: one fully resolved attack per weapon or conduit variant.
//!
//! [`weapon`] enumerates equipped weapons, their handedness variants, and the
//! equipped resources they can fire. [`magic`] does the same for magic skills,
//! with or without a conduit in hand.

pub mod handedness;
pub mod magic;
pub mod weapon;

pub use handedness::{Handedness, Wieldable, WieldingVariant, wielding_variants};
pub use magic::{MagicRules, magic_combat_rolls};
pub use weapon::weapon_combat_rolls;

use serde::{Deserialize, Serialize};

use crate::dice::DicePool;
use crate::stats::{CalculatedRange, Shape};

/// A resolved attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatRoll {
    /// Label: item or skill, resource, and handedness.
    pub desc: String,
    /// Dice thrown.
    pub dice_pool: DicePool,
    /// Range reached.
    pub calculated_range: CalculatedRange,
    /// Penetration.
    pub penetration: u32,
    /// Damage types dealt.
    pub damage_types: Vec<String>,
    /// Area covered, if the attack has one.
    pub area_of_effect: Option<Shape>,
    /// Targets engageable at once.
    pub engageable_opponents: u32,
}

impl CombatRoll {
    /// The positional row written back to the sheet:
    /// desc, dice, penetration, range, damage types, EO, area.
    pub fn to_row(&self) -> [String; 7] {
        [
            self.desc.clone(),
            self.dice_pool.to_string(),
            self.penetration.to_string(),
            format!("{} ft ({})", self.calculated_range, self.calculated_range.desc),
            self.damage_types.join(", "),
            self.engageable_opponents.to_string(),
            self.area_of_effect
                .as_ref()
                .map(Shape::to_string)
                .unwrap_or_default(),
        ]
    }
}
