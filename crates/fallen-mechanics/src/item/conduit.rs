//! Conduits: items that channel a magic skill.

use serde::{Deserialize, Serialize};

use crate::dice::DicePoolModification;
use crate::stats::{AreaOfEffect, EngageableOpponents, Penetration};

/// A conduit class. It shapes a magic roll much like a weapon class shapes a
/// physical one, except that its range shifts the caster's range tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConduitClass {
    /// Class name. A conduit channels every magic skill named within it.
    pub desc: String,
    /// Dice added when held in one hand, if allowed.
    pub one_handed_dice: Option<DicePoolModification>,
    /// Dice added when held in both hands.
    pub two_handed_dice: DicePoolModification,
    /// Penetration composed with the combat type's.
    pub penetration: Penetration,
    /// Tiers added to the caster's skill level when picking a magic range.
    pub range_adjustment: i32,
    /// Damage types added to the skill's.
    pub damage_types: Vec<String>,
    /// Replaces the combat type's engageable opponents when set.
    pub engageable_opponents: Option<EngageableOpponents>,
    /// Extra dice when dual-wielded, if allowed.
    pub dual_wield_bonus: Option<DicePoolModification>,
    /// Replaces the combat type's area of effect when set.
    pub area_of_effect: Option<AreaOfEffect>,
    /// Resource class consumed, if any.
    pub resource_class: Option<String>,
    /// Attributes whose levels add to rolls through this conduit.
    pub governing_attributes: Vec<String>,
}

impl ConduitClass {
    /// Whether this conduit channels the named magic skill.
    pub fn channels(&self, skill: &str) -> bool {
        self.desc.contains(skill)
    }
}
