//! Weapon classes and the resources they consume.

use serde::{Deserialize, Serialize};

use crate::dice::DicePoolModification;
use crate::stats::{AreaOfEffect, EngageableOpponents, Penetration, Range};

/// A family of weapons that share handling and combat stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponClass {
    /// Class name, which doubles as the vocational skill that wields it.
    pub desc: String,
    /// Dice added when wielded in one hand, if the class allows it.
    pub one_handed_dice: Option<DicePoolModification>,
    /// Dice added when wielded in both hands.
    pub two_handed_dice: DicePoolModification,
    /// Penetration rule.
    pub penetration: Penetration,
    /// Range rule.
    pub range: Range,
    /// Damage types dealt.
    pub damage_types: Vec<String>,
    /// Engageable-opponents rule.
    pub engageable_opponents: EngageableOpponents,
    /// Extra dice when dual-wielded, if the class allows it.
    pub dual_wield_bonus: Option<DicePoolModification>,
    /// Area-of-effect template.
    pub area_of_effect: Option<AreaOfEffect>,
    /// Resource class consumed per attack (e.g., "Arrow").
    pub resource_class: Option<String>,
    /// Attributes whose levels add to rolls with this class.
    pub governing_attributes: Vec<String>,
}

/// Ammunition or another consumable a weapon draws on. Its stats layer on
/// top of the weapon's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponResourceClass {
    /// Resource name, shown in the roll label.
    pub name: String,
    /// The resource class this satisfies.
    pub resource_class: String,
    /// Dice change the resource contributes.
    pub resource_dice: DicePoolModification,
    /// Flat penetration added to the weapon's.
    pub penetration: u32,
    /// Range competing with the weapon's.
    pub range: Option<Range>,
    /// Damage types added to the weapon's.
    pub damage_types: Vec<String>,
    /// Area-of-effect template replacing the weapon's.
    pub area_of_effect: Option<AreaOfEffect>,
}

impl WeaponResourceClass {
    /// Whether this resource feeds weapons of the given resource class.
    pub fn feeds(&self, resource_class: &str) -> bool {
        self.resource_class == resource_class
    }
}
