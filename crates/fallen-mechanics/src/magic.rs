//! Magic skills, magic combat types, and range tiers for spellcasting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, DicePoolModification};
use crate::error::{MechError, MechResult};
use crate::level::Level;
use crate::stats::{AreaOfEffect, EngageableOpponents, Penetration, Range};

/// A vocational skill that casts magic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicSkill {
    /// Skill name, matched against vocational skills.
    pub desc: String,
    /// Damage types every cast of this skill deals.
    pub damage_types: Vec<String>,
    /// Range tier adjustment listed for the skill. Carried but not applied:
    /// only a conduit's adjustment shifts the magic range tier.
    pub range_adjustment: i32,
    /// Whether the skill may use melee combat types.
    pub melee_capable: bool,
    /// Resource class spent to cast (e.g., "Mana").
    pub magic_resource_class: String,
}

/// A way of casting: a bolt, a trick, a melee strike, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicCombat {
    /// Combat type name.
    pub desc: String,
    /// Minimum skill level needed.
    pub level_requirement: Level,
    /// Dice change this combat type applies.
    pub dice_modification: DicePoolModification,
    /// Penetration rule.
    pub penetration: Penetration,
    /// Range rule listed for the combat type.
    pub range: Range,
    /// Engageable-opponents rule.
    pub engageable_opponents: EngageableOpponents,
    /// Resource dice spent per cast.
    pub min_resource_requirement: u32,
    /// Whether another vocation may assist the cast.
    pub can_vocation_assist: bool,
    /// Area-of-effect template.
    pub area_of_effect: Option<AreaOfEffect>,
}

impl MagicCombat {
    /// Whether this combat type strikes in melee.
    pub fn is_melee(&self) -> bool {
        self.desc == "Melee" || self.desc == "Melee Trick"
    }
}

/// The resource spent on one cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicResource {
    /// Resource class name.
    pub resource_class: String,
    /// Number of d6 the resource adds.
    pub dice: u32,
}

impl MagicResource {
    /// The resource a skill spends on a combat type.
    pub fn for_cast(skill: &MagicSkill, combat: &MagicCombat) -> Self {
        Self {
            resource_class: skill.magic_resource_class.clone(),
            dice: combat.min_resource_requirement,
        }
    }

    /// Roll label, e.g. `"( 2 Mana )"`.
    pub fn label(&self) -> String {
        format!("( {} {} )", self.dice, self.resource_class)
    }

    /// Dice the resource adds to the roll.
    pub fn dice_modification(&self) -> DicePoolModification {
        DicePoolModification::AddDice(DicePool::d6(self.dice))
    }
}

/// Combat types a skill at `level` may use, in name order.
pub fn determine_magic_combat_types<'a>(
    melee_capable: bool,
    level: Level,
    combat_types: &'a BTreeMap<String, MagicCombat>,
) -> impl Iterator<Item = &'a MagicCombat> {
    combat_types
        .values()
        .filter(move |combat| combat.level_requirement <= level)
        .filter(move |combat| melee_capable || !combat.is_melee())
}

/// Named range bands a cast reaches as its tier rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RangeTier {
    /// Below tier zero.
    Close,
    /// Tier 0.
    Short,
    /// Tier 1.
    Medium,
    /// Tier 2.
    Extended,
    /// Tier 3.
    Long,
    /// Tier 4.
    Sharpshooter,
    /// Tier 5 and up.
    Extreme,
}

impl RangeTier {
    /// The band for a numeric tier (skill level plus conduit adjustment).
    pub fn from_tier(tier: i32) -> Self {
        match tier {
            i32::MIN..=-1 => Self::Close,
            0 => Self::Short,
            1 => Self::Medium,
            2 => Self::Extended,
            3 => Self::Long,
            4 => Self::Sharpshooter,
            _ => Self::Extreme,
        }
    }

    /// Range table key for this band.
    pub fn range_name(self) -> &'static str {
        match self {
            Self::Close => "Close",
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Extended => "Extended",
            Self::Long => "Long",
            Self::Sharpshooter => "Sharpshooter",
            Self::Extreme => "Extreme",
        }
    }
}

/// Range table key a cast uses. Trick and melee combat types have a fixed
/// range; everything else follows the tier.
pub fn magic_range_name(combat_desc: &str, tier: i32) -> &'static str {
    match combat_desc {
        "Melee" => "Reach",
        "Melee Trick" => "Melee",
        "Ranged Trick" => "Short",
        _ => RangeTier::from_tier(tier).range_name(),
    }
}

/// Look up the range a cast uses.
pub fn determine_magic_range<'a>(
    ranges: &'a BTreeMap<String, Range>,
    combat_desc: &str,
    tier: i32,
) -> MechResult<&'a Range> {
    let name = magic_range_name(combat_desc, tier);
    ranges.get(name).ok_or_else(|| MechError::unknown("range", name))
}
