//! Combat rolls for magic skills, cast bare-handed or through a conduit.

use std::collections::BTreeMap;

use tracing::trace;

use super::CombatRoll;
use super::handedness::{WieldingVariant, wielding_variants};
use crate::dice::DicePool;
use crate::error::MechResult;
use crate::item::{ConduitClass, EquipmentItem, Item, equipped_conduits_for};
use crate::magic::{MagicCombat, MagicResource, MagicSkill, determine_magic_combat_types, determine_magic_range};
use crate::progression::{RollContext, SkillStat, VocationStat};
use crate::stats::{AreaOfEffect, Penetration, Range};

/// The rule tables magic rolls are built from.
#[derive(Debug, Clone, Copy)]
pub struct MagicRules<'a> {
    /// Magic skills by name.
    pub skills: &'a BTreeMap<String, MagicSkill>,
    /// Magic combat types by name.
    pub combat_types: &'a BTreeMap<String, MagicCombat>,
    /// Ranges by name, for the range tiers.
    pub ranges: &'a BTreeMap<String, Range>,
    /// Base pool for casts without a conduit.
    pub base_dice: &'a DicePool,
}

/// Every roll the character's magic skills can make.
///
/// Each vocational skill that is a magic skill casts every combat type it
/// qualifies for. With a matching conduit equipped, one roll is made per
/// conduit and grip; otherwise one bare-handed roll.
pub fn magic_combat_rolls(
    vocations: &[VocationStat],
    equipment: &[EquipmentItem],
    rules: &MagicRules<'_>,
    ctx: &RollContext<'_>,
) -> MechResult<Vec<CombatRoll>> {
    let mut rolls = Vec::new();
    let skills = vocations
        .iter()
        .flat_map(|vocation| vocation.vocational_skills.iter())
        .filter_map(|skill| rules.skills.get(&skill.name).map(|magic| (skill, magic)));
    for (skill, magic) in skills {
        for combat in determine_magic_combat_types(magic.melee_capable, skill.level, rules.combat_types) {
            let cast = Cast {
                skill,
                magic,
                combat,
                resource: MagicResource::for_cast(magic, combat),
            };
            let conduits: Vec<&Item> = equipped_conduits_for(equipment, &skill.name).collect();
            if conduits.is_empty() {
                rolls.push(cast.bare_roll(rules, ctx)?);
                continue;
            }
            for item in conduits {
                for conduit in item.conduit_classes().filter(|c| c.channels(&skill.name)) {
                    for variant in wielding_variants(conduit) {
                        rolls.push(cast.conduit_roll(item, conduit, &variant, rules, ctx)?);
                    }
                }
            }
        }
    }
    Ok(rolls)
}

/// One magic skill casting one combat type.
struct Cast<'a> {
    skill: &'a SkillStat,
    magic: &'a MagicSkill,
    combat: &'a MagicCombat,
    resource: MagicResource,
}

impl Cast<'_> {
    fn bare_roll(&self, rules: &MagicRules<'_>, ctx: &RollContext<'_>) -> MechResult<CombatRoll> {
        let governing = &self.skill.governing_attributes;
        let mut modifications = vec![
            ctx.attribute_modification(governing),
            self.skill.level.dice_modification(),
            self.combat.dice_modification,
            self.resource.dice_modification(),
        ];
        modifications.extend(ctx.determined_modifications(governing));

        let dice_pool = rules.base_dice.apply(&modifications);
        let total = dice_pool.sum();
        let range = determine_magic_range(rules.ranges, &self.combat.desc, self.skill.level.as_i32())?;

        let roll = CombatRoll {
            desc: format!(
                "{} {} {}",
                self.magic.desc,
                self.combat.desc,
                self.resource.label()
            ),
            dice_pool,
            calculated_range: range.resolve(total)?,
            penetration: self.combat.penetration.resolve(total)?,
            damage_types: self.magic.damage_types.clone(),
            area_of_effect: AreaOfEffect::resolve(total, self.combat.area_of_effect, None),
            engageable_opponents: self.combat.engageable_opponents.resolve(total)?,
        };
        trace!(desc = %roll.desc, dice = %roll.dice_pool, "magic roll");
        Ok(roll)
    }

    fn conduit_roll(
        &self,
        item: &Item,
        conduit: &ConduitClass,
        variant: &WieldingVariant,
        rules: &MagicRules<'_>,
        ctx: &RollContext<'_>,
    ) -> MechResult<CombatRoll> {
        let governing = &conduit.governing_attributes;
        let mut modifications = vec![
            ctx.attribute_modification(governing),
            self.skill.level.dice_modification(),
            self.combat.dice_modification,
            self.resource.dice_modification(),
        ];
        modifications.extend(variant.dice_modifications.iter().copied());
        modifications.extend(ctx.determined_modifications(governing));

        let dice_pool = item.tier.base_dice.apply(&modifications);
        let total = dice_pool.sum();
        let tier = self.skill.level.as_i32().saturating_add(conduit.range_adjustment);
        let range = determine_magic_range(rules.ranges, &self.combat.desc, tier)?;
        let engageable = conduit
            .engageable_opponents
            .as_ref()
            .unwrap_or(&self.combat.engageable_opponents);

        let mut damage_types = self.magic.damage_types.clone();
        damage_types.extend(conduit.damage_types.iter().cloned());

        let roll = CombatRoll {
            desc: format!(
                "{} {} with {} {}{}",
                self.magic.desc,
                self.combat.desc,
                item.name,
                self.resource.label(),
                variant.handedness.suffix()
            ),
            dice_pool,
            calculated_range: range.resolve(total)?,
            penetration: Penetration::compose(total, &self.combat.penetration, &conduit.penetration)?,
            damage_types,
            area_of_effect: AreaOfEffect::resolve(total, self.combat.area_of_effect, conduit.area_of_effect),
            engageable_opponents: engageable.resolve(total)?,
        };
        trace!(desc = %roll.desc, dice = %roll.dice_pool, "conduit roll");
        Ok(roll)
    }
}
