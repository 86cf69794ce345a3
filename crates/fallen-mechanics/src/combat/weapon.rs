//! Combat rolls for equipped weapons.

use tracing::trace;

use super::CombatRoll;
use super::handedness::{WieldingVariant, wielding_variants};
use crate::dice::{DicePool, DicePoolModification};
use crate::error::MechResult;
use crate::item::{EquipmentItem, Item, WeaponClass, WeaponResourceClass, equipped_items};
use crate::level::Level;
use crate::progression::{RollContext, VocationStat, find_vocational_skill};
use crate::stats::{AreaOfEffect, Penetration, Range};

/// Every roll the character's equipped weapons can make.
///
/// Rolls follow equipment order, then weapon class order, then resource
/// order, then grip order. A weapon that needs a resource produces no rolls
/// unless a matching resource is equipped.
pub fn weapon_combat_rolls(
    equipment: &[EquipmentItem],
    vocations: &[VocationStat],
    ctx: &RollContext<'_>,
) -> MechResult<Vec<CombatRoll>> {
    let mut rolls = Vec::new();
    for item in equipped_items(equipment) {
        for weapon in item.weapon_classes() {
            let skill_level = find_vocational_skill(vocations, &weapon.desc).level;
            let resources: Vec<Option<&WeaponResourceClass>> = match &weapon.resource_class {
                None => vec![None],
                Some(class) => equipped_items(equipment)
                    .flat_map(Item::weapon_resource_classes)
                    .filter(|resource| resource.feeds(class))
                    .map(Some)
                    .collect(),
            };
            for resource in resources {
                for variant in wielding_variants(weapon) {
                    let attack = WeaponAttack {
                        item,
                        weapon,
                        skill_level,
                        resource,
                    };
                    rolls.push(attack.roll(&variant, ctx)?);
                }
            }
        }
    }
    Ok(rolls)
}

/// One weapon, optionally loaded with one resource.
struct WeaponAttack<'a> {
    item: &'a Item,
    weapon: &'a WeaponClass,
    skill_level: Level,
    resource: Option<&'a WeaponResourceClass>,
}

impl WeaponAttack<'_> {
    fn roll(&self, variant: &WieldingVariant, ctx: &RollContext<'_>) -> MechResult<CombatRoll> {
        let governing = &self.weapon.governing_attributes;
        let resource_dice = self
            .resource
            .map_or(DicePoolModification::AddDice(DicePool::new()), |r| r.resource_dice);

        let mut modifications = vec![
            ctx.attribute_modification(governing),
            self.skill_level.dice_modification(),
            resource_dice,
        ];
        modifications.extend(variant.dice_modifications.iter().copied());
        modifications.extend(ctx.determined_modifications(governing));

        let dice_pool = self.item.tier.base_dice.apply(&modifications);
        let total = dice_pool.sum();

        let resource_penetration = Penetration::Fixed(self.resource.map_or(0, |r| r.penetration));
        let mut damage_types = self.weapon.damage_types.clone();
        if let Some(resource) = self.resource {
            damage_types.extend(resource.damage_types.iter().cloned());
        }

        let roll = CombatRoll {
            desc: format!(
                "{}{}{}",
                self.item.name,
                self.resource.map_or(String::new(), |r| format!(" ({})", r.name)),
                variant.handedness.suffix()
            ),
            dice_pool,
            calculated_range: Range::greatest(
                total,
                &self.weapon.range,
                self.resource.and_then(|r| r.range.as_ref()),
            )?,
            penetration: Penetration::compose(total, &self.weapon.penetration, &resource_penetration)?,
            damage_types,
            area_of_effect: AreaOfEffect::resolve(
                total,
                self.weapon.area_of_effect,
                self.resource.and_then(|r| r.area_of_effect),
            ),
            engageable_opponents: self.weapon.engageable_opponents.resolve(total)?,
        };
        trace!(desc = %roll.desc, dice = %roll.dice_pool, "weapon roll");
        Ok(roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::fixtures::{equip, item, tier, weapon_class};
    use crate::item::ItemClass;
    use crate::progression::{AttributeStat, SkillStat};
    use crate::stats::{CalculatedRange, PenetrationCalculation, RangeCalculation, Shape};

    fn bow() -> WeaponClass {
        let mut bow = weapon_class("Bow");
        bow.penetration = Penetration::Formula(PenetrationCalculation {
            desc: "Bow".to_string(),
            divisor: 3,
        });
        bow.range = Range::Fixed(CalculatedRange {
            desc: "Bow".to_string(),
            effective: 30,
            max: 120,
        });
        bow.damage_types = vec!["Piercing".to_string()];
        bow.resource_class = Some("Arrow".to_string());
        bow.governing_attributes = vec!["DEX".to_string()];
        bow
    }

    fn arrow(name: &str, penetration: u32) -> WeaponResourceClass {
        WeaponResourceClass {
            name: name.to_string(),
            resource_class: "Arrow".to_string(),
            resource_dice: DicePoolModification::parse("AddDice 1d8"),
            penetration,
            range: Some(Range::Formula(RangeCalculation {
                desc: "Arrow Flight".to_string(),
                dice_per_unit: 1,
                ft_per_unit: 10,
                round_up: true,
                max: 200,
            })),
            damage_types: vec!["Fire".to_string()],
            area_of_effect: Some(AreaOfEffect::Sphere),
        }
    }

    fn archer() -> Vec<VocationStat> {
        vec![VocationStat {
            name: "Ranger {DEX}".to_string(),
            level: Level::One,
            governing_attributes: vec!["DEX".to_string()],
            vocational_skills: vec![SkillStat {
                name: "Bow".to_string(),
                level: Level::Two,
                governing_attributes: vec!["DEX".to_string()],
            }],
        }]
    }

    #[test]
    fn one_roll_per_matching_resource() {
        let equipment = vec![
            equip(item("Longbow", vec![ItemClass::Weapon(Box::new(bow()))], 2.0), true, 1),
            equip(
                item("Fire Arrows", vec![ItemClass::WeaponResource(arrow("Fire Arrow", 2))], 0.1),
                true,
                20,
            ),
            equip(
                item("Spare Arrows", vec![ItemClass::WeaponResource(arrow("Spare Arrow", 0))], 0.1),
                false,
                20,
            ),
        ];
        let attributes = vec![AttributeStat {
            attribute: "DEX".to_string(),
            level: Level::One,
        }];
        let ctx = RollContext::new(&attributes, &[]);
        let rolls = weapon_combat_rolls(&equipment, &archer(), &ctx).unwrap();
        assert_eq!(rolls.len(), 1);

        let roll = &rolls[0];
        assert_eq!(roll.desc, "Longbow (Fire Arrow) (Two-handed)");
        // base 0 + 1 DEX + 2 skill + 1d8 arrow + 2d6 two-handed
        assert_eq!(roll.dice_pool, DicePool::parse("5d6, 1d8"));
        // 2 from the arrow on top of floor(6 / 3)
        assert_eq!(roll.penetration, 4);
        assert_eq!(roll.calculated_range.desc, "Arrow Flight");
        assert_eq!(roll.calculated_range.effective, 60);
        assert_eq!(roll.damage_types, vec!["Piercing", "Fire"]);
        assert!(matches!(roll.area_of_effect, Some(Shape::Sphere(_))));
        assert_eq!(roll.engageable_opponents, 1);
    }

    #[test]
    fn resource_weapon_without_ammo_has_no_rolls() {
        let equipment = vec![equip(
            item("Longbow", vec![ItemClass::Weapon(Box::new(bow()))], 2.0),
            true,
            1,
        )];
        let ctx = RollContext::new(&[], &[]);
        assert!(weapon_combat_rolls(&equipment, &archer(), &ctx).unwrap().is_empty());
    }

    #[test]
    fn untrained_weapon_uses_tier_dice() {
        let mut club = item("Club", vec![ItemClass::Weapon(Box::new(weapon_class("Club")))], 3.0);
        club.tier = tier("1d6");
        let equipment = vec![equip(club, true, 1)];
        let ctx = RollContext::new(&[], &[]);
        let rolls = weapon_combat_rolls(&equipment, &[], &ctx).unwrap();
        // 1 tier + 2 two-handed, then -1 for the missing STR; skill level 0
        assert_eq!(rolls[0].dice_pool, DicePool::d6(2));
        assert_eq!(rolls[0].desc, "Club (Two-handed)");
        assert_eq!(rolls[0].calculated_range.to_string(), "5/5");
    }

    #[test]
    fn unequipped_weapons_are_skipped() {
        let equipment = vec![equip(
            item("Club", vec![ItemClass::Weapon(Box::new(weapon_class("Club")))], 3.0),
            false,
            1,
        )];
        let ctx = RollContext::new(&[], &[]);
        assert!(weapon_combat_rolls(&equipment, &[], &ctx).unwrap().is_empty());
    }
}
