//! The rule registry: typed lookup tables built from raw rule rows.
//!
//! Each table is folded into a map keyed by its leading name column. Later
//! rows overwrite earlier ones with the same name. Every reference one table
//! makes into another is resolved here, and a reference that names nothing
//! aborts the build.

pub mod decode;
pub mod input;
pub mod tables;

pub use input::CharacterStats;
pub use tables::{CharacterInput, RuleTables, SheetSnapshot};

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::combat::MagicRules;
use crate::dice::{DicePool, DicePoolModification};
use crate::effects::{CarryWeightCalculation, MovementSpeedCalculation, WeightClass};
use crate::error::{MechError, MechResult};
use crate::item::{ConduitClass, DefenseClass, Item, ItemClass, ItemTier, WeaponClass, WeaponResourceClass};
use crate::level::Level;
use crate::magic::{MagicCombat, MagicSkill};
use crate::progression::AttributeDeterminedDiceMod;
use crate::stats::{
    AreaOfEffect, CalculatedRange, EngageableOpponents, EngageableOpponentsCalculation, Penetration,
    PenetrationCalculation, Range, RangeCalculation,
};
use decode::{EngageableOpponentsTag, PenetrationTag};
use tables::{ConduitClassRow, ItemRow, MagicCombatRow, WeaponClassRow, WeaponResourceClassRow};

/// Fold rows into a map, last write wins.
pub(crate) fn build_map<R, T>(
    rows: &[R],
    mut record: impl FnMut(&R) -> MechResult<(String, T)>,
) -> MechResult<BTreeMap<String, T>> {
    rows.iter().try_fold(BTreeMap::new(), |mut map, row| {
        let (key, value) = record(row)?;
        map.insert(key, value);
        Ok(map)
    })
}

/// Every rule table, resolved and keyed by name.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    /// Known damage types.
    pub damage_types: BTreeSet<String>,
    /// Penetration formulas.
    pub penetration_calculations: BTreeMap<String, PenetrationCalculation>,
    /// Flat engageable-opponents rules.
    pub calculated_engageable_opponents: BTreeMap<String, u32>,
    /// Engageable-opponents formulas.
    pub engageable_opponents_calculations: BTreeMap<String, EngageableOpponentsCalculation>,
    /// Fixed and formula ranges; a formula shadows a fixed range of the same name.
    pub ranges: BTreeMap<String, Range>,
    /// Known resource classes.
    pub resource_classes: BTreeSet<String>,
    /// Known attributes.
    pub attributes: BTreeSet<String>,
    /// Magic skills.
    pub magic_skills: BTreeMap<String, MagicSkill>,
    /// Magic combat types.
    pub magic_combat_types: BTreeMap<String, MagicCombat>,
    /// Weapon classes.
    pub weapon_classes: BTreeMap<String, WeaponClass>,
    /// Conduit classes.
    pub conduit_classes: BTreeMap<String, ConduitClass>,
    /// Weapon resource classes.
    pub weapon_resource_classes: BTreeMap<String, WeaponResourceClass>,
    /// Defense classes.
    pub defense_classes: BTreeMap<String, DefenseClass>,
    /// Item tiers.
    pub item_tiers: BTreeMap<String, ItemTier>,
    /// Items.
    pub items: BTreeMap<String, Item>,
    /// Movement speed formulas.
    pub movement_speeds: BTreeMap<String, MovementSpeedCalculation>,
    /// Attribute-determined dice modifiers.
    pub attribute_determined_dice_mods: BTreeMap<String, AttributeDeterminedDiceMod>,
    /// The carry weight formula (first row of its table).
    pub carry_weight: Option<CarryWeightCalculation>,
    /// Weight classes, in table order.
    pub weight_classes: Vec<WeightClass>,
}

impl RuleRegistry {
    /// Build every lookup table from raw rows.
    pub fn build(tables: &RuleTables) -> MechResult<Self> {
        let mut registry = Self {
            damage_types: tables.damage_types.iter().map(|row| row.name.clone()).collect(),
            resource_classes: tables.resource_classes.iter().map(|row| row.name.clone()).collect(),
            attributes: tables.attributes.iter().map(|row| row.name.clone()).collect(),
            ..Self::default()
        };

        registry.penetration_calculations = build_map(&tables.penetration_calculations, |row| {
            Ok((
                row.desc.clone(),
                PenetrationCalculation {
                    desc: row.desc.clone(),
                    divisor: row.divisor,
                },
            ))
        })?;
        registry.calculated_engageable_opponents =
            build_map(&tables.calculated_engageable_opponents, |row| Ok((row.desc.clone(), row.value)))?;
        registry.engageable_opponents_calculations =
            build_map(&tables.engageable_opponents_calculations, |row| {
                Ok((
                    row.desc.clone(),
                    EngageableOpponentsCalculation {
                        desc: row.desc.clone(),
                        divisor: row.divisor,
                        max: EngageableOpponents::parse_max(&row.max),
                    },
                ))
            })?;

        let fixed = tables.calculated_ranges.iter().map(|row| {
            (
                row.desc.clone(),
                Range::Fixed(CalculatedRange {
                    desc: row.desc.clone(),
                    effective: row.effective,
                    max: row.max,
                }),
            )
        });
        let formulas = tables.range_calculations.iter().map(|row| {
            (
                row.desc.clone(),
                Range::Formula(RangeCalculation {
                    desc: row.desc.clone(),
                    dice_per_unit: row.dice_per_unit,
                    ft_per_unit: row.ft_per_unit,
                    round_up: row.round_up,
                    max: row.max,
                }),
            )
        });
        registry.ranges = fixed.chain(formulas).collect();

        let magic_skills = build_map(&tables.magic_skills, |row| {
            let skill = MagicSkill {
                desc: row.desc.clone(),
                damage_types: registry.damage_types_from(&row.damage_types)?,
                range_adjustment: row.range_adjustment,
                melee_capable: row.melee_capable,
                magic_resource_class: registry.resource_class(&row.magic_resource_class)?,
            };
            Ok((row.desc.clone(), skill))
        })?;
        registry.magic_skills = magic_skills;

        let magic_combat_types = build_map(&tables.magic_combat_types, |row| registry.magic_combat(row))?;
        registry.magic_combat_types = magic_combat_types;

        let weapon_classes = build_map(&tables.weapon_classes, |row| registry.weapon_class(row))?;
        registry.weapon_classes = weapon_classes;

        let conduit_classes = build_map(&tables.conduit_classes, |row| registry.conduit_class(row))?;
        registry.conduit_classes = conduit_classes;

        let weapon_resource_classes =
            build_map(&tables.weapon_resource_classes, |row| registry.weapon_resource_class(row))?;
        registry.weapon_resource_classes = weapon_resource_classes;

        registry.defense_classes = build_map(&tables.defense_classes, |row| {
            Ok((
                row.name.clone(),
                DefenseClass {
                    name: row.name.clone(),
                    physical: row.physical,
                    mental: row.mental,
                    spiritual: row.spiritual,
                },
            ))
        })?;

        registry.item_tiers = build_map(&tables.item_tiers, |row| {
            Ok((
                row.desc.clone(),
                ItemTier {
                    desc: row.desc.clone(),
                    level: row.level,
                    rune_slots: row.rune_slots,
                    base_dice: DicePool::parse(&row.base_dice),
                    durability_max: row.durability_max,
                },
            ))
        })?;

        let items = build_map(&tables.items, |row| registry.item_from_row(row))?;
        registry.items = items;

        let movement_speeds = build_map(&tables.movement_speeds, |row| {
            let calc = MovementSpeedCalculation {
                desc: row.desc.clone(),
                base_speed: row.base_speed,
                governing_attributes: registry.attributes_from(&row.governing_attributes)?,
                ft_per_attribute: row.ft_per_attribute,
                governing_skill: row.governing_skill.clone(),
                ft_per_skill: row.ft_per_skill,
            };
            Ok((row.desc.clone(), calc))
        })?;
        registry.movement_speeds = movement_speeds;

        let determined = build_map(&tables.attribute_determined_dice_mods, |row| {
            let modifier = AttributeDeterminedDiceMod {
                name: row.name.clone(),
                attributes_to_effect: registry.attributes_from(&row.attributes)?,
                dice_modification: DicePoolModification::parse(&row.dice_modification),
            };
            Ok((row.name.clone(), modifier))
        })?;
        registry.attribute_determined_dice_mods = determined;

        registry.carry_weight = tables.carry_weight_calculations.first().map(|row| CarryWeightCalculation {
            name: row.name.clone(),
            base_weight: row.base_weight,
            governing_attribute: row.governing_attribute.clone(),
            weight_per_attribute: row.weight_per_attribute,
            governing_skill: row.governing_skill.clone(),
            weight_per_skill: row.weight_per_skill,
        });
        registry.weight_classes = tables
            .weight_classes
            .iter()
            .map(|row| WeightClass {
                name: row.name.clone(),
                bottom_percent: row.bottom_percent,
                top_percent: row.top_percent,
                movement_speed_percent: row.movement_speed_percent,
            })
            .collect();

        debug!(
            ranges = registry.ranges.len(),
            weapon_classes = registry.weapon_classes.len(),
            conduit_classes = registry.conduit_classes.len(),
            items = registry.items.len(),
            magic_skills = registry.magic_skills.len(),
            "rule registry built"
        );
        Ok(registry)
    }

    /// The magic tables, bundled for the magic combat assembler.
    pub fn magic_rules<'a>(&'a self, base_dice: &'a DicePool) -> MagicRules<'a> {
        MagicRules {
            skills: &self.magic_skills,
            combat_types: &self.magic_combat_types,
            ranges: &self.ranges,
            base_dice,
        }
    }

    /// Look up an item by name.
    pub fn item(&self, name: &str) -> MechResult<&Item> {
        self.items.get(name).ok_or_else(|| MechError::unknown("item", name))
    }

    /// Look up a range by name.
    pub fn range(&self, name: &str) -> MechResult<Range> {
        self.ranges
            .get(name)
            .cloned()
            .ok_or_else(|| MechError::unknown("range", name))
    }

    /// Check an attribute name against the attribute table.
    pub fn attribute(&self, name: &str) -> MechResult<String> {
        if self.attributes.contains(name) {
            Ok(name.to_string())
        } else {
            Err(MechError::UnknownAttribute(name.to_string()))
        }
    }

    /// Resolve a comma-separated attribute list.
    pub fn attributes_from(&self, csv: &str) -> MechResult<Vec<String>> {
        decode::attribute_names(csv)
            .iter()
            .map(|name| self.attribute(name))
            .collect()
    }

    /// Resolve the braced attribute list of a vocation or class name.
    pub fn braced_attributes_from(&self, s: &str) -> MechResult<Vec<String>> {
        decode::braced_attribute_names(s)
            .iter()
            .map(|name| self.attribute(name))
            .collect()
    }

    /// Resolve a `", "`-separated damage type list.
    pub fn damage_types_from(&self, csv: &str) -> MechResult<Vec<String>> {
        decode::name_list(csv)
            .into_iter()
            .map(|name| {
                if self.damage_types.contains(name) {
                    Ok(name.to_string())
                } else {
                    Err(MechError::unknown("damage type", name))
                }
            })
            .collect()
    }

    /// Check a resource class name against the resource class table.
    pub fn resource_class(&self, name: &str) -> MechResult<String> {
        if self.resource_classes.contains(name) {
            Ok(name.to_string())
        } else {
            Err(MechError::unknown("resource class", name))
        }
    }

    /// Resolve a resource class column where `"None"` means no resource.
    pub fn optional_resource_class(&self, s: &str) -> MechResult<Option<String>> {
        decode::optional(s).map(|name| self.resource_class(name)).transpose()
    }

    /// Resolve a penetration column.
    pub fn penetration(&self, s: &str) -> MechResult<Penetration> {
        match PenetrationTag::parse(s) {
            PenetrationTag::Calculated(value) => Ok(Penetration::Fixed(value)),
            PenetrationTag::Calculation(name) => self
                .penetration_calculations
                .get(name)
                .cloned()
                .map(Penetration::Formula)
                .ok_or_else(|| MechError::unknown("penetration calculation", name)),
        }
    }

    /// Resolve an engageable-opponents column.
    pub fn engageable_opponents(&self, s: &str) -> MechResult<EngageableOpponents> {
        match EngageableOpponentsTag::parse(s) {
            EngageableOpponentsTag::Calculation(name) => self
                .engageable_opponents_calculations
                .get(name)
                .cloned()
                .map(EngageableOpponents::Formula)
                .ok_or_else(|| MechError::unknown("engageable opponents calculation", name)),
            EngageableOpponentsTag::Calculated(name) => self
                .calculated_engageable_opponents
                .get(name)
                .copied()
                .map(EngageableOpponents::Fixed)
                .ok_or_else(|| MechError::unknown("calculated engageable opponents", name)),
            EngageableOpponentsTag::Zero => Ok(EngageableOpponents::default()),
        }
    }

    fn magic_combat(&self, row: &MagicCombatRow) -> MechResult<(String, MagicCombat)> {
        let combat = MagicCombat {
            desc: row.desc.clone(),
            level_requirement: Level::from_i32(row.level_requirement),
            dice_modification: DicePoolModification::parse(&row.dice_modification),
            penetration: self.penetration(&row.penetration)?,
            range: self.range(&row.range)?,
            engageable_opponents: self.engageable_opponents(&row.engageable_opponents)?,
            min_resource_requirement: row.min_resource_requirement,
            can_vocation_assist: row.can_vocation_assist,
            area_of_effect: AreaOfEffect::parse(&row.area_of_effect),
        };
        Ok((row.desc.clone(), combat))
    }

    fn weapon_class(&self, row: &WeaponClassRow) -> MechResult<(String, WeaponClass)> {
        let weapon = WeaponClass {
            desc: row.desc.clone(),
            one_handed_dice: DicePoolModification::parse_optional(&row.one_handed_dice),
            two_handed_dice: DicePoolModification::parse(&row.two_handed_dice),
            penetration: self.penetration(&row.penetration)?,
            range: self.range(&row.range)?,
            damage_types: self.damage_types_from(&row.damage_types)?,
            engageable_opponents: self.engageable_opponents(&row.engageable_opponents)?,
            dual_wield_bonus: DicePoolModification::parse_optional(&row.dual_wield_bonus),
            area_of_effect: AreaOfEffect::parse(&row.area_of_effect),
            resource_class: self.optional_resource_class(&row.resource_class)?,
            governing_attributes: self.braced_attributes_from(&row.governing_attributes)?,
        };
        Ok((row.desc.clone(), weapon))
    }

    fn conduit_class(&self, row: &ConduitClassRow) -> MechResult<(String, ConduitClass)> {
        let engageable_opponents = decode::optional(&row.engageable_opponents)
            .map(|s| self.engageable_opponents(s))
            .transpose()?;
        let conduit = ConduitClass {
            desc: row.desc.clone(),
            one_handed_dice: DicePoolModification::parse_optional(&row.one_handed_dice),
            two_handed_dice: DicePoolModification::parse(&row.two_handed_dice),
            penetration: self.penetration(&row.penetration)?,
            range_adjustment: row.range_adjustment,
            damage_types: self.damage_types_from(&row.damage_types)?,
            engageable_opponents,
            dual_wield_bonus: DicePoolModification::parse_optional(&row.dual_wield_bonus),
            area_of_effect: AreaOfEffect::parse(&row.area_of_effect),
            resource_class: self.optional_resource_class(&row.resource_class)?,
            governing_attributes: self.braced_attributes_from(&row.governing_attributes)?,
        };
        Ok((row.desc.clone(), conduit))
    }

    fn weapon_resource_class(&self, row: &WeaponResourceClassRow) -> MechResult<(String, WeaponResourceClass)> {
        let range = decode::optional(&row.range).map(|name| self.range(name)).transpose()?;
        let resource = WeaponResourceClass {
            name: row.name.clone(),
            resource_class: self.resource_class(&row.resource_class)?,
            resource_dice: DicePoolModification::parse(&row.resource_dice),
            penetration: row.penetration,
            range,
            damage_types: self.damage_types_from(&row.damage_types)?,
            area_of_effect: AreaOfEffect::parse(&row.area_of_effect),
        };
        Ok((row.name.clone(), resource))
    }

    /// Match an item class name against weapon, conduit, resource, then
    /// defense classes.
    pub fn item_class(&self, name: &str) -> Option<ItemClass> {
        if let Some(weapon) = self.weapon_classes.get(name) {
            Some(ItemClass::Weapon(Box::new(weapon.clone())))
        } else if let Some(conduit) = self.conduit_classes.get(name) {
            Some(ItemClass::Conduit(Box::new(conduit.clone())))
        } else if let Some(resource) = self.weapon_resource_classes.get(name) {
            Some(ItemClass::WeaponResource(resource.clone()))
        } else {
            self.defense_classes.get(name).cloned().map(ItemClass::Defense)
        }
    }

    fn item_from_row(&self, row: &ItemRow) -> MechResult<(String, Item)> {
        let item_classes = decode::name_list(&row.item_classes)
            .into_iter()
            .filter_map(|name| {
                let class = self.item_class(name);
                if class.is_none() {
                    warn!(item = %row.name, class = name, "unknown item class dropped");
                }
                class
            })
            .collect();
        let tier = self
            .item_tiers
            .get(&row.tier)
            .cloned()
            .ok_or_else(|| MechError::unknown("item tier", &row.tier))?;
        let item = Item {
            name: row.name.clone(),
            item_classes,
            tier,
            value: row.value.clone(),
            weight: row.weight,
        };
        Ok((row.name.clone(), item))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! A small but complete rule set, shared by the registry and character tests.

    use super::tables::RuleTables;

    pub fn tables() -> RuleTables {
        let json = r#"{
            "damage_types": [["Slashing"], ["Piercing"], ["Fire"]],
            "penetration_calculations": [["Longsword", 5], ["Longbow", 4]],
            "calculated_engageable_opponents": [["Single", 1]],
            "engageable_opponents_calculations": [["Sweep", 4, "MaxEO 3"]],
            "calculated_ranges": [
                ["Reach", 5, 5], ["Melee", 5, 5], ["Close", 10, 10], ["Short", 30, 60],
                ["Medium", 60, 120], ["Extended", 90, 180], ["Long", 120, 240],
                ["Sharpshooter", 150, 300], ["Extreme", 200, 400]
            ],
            "range_calculations": [["Longsword Reach", 1, 5, true, 60], ["Bow Range", 2, 10, false, 300]],
            "resource_classes": [["Arrow"], ["Mana"]],
            "attributes": [["STR"], ["RX"], ["INT"]],
            "magic_skills": [["Fire Magic", "Fire", 0, false, "Mana"]],
            "magic_combat_types": [
                ["Bolt", 0, "AddDice 1d8", "CalculatedPenetration 1", "Short", "CalculatedEO Single", 2, true, "None"],
                ["Melee", -1, "RemoveDice 0", "CalculatedPenetration 0", "Reach", "CalculatedEO Single", 1, false, "None"]
            ],
            "weapon_classes": [
                ["Longsword", "None", "AddDice 2d6", "PenetrationCalculation Longsword", "Longsword Reach",
                 "Slashing", "CalculatedEO Single", "None", "None", "None", "{STR}"],
                ["Bow", "None", "AddDice 1d6", "PenetrationCalculation Longbow", "Bow Range",
                 "Piercing", "CalculatedEO Single", "None", "None", "Arrow", "{RX}"]
            ],
            "conduit_classes": [
                ["Fire Magic Wand", "AddDice 1d4", "AddDice 1d6", "CalculatedPenetration 1", 1, "",
                 "None", "None", "Sphere", "None", "{INT}"]
            ],
            "weapon_resource_classes": [["Fire Arrow", "Arrow", "AddDice 1d4", 1, "None", "Fire", "None"]],
            "defense_classes": [["Leather", 1.5, 0.5, 0.0]],
            "item_tiers": [["Common", 0, 0, "", 10], ["Fine", 1, 1, "1d8", 20]],
            "items": [
                ["Longsword", "Longsword", "Common", "15 gp", 3.0],
                ["Longbow", "Bow", "Fine", "50 gp", 2.0],
                ["Fire Arrows", "Fire Arrow", "Common", "1 gp", 0.05],
                ["Ember Wand", "Fire Magic Wand, Trinket", "Common", "100 gp", 1.0],
                ["Leather Armor", "Leather", "Common", "10 gp", 10.0]
            ],
            "movement_speeds": [["Movement Speed", 30, "RX", 5, "Athletics", 5]],
            "attribute_determined_dice_mods": [
                ["Light", "RX", "AddDice 0d6"],
                ["Medium", "RX", "RemoveDice 1"],
                ["Heavy", "RX", "RemoveDice 2"],
                ["Prone", "RX, STR", "RemoveDice 1"]
            ],
            "carry_weight_calculations": [["Carry Weight", 50, "STR", 25, "Athletics", 10]],
            "weight_classes": [
                ["Light", 0.0, 0.5, 1.0],
                ["Medium", 0.5, 0.75, 0.75],
                ["Heavy", 0.75, 1000.0, 0.5]
            ]
        }"#;
        serde_json::from_str(json).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::tables;
    use super::tables::*;
    use super::*;

    #[test]
    fn builds_every_table() {
        let registry = RuleRegistry::build(&tables()).unwrap();
        assert_eq!(registry.damage_types.len(), 3);
        assert_eq!(registry.ranges.len(), 11);
        assert_eq!(registry.items.len(), 5);
        assert_eq!(registry.magic_combat_types.len(), 2);
        assert!(registry.carry_weight.is_some());
        assert_eq!(registry.weight_classes.len(), 3);
    }

    #[test]
    fn decodes_tagged_columns() {
        let registry = RuleRegistry::build(&tables()).unwrap();
        let sword = &registry.weapon_classes["Longsword"];
        assert!(matches!(&sword.penetration, Penetration::Formula(calc) if calc.divisor == 5));
        assert_eq!(sword.engageable_opponents, EngageableOpponents::Fixed(1));
        assert_eq!(sword.one_handed_dice, None);
        assert_eq!(sword.governing_attributes, vec!["STR"]);
        assert_eq!(registry.weapon_classes["Bow"].resource_class.as_deref(), Some("Arrow"));

        let wand = &registry.conduit_classes["Fire Magic Wand"];
        assert_eq!(wand.engageable_opponents, None);
        assert!(wand.damage_types.is_empty());
        assert_eq!(wand.area_of_effect, Some(AreaOfEffect::Sphere));
    }

    #[test]
    fn unknown_item_classes_are_dropped() {
        let registry = RuleRegistry::build(&tables()).unwrap();
        let wand = registry.item("Ember Wand").unwrap();
        assert_eq!(wand.item_classes.len(), 1);
        assert_eq!(wand.conduit_classes().count(), 1);
    }

    #[test]
    fn later_rows_win() {
        let mut tables = tables();
        tables.penetration_calculations.push(PenetrationCalculationRow {
            desc: "Longsword".to_string(),
            divisor: 2,
        });
        let registry = RuleRegistry::build(&tables).unwrap();
        assert_eq!(registry.penetration_calculations["Longsword"].divisor, 2);
    }

    #[test]
    fn formula_range_shadows_fixed() {
        let mut tables = tables();
        tables.range_calculations.push(RangeCalculationRow {
            desc: "Short".to_string(),
            dice_per_unit: 1,
            ft_per_unit: 10,
            round_up: false,
            max: 100,
        });
        let registry = RuleRegistry::build(&tables).unwrap();
        assert!(matches!(registry.ranges["Short"], Range::Formula(_)));
    }

    #[test]
    fn unknown_penetration_reference_fails() {
        let mut tables = tables();
        tables.weapon_classes[0].penetration = "PenetrationCalculation Halberd".to_string();
        let err = RuleRegistry::build(&tables).unwrap_err();
        assert!(matches!(
            err,
            MechError::UnknownEntry {
                table: "penetration calculation",
                ..
            }
        ));
    }

    #[test]
    fn unrecognised_penetration_tag_is_zero() {
        let mut tables = tables();
        tables.weapon_classes[0].penetration = "Sharp".to_string();
        let registry = RuleRegistry::build(&tables).unwrap();
        assert_eq!(registry.weapon_classes["Longsword"].penetration, Penetration::Fixed(0));
    }

    #[test]
    fn unknown_attribute_fails() {
        let mut tables = tables();
        tables.weapon_classes[0].governing_attributes = "{LUCK}".to_string();
        let err = RuleRegistry::build(&tables).unwrap_err();
        assert!(matches!(err, MechError::UnknownAttribute(name) if name == "LUCK"));
    }

    #[test]
    fn unknown_damage_type_fails() {
        let mut tables = tables();
        tables.weapon_classes[0].damage_types = "Slashing, Acid".to_string();
        let err = RuleRegistry::build(&tables).unwrap_err();
        assert!(matches!(err, MechError::UnknownEntry { table: "damage type", .. }));
    }

    #[test]
    fn unknown_item_tier_fails() {
        let mut tables = tables();
        tables.items[0].tier = "Legendary".to_string();
        let err = RuleRegistry::build(&tables).unwrap_err();
        assert!(matches!(err, MechError::UnknownEntry { table: "item tier", .. }));
    }

    #[test]
    fn engageable_opponents_formula_cap() {
        let registry = RuleRegistry::build(&tables()).unwrap();
        let eo = registry.engageable_opponents("EOCalculation Sweep").unwrap();
        assert_eq!(eo.resolve(40).unwrap(), 3);
        assert_eq!(registry.engageable_opponents("Many").unwrap(), EngageableOpponents::Fixed(0));
    }
}
