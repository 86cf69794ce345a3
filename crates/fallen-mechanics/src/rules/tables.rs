//! Raw rule-table and character-input rows, as read from a sheet snapshot.
//!
//! Every row type is a plain serde struct, so a row may be written either as
//! an object or sheet-style as a positional array:
//! `["Longbow", 3]` and `{"desc": "Longbow", "divisor": 3}` are the same
//! penetration calculation. Tagged string columns (`"AddDice 2d6"`,
//! `"PenetrationCalculation Longbow"`, ...) are decoded by [`super::decode`].

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::MechResult;

/// A single-name row (damage types, resource classes, attributes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRow {
    /// The name.
    pub name: String,
}

/// `(desc, divisor)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenetrationCalculationRow {
    /// Formula name.
    pub desc: String,
    /// Dice per point of penetration.
    pub divisor: u32,
}

/// `(desc, effectiveFt, maxFt)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedRangeRow {
    /// Range name.
    pub desc: String,
    /// Effective range in feet.
    pub effective: u32,
    /// Maximum range in feet.
    pub max: u32,
}

/// `(desc, dicePerUnit, ftPerUnit, roundUp, maxFt)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeCalculationRow {
    /// Range name.
    pub desc: String,
    /// Dice per range unit.
    pub dice_per_unit: u32,
    /// Feet per range unit.
    pub ft_per_unit: u32,
    /// Rounding flag.
    pub round_up: bool,
    /// Maximum range in feet.
    pub max: u32,
}

/// `(desc, value)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedEngageableOpponentsRow {
    /// Rule name.
    pub desc: String,
    /// Flat engageable opponents.
    pub value: u32,
}

/// `(desc, divisor, "MaxEO n" | "None")`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngageableOpponentsCalculationRow {
    /// Formula name.
    pub desc: String,
    /// Dice per opponent.
    pub divisor: u32,
    /// Optional cap, tagged.
    pub max: String,
}

/// `(desc, oneHandedDice, twoHandedDice, penetration, range, damageTypes, eo,
/// dualWieldBonus, aoe, resourceClass, governingAttributes)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponClassRow {
    /// Class name.
    pub desc: String,
    /// `"AddDice ..."`, `"RemoveDice n"` or `"None"`.
    pub one_handed_dice: String,
    /// `"AddDice ..."` or `"RemoveDice n"`.
    pub two_handed_dice: String,
    /// Tagged penetration.
    pub penetration: String,
    /// Range name.
    pub range: String,
    /// Comma-separated damage type names.
    pub damage_types: String,
    /// Tagged engageable opponents.
    pub engageable_opponents: String,
    /// Tagged dice modification or `"None"`.
    pub dual_wield_bonus: String,
    /// `"Cone"`, `"Sphere"` or `"None"`.
    pub area_of_effect: String,
    /// Resource class name or `"None"`.
    pub resource_class: String,
    /// Attributes in braces, e.g. `"{STR, RX}"`.
    pub governing_attributes: String,
}

/// Like [`WeaponClassRow`], with a range adjustment in place of a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConduitClassRow {
    /// Class name.
    pub desc: String,
    /// Tagged dice modification or `"None"`.
    pub one_handed_dice: String,
    /// Tagged dice modification.
    pub two_handed_dice: String,
    /// Tagged penetration.
    pub penetration: String,
    /// Range tier adjustment.
    pub range_adjustment: i32,
    /// Comma-separated damage type names.
    pub damage_types: String,
    /// Tagged engageable opponents or `"None"`.
    pub engageable_opponents: String,
    /// Tagged dice modification or `"None"`.
    pub dual_wield_bonus: String,
    /// Area-of-effect tag.
    pub area_of_effect: String,
    /// Resource class name or `"None"`.
    pub resource_class: String,
    /// Attributes in braces.
    pub governing_attributes: String,
}

/// `(name, resourceClass, resourceDice, penetration, range | "None",
/// damageTypes, aoe)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponResourceClassRow {
    /// Resource name.
    pub name: String,
    /// Resource class name.
    pub resource_class: String,
    /// Tagged dice modification.
    pub resource_dice: String,
    /// Flat penetration.
    pub penetration: u32,
    /// Range name or `"None"`.
    pub range: String,
    /// Comma-separated damage type names.
    pub damage_types: String,
    /// Area-of-effect tag.
    pub area_of_effect: String,
}

/// `(name, physical, mental, spiritual)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseClassRow {
    /// Class name.
    pub name: String,
    /// Physical defense.
    pub physical: f64,
    /// Mental defense.
    pub mental: f64,
    /// Spiritual defense.
    pub spiritual: f64,
}

/// `(desc, level, runeSlots, baseDice, durabilityMax)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTierRow {
    /// Tier name.
    pub desc: String,
    /// Tier level.
    pub level: i32,
    /// Rune slots.
    pub rune_slots: u32,
    /// Base dice, e.g. `"1d6"`.
    pub base_dice: String,
    /// Maximum durability.
    pub durability_max: u32,
}

/// `(name, itemClasses, tier, value, weight)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRow {
    /// Item name.
    pub name: String,
    /// Item class names separated by `", "`.
    pub item_classes: String,
    /// Tier name.
    pub tier: String,
    /// Listed value.
    pub value: String,
    /// Weight of one unit, in pounds.
    pub weight: f64,
}

/// `(desc, damageTypes, rangeAdjustment, meleeCapable, magicResourceClass)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicSkillRow {
    /// Skill name.
    pub desc: String,
    /// Comma-separated damage type names.
    pub damage_types: String,
    /// Range tier adjustment.
    pub range_adjustment: i32,
    /// Whether melee combat types are allowed.
    pub melee_capable: bool,
    /// Resource class name.
    pub magic_resource_class: String,
}

/// `(desc, levelRequirement, diceMod, penetration, range, eo,
/// minResourceRequirement, canVocationAssist, aoe)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicCombatRow {
    /// Combat type name.
    pub desc: String,
    /// Minimum skill level.
    pub level_requirement: i32,
    /// Tagged dice modification.
    pub dice_modification: String,
    /// Tagged penetration.
    pub penetration: String,
    /// Range name.
    pub range: String,
    /// Tagged engageable opponents.
    pub engageable_opponents: String,
    /// Resource dice per cast.
    pub min_resource_requirement: u32,
    /// Whether another vocation may assist.
    pub can_vocation_assist: bool,
    /// Area-of-effect tag.
    pub area_of_effect: String,
}

/// `(name, attributes, diceMod)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDeterminedDiceModRow {
    /// Modifier name.
    pub name: String,
    /// Comma-separated attribute names.
    pub attributes: String,
    /// Tagged dice modification.
    pub dice_modification: String,
}

/// `(desc, baseSpeed, governingAttributes, ftPerAttribute, governingSkill,
/// ftPerSkill)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementSpeedRow {
    /// Effect name.
    pub desc: String,
    /// Base speed in feet.
    pub base_speed: u32,
    /// Comma-separated attribute names.
    pub governing_attributes: String,
    /// Feet per attribute level.
    pub ft_per_attribute: u32,
    /// Skill name.
    pub governing_skill: String,
    /// Feet per skill level.
    pub ft_per_skill: u32,
}

/// `(name, baseWeight, governingAttribute, weightPerAttribute,
/// governingSkill, weightPerSkill)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryWeightCalculationRow {
    /// Calculation name.
    pub name: String,
    /// Base weight in pounds.
    pub base_weight: u32,
    /// Attribute name.
    pub governing_attribute: String,
    /// Pounds per attribute level.
    pub weight_per_attribute: u32,
    /// Skill name.
    pub governing_skill: String,
    /// Pounds per skill level.
    pub weight_per_skill: u32,
}

/// `(name, bottomPercent, topPercent, movementSpeedPercent)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightClassRow {
    /// Class name.
    pub name: String,
    /// Inclusive lower bound.
    pub bottom_percent: f64,
    /// Exclusive upper bound.
    pub top_percent: f64,
    /// Share of movement speed kept.
    pub movement_speed_percent: f64,
}

/// Every rule category, one ordered row collection each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTables {
    /// Damage types.
    pub damage_types: Vec<NameRow>,
    /// Penetration formulas.
    pub penetration_calculations: Vec<PenetrationCalculationRow>,
    /// Flat engageable-opponents rules.
    pub calculated_engageable_opponents: Vec<CalculatedEngageableOpponentsRow>,
    /// Engageable-opponents formulas.
    pub engageable_opponents_calculations: Vec<EngageableOpponentsCalculationRow>,
    /// Fixed ranges.
    pub calculated_ranges: Vec<CalculatedRangeRow>,
    /// Range formulas.
    pub range_calculations: Vec<RangeCalculationRow>,
    /// Resource classes.
    pub resource_classes: Vec<NameRow>,
    /// Attributes.
    pub attributes: Vec<NameRow>,
    /// Magic skills.
    pub magic_skills: Vec<MagicSkillRow>,
    /// Magic combat types.
    pub magic_combat_types: Vec<MagicCombatRow>,
    /// Weapon classes.
    pub weapon_classes: Vec<WeaponClassRow>,
    /// Conduit classes.
    pub conduit_classes: Vec<ConduitClassRow>,
    /// Weapon resource classes.
    pub weapon_resource_classes: Vec<WeaponResourceClassRow>,
    /// Defense classes.
    pub defense_classes: Vec<DefenseClassRow>,
    /// Item tiers.
    pub item_tiers: Vec<ItemTierRow>,
    /// Items.
    pub items: Vec<ItemRow>,
    /// Movement speed formulas.
    pub movement_speeds: Vec<MovementSpeedRow>,
    /// Attribute-determined dice modifiers.
    pub attribute_determined_dice_mods: Vec<AttributeDeterminedDiceModRow>,
    /// Carry weight formulas. Only the first row is used.
    pub carry_weight_calculations: Vec<CarryWeightCalculationRow>,
    /// Weight classes, lightest first.
    pub weight_classes: Vec<WeightClassRow>,
}

/// `(attribute, level)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeStatRow {
    /// Attribute name.
    pub attribute: String,
    /// Level, -1 to 4.
    pub level: i32,
}

/// `(name, level, governingAttribute)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillStatRow {
    /// Skill name.
    pub name: String,
    /// Level, -1 to 4.
    pub level: i32,
    /// Attribute name.
    pub governing_attribute: String,
}

/// `(name, level)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocationalSkillRow {
    /// Skill name. Blank rows are skipped.
    pub name: String,
    /// Level, -1 to 4.
    pub level: i32,
}

/// `(name, level, vocationalSkills)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocationRow {
    /// Vocation name with governing attributes, e.g. `"Ranger {DEX, RX}"`.
    /// Blank rows are skipped.
    pub name: String,
    /// Level, -1 to 4.
    pub level: i32,
    /// Vocational skills.
    #[serde(default)]
    pub skills: Vec<VocationalSkillRow>,
}

/// `(equipped, item, quantity)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRow {
    /// Whether the item is equipped.
    pub equipped: bool,
    /// Item name.
    pub item: String,
    /// Quantity carried.
    pub quantity: u32,
}

/// `(desc, effect, duration)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectRow {
    /// Row name, matched against known effects.
    pub desc: String,
    /// Effect text as entered on the sheet.
    #[serde(default)]
    pub effect: String,
    /// Duration text.
    #[serde(default)]
    pub duration: String,
}

/// Everything a player enters on their sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterInput {
    /// Attribute levels.
    pub attributes: Vec<AttributeStatRow>,
    /// Core skill levels.
    pub skills: Vec<SkillStatRow>,
    /// Vocations and their skills.
    pub vocations: Vec<VocationRow>,
    /// Equipment list.
    pub equipment: Vec<EquipmentRow>,
    /// Effect table.
    pub effects: Vec<EffectRow>,
}

/// A full sheet snapshot: rule tables, character input, and optional engine
/// settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSnapshot {
    /// Rule tables.
    pub rules: RuleTables,
    /// Character input.
    pub character: CharacterInput,
    /// Engine settings.
    pub config: EngineConfig,
}

impl SheetSnapshot {
    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> MechResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
