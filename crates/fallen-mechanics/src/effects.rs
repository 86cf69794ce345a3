//! Movement speed, carry weight, and the calculated effect table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::format::fixed;
use crate::item::{DefenseClass, EquipmentItem, equipped_items};
use crate::progression::{AttributeDeterminedDiceMod, AttributeStat, SkillStat, attribute_level_sum, find_skill};

/// Effect-table row that reports summed armor.
pub const DEFENSE_LEVEL: &str = "Defense Level";
/// Effect-table row that reports load and weight class.
pub const INVENTORY_WEIGHT: &str = "Inventory Weight";

/// How much a character can carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryWeightCalculation {
    /// Calculation name.
    pub name: String,
    /// Pounds carried before any bonus.
    pub base_weight: u32,
    /// Attribute that raises the limit.
    pub governing_attribute: String,
    /// Pounds per attribute level.
    pub weight_per_attribute: u32,
    /// Skill that raises the limit.
    pub governing_skill: String,
    /// Pounds per skill level.
    pub weight_per_skill: u32,
}

impl CarryWeightCalculation {
    /// Maximum carry weight in pounds.
    pub fn max_carry_weight(&self, attributes: &[AttributeStat], skills: &[SkillStat]) -> i64 {
        let attribute_level = attribute_level_sum(std::slice::from_ref(&self.governing_attribute), attributes);
        let skill_level = find_skill(&self.governing_skill, skills).level.as_i32();
        i64::from(attribute_level) * i64::from(self.weight_per_attribute)
            + i64::from(self.base_weight)
            + i64::from(skill_level) * i64::from(self.weight_per_skill)
    }
}

/// A load bracket, as a fraction of max carry weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightClass {
    /// Class name (e.g., "Light").
    pub name: String,
    /// Inclusive lower bound.
    pub bottom_percent: f64,
    /// Exclusive upper bound.
    pub top_percent: f64,
    /// Share of movement speed kept while in this class.
    pub movement_speed_percent: f64,
}

impl WeightClass {
    /// Whether a load fraction falls in this bracket.
    pub fn contains(&self, percent: f64) -> bool {
        self.bottom_percent <= percent && percent < self.top_percent
    }
}

/// The character's load, resolved once per build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSummary {
    /// Weight of the usable equipment.
    pub total: f64,
    /// Maximum carry weight.
    pub max: f64,
    /// Bracket the load falls in.
    pub class: WeightClass,
}

impl WeightSummary {
    /// Place `total` pounds against `max` in the configured brackets.
    ///
    /// With no carrying capacity at all the last (heaviest) class applies.
    pub fn resolve(total: f64, max: f64, classes: &[WeightClass]) -> MechResult<Self> {
        let percent = total / max;
        let class = if max > 0.0 {
            classes.iter().find(|class| class.contains(percent))
        } else {
            classes.last()
        };
        let class = class.cloned().ok_or(MechError::NoWeightClass { percent })?;
        Ok(Self { total, max, class })
    }
}

/// A movement speed formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementSpeedCalculation {
    /// Effect name, matched against effect-table rows.
    pub desc: String,
    /// Speed in feet before any bonus.
    pub base_speed: u32,
    /// Attributes that raise the speed.
    pub governing_attributes: Vec<String>,
    /// Feet per attribute level.
    pub ft_per_attribute: u32,
    /// Skill that raises the speed.
    pub governing_skill: String,
    /// Feet per skill level.
    pub ft_per_skill: u32,
}

impl MovementSpeedCalculation {
    /// Unscaled speed in feet, never negative.
    pub fn speed(&self, attribute_level: i32, skill_level: i32) -> u32 {
        let speed = i64::from(self.base_speed)
            + i64::from(attribute_level) * i64::from(self.ft_per_attribute)
            + i64::from(skill_level) * i64::from(self.ft_per_skill);
        u32::try_from(speed.max(0)).unwrap_or(u32::MAX)
    }

    /// Speed scaled by the weight class, e.g. `"25 ft"`.
    pub fn describe(&self, attributes: &[AttributeStat], skills: &[SkillStat], weight_class: &WeightClass) -> String {
        let attribute_level = attribute_level_sum(&self.governing_attributes, attributes);
        let skill_level = find_skill(&self.governing_skill, skills).level.as_i32();
        let scaled = f64::from(self.speed(attribute_level, skill_level)) * weight_class.movement_speed_percent;
        format!("{} ft", fixed(scaled, 0))
    }
}

/// A computed effect an effect-table row can name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Movement speed.
    MovementSpeed(MovementSpeedCalculation),
    /// Carry weight.
    CarryWeight(CarryWeightCalculation),
}

/// One row of the character's effect table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectEntry {
    /// The computed effect the row names, if any.
    pub effect: Option<Effect>,
    /// Row name.
    pub desc: String,
    /// Duration text, passed through.
    pub duration: String,
}

impl EffectEntry {
    /// Resolve a row name against the known effects.
    pub fn new(
        desc: impl Into<String>,
        duration: impl Into<String>,
        movement_speeds: &BTreeMap<String, MovementSpeedCalculation>,
        carry_weight: Option<&CarryWeightCalculation>,
    ) -> Self {
        let desc = desc.into();
        let effect = movement_speeds
            .get(&desc)
            .cloned()
            .map(Effect::MovementSpeed)
            .or_else(|| {
                carry_weight
                    .filter(|calc| calc.name == desc)
                    .cloned()
                    .map(Effect::CarryWeight)
            });
        Self {
            effect,
            desc,
            duration: duration.into(),
        }
    }
}

/// A rendered effect-table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedEffect {
    /// Row name.
    pub desc: String,
    /// Rendered value.
    pub value: String,
    /// Trailing text (duration).
    pub suffix: String,
}

impl CalculatedEffect {
    /// The `(desc, value, suffix)` tuple written back to the sheet.
    pub fn to_row(&self) -> [String; 3] {
        [self.desc.clone(), self.value.clone(), self.suffix.clone()]
    }
}

/// Inputs shared by every effect row.
#[derive(Debug, Clone, Copy)]
pub struct EffectContext<'a> {
    /// Attribute levels.
    pub attributes: &'a [AttributeStat],
    /// Core skill levels.
    pub skills: &'a [SkillStat],
    /// Equipment list.
    pub equipment: &'a [EquipmentItem],
    /// Resolved load.
    pub weight: &'a WeightSummary,
}

/// Render every effect-table row. Rows naming nothing known render blank.
pub fn calculated_effect_table(entries: &[EffectEntry], ctx: &EffectContext<'_>) -> Vec<CalculatedEffect> {
    entries.iter().map(|entry| calculate_effect(entry, ctx)).collect()
}

fn calculate_effect(entry: &EffectEntry, ctx: &EffectContext<'_>) -> CalculatedEffect {
    let value = match &entry.effect {
        Some(Effect::MovementSpeed(calc)) => calc.describe(ctx.attributes, ctx.skills, &ctx.weight.class),
        Some(Effect::CarryWeight(calc)) => {
            format!("{} lb", calc.max_carry_weight(ctx.attributes, ctx.skills))
        }
        None => {
            return match entry.desc.as_str() {
                DEFENSE_LEVEL => CalculatedEffect {
                    desc: entry.desc.clone(),
                    value: describe_defense(&total_defense(ctx.equipment)),
                    suffix: String::new(),
                },
                INVENTORY_WEIGHT => CalculatedEffect {
                    desc: entry.desc.clone(),
                    value: format!(
                        "{}/{} lb ({})",
                        fixed(ctx.weight.total, 2),
                        fixed(ctx.weight.max, 2),
                        ctx.weight.class.name
                    ),
                    suffix: String::new(),
                },
                _ => CalculatedEffect::default(),
            };
        }
    };
    CalculatedEffect {
        desc: entry.desc.clone(),
        value,
        suffix: entry.duration.clone(),
    }
}

/// Sum the defense classes of every usable item.
pub fn total_defense(equipment: &[EquipmentItem]) -> DefenseClass {
    let zero = DefenseClass {
        name: DEFENSE_LEVEL.to_string(),
        physical: 0.0,
        mental: 0.0,
        spiritual: 0.0,
    };
    equipped_items(equipment)
        .flat_map(|item| item.defense_classes())
        .fold(zero, |acc, defense| acc.plus(defense))
}

fn describe_defense(defense: &DefenseClass) -> String {
    format!(
        "Physical: {}, Mental: {}, Spiritual: {}",
        fixed(defense.physical, 2),
        fixed(defense.mental, 2),
        fixed(defense.spiritual, 2)
    )
}

/// Attribute-determined modifiers switched on by the effect table.
///
/// A row named after a modifier activates it; the inventory weight row
/// activates the modifier named after the current weight class.
pub fn active_determined_modifiers(
    entries: &[EffectEntry],
    modifiers: &BTreeMap<String, AttributeDeterminedDiceMod>,
    weight_class: &WeightClass,
) -> MechResult<Vec<AttributeDeterminedDiceMod>> {
    let mut active = Vec::new();
    for entry in entries {
        if let Some(modifier) = modifiers.get(&entry.desc) {
            active.push(modifier.clone());
        } else if entry.desc == INVENTORY_WEIGHT {
            let modifier = modifiers
                .get(&weight_class.name)
                .ok_or_else(|| MechError::unknown("attribute determined dice modifier", &weight_class.name))?;
            active.push(modifier.clone());
        }
    }
    Ok(active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DicePoolModification;
    use crate::item::fixtures::{equip, item};
    use crate::item::ItemClass;
    use crate::level::Level;

    fn classes() -> Vec<WeightClass> {
        vec![
            WeightClass {
                name: "Light".to_string(),
                bottom_percent: 0.0,
                top_percent: 0.5,
                movement_speed_percent: 1.0,
            },
            WeightClass {
                name: "Heavy".to_string(),
                bottom_percent: 0.5,
                top_percent: 1.0,
                movement_speed_percent: 0.5,
            },
            WeightClass {
                name: "Overloaded".to_string(),
                bottom_percent: 1.0,
                top_percent: f64::MAX,
                movement_speed_percent: 0.0,
            },
        ]
    }

    fn carry() -> CarryWeightCalculation {
        CarryWeightCalculation {
            name: "Carry Weight".to_string(),
            base_weight: 50,
            governing_attribute: "STR".to_string(),
            weight_per_attribute: 25,
            governing_skill: "Athletics".to_string(),
            weight_per_skill: 10,
        }
    }

    fn walk() -> MovementSpeedCalculation {
        MovementSpeedCalculation {
            desc: "Movement Speed".to_string(),
            base_speed: 30,
            governing_attributes: vec!["RX".to_string()],
            ft_per_attribute: 5,
            governing_skill: "Athletics".to_string(),
            ft_per_skill: 5,
        }
    }

    fn str_stat(level: Level) -> Vec<AttributeStat> {
        vec![AttributeStat {
            attribute: "STR".to_string(),
            level,
        }]
    }

    #[test]
    fn max_carry_weight_adds_bonuses() {
        // 2*25 + 50 + 0*10
        assert_eq!(carry().max_carry_weight(&str_stat(Level::Two), &[]), 100);
        // missing attribute: -1*25 + 50
        assert_eq!(carry().max_carry_weight(&[], &[]), 25);
    }

    #[test]
    fn weight_class_brackets() {
        let summary = WeightSummary::resolve(60.0, 100.0, &classes()).unwrap();
        assert_eq!(summary.class.name, "Heavy");
        let summary = WeightSummary::resolve(0.0, 100.0, &classes()).unwrap();
        assert_eq!(summary.class.name, "Light");
    }

    #[test]
    fn no_capacity_uses_last_class() {
        let summary = WeightSummary::resolve(10.0, 0.0, &classes()).unwrap();
        assert_eq!(summary.class.name, "Overloaded");
    }

    #[test]
    fn load_outside_every_bracket_fails() {
        let err = WeightSummary::resolve(10.0, 100.0, &classes()[1..]).unwrap_err();
        assert!(matches!(err, MechError::NoWeightClass { .. }));
    }

    #[test]
    fn movement_speed_never_negative() {
        let mut calc = walk();
        calc.base_speed = 0;
        assert_eq!(calc.speed(-1, -1), 0);
        assert_eq!(walk().speed(1, 2), 45);
    }

    #[test]
    fn movement_speed_scaled_by_weight_class() {
        let classes = classes();
        // (30 - 5 + 0) * 0.5 = 12.5, rounded away from zero
        assert_eq!(walk().describe(&[], &[], &classes[1]), "13 ft");
    }

    #[test]
    fn effect_table_rows() {
        let armor = item(
            "Chainmail",
            vec![ItemClass::Defense(DefenseClass {
                name: "Medium Armor".to_string(),
                physical: 2.0,
                mental: 0.5,
                spiritual: 0.25,
            })],
            40.0,
        );
        let equipment = vec![equip(armor, true, 1)];
        let weight = WeightSummary::resolve(40.0, 100.0, &classes()).unwrap();
        let speeds: BTreeMap<String, MovementSpeedCalculation> =
            [(walk().desc.clone(), walk())].into_iter().collect();
        let entries = vec![
            EffectEntry::new("Movement Speed", "Always", &speeds, Some(&carry())),
            EffectEntry::new(DEFENSE_LEVEL, "", &speeds, Some(&carry())),
            EffectEntry::new(INVENTORY_WEIGHT, "", &speeds, Some(&carry())),
            EffectEntry::new("Carry Weight", "", &speeds, Some(&carry())),
            EffectEntry::new("Blessed", "1 hour", &speeds, Some(&carry())),
        ];
        let ctx = EffectContext {
            attributes: &[],
            skills: &[],
            equipment: &equipment,
            weight: &weight,
        };
        let rows: Vec<[String; 3]> = calculated_effect_table(&entries, &ctx)
            .iter()
            .map(CalculatedEffect::to_row)
            .collect();
        assert_eq!(rows[0], ["Movement Speed", "25 ft", "Always"].map(String::from));
        assert_eq!(
            rows[1],
            [DEFENSE_LEVEL, "Physical: 2.00, Mental: 0.50, Spiritual: 0.25", ""].map(String::from)
        );
        assert_eq!(rows[2], [INVENTORY_WEIGHT, "40.00/100.00 lb (Light)", ""].map(String::from));
        assert_eq!(rows[3], ["Carry Weight", "25 lb", ""].map(String::from));
        assert_eq!(rows[4], ["", "", ""].map(String::from));
    }

    #[test]
    fn effect_rows_activate_modifiers() {
        let modifier = |name: &str| AttributeDeterminedDiceMod {
            name: name.to_string(),
            attributes_to_effect: vec!["RX".to_string()],
            dice_modification: DicePoolModification::RemoveDice(1),
        };
        let modifiers: BTreeMap<String, AttributeDeterminedDiceMod> = ["Blinded", "Heavy"]
            .into_iter()
            .map(|name| (name.to_string(), modifier(name)))
            .collect();
        let speeds = BTreeMap::new();
        let entries = vec![
            EffectEntry::new("Blinded", "", &speeds, None),
            EffectEntry::new(INVENTORY_WEIGHT, "", &speeds, None),
            EffectEntry::new("Rested", "", &speeds, None),
        ];
        let active = active_determined_modifiers(&entries, &modifiers, &classes()[1]).unwrap();
        let names: Vec<&str> = active.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Blinded", "Heavy"]);

        let err = active_determined_modifiers(&entries, &modifiers, &classes()[0]).unwrap_err();
        assert!(matches!(err, MechError::UnknownEntry { .. }));
    }
}
