//! Resolving a character's sheet input against the rule registry.

use super::RuleRegistry;
use super::tables::{CharacterInput, VocationRow};
use crate::effects::EffectEntry;
use crate::error::MechResult;
use crate::item::EquipmentItem;
use crate::level::Level;
use crate::progression::{AttributeStat, SkillStat, VocationStat};

/// A character's input with every name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    /// Attribute levels.
    pub attributes: Vec<AttributeStat>,
    /// Core skills.
    pub skills: Vec<SkillStat>,
    /// Vocations, blank rows removed.
    pub vocations: Vec<VocationStat>,
    /// Equipment, blank rows removed.
    pub equipment: Vec<EquipmentItem>,
    /// Effect-table rows.
    pub effects: Vec<EffectEntry>,
}

impl RuleRegistry {
    /// Resolve attribute, skill, item, and effect names in the character input.
    pub fn resolve_character(&self, input: &CharacterInput) -> MechResult<CharacterStats> {
        let attributes = input
            .attributes
            .iter()
            .map(|row| {
                Ok(AttributeStat {
                    attribute: self.attribute(&row.attribute)?,
                    level: Level::from_i32(row.level),
                })
            })
            .collect::<MechResult<Vec<_>>>()?;

        let skills = input
            .skills
            .iter()
            .map(|row| {
                Ok(SkillStat {
                    name: row.name.clone(),
                    level: Level::from_i32(row.level),
                    governing_attributes: vec![self.attribute(&row.governing_attribute)?],
                })
            })
            .collect::<MechResult<Vec<_>>>()?;

        let vocations = input
            .vocations
            .iter()
            .filter(|row| !row.name.is_empty())
            .map(|row| self.vocation(row))
            .collect::<MechResult<Vec<_>>>()?;

        let equipment = input
            .equipment
            .iter()
            .filter(|row| !row.item.is_empty())
            .map(|row| {
                Ok(EquipmentItem {
                    equipped: row.equipped,
                    item: self.item(&row.item)?.clone(),
                    quantity: row.quantity,
                })
            })
            .collect::<MechResult<Vec<_>>>()?;

        let effects = input
            .effects
            .iter()
            .map(|row| EffectEntry::new(&row.desc, &row.duration, &self.movement_speeds, self.carry_weight.as_ref()))
            .collect();

        Ok(CharacterStats {
            attributes,
            skills,
            vocations,
            equipment,
            effects,
        })
    }

    /// A vocational skill named after a weapon class is governed by that
    /// class's attributes; any other by the vocation's.
    fn vocation(&self, row: &VocationRow) -> MechResult<VocationStat> {
        let governing_attributes = self.braced_attributes_from(&row.name)?;
        let vocational_skills = row
            .skills
            .iter()
            .filter(|skill| !skill.name.is_empty())
            .map(|skill| SkillStat {
                name: skill.name.clone(),
                level: Level::from_i32(skill.level),
                governing_attributes: self
                    .weapon_classes
                    .get(&skill.name)
                    .map_or_else(|| governing_attributes.clone(), |weapon| weapon.governing_attributes.clone()),
            })
            .collect();
        Ok(VocationStat {
            name: row.name.clone(),
            level: Level::from_i32(row.level),
            governing_attributes,
            vocational_skills,
        })
    }
}
