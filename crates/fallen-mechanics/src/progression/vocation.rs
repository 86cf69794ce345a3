//! Vocations: a trained calling with its own roll and vocational skills.

use serde::{Deserialize, Serialize};

use super::RollContext;
use super::skill::{SkillRoll, SkillStat, find_skill};
use crate::dice::DicePool;
use crate::level::Level;

/// A character's vocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocationStat {
    /// Vocation name as written on the sheet (e.g., "Ranger {DEX, RX}").
    pub name: String,
    /// Vocation level.
    pub level: Level,
    /// Attributes that govern the vocation roll.
    pub governing_attributes: Vec<String>,
    /// Skills trained under this vocation.
    pub vocational_skills: Vec<SkillStat>,
}

/// Look up a skill across every vocation's skills, as [`find_skill`] does.
pub fn find_vocational_skill(vocations: &[VocationStat], name: &str) -> SkillStat {
    let skills: Vec<SkillStat> = vocations
        .iter()
        .flat_map(|vocation| vocation.vocational_skills.iter().cloned())
        .collect();
    find_skill(name, &skills)
}

/// The dice pools for a vocation and its vocational skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocationRoll {
    /// Vocation name.
    pub name: String,
    /// Dice thrown for the vocation itself.
    pub dice_pool: DicePool,
    /// One roll per vocational skill.
    pub vocational_skills: Vec<SkillRoll>,
}

impl VocationRoll {
    /// Base dice plus governing attribute levels, vocation level, and
    /// matching attribute-determined modifiers.
    pub fn build(vocation: &VocationStat, ctx: &RollContext<'_>, base: &DicePool) -> Self {
        let mut modifications = vec![
            ctx.attribute_modification(&vocation.governing_attributes),
            vocation.level.dice_modification(),
        ];
        modifications.extend(ctx.determined_modifications(&vocation.governing_attributes));
        Self {
            name: vocation.name.clone(),
            dice_pool: base.apply(&modifications),
            vocational_skills: SkillRoll::build_all(&vocation.vocational_skills, ctx, base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::AttributeStat;

    fn vocation() -> VocationStat {
        VocationStat {
            name: "Ranger {DEX}".to_string(),
            level: Level::Two,
            governing_attributes: vec!["DEX".to_string()],
            vocational_skills: vec![
                SkillStat {
                    name: "Bow".to_string(),
                    level: Level::One,
                    governing_attributes: vec!["DEX".to_string()],
                },
                SkillStat {
                    name: "Tracking".to_string(),
                    level: Level::Zero,
                    governing_attributes: vec!["DEX".to_string()],
                },
            ],
        }
    }

    #[test]
    fn vocation_roll_and_skills() {
        let attributes = vec![AttributeStat {
            attribute: "DEX".to_string(),
            level: Level::One,
        }];
        let ctx = RollContext::new(&attributes, &[]);
        let roll = VocationRoll::build(&vocation(), &ctx, &DicePool::d6(3));
        assert_eq!(roll.dice_pool, DicePool::d6(6));
        assert_eq!(roll.vocational_skills.len(), 2);
        assert_eq!(roll.vocational_skills[0].dice_pool, DicePool::d6(5));
        assert_eq!(roll.vocational_skills[1].dice_pool, DicePool::d6(4));
    }

    #[test]
    fn find_across_vocations() {
        let found = find_vocational_skill(&[vocation()], "Bow");
        assert_eq!(found.level, Level::One);
        let missing = find_vocational_skill(&[vocation()], "Sword");
        assert_eq!(missing.level, Level::Zero);
    }
}
