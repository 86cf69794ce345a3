//! Skills and skill rolls.

use serde::{Deserialize, Serialize};

use super::RollContext;
use crate::dice::DicePool;
use crate::level::Level;

/// A character's level in one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillStat {
    /// Skill name.
    pub name: String,
    /// Current level.
    pub level: Level,
    /// Attributes whose levels add to this skill's rolls.
    pub governing_attributes: Vec<String>,
}

impl SkillStat {
    /// A level-0 skill with no governing attributes, used when a character
    /// has never trained the skill.
    pub fn untrained(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Level::Zero,
            governing_attributes: Vec::new(),
        }
    }
}

/// Look up a skill by name.
///
/// When several entries share the name the highest level wins (the first
/// of equals); when none do, an untrained level-0 skill is returned.
pub fn find_skill(name: &str, skills: &[SkillStat]) -> SkillStat {
    skills
        .iter()
        .filter(|skill| skill.name == name)
        .fold(None, |best: Option<&SkillStat>, skill| match best {
            Some(current) if current.level >= skill.level => Some(current),
            _ => Some(skill),
        })
        .cloned()
        .unwrap_or_else(|| SkillStat::untrained(name))
}

/// The dice pool for a skill check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRoll {
    /// Skill name.
    pub desc: String,
    /// Dice thrown.
    pub dice_pool: DicePool,
    /// Skill level.
    pub level: Level,
}

impl SkillRoll {
    /// Base dice plus skill level, governing attribute levels, and matching
    /// attribute-determined modifiers.
    pub fn build(skill: &SkillStat, ctx: &RollContext<'_>, base: &DicePool) -> Self {
        let mut modifications = vec![
            skill.level.dice_modification(),
            ctx.attribute_modification(&skill.governing_attributes),
        ];
        modifications.extend(ctx.determined_modifications(&skill.governing_attributes));
        Self {
            desc: skill.name.clone(),
            dice_pool: base.apply(&modifications),
            level: skill.level,
        }
    }

    /// Roll every skill in order.
    pub fn build_all(skills: &[SkillStat], ctx: &RollContext<'_>, base: &DicePool) -> Vec<Self> {
        skills
            .iter()
            .map(|skill| Self::build(skill, ctx, base))
            .collect()
    }
}
