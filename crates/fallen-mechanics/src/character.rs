//! The character aggregate and the build that produces it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combat::{CombatRoll, magic_combat_rolls, weapon_combat_rolls};
use crate::config::EngineConfig;
use crate::effects::{
    CalculatedEffect, EffectContext, WeightSummary, active_determined_modifiers, calculated_effect_table,
};
use crate::error::{MechError, MechResult};
use crate::item::equipped_weight;
use crate::progression::{RollContext, SkillRoll, VocationRoll};
use crate::rules::{CharacterInput, RuleRegistry, RuleTables, SheetSnapshot};

/// Every derived number on a character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// One roll per vocation, with its vocational skills.
    pub vocation_rolls: Vec<VocationRoll>,
    /// One roll per core skill.
    pub core_skill_rolls: Vec<SkillRoll>,
    /// Weapon rolls followed by magic rolls.
    pub combat_rolls: Vec<CombatRoll>,
    /// The rendered effect table.
    pub calculated_effect_table: Vec<CalculatedEffect>,
}

/// Build a character with the default engine settings.
pub fn build_character(tables: &RuleTables, input: &CharacterInput) -> MechResult<Character> {
    build_character_with(tables, input, &EngineConfig::default())
}

/// Build a character from a parsed sheet snapshot, using its settings.
pub fn build_from_snapshot(snapshot: &SheetSnapshot) -> MechResult<Character> {
    build_character_with(&snapshot.rules, &snapshot.character, &snapshot.config)
}

/// Build a character.
///
/// Any failed lookup or zero divisor aborts the whole build.
pub fn build_character_with(
    tables: &RuleTables,
    input: &CharacterInput,
    config: &EngineConfig,
) -> MechResult<Character> {
    let registry = RuleRegistry::build(tables)?;
    let stats = registry.resolve_character(input)?;

    let carry_weight = registry
        .carry_weight
        .as_ref()
        .ok_or(MechError::MissingCarryWeightCalculation)?;
    let max_weight = carry_weight.max_carry_weight(&stats.attributes, &stats.skills) as f64;
    let weight = WeightSummary::resolve(equipped_weight(&stats.equipment), max_weight, &registry.weight_classes)?;

    let determined = active_determined_modifiers(
        &stats.effects,
        &registry.attribute_determined_dice_mods,
        &weight.class,
    )?;
    let ctx = RollContext::new(&stats.attributes, &determined);

    let mut combat_rolls = weapon_combat_rolls(&stats.equipment, &stats.vocations, &ctx)?;
    combat_rolls.extend(magic_combat_rolls(
        &stats.vocations,
        &stats.equipment,
        &registry.magic_rules(&config.magic_base_dice),
        &ctx,
    )?);

    let effect_ctx = EffectContext {
        attributes: &stats.attributes,
        skills: &stats.skills,
        equipment: &stats.equipment,
        weight: &weight,
    };
    let character = Character {
        vocation_rolls: stats
            .vocations
            .iter()
            .map(|vocation| VocationRoll::build(vocation, &ctx, &config.base_roll_dice))
            .collect(),
        core_skill_rolls: SkillRoll::build_all(&stats.skills, &ctx, &config.base_roll_dice),
        combat_rolls,
        calculated_effect_table: calculated_effect_table(&stats.effects, &effect_ctx),
    };
    debug!(
        vocations = character.vocation_rolls.len(),
        combat_rolls = character.combat_rolls.len(),
        weight_class = %weight.class.name,
        "character built"
    );
    Ok(character)
}
