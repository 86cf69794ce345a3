//! Attribute, skill, and vocation progression.
//!
//! Levels feed rolls in two ways: a level adds (or removes) d6s directly,
//! and an attribute-determined modifier adds a configured dice change to
//! every roll governed by one of its attributes.

pub mod attribute;
pub mod skill;
pub mod vocation;

pub use attribute::{AttributeDeterminedDiceMod, AttributeStat, attribute_level_sum};
pub use skill::{SkillRoll, SkillStat, find_skill};
pub use vocation::{VocationRoll, VocationStat, find_vocational_skill};

use crate::dice::DicePoolModification;

/// The character-wide inputs every roll draws on.
#[derive(Debug, Clone, Copy)]
pub struct RollContext<'a> {
    /// The character's attribute levels.
    pub attributes: &'a [AttributeStat],
    /// Attribute-determined modifiers active for this build.
    pub determined: &'a [AttributeDeterminedDiceMod],
}

impl<'a> RollContext<'a> {
    /// Bundle attribute stats with the active attribute-determined modifiers.
    pub fn new(attributes: &'a [AttributeStat], determined: &'a [AttributeDeterminedDiceMod]) -> Self {
        Self {
            attributes,
            determined,
        }
    }

    /// Dice granted by the summed levels of the governing attributes.
    pub fn attribute_modification(&self, governing: &[String]) -> DicePoolModification {
        DicePoolModification::from_level(attribute_level_sum(governing, self.attributes))
    }

    /// Active attribute-determined modifiers that touch any governing attribute.
    pub fn determined_modifications(&self, governing: &[String]) -> Vec<DicePoolModification> {
        attribute::attribute_determined_modifications(governing, self.determined)
    }
}
