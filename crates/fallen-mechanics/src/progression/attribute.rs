//! Attribute levels and attribute-determined dice modifiers.

use serde::{Deserialize, Serialize};

use crate::dice::DicePoolModification;
use crate::level::Level;

/// A character's level in one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeStat {
    /// Attribute name (e.g., "STR").
    pub attribute: String,
    /// Current level.
    pub level: Level,
}

/// Sum the character's levels in the named attributes.
///
/// An attribute the character has no stat for counts as level -1.
pub fn attribute_level_sum(attributes: &[String], stats: &[AttributeStat]) -> i32 {
    attributes
        .iter()
        .map(|name| {
            let mut matching = stats
                .iter()
                .filter(|stat| &stat.attribute == name)
                .map(|stat| stat.level.as_i32())
                .peekable();
            if matching.peek().is_none() {
                Level::NegOne.as_i32()
            } else {
                matching.sum()
            }
        })
        .sum()
}

/// A dice modifier applied to every roll governed by one of its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDeterminedDiceMod {
    /// Modifier name, matched against effect-table rows.
    pub name: String,
    /// Attributes whose rolls this modifier touches.
    pub attributes_to_effect: Vec<String>,
    /// The dice change applied.
    pub dice_modification: DicePoolModification,
}

impl AttributeDeterminedDiceMod {
    /// True if any of this modifier's attributes governs the roll.
    pub fn applies_to(&self, governing: &[String]) -> bool {
        self.attributes_to_effect
            .iter()
            .any(|attribute| governing.contains(attribute))
    }
}

/// The modifications of every modifier that applies to the governing attributes.
pub fn attribute_determined_modifications(
    governing: &[String],
    modifiers: &[AttributeDeterminedDiceMod],
) -> Vec<DicePoolModification> {
    modifiers
        .iter()
        .filter(|modifier| modifier.applies_to(governing))
        .map(|modifier| modifier.dice_modification)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DicePool;

    fn stat(attribute: &str, level: Level) -> AttributeStat {
        AttributeStat {
            attribute: attribute.to_string(),
            level,
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_attribute_counts_as_neg_one() {
        assert_eq!(attribute_level_sum(&names(&["STR"]), &[]), -1);
    }

    #[test]
    fn sums_only_requested_attributes() {
        let stats = vec![
            stat("STR", Level::Two),
            stat("DEX", Level::One),
            stat("INT", Level::Four),
        ];
        assert_eq!(attribute_level_sum(&names(&["STR", "DEX"]), &stats), 3);
        assert_eq!(attribute_level_sum(&names(&["STR", "CHA"]), &stats), 1);
        assert_eq!(attribute_level_sum(&[], &stats), 0);
    }

    #[test]
    fn determined_modifier_uses_intersection() {
        let modifiers = vec![
            AttributeDeterminedDiceMod {
                name: "Heavy".to_string(),
                attributes_to_effect: names(&["STR", "RX"]),
                dice_modification: DicePoolModification::RemoveDice(1),
            },
            AttributeDeterminedDiceMod {
                name: "Focus".to_string(),
                attributes_to_effect: names(&["INT"]),
                dice_modification: DicePoolModification::AddDice(DicePool::d6(1)),
            },
        ];
        assert_eq!(
            attribute_determined_modifications(&names(&["RX", "DEX"]), &modifiers),
            vec![DicePoolModification::RemoveDice(1)]
        );
        assert!(attribute_determined_modifications(&names(&["CHA"]), &modifiers).is_empty());
    }
}
