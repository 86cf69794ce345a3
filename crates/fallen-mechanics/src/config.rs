//! Engine settings that the rule tables do not carry.

use serde::{Deserialize, Serialize};

use crate::dice::DicePool;

/// Base pools for rolls that are not seeded by an item tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Base pool for vocation and skill rolls.
    pub base_roll_dice: DicePool,
    /// Base pool for magic rolls made without a conduit.
    pub magic_base_dice: DicePool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_roll_dice: DicePool::d6(3),
            magic_base_dice: DicePool::d6(3),
        }
    }
}

impl EngineConfig {
    /// Set the base pool for vocation and skill rolls.
    pub fn with_base_roll_dice(mut self, dice: DicePool) -> Self {
        self.base_roll_dice = dice;
        self
    }

    /// Set the base pool for conduit-less magic rolls.
    pub fn with_magic_base_dice(mut self, dice: DicePool) -> Self {
        self.magic_base_dice = dice;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.base_roll_dice, DicePool::d6(3));
        assert_eq!(cfg.magic_base_dice, DicePool::d6(3));
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_base_roll_dice(DicePool::d6(2))
            .with_magic_base_dice(DicePool::parse("2d6, 1d8"));
        assert_eq!(cfg.base_roll_dice.sum(), 2);
        assert_eq!(cfg.magic_base_dice.sum(), 3);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: EngineConfig = serde_json::from_str(r#"{"base_roll_dice": "4d6"}"#).unwrap();
        assert_eq!(cfg.base_roll_dice, DicePool::d6(4));
        assert_eq!(cfg.magic_base_dice, DicePool::d6(3));
    }
}
