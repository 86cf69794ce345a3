//! One-handed, two-handed, and dual-wielded variants of a roll.

use serde::{Deserialize, Serialize};

use crate::dice::DicePoolModification;
use crate::item::{ConduitClass, WeaponClass};

/// How an item is held for a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    /// Held in both hands.
    TwoHanded,
    /// Held in one hand.
    OneHanded,
    /// One in each hand.
    DualWielded,
}

impl Handedness {
    /// Suffix appended to the roll label.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::TwoHanded => " (Two-handed)",
            Self::OneHanded => " (One-handed)",
            Self::DualWielded => " (Dual-wielded)",
        }
    }
}

/// Something held in the hands to make a roll.
pub trait Wieldable {
    /// Dice added when held in both hands.
    fn two_handed_dice(&self) -> DicePoolModification;
    /// Dice added when held in one hand, if allowed.
    fn one_handed_dice(&self) -> Option<DicePoolModification>;
    /// Extra dice when dual-wielded, if allowed.
    fn dual_wield_bonus(&self) -> Option<DicePoolModification>;
}

impl Wieldable for WeaponClass {
    fn two_handed_dice(&self) -> DicePoolModification {
        self.two_handed_dice
    }

    fn one_handed_dice(&self) -> Option<DicePoolModification> {
        self.one_handed_dice
    }

    fn dual_wield_bonus(&self) -> Option<DicePoolModification> {
        self.dual_wield_bonus
    }
}

impl Wieldable for ConduitClass {
    fn two_handed_dice(&self) -> DicePoolModification {
        self.two_handed_dice
    }

    fn one_handed_dice(&self) -> Option<DicePoolModification> {
        self.one_handed_dice
    }

    fn dual_wield_bonus(&self) -> Option<DicePoolModification> {
        self.dual_wield_bonus
    }
}

/// A grip and the dice it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WieldingVariant {
    /// The grip.
    pub handedness: Handedness,
    /// Dice the grip contributes.
    pub dice_modifications: Vec<DicePoolModification>,
}

/// Every grip an item supports, in two-handed, one-handed, dual-wielded
/// order.
///
/// Two-handed is always offered. One-handed is offered when configured and
/// different from two-handed. Dual-wielding needs both a bonus and one-handed
/// dice.
pub fn wielding_variants(item: &impl Wieldable) -> Vec<WieldingVariant> {
    let two_handed = item.two_handed_dice();
    let mut variants = vec![WieldingVariant {
        handedness: Handedness::TwoHanded,
        dice_modifications: vec![two_handed],
    }];
    let Some(one_handed) = item.one_handed_dice() else {
        return variants;
    };
    if one_handed != two_handed {
        variants.push(WieldingVariant {
            handedness: Handedness::OneHanded,
            dice_modifications: vec![one_handed],
        });
    }
    if let Some(bonus) = item.dual_wield_bonus() {
        variants.push(WieldingVariant {
            handedness: Handedness::DualWielded,
            dice_modifications: vec![one_handed, bonus],
        });
    }
    variants
}
