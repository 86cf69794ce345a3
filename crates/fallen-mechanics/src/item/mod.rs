//! Items, item classes, tiers, and a character's equipment.

pub mod conduit;
pub mod defense;
pub mod weapon;

pub use conduit::ConduitClass;
pub use defense::DefenseClass;
pub use weapon::{WeaponClass, WeaponResourceClass};

use serde::{Deserialize, Serialize};

use crate::dice::DicePool;

/// An item's quality tier. The tier's base dice seed every roll made with
/// the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTier {
    /// Tier name.
    pub desc: String,
    /// Tier level.
    pub level: i32,
    /// Rune slots on items of this tier.
    pub rune_slots: u32,
    /// Dice every roll with the item starts from.
    pub base_dice: DicePool,
    /// Maximum durability.
    pub durability_max: u32,
}

/// One of the roles an item can play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemClass {
    /// The item is a weapon.
    Weapon(Box<WeaponClass>),
    /// The item channels a magic skill.
    Conduit(Box<ConduitClass>),
    /// The item is ammunition or another consumable a weapon draws on.
    WeaponResource(WeaponResourceClass),
    /// The item is armor.
    Defense(DefenseClass),
}

/// An item definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item name.
    pub name: String,
    /// Every class the item belongs to, in rule-table order.
    pub item_classes: Vec<ItemClass>,
    /// Quality tier.
    pub tier: ItemTier,
    /// Listed value.
    pub value: String,
    /// Weight of one unit, in pounds.
    pub weight: f64,
}

impl Item {
    /// The item's weapon classes.
    pub fn weapon_classes(&self) -> impl Iterator<Item = &WeaponClass> {
        self.item_classes.iter().filter_map(|class| match class {
            ItemClass::Weapon(weapon) => Some(weapon.as_ref()),
            _ => None,
        })
    }

    /// The item's conduit classes.
    pub fn conduit_classes(&self) -> impl Iterator<Item = &ConduitClass> {
        self.item_classes.iter().filter_map(|class| match class {
            ItemClass::Conduit(conduit) => Some(conduit.as_ref()),
            _ => None,
        })
    }

    /// The item's weapon resource classes.
    pub fn weapon_resource_classes(&self) -> impl Iterator<Item = &WeaponResourceClass> {
        self.item_classes.iter().filter_map(|class| match class {
            ItemClass::WeaponResource(resource) => Some(resource),
            _ => None,
        })
    }

    /// The item's defense classes.
    pub fn defense_classes(&self) -> impl Iterator<Item = &DefenseClass> {
        self.item_classes.iter().filter_map(|class| match class {
            ItemClass::Defense(defense) => Some(defense),
            _ => None,
        })
    }
}

/// One line of a character's equipment list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Whether the item is equipped.
    pub equipped: bool,
    /// The item.
    pub item: Item,
    /// How many the character carries.
    pub quantity: u32,
}

impl EquipmentItem {
    /// Equipped with at least one unit on hand.
    pub fn is_usable(&self) -> bool {
        self.equipped && self.quantity > 0
    }

    /// Weight of every unit on this line.
    pub fn weight(&self) -> f64 {
        self.item.weight * f64::from(self.quantity)
    }
}

/// The usable items, in equipment order.
pub fn equipped_items(equipment: &[EquipmentItem]) -> impl Iterator<Item = &Item> {
    equipment
        .iter()
        .filter(|line| line.is_usable())
        .map(|line| &line.item)
}

/// Total weight of the usable equipment.
pub fn equipped_weight(equipment: &[EquipmentItem]) -> f64 {
    equipment
        .iter()
        .filter(|line| line.is_usable())
        .map(EquipmentItem::weight)
        .sum()
}

/// Usable items carrying a conduit for the named magic skill.
pub fn equipped_conduits_for<'a>(
    equipment: &'a [EquipmentItem],
    skill: &'a str,
) -> impl Iterator<Item = &'a Item> {
    equipped_items(equipment).filter(move |item| item.conduit_classes().any(|c| c.channels(skill)))
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small item builders shared by the combat tests.

    use super::*;
    use crate::dice::DicePoolModification;
    use crate::stats::{CalculatedRange, EngageableOpponents, Penetration, Range};

    pub fn tier(base: &str) -> ItemTier {
        ItemTier {
            desc: "Common".to_string(),
            level: 0,
            rune_slots: 0,
            base_dice: DicePool::parse(base),
            durability_max: 10,
        }
    }

    pub fn weapon_class(desc: &str) -> WeaponClass {
        WeaponClass {
            desc: desc.to_string(),
            one_handed_dice: None,
            two_handed_dice: DicePoolModification::parse("AddDice 2d6"),
            penetration: Penetration::Fixed(0),
            range: Range::Fixed(CalculatedRange {
                desc: "Reach".to_string(),
                effective: 5,
                max: 5,
            }),
            damage_types: vec!["Slashing".to_string()],
            engageable_opponents: EngageableOpponents::Fixed(1),
            dual_wield_bonus: None,
            area_of_effect: None,
            resource_class: None,
            governing_attributes: vec!["STR".to_string()],
        }
    }

    pub fn item(name: &str, classes: Vec<ItemClass>, weight: f64) -> Item {
        Item {
            name: name.to_string(),
            item_classes: classes,
            tier: tier("0d6"),
            value: "10 gp".to_string(),
            weight,
        }
    }

    pub fn equip(item: Item, equipped: bool, quantity: u32) -> EquipmentItem {
        EquipmentItem {
            equipped,
            item,
            quantity,
        }
    }
}
