//! Dice types, pools, and pool modifications.
//!
//! Fallen rolls are expressed as counts of six polyhedral die types. A pool
//! is never rolled here; the engine only derives how many dice of each type
//! a character throws and the stats that scale with the dice total.

pub mod modification;
pub mod pool;

pub use modification::DicePoolModification;
pub use pool::DicePool;

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
}

impl Die {
    /// Every die type, smallest first. Dice removal cascades in this order.
    pub const ALL: [Die; 6] = [Die::D4, Die::D6, Die::D8, Die::D10, Die::D12, Die::D20];

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }

    /// Parse the side count that follows the `d` in `"2d6"`.
    pub fn from_sides_token(s: &str) -> Option<Self> {
        match s.trim() {
            "4" => Some(Self::D4),
            "6" => Some(Self::D6),
            "8" => Some(Self::D8),
            "10" => Some(Self::D10),
            "12" => Some(Self::D12),
            "20" => Some(Self::D20),
            _ => None,
        }
    }

    /// Parse a die from a string like "d20" or "D6".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::from_sides_token(s.strip_prefix('d')?)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D8.sides(), 8);
        assert_eq!(Die::D10.sides(), 10);
        assert_eq!(Die::D12.sides(), 12);
        assert_eq!(Die::D20.sides(), 20);
    }

    #[test]
    fn die_from_str() {
        assert_eq!(Die::from_str_tag("d20"), Some(Die::D20));
        assert_eq!(Die::from_str_tag("D6"), Some(Die::D6));
        assert_eq!(Die::from_str_tag("d100"), None);
        assert_eq!(Die::from_str_tag("6"), None);
        assert_eq!(Die::from_sides_token("12"), Some(Die::D12));
        assert_eq!(Die::from_sides_token("7"), None);
    }

    #[test]
    fn die_display() {
        assert_eq!(Die::D20.to_string(), "d20");
        assert_eq!(Die::D4.to_string(), "d4");
    }

    #[test]
    fn cascade_order_is_smallest_first() {
        let sides: Vec<u32> = Die::ALL.iter().map(|d| d.sides()).collect();
        assert_eq!(sides, vec![4, 6, 8, 10, 12, 20]);
    }
}
