//! Dice pool construction and algebra.

use serde::{Deserialize, Serialize};

use super::Die;
use super::modification::DicePoolModification;

/// How many dice of each type make up a roll.
///
/// Serializes as its display string (`"1d4, 2d6"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DicePool {
    /// Number of d4.
    pub d4: u32,
    /// Number of d6.
    pub d6: u32,
    /// Number of d8.
    pub d8: u32,
    /// Number of d10.
    pub d10: u32,
    /// Number of d12.
    pub d12: u32,
    /// Number of d20.
    pub d20: u32,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pool holding `count` dice of a single type.
    pub fn of(die: Die, count: u32) -> Self {
        Self::new().with_count(die, count)
    }

    /// A pool holding `count` d6.
    pub fn d6(count: u32) -> Self {
        Self::of(Die::D6, count)
    }

    /// Returns how many dice of the given type are in the pool.
    pub fn count(&self, die: Die) -> u32 {
        match die {
            Die::D4 => self.d4,
            Die::D6 => self.d6,
            Die::D8 => self.d8,
            Die::D10 => self.d10,
            Die::D12 => self.d12,
            Die::D20 => self.d20,
        }
    }

    /// Replace the count of one die type.
    pub fn with_count(mut self, die: Die, count: u32) -> Self {
        let slot = match die {
            Die::D4 => &mut self.d4,
            Die::D6 => &mut self.d6,
            Die::D8 => &mut self.d8,
            Die::D10 => &mut self.d10,
            Die::D12 => &mut self.d12,
            Die::D20 => &mut self.d20,
        };
        *slot = count;
        self
    }

    /// Field-wise sum of two pools. Counts saturate at `u32::MAX`.
    pub fn plus(&self, other: &DicePool) -> Self {
        Self {
            d4: self.d4.saturating_add(other.d4),
            d6: self.d6.saturating_add(other.d6),
            d8: self.d8.saturating_add(other.d8),
            d10: self.d10.saturating_add(other.d10),
            d12: self.d12.saturating_add(other.d12),
            d20: self.d20.saturating_add(other.d20),
        }
    }

    /// Field-wise sum of any number of pools. The empty pool is the identity.
    pub fn combine<'a>(pools: impl IntoIterator<Item = &'a DicePool>) -> Self {
        pools
            .into_iter()
            .fold(Self::new(), |acc, pool| acc.plus(pool))
    }

    /// Remove `n` dice, smallest die type first.
    ///
    /// Whatever a die type cannot cover is taken from the next larger type;
    /// a remainder left after the d20s is dropped.
    pub fn remove_dice(&self, n: u32) -> Self {
        let mut remaining = n;
        let mut pool = *self;
        for die in Die::ALL {
            let have = pool.count(die);
            let taken = have.min(remaining);
            pool = pool.with_count(die, have - taken);
            remaining -= taken;
        }
        pool
    }

    /// Apply a single modification.
    pub fn modify(&self, modification: &DicePoolModification) -> Self {
        match modification {
            DicePoolModification::AddDice(pool) => self.plus(pool),
            DicePoolModification::RemoveDice(n) => self.remove_dice(*n),
        }
    }

    /// Apply a list of modifications.
    ///
    /// All additions are summed and applied first, then all removals are
    /// summed and applied as a single cascade.
    pub fn apply(&self, modifications: &[DicePoolModification]) -> Self {
        let mut added = *self;
        let mut removed = 0u32;
        for modification in modifications {
            match modification {
                DicePoolModification::AddDice(pool) => added = added.plus(pool),
                DicePoolModification::RemoveDice(n) => removed = removed.saturating_add(*n),
            }
        }
        added.remove_dice(removed)
    }

    /// Total number of dice in the pool.
    pub fn sum(&self) -> u32 {
        Die::ALL
            .iter()
            .fold(0u32, |total, die| total.saturating_add(self.count(*die)))
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.sum() == 0
    }

    /// Parse a display string such as `"1d4, 2d6"`.
    ///
    /// Unparsable counts read as zero and unknown die sizes contribute
    /// nothing, so any input yields a pool.
    pub fn parse(s: &str) -> Self {
        s.split(", ").fold(Self::new(), |pool, term| {
            let mut parts = term.split('d');
            let count = parts.next().unwrap_or_default().trim();
            let sides = parts.next().unwrap_or_default();
            match Die::from_sides_token(sides) {
                Some(die) => {
                    let count = count.parse::<u32>().unwrap_or(0);
                    pool.plus(&Self::of(die, count))
                }
                None => pool,
            }
        })
    }
}

impl From<String> for DicePool {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<DicePool> for String {
    fn from(pool: DicePool) -> Self {
        pool.to_string()
    }
}

impl std::ops::Add for DicePool {
    type Output = DicePool;

    fn add(self, rhs: DicePool) -> DicePool {
        self.plus(&rhs)
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms: Vec<String> = Die::ALL
            .iter()
            .filter(|die| self.count(**die) > 0)
            .map(|die| format!("{}{die}", self.count(*die)))
            .collect();
        if terms.is_empty() {
            write!(f, "0d6")
        } else {
            write!(f, "{}", terms.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool(d4: u32, d6: u32, d8: u32, d10: u32, d12: u32, d20: u32) -> DicePool {
        DicePool {
            d4,
            d6,
            d8,
            d10,
            d12,
            d20,
        }
    }

    #[test]
    fn empty_pool() {
        let p = DicePool::new();
        assert_eq!(p.sum(), 0);
        assert!(p.is_empty());
        assert_eq!(p.to_string(), "0d6");
    }

    #[test]
    fn combine_sums_fieldwise() {
        let a = pool(1, 2, 0, 0, 0, 1);
        let b = pool(0, 1, 3, 0, 2, 0);
        assert_eq!(DicePool::combine([&a, &b]), pool(1, 3, 3, 0, 2, 1));
        assert_eq!(DicePool::combine([]), DicePool::new());
    }

    #[test]
    fn remove_dice_exhausts_smallest_first() {
        assert_eq!(pool(2, 1, 0, 0, 0, 0).remove_dice(3), DicePool::new());
        assert_eq!(pool(1, 2, 0, 0, 0, 0).remove_dice(2), pool(0, 1, 0, 0, 0, 0));
    }

    #[test]
    fn remove_dice_skips_empty_tiers() {
        assert_eq!(pool(0, 0, 0, 2, 0, 1).remove_dice(2), pool(0, 0, 0, 0, 0, 1));
    }

    #[test]
    fn remove_dice_floors_at_zero() {
        assert_eq!(pool(1, 1, 1, 1, 1, 1).remove_dice(40), DicePool::new());
    }

    #[test]
    fn apply_adds_before_removing() {
        let base = DicePool::d6(3);
        let mods = [
            DicePoolModification::RemoveDice(2),
            DicePoolModification::AddDice(DicePool::of(Die::D4, 1)),
            DicePoolModification::RemoveDice(1),
        ];
        // 1d4 + 3d6, then three removals as one cascade: the d4 goes first.
        assert_eq!(base.apply(&mods), DicePool::d6(1));
    }

    #[test]
    fn removals_past_u32_max_empty_the_pool() {
        let mods = [
            DicePoolModification::RemoveDice(u32::MAX),
            DicePoolModification::RemoveDice(1),
        ];
        assert_eq!(DicePool::d6(3).apply(&mods), DicePool::new());
    }

    #[test]
    fn display_omits_empty_types() {
        assert_eq!(pool(1, 2, 0, 0, 0, 1).to_string(), "1d4, 2d6, 1d20");
        assert_eq!(DicePool::d6(3).to_string(), "3d6");
    }

    #[test]
    fn parse_display_string() {
        assert_eq!(DicePool::parse("1d4, 2d6, 1d20"), pool(1, 2, 0, 0, 0, 1));
        assert_eq!(DicePool::parse("2d6, 1d6"), DicePool::d6(3));
        assert_eq!(DicePool::parse(""), DicePool::new());
    }

    #[test]
    fn parse_is_permissive() {
        assert_eq!(DicePool::parse("xd6"), DicePool::new());
        assert_eq!(DicePool::parse("2d7, 1d8"), pool(0, 0, 1, 0, 0, 0));
        assert_eq!(DicePool::parse("garbage"), DicePool::new());
    }

    fn arb_pool() -> impl Strategy<Value = DicePool> {
        (0u32..20, 0u32..20, 0u32..20, 0u32..20, 0u32..20, 0u32..20)
            .prop_map(|(a, b, c, d, e, f)| pool(a, b, c, d, e, f))
    }

    proptest! {
        #[test]
        fn combine_with_empty_is_identity(p in arb_pool()) {
            prop_assert_eq!(DicePool::combine([&p, &DicePool::new()]), p);
        }

        #[test]
        fn removal_never_raises_a_count(p in arb_pool(), n in 0u32..150) {
            let removed = p.remove_dice(n);
            for die in Die::ALL {
                prop_assert!(removed.count(die) <= p.count(die));
            }
            prop_assert_eq!(removed.sum(), p.sum().saturating_sub(n));
        }

        #[test]
        fn display_round_trips(p in arb_pool()) {
            prop_assert_eq!(DicePool::parse(&p.to_string()), p);
        }

        #[test]
        fn huge_counts_saturate(p in arb_pool(), n in 0u32..150) {
            let mods = [
                DicePoolModification::AddDice(DicePool::d6(u32::MAX)),
                DicePoolModification::AddDice(DicePool::d6(n)),
            ];
            let grown = p.apply(&mods);
            prop_assert_eq!(grown.d6, u32::MAX);
            prop_assert_eq!(grown.sum(), u32::MAX);

            let mods = [
                DicePoolModification::RemoveDice(u32::MAX),
                DicePoolModification::RemoveDice(n),
            ];
            prop_assert_eq!(p.apply(&mods), DicePool::new());
        }
    }
}
