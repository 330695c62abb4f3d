//! Directed adjacency rules.

use indexmap::Equivalent;
use quilt_core::{Coord, Tile};
use std::hash::{Hash, Hasher};

/// A directed adjacency fact: `origin` may appear with `adjacent` at the
/// relative offset `direction`.
///
/// Equality and hashing are structural, so rule sets deduplicate naturally.
/// Direction validity (non-zero, correct arity, membership in the model's
/// [`DirectionSet`](crate::DirectionSet)) is enforced by the enclosing
/// model, not here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdjacencyRule<T> {
    /// The tile at the origin cell.
    pub origin: T,
    /// The tile at the adjacent cell.
    pub adjacent: T,
    /// Offset from origin to adjacent.
    pub direction: Coord,
}

impl<T: Tile> AdjacencyRule<T> {
    /// Create a rule.
    pub fn new(origin: T, adjacent: T, direction: Coord) -> Self {
        Self {
            origin,
            adjacent,
            direction,
        }
    }

    /// The same adjacency viewed from the other cell:
    /// `(adjacent, origin, -direction)`.
    pub fn inverse(&self) -> Self {
        Self {
            origin: self.adjacent.clone(),
            adjacent: self.origin.clone(),
            direction: self.direction.negated(),
        }
    }
}

/// Borrowed-key mirror of [`AdjacencyRule`] for allocation-free set lookups.
///
/// The propagation inner loop tests rule membership once per
/// (tile, direction) pair; going through this key avoids cloning tiles just
/// to build a probe value. Hashes field-for-field identically to the derived
/// `AdjacencyRule` hash.
pub(crate) struct RuleKey<'a, T> {
    pub origin: &'a T,
    pub adjacent: &'a T,
    pub direction: &'a Coord,
}

impl<T: Tile> Hash for RuleKey<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.adjacent.hash(state);
        self.direction.hash(state);
    }
}

impl<T: Tile> Equivalent<AdjacencyRule<T>> for RuleKey<'_, T> {
    fn equivalent(&self, rule: &AdjacencyRule<T>) -> bool {
        *self.origin == rule.origin
            && *self.adjacent == rule.adjacent
            && *self.direction == rule.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    #[test]
    fn inverse_swaps_tiles_and_negates_direction() {
        let rule = AdjacencyRule::new('a', 'b', Coord::from([1, 0]));
        let inv = rule.inverse();
        assert_eq!(inv.origin, 'b');
        assert_eq!(inv.adjacent, 'a');
        assert_eq!(inv.direction, Coord::from([-1, 0]));
        assert_eq!(inv.inverse(), rule);
    }

    #[test]
    fn structural_equality_deduplicates() {
        let mut rules = IndexSet::new();
        rules.insert(AdjacencyRule::new('a', 'b', Coord::from([1])));
        rules.insert(AdjacencyRule::new('a', 'b', Coord::from([1])));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn rule_key_finds_owned_rule() {
        let mut rules = IndexSet::new();
        rules.insert(AdjacencyRule::new('a', 'b', Coord::from([1])));

        let direction = Coord::from([1]);
        let key = RuleKey {
            origin: &'a',
            adjacent: &'b',
            direction: &direction,
        };
        assert!(rules.contains(&key));

        let other = Coord::from([-1]);
        let miss = RuleKey {
            origin: &'a',
            adjacent: &'b',
            direction: &other,
        };
        assert!(!rules.contains(&miss));
    }
}
