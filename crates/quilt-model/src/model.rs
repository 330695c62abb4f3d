//! The [`AdjacencyModel`]: rules, weights, and entropy, assembled once.

use crate::direction::DirectionSet;
use crate::error::ModelError;
use crate::rule::{AdjacencyRule, RuleKey};
use crate::weight::TileWeight;
use indexmap::{IndexMap, IndexSet};
use quilt_core::{Coord, Tile};
use quilt_space::{GridRead, Space};

/// Everything the solver needs to know about a tiling style.
///
/// Built once — from an example tiling or from explicit rules and counts —
/// and read-only thereafter, so a single model can back any number of
/// concurrent solver runs.
///
/// Rule membership is O(1) (hash set with borrowed-key probing), which the
/// propagation inner loop depends on.
///
/// # Examples
///
/// ```
/// use quilt_core::Coord;
/// use quilt_model::AdjacencyModel;
/// use quilt_space::{DenseGrid, Space};
///
/// let space = Space::bounded(&[4]).unwrap();
/// let sample = DenseGrid::from_values(space, vec!['a', 'b', 'a', 'b']).unwrap();
/// let model = AdjacencyModel::from_sample(&sample).unwrap();
///
/// assert!(model.allows(&'a', &'b', &Coord::from([1])));
/// assert!(!model.allows(&'a', &'a', &Coord::from([1])));
/// assert_eq!(model.weight_of(&'a').unwrap().weight, 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyModel<T> {
    directions: DirectionSet,
    rules: IndexSet<AdjacencyRule<T>>,
    weights: IndexMap<T, TileWeight>,
    total: TileWeight,
    max_entropy: f64,
}

impl<T: Tile> AdjacencyModel<T> {
    /// Learn a model from an example tiling.
    ///
    /// Every occurrence of a tile increments its weight. Every adjacent pair
    /// of present tiles — neighbors along each non-zero offset of the
    /// sample space's [`DirectionSet`], wrapping periodic axes — records a
    /// rule and its inverse. Absent cells (sparse samples) contribute
    /// neither weights nor rules.
    ///
    /// # Errors
    ///
    /// [`ModelError::EmptySample`] when no cell holds a tile.
    pub fn from_sample<G: GridRead<T>>(sample: &G) -> Result<Self, ModelError> {
        let directions = DirectionSet::from_space(sample.space())?;

        let mut counts: IndexMap<T, u64> = IndexMap::new();
        let mut rules: IndexSet<AdjacencyRule<T>> = IndexSet::new();
        for coord in sample.space().iter() {
            let Some(tile) = sample.get(&coord) else {
                continue;
            };
            *counts.entry(tile.clone()).or_insert(0) += 1;

            for offset in directions.iter() {
                let stepped = coord.add(offset)?;
                if !sample.space().in_bounds(&stepped) {
                    continue;
                }
                let neighbor = sample.space().wrap(&stepped)?;
                let Some(adjacent) = sample.get(&neighbor) else {
                    continue;
                };
                let rule = AdjacencyRule::new(tile.clone(), adjacent.clone(), offset.clone());
                rules.insert(rule.inverse());
                rules.insert(rule);
            }
        }

        Self::assemble(directions, rules, counts)
    }

    /// Assemble a model from explicit rules and per-tile occurrence counts.
    ///
    /// Unlike [`from_sample`](Self::from_sample), no inverses are added: the
    /// caller supplies exactly the rule set it wants. Duplicate rules are
    /// ignored; duplicate count entries accumulate.
    ///
    /// # Errors
    ///
    /// - [`ModelError::DimensionMismatch`] when a rule direction's arity
    ///   disagrees with `space`.
    /// - [`ModelError::InvalidDirection`] when a rule direction is zero or
    ///   not an offset of the space's direction set.
    /// - [`ModelError::MissingWeight`] when a rule references a tile with no
    ///   positive count.
    /// - [`ModelError::EmptySample`] when `counts` is empty.
    pub fn from_parts(
        space: &Space,
        rules: impl IntoIterator<Item = AdjacencyRule<T>>,
        counts: impl IntoIterator<Item = (T, u64)>,
    ) -> Result<Self, ModelError> {
        let directions = DirectionSet::from_space(space)?;

        let mut totals: IndexMap<T, u64> = IndexMap::new();
        for (tile, count) in counts {
            *totals.entry(tile).or_insert(0) += count;
        }
        totals.retain(|_, count| *count > 0);

        let mut deduped: IndexSet<AdjacencyRule<T>> = IndexSet::new();
        for rule in rules {
            if rule.direction.ndim() != space.ndim() {
                return Err(ModelError::DimensionMismatch {
                    expected: space.ndim(),
                    actual: rule.direction.ndim(),
                });
            }
            if directions.index_of(&rule.direction).is_none() {
                return Err(ModelError::InvalidDirection {
                    direction: rule.direction.clone(),
                });
            }
            for tile in [&rule.origin, &rule.adjacent] {
                if !totals.contains_key(tile) {
                    return Err(ModelError::MissingWeight {
                        tile: format!("{tile:?}"),
                    });
                }
            }
            deduped.insert(rule);
        }

        Self::assemble(directions, deduped, totals)
    }

    fn assemble(
        directions: DirectionSet,
        rules: IndexSet<AdjacencyRule<T>>,
        counts: IndexMap<T, u64>,
    ) -> Result<Self, ModelError> {
        if counts.is_empty() {
            return Err(ModelError::EmptySample);
        }

        let mut total = TileWeight::ZERO;
        let weights: IndexMap<T, TileWeight> = counts
            .into_iter()
            .map(|(tile, count)| {
                let weight = TileWeight::from_count(count);
                total.accumulate(&weight);
                (tile, weight)
            })
            .collect();
        let max_entropy = total.entropy();

        Ok(Self {
            directions,
            rules,
            weights,
            total,
            max_entropy,
        })
    }

    /// The adjacency offsets of this model's space.
    pub fn directions(&self) -> &DirectionSet {
        &self.directions
    }

    /// Number of spatial dimensions.
    pub fn ndim(&self) -> usize {
        self.directions.ndim()
    }

    /// Iterate over the rule set in deterministic order.
    pub fn rules(&self) -> impl Iterator<Item = &AdjacencyRule<T>> {
        self.rules.iter()
    }

    /// Number of distinct rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// O(1) rule membership: may `origin` sit with `adjacent` at `direction`?
    pub fn allows(&self, origin: &T, adjacent: &T, direction: &Coord) -> bool {
        self.rules.contains(&RuleKey {
            origin,
            adjacent,
            direction,
        })
    }

    /// Per-tile weights in deterministic order.
    pub fn weights(&self) -> &IndexMap<T, TileWeight> {
        &self.weights
    }

    /// The weight of one tile, if the model knows it.
    pub fn weight_of(&self, tile: &T) -> Option<TileWeight> {
        self.weights.get(tile).copied()
    }

    /// Number of distinct tiles.
    pub fn tile_count(&self) -> usize {
        self.weights.len()
    }

    /// Sum of all tile weights (and their log terms).
    pub fn total(&self) -> TileWeight {
        self.total
    }

    /// Shannon entropy of the full tile multiset — the entropy every cell
    /// starts from.
    pub fn max_entropy(&self) -> f64 {
        self.max_entropy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quilt_space::{DenseGrid, SparseGrid};

    fn c(components: &[i32]) -> Coord {
        Coord::from(components)
    }

    fn alternating_sample() -> DenseGrid<char> {
        let space = Space::bounded(&[6]).unwrap();
        DenseGrid::from_values(space, vec!['a', 'b', 'a', 'b', 'a', 'b']).unwrap()
    }

    // ── Learning from samples ───────────────────────────────────

    #[test]
    fn learns_alternation_rules_only() {
        let model = AdjacencyModel::from_sample(&alternating_sample()).unwrap();
        assert_eq!(model.rule_count(), 4);
        for direction in [c(&[1]), c(&[-1])] {
            assert!(model.allows(&'a', &'b', &direction));
            assert!(model.allows(&'b', &'a', &direction));
            assert!(!model.allows(&'a', &'a', &direction));
            assert!(!model.allows(&'b', &'b', &direction));
        }
    }

    #[test]
    fn every_adjacent_pair_becomes_a_rule_with_inverse() {
        let space = Space::bounded(&[2, 2]).unwrap();
        let sample =
            DenseGrid::from_values(space, vec!['a', 'b', 'b', 'a']).unwrap();
        let model = AdjacencyModel::from_sample(&sample).unwrap();

        for (coord, tile) in sample.iter() {
            for offset in model.directions().iter() {
                let stepped = coord.add(offset).unwrap();
                if let Some(adjacent) = sample.get(&stepped) {
                    assert!(
                        model.allows(tile, adjacent, offset),
                        "missing rule ({tile:?}, {adjacent:?}, {offset})"
                    );
                    assert!(
                        model.allows(adjacent, tile, &offset.negated()),
                        "missing inverse ({adjacent:?}, {tile:?}, -{offset})"
                    );
                }
            }
        }
    }

    #[test]
    fn counts_become_weights() {
        let model = AdjacencyModel::from_sample(&alternating_sample()).unwrap();
        assert_eq!(model.weight_of(&'a').unwrap().weight, 3.0);
        assert_eq!(model.weight_of(&'b').unwrap().weight, 3.0);
        assert_eq!(model.total().weight, 6.0);
        assert!((model.max_entropy() - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn single_tile_sample_has_zero_entropy() {
        let space = Space::bounded(&[5]).unwrap();
        let sample = DenseGrid::filled(space, 'x');
        let model = AdjacencyModel::from_sample(&sample).unwrap();
        assert_eq!(model.tile_count(), 1);
        assert!(model.max_entropy().abs() < 1e-12);
        assert!(model.allows(&'x', &'x', &c(&[1])));
    }

    #[test]
    fn periodic_sample_wraps_adjacency_around() {
        let space = Space::periodic(&[3]).unwrap();
        let sample = DenseGrid::from_values(space, vec!['a', 'b', 'c']).unwrap();
        let model = AdjacencyModel::from_sample(&sample).unwrap();
        // The seam pair (c at 2, a at 0) is an adjacency on a ring.
        assert!(model.allows(&'c', &'a', &c(&[1])));
        assert!(model.allows(&'a', &'c', &c(&[-1])));
    }

    #[test]
    fn bounded_sample_has_no_seam_rule() {
        let model = AdjacencyModel::from_sample(&alternating_sample()).unwrap();
        // 'b' at 5 and 'a' at 0 never meet on a bounded line.
        // (They happen to alternate here, so check rule count instead:
        // only the four alternation rules exist.)
        assert_eq!(model.rule_count(), 4);
    }

    #[test]
    fn sparse_sample_skips_absent_cells() {
        let mut sample = SparseGrid::new(Space::bounded(&[5]).unwrap());
        sample.insert(c(&[0]), 'a').unwrap();
        sample.insert(c(&[1]), 'b').unwrap();
        sample.insert(c(&[3]), 'a').unwrap();
        let model = AdjacencyModel::from_sample(&sample).unwrap();

        // The gap at 2 separates 'b' from the second 'a'.
        assert!(model.allows(&'a', &'b', &c(&[1])));
        assert!(!model.allows(&'b', &'a', &c(&[1])));
        assert_eq!(model.weight_of(&'a').unwrap().weight, 2.0);
    }

    #[test]
    fn empty_sample_rejected() {
        let sample: SparseGrid<char> = SparseGrid::new(Space::bounded(&[4]).unwrap());
        assert_eq!(
            AdjacencyModel::from_sample(&sample).unwrap_err(),
            ModelError::EmptySample
        );
    }

    // ── Explicit construction ───────────────────────────────────

    #[test]
    fn from_parts_keeps_rules_verbatim() {
        let space = Space::bounded(&[4]).unwrap();
        let model = AdjacencyModel::from_parts(
            &space,
            vec![AdjacencyRule::new('a', 'b', c(&[1]))],
            vec![('a', 1), ('b', 1)],
        )
        .unwrap();
        assert!(model.allows(&'a', &'b', &c(&[1])));
        // No automatic inverse on this path.
        assert!(!model.allows(&'b', &'a', &c(&[-1])));
    }

    #[test]
    fn from_parts_rejects_wrong_arity_direction() {
        let space = Space::bounded(&[4]).unwrap();
        let err = AdjacencyModel::from_parts(
            &space,
            vec![AdjacencyRule::new('a', 'b', c(&[1, 0]))],
            vec![('a', 1), ('b', 1)],
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::DimensionMismatch { .. }));
    }

    #[test]
    fn from_parts_rejects_zero_and_far_directions() {
        let space = Space::bounded(&[4]).unwrap();
        for direction in [c(&[0]), c(&[2])] {
            let err = AdjacencyModel::from_parts(
                &space,
                vec![AdjacencyRule::new('a', 'b', direction)],
                vec![('a', 1), ('b', 1)],
            )
            .unwrap_err();
            assert!(matches!(err, ModelError::InvalidDirection { .. }));
        }
    }

    #[test]
    fn from_parts_rejects_unweighted_rule_tiles() {
        let space = Space::bounded(&[4]).unwrap();
        let err = AdjacencyModel::from_parts(
            &space,
            vec![AdjacencyRule::new('a', 'b', c(&[1]))],
            vec![('a', 1), ('b', 0)],
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::MissingWeight { .. }));
    }

    #[test]
    fn from_parts_accumulates_duplicate_counts() {
        let space = Space::bounded(&[4]).unwrap();
        let model = AdjacencyModel::from_parts(
            &space,
            Vec::new(),
            vec![('a', 2), ('a', 3)],
        )
        .unwrap();
        assert_eq!(model.weight_of(&'a').unwrap().weight, 5.0);
    }
}
