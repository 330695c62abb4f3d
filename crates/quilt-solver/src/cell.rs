//! Per-cell wave state.

use crate::error::SolverError;
use crate::support::SupportCounts;
use indexmap::IndexMap;
use quilt_core::Tile;
use quilt_model::{AdjacencyModel, TileWeight};

/// The wave state of one output cell: its remaining possible tiles, each
/// with per-direction [`SupportCounts`], plus incrementally maintained
/// total weight and entropy.
///
/// Cells start as clones of a per-model prototype (initializing the
/// counters takes one scan of the rule set, paid once per model rather than
/// once per cell) and are only ever narrowed by bans.
///
/// Invariants while the cell is live (not [`exhausted`](Self::is_exhausted)):
/// the total equals the sum of model weights over the remaining
/// possibilities, and the entropy equals the Shannon entropy of that total.
/// An exhausted cell is a contradiction; its totals stop being maintained.
#[derive(Clone, Debug)]
pub struct WaveCell<T> {
    possible: IndexMap<T, SupportCounts>,
    total: TileWeight,
    entropy: f64,
    exhausted: bool,
}

impl<T: Tile> WaveCell<T> {
    /// The fully-open cell for `model`: every tile possible, counters set
    /// to the number of supporting rules per direction.
    pub(crate) fn prototype(model: &AdjacencyModel<T>) -> Self {
        let directions = model.directions();
        let mut possible: IndexMap<T, SupportCounts> = model
            .weights()
            .keys()
            .map(|tile| (tile.clone(), SupportCounts::new(directions.len())))
            .collect();

        // A rule (origin, adjacent, d) supports `adjacent` along -d: with
        // `origin` placed at the neighbor in -d's opposite, `adjacent` may
        // stand here.
        for rule in model.rules() {
            let Some(i) = directions.index_of(&rule.direction) else {
                continue;
            };
            if let Some(counts) = possible.get_mut(&rule.adjacent) {
                counts.increment(directions.opposite(i));
            }
        }

        Self {
            possible,
            total: model.total(),
            entropy: model.max_entropy(),
            exhausted: false,
        }
    }

    /// Remove `tile` from the possibilities and update the totals.
    ///
    /// Removing the last possibility marks the cell exhausted
    /// (contradiction) and skips further bookkeeping.
    ///
    /// # Errors
    ///
    /// [`SolverError::UnknownTile`] when `tile` is not currently possible.
    pub(crate) fn ban(&mut self, tile: &T, model: &AdjacencyModel<T>) -> Result<(), SolverError> {
        if self.possible.shift_remove(tile).is_none() {
            return Err(SolverError::UnknownTile {
                tile: format!("{tile:?}"),
            });
        }
        if self.possible.is_empty() {
            self.exhausted = true;
            return Ok(());
        }
        let Some(weight) = model.weight_of(tile) else {
            return Err(SolverError::UnknownTile {
                tile: format!("{tile:?}"),
            });
        };
        self.total.subtract(&weight);
        self.entropy = self.total.entropy();
        Ok(())
    }

    /// Number of remaining possibilities.
    pub fn possibility_count(&self) -> usize {
        self.possible.len()
    }

    /// True once exactly one possibility remains.
    pub fn is_decided(&self) -> bool {
        self.possible.len() == 1
    }

    /// True when the possibilities ran out — a contradiction.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// True while `tile` remains possible here.
    pub fn contains(&self, tile: &T) -> bool {
        self.possible.contains_key(tile)
    }

    /// The remaining possibilities, in deterministic order.
    pub fn possibilities(&self) -> impl Iterator<Item = &T> {
        self.possible.keys()
    }

    /// The sole remaining possibility, once decided.
    pub fn sole(&self) -> Option<&T> {
        if self.possible.len() == 1 {
            self.possible.keys().next()
        } else {
            None
        }
    }

    /// The enablement counters of one possibility.
    pub fn support(&self, tile: &T) -> Option<&SupportCounts> {
        self.possible.get(tile)
    }

    /// Current total weight over the remaining possibilities.
    pub fn total_weight(&self) -> f64 {
        self.total.weight
    }

    /// Current Shannon entropy of the remaining possibility weights.
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Mutable iteration over `(tile, counters)` pairs (propagation).
    pub(crate) fn possible_mut(&mut self) -> impl Iterator<Item = (&T, &mut SupportCounts)> {
        self.possible.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quilt_core::Coord;
    use quilt_space::{DenseGrid, Space};

    fn alternating_model() -> AdjacencyModel<char> {
        let space = Space::bounded(&[6]).unwrap();
        let sample =
            DenseGrid::from_values(space, vec!['a', 'b', 'a', 'b', 'a', 'b']).unwrap();
        AdjacencyModel::from_sample(&sample).unwrap()
    }

    // ── Prototype ───────────────────────────────────────────────

    #[test]
    fn prototype_opens_every_tile() {
        let model = alternating_model();
        let cell = WaveCell::prototype(&model);
        assert_eq!(cell.possibility_count(), 2);
        assert!(cell.contains(&'a'));
        assert!(cell.contains(&'b'));
        assert!(!cell.is_decided());
        assert!(!cell.is_exhausted());
    }

    #[test]
    fn prototype_totals_match_model() {
        let model = alternating_model();
        let cell = WaveCell::prototype(&model);
        assert_eq!(cell.total_weight(), model.total().weight);
        assert_eq!(cell.entropy(), model.max_entropy());
    }

    #[test]
    fn prototype_counters_count_supporting_rules() {
        let model = alternating_model();
        let cell = WaveCell::prototype(&model);
        let directions = model.directions();

        // Alternation: each tile has exactly one supporter per direction
        // (the other tile).
        for tile in ['a', 'b'] {
            let counts = cell.support(&tile).unwrap();
            for i in 0..directions.len() {
                assert_eq!(counts.get(i), 1, "tile {tile:?} direction {i}");
            }
        }
    }

    // ── Bans ────────────────────────────────────────────────────

    #[test]
    fn ban_updates_weight_and_entropy() {
        let model = alternating_model();
        let mut cell = WaveCell::prototype(&model);
        cell.ban(&'a', &model).unwrap();

        assert_eq!(cell.possibility_count(), 1);
        assert!(cell.is_decided());
        assert_eq!(cell.sole(), Some(&'b'));
        assert_eq!(cell.total_weight(), 3.0);
        // One remaining tile: entropy collapses to zero.
        assert!(cell.entropy().abs() < 1e-12);
    }

    #[test]
    fn ban_of_unknown_tile_is_an_error() {
        let model = alternating_model();
        let mut cell = WaveCell::prototype(&model);
        let err = cell.ban(&'z', &model).unwrap_err();
        assert!(matches!(err, SolverError::UnknownTile { .. }));
    }

    #[test]
    fn banning_everything_exhausts_the_cell() {
        let model = alternating_model();
        let mut cell = WaveCell::prototype(&model);
        cell.ban(&'a', &model).unwrap();
        cell.ban(&'b', &model).unwrap();
        assert!(cell.is_exhausted());
        assert_eq!(cell.possibility_count(), 0);
        assert_eq!(cell.sole(), None);
    }

    #[test]
    fn entropy_coherence_after_bans() {
        let space = Space::bounded(&[8]).unwrap();
        let sample = DenseGrid::from_values(
            space,
            vec!['a', 'a', 'a', 'b', 'a', 'a', 'c', 'a'],
        )
        .unwrap();
        let model = AdjacencyModel::from_sample(&sample).unwrap();
        let mut cell = WaveCell::prototype(&model);
        cell.ban(&'b', &model).unwrap();

        // Recompute the expected totals from scratch.
        let mut expected = TileWeight::ZERO;
        for tile in cell.possibilities() {
            expected.accumulate(&model.weight_of(tile).unwrap());
        }
        assert!((cell.total_weight() - expected.weight).abs() < 1e-12);
        assert!((cell.entropy() - expected.entropy()).abs() < 1e-12);
    }

    #[test]
    fn clones_are_independent() {
        let model = alternating_model();
        let prototype = WaveCell::prototype(&model);
        let mut copy = prototype.clone();
        copy.ban(&'a', &model).unwrap();

        assert_eq!(prototype.possibility_count(), 2);
        assert_eq!(copy.possibility_count(), 1);
        assert_eq!(
            prototype.support(&'a').unwrap().get(0),
            1,
            "prototype counters must not alias the clone's"
        );
    }

    #[test]
    fn checker_prototype_counters() {
        // 2x2 checker sample: diagonal offsets pair like with like,
        // orthogonal offsets pair opposites.
        let space = Space::bounded(&[2, 2]).unwrap();
        let sample = DenseGrid::from_values(space, vec!['a', 'b', 'b', 'a']).unwrap();
        let model = AdjacencyModel::from_sample(&sample).unwrap();
        let cell = WaveCell::prototype(&model);
        let directions = model.directions();

        let diag = directions.index_of(&Coord::from([1, 1])).unwrap();
        let orth = directions.index_of(&Coord::from([0, 1])).unwrap();
        let counts = cell.support(&'a').unwrap();
        assert_eq!(counts.get(diag), 1, "only 'a' enables 'a' diagonally");
        assert_eq!(counts.get(orth), 1, "only 'b' enables 'a' orthogonally");
    }
}
