//! The [`Solver`]: selection, collapse, propagation, termination.

use crate::cell::WaveCell;
use crate::error::SolverError;
use crate::metrics::SolveMetrics;
use quilt_core::{Coord, Tile};
use quilt_model::AdjacencyModel;
use quilt_space::{DenseGrid, Space};
use rand::Rng;

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every cell holds exactly one possibility.
    Complete,
    /// Propagation exhausted the possibilities of some cell.
    Contradiction {
        /// The first cell observed with no remaining possibilities.
        cell: Coord,
    },
}

/// The outcome of a run: the terminal wave, the verdict, and work metrics.
///
/// The wave is returned on success *and* on contradiction — a failed run's
/// wave shows exactly which cell ran dry, which is the main debugging aid
/// when an over-constrained seed set cannot be satisfied.
#[derive(Clone, Debug)]
pub struct SolveReport<T> {
    /// The terminal wave, complete or partial.
    pub wave: DenseGrid<WaveCell<T>>,
    /// How the run ended.
    pub verdict: Verdict,
    /// Work counters for the run.
    pub metrics: SolveMetrics,
}

impl<T: Tile> SolveReport<T> {
    /// True when every cell collapsed to a single tile.
    pub fn is_complete(&self) -> bool {
        self.verdict == Verdict::Complete
    }

    /// Project a completed wave to its tiles, reading the sole possibility
    /// of each cell. `None` unless the run completed.
    pub fn tiles(&self) -> Option<DenseGrid<T>> {
        if !self.is_complete() {
            return None;
        }
        let mut values = Vec::with_capacity(self.wave.space().cell_count());
        for (_, cell) in self.wave.iter() {
            values.push(cell.sole()?.clone());
        }
        DenseGrid::from_values(self.wave.space().clone(), values).ok()
    }
}

/// Pre-placed tiles and pre-banned possibilities for a run.
///
/// Entries whose coordinates fall outside the output space are silently
/// ignored, per contract. Coordinates on periodic axes are wrapped to their
/// canonical cell before application.
///
/// # Examples
///
/// ```
/// use quilt_core::Coord;
/// use quilt_solver::SolveOptions;
///
/// let options = SolveOptions::new()
///     .seed(Coord::from([0]), 'a')
///     .ban(Coord::from([3]), 'b');
/// assert_eq!(options.seeds().len(), 1);
/// assert_eq!(options.bans().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct SolveOptions<T> {
    seeds: Vec<(Coord, T)>,
    bans: Vec<(Coord, T)>,
}

impl<T: Tile> SolveOptions<T> {
    /// No predetermined tiles or bans.
    pub fn new() -> Self {
        Self {
            seeds: Vec::new(),
            bans: Vec::new(),
        }
    }

    /// Collapse the cell at `coord` to `tile` before the main loop.
    ///
    /// Seeding a tile that is not actually possible there reports a
    /// contradiction, exactly as a mid-run dead end would.
    pub fn seed(mut self, coord: Coord, tile: T) -> Self {
        self.seeds.push((coord, tile));
        self
    }

    /// Ban `tile` at `coord` before the main loop.
    pub fn ban(mut self, coord: Coord, tile: T) -> Self {
        self.bans.push((coord, tile));
        self
    }

    /// The predetermined tiles, in application order.
    pub fn seeds(&self) -> &[(Coord, T)] {
        &self.seeds
    }

    /// The predetermined bans, in application order.
    pub fn bans(&self) -> &[(Coord, T)] {
        &self.bans
    }
}

impl<T: Tile> Default for SolveOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The observe/propagate engine: an output [`Space`] paired with an
/// [`AdjacencyModel`].
///
/// A solver is cheap to keep around: the model is borrowed, and the only
/// owned state is the prototype cell every run clones its wave from.
/// Each [`run`](Self::run) owns its wave for the duration of the run, so a
/// shared model may back solvers on several threads at once.
///
/// # Examples
///
/// ```
/// use quilt_model::AdjacencyModel;
/// use quilt_solver::Solver;
/// use quilt_space::{DenseGrid, Space};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let sample_space = Space::bounded(&[6]).unwrap();
/// let sample =
///     DenseGrid::from_values(sample_space, vec!['a', 'b', 'a', 'b', 'a', 'b']).unwrap();
/// let model = AdjacencyModel::from_sample(&sample).unwrap();
///
/// let solver = Solver::new(Space::bounded(&[8]).unwrap(), &model).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let report = solver.run(&mut rng).unwrap();
///
/// assert!(report.is_complete());
/// let tiles = report.tiles().unwrap();
/// for pair in tiles.values().windows(2) {
///     assert_ne!(pair[0], pair[1], "alternation must hold");
/// }
/// ```
#[derive(Debug)]
pub struct Solver<'m, T: Tile> {
    space: Space,
    model: &'m AdjacencyModel<T>,
    prototype: WaveCell<T>,
}

impl<'m, T: Tile> Solver<'m, T> {
    /// Pair an output space with a model.
    ///
    /// # Errors
    ///
    /// [`SolverError::DimensionMismatch`] when their dimensionalities
    /// disagree.
    pub fn new(space: Space, model: &'m AdjacencyModel<T>) -> Result<Self, SolverError> {
        if model.ndim() != space.ndim() {
            return Err(SolverError::DimensionMismatch {
                model: model.ndim(),
                output: space.ndim(),
            });
        }
        let prototype = WaveCell::prototype(model);
        Ok(Self {
            space,
            model,
            prototype,
        })
    }

    /// The output space.
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// The adjacency model.
    pub fn model(&self) -> &AdjacencyModel<T> {
        self.model
    }

    /// Run with no predetermined state.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SolveReport<T>, SolverError> {
        self.run_with(rng, &SolveOptions::new())
    }

    /// Run with predetermined tiles and bans.
    ///
    /// # Errors
    ///
    /// Only internal invariant violations surface as `Err`; contradictions
    /// (including caller-caused ones) come back as
    /// [`Verdict::Contradiction`] with the partial wave attached.
    pub fn run_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        options: &SolveOptions<T>,
    ) -> Result<SolveReport<T>, SolverError> {
        let mut wave = DenseGrid::filled(self.space.clone(), self.prototype.clone());
        let mut stack: Vec<(Coord, T)> = Vec::new();
        let mut metrics = SolveMetrics::default();

        // Predetermined bans first: they only narrow, never decide.
        for (coord, tile) in options.bans() {
            let Some(at) = self.resolve(coord) else {
                continue;
            };
            let Some(cell) = wave.get_mut(&at) else {
                continue;
            };
            if !cell.contains(tile) {
                // Already impossible (duplicate ban): nothing to do.
                continue;
            }
            cell.ban(tile, self.model)?;
            if cell.is_exhausted() {
                return Ok(SolveReport {
                    wave,
                    verdict: Verdict::Contradiction { cell: at },
                    metrics,
                });
            }
            stack.push((at, tile.clone()));
            metrics.peak_stack_depth = metrics.peak_stack_depth.max(stack.len());
        }

        // Predetermined tiles: collapse each seeded cell.
        for (coord, tile) in options.seeds() {
            let Some(at) = self.resolve(coord) else {
                continue;
            };
            if let Some(dead) = self.collapse(&mut wave, &mut stack, &at, tile, &mut metrics)? {
                return Ok(SolveReport {
                    wave,
                    verdict: Verdict::Contradiction { cell: dead },
                    metrics,
                });
            }
        }

        if let Some(dead) = self.propagate(&mut wave, &mut stack, &mut metrics)? {
            return Ok(SolveReport {
                wave,
                verdict: Verdict::Contradiction { cell: dead },
                metrics,
            });
        }

        loop {
            let Some(at) = self.select(&wave, rng) else {
                return Ok(SolveReport {
                    wave,
                    verdict: Verdict::Complete,
                    metrics,
                });
            };

            let tile = match wave.get(&at) {
                Some(cell) => self.pick(rng, cell)?,
                None => return Err(SolverError::ZeroTotalWeight),
            };
            metrics.collapses += 1;

            if let Some(dead) = self.collapse(&mut wave, &mut stack, &at, &tile, &mut metrics)? {
                return Ok(SolveReport {
                    wave,
                    verdict: Verdict::Contradiction { cell: dead },
                    metrics,
                });
            }
            if let Some(dead) = self.propagate(&mut wave, &mut stack, &mut metrics)? {
                return Ok(SolveReport {
                    wave,
                    verdict: Verdict::Contradiction { cell: dead },
                    metrics,
                });
            }
        }
    }

    /// Canonicalize a caller-supplied coordinate, dropping out-of-bounds
    /// entries per contract.
    fn resolve(&self, coord: &Coord) -> Option<Coord> {
        if !self.space.in_bounds(coord) {
            return None;
        }
        self.space.wrap(coord).ok()
    }

    /// Among cells with more than one possibility, the one with the lowest
    /// entropy; exact ties break uniformly via a reservoir draw on `rng`.
    fn select<R: Rng + ?Sized>(
        &self,
        wave: &DenseGrid<WaveCell<T>>,
        rng: &mut R,
    ) -> Option<Coord> {
        let mut best: Option<(Coord, f64)> = None;
        let mut ties = 0usize;
        for (coord, cell) in wave.iter() {
            if cell.possibility_count() <= 1 {
                continue;
            }
            let entropy = cell.entropy();
            let take = match best.as_ref() {
                None => {
                    ties = 0;
                    true
                }
                Some((_, lowest)) if entropy < *lowest => {
                    ties = 0;
                    true
                }
                Some((_, lowest)) if entropy == *lowest => {
                    ties += 1;
                    rng.gen_range(0..=ties) == 0
                }
                Some(_) => false,
            };
            if take {
                best = Some((coord, entropy));
            }
        }
        best.map(|(coord, _)| coord)
    }

    /// Draw one of the cell's possibilities with probability proportional
    /// to its model weight.
    fn pick<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        cell: &WaveCell<T>,
    ) -> Result<T, SolverError> {
        let total = cell.total_weight();
        if !(total > 0.0) {
            return Err(SolverError::ZeroTotalWeight);
        }
        let mut remaining = rng.gen::<f64>() * total;
        let mut last = None;
        for tile in cell.possibilities() {
            let Some(weight) = self.model.weight_of(tile) else {
                continue;
            };
            if remaining < weight.weight {
                return Ok(tile.clone());
            }
            remaining -= weight.weight;
            last = Some(tile);
        }
        // Reachable only through floating-point rounding at the top of the
        // range; the final possibility is the correct draw there.
        last.cloned().ok_or(SolverError::ZeroTotalWeight)
    }

    /// Ban every possibility of the cell at `at` except `tile`, pushing each
    /// ban for propagation. Returns the cell coordinate if the collapse
    /// exhausted it (the seeded tile was not actually possible).
    fn collapse(
        &self,
        wave: &mut DenseGrid<WaveCell<T>>,
        stack: &mut Vec<(Coord, T)>,
        at: &Coord,
        tile: &T,
        metrics: &mut SolveMetrics,
    ) -> Result<Option<Coord>, SolverError> {
        let Some(cell) = wave.get_mut(at) else {
            return Ok(None);
        };
        let others: Vec<T> = cell
            .possibilities()
            .filter(|other| *other != tile)
            .cloned()
            .collect();
        for other in others {
            cell.ban(&other, self.model)?;
            stack.push((at.clone(), other));
            metrics.peak_stack_depth = metrics.peak_stack_depth.max(stack.len());
            if cell.is_exhausted() {
                return Ok(Some(at.clone()));
            }
        }
        Ok(None)
    }

    /// Drain the ban stack, cutting support at neighbors until quiescence.
    /// Returns the coordinate of the first exhausted cell, if any.
    fn propagate(
        &self,
        wave: &mut DenseGrid<WaveCell<T>>,
        stack: &mut Vec<(Coord, T)>,
        metrics: &mut SolveMetrics,
    ) -> Result<Option<Coord>, SolverError> {
        let directions = self.model.directions();
        let mut newly_impossible: Vec<T> = Vec::new();

        while let Some((at, banned)) = stack.pop() {
            for (i, offset) in directions.iter().enumerate() {
                let stepped = at.add(offset)?;
                if !self.space.in_bounds(&stepped) {
                    continue;
                }
                let adjacent = self.space.wrap(&stepped)?;
                let Some(cell) = wave.get_mut(&adjacent) else {
                    continue;
                };

                // The banned tile stops supporting, at the adjacent cell,
                // every tile it allowed along this offset; those tiles'
                // counters toward us (the opposite offset) drop by one.
                let opposite = directions.opposite(i);
                for (tile, support) in cell.possible_mut() {
                    if self.model.allows(&banned, tile, offset) {
                        metrics.support_decrements += 1;
                        if !support.decrement(opposite) {
                            newly_impossible.push(tile.clone());
                        }
                    }
                }

                for tile in newly_impossible.drain(..) {
                    cell.ban(&tile, self.model)?;
                    metrics.propagated_bans += 1;
                    if cell.is_exhausted() {
                        return Ok(Some(adjacent));
                    }
                    stack.push((adjacent.clone(), tile));
                    metrics.peak_stack_depth = metrics.peak_stack_depth.max(stack.len());
                }
            }
        }
        Ok(None)
    }
}
