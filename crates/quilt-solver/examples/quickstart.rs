//! Quilt quickstart — synthesize a tiling from a tiny example.
//!
//! Demonstrates:
//!   1. Building a sample grid over a bounded 2-D space
//!   2. Learning an adjacency model from it
//!   3. Running the solver with a seeded RNG
//!   4. Pinning a cell with predetermined options
//!   5. Reading the collapsed output back
//!
//! Run with:
//!   cargo run --example quickstart

use quilt_core::Coord;
use quilt_model::AdjacencyModel;
use quilt_solver::{SolveOptions, Solver};
use quilt_space::{DenseGrid, Space};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const ROWS: i32 = 8;
const COLS: i32 = 16;

fn main() {
    // A 2x2 checker example: orthogonal neighbors differ, diagonal
    // neighbors match.
    let sample_space = Space::bounded(&[2, 2]).expect("sample space");
    let sample = DenseGrid::from_values(sample_space, vec!['#', '.', '.', '#'])
        .expect("sample values");

    let model = AdjacencyModel::from_sample(&sample).expect("model");
    println!(
        "learned {} rules over {} tiles (max entropy {:.3})",
        model.rule_count(),
        model.tile_count(),
        model.max_entropy()
    );

    // Synthesize a larger board, pinning the corner to '#'.
    let output = Space::bounded(&[ROWS, COLS]).expect("output space");
    let solver = Solver::new(output, &model).expect("solver");
    let options = SolveOptions::new().seed(Coord::from([0, 0]), '#');

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let report = solver.run_with(&mut rng, &options).expect("run");

    match report.tiles() {
        Some(tiles) => {
            for r in 0..ROWS {
                let row: String = (0..COLS)
                    .map(|col| *tiles.get(&Coord::from([r, col])).expect("cell"))
                    .collect();
                println!("{row}");
            }
            println!(
                "collapses: {}, propagated bans: {}, peak stack: {}",
                report.metrics.collapses,
                report.metrics.propagated_bans,
                report.metrics.peak_stack_depth
            );
        }
        None => println!("run hit a contradiction: {:?}", report.verdict),
    }
}
