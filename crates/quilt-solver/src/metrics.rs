//! Per-run work metrics for the solver.
//!
//! [`SolveMetrics`] captures counters for a single run, enabling telemetry
//! and performance regression checks without any logging dependency.

/// Work counters collected during a single solver run.
///
/// The solver populates these as it goes; consumers read them from the
/// returned [`SolveReport`](crate::SolveReport).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveMetrics {
    /// Number of observe steps (cells collapsed by the main loop).
    pub collapses: u64,
    /// Number of possibility bans caused by propagation.
    pub propagated_bans: u64,
    /// Number of enablement counter decrements performed.
    pub support_decrements: u64,
    /// High-water mark of the propagation stack.
    pub peak_stack_depth: usize,
}
