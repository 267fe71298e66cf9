//! Core trait definitions.
//!
//! Two seams live here:
//! - [`CardSolver`]: one interchangeable strategy for the max-card problem.
//!   Every strategy answers the same question, so they can be swapped and
//!   cross-checked freely.
//! - [`LayeredProblem`]: a forward dynamic program that advances a frontier
//!   one layer at a time. [`FrontierEngine`](crate::engine::FrontierEngine)
//!   drives it, keeping only block checkpoints alive, and walks it backwards
//!   to recover one optimal path.

use crate::cards::CardSequence;
use crate::error::CardResult;

/// A strategy computing the maximum number of cards that can be taken while
/// the running sum of taken cards never drops below zero.
pub trait CardSolver {
    /// Short lowercase name, used by the binaries and in trace spans.
    fn name(&self) -> &'static str;

    /// Solve for `cards`, where `n` is the declared number of cards.
    ///
    /// Fails with [`CardError::InvalidArgument`](crate::CardError::InvalidArgument)
    /// when `n != cards.len()`.
    fn solve(&self, n: usize, cards: &[i64]) -> CardResult<usize>;

    /// Solve a sequence whose length is already authoritative.
    fn solve_sequence(&self, cards: &CardSequence) -> CardResult<usize> {
        self.solve(cards.len(), cards.as_slice())
    }
}

/// A dynamic program laid out as layers `0..=T` with transitions only from
/// layer `i` to layer `i + 1`.
///
/// Semantics:
/// - `init_frontier` is the frontier at layer 0.
/// - `forward_step(i, f_i)` produces the frontier at layer `i + 1`.
/// - `terminal_state` picks an optimal state from the frontier at layer `T`.
/// - `backtrack(i, f_i, s_next)` names a state at layer `i` from which
///   `s_next` (a state at layer `i + 1`) is reached optimally.
pub trait LayeredProblem {
    /// A single state along the reconstructed path.
    type State: Clone + PartialEq;

    /// All DP values on one layer.
    type Frontier: Clone;

    /// Objective type; larger or smaller is up to the problem.
    type Cost: Copy + Ord;

    /// Number of transitions `T`.
    fn num_layers(&self) -> usize;

    /// Frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// One DP step from layer `layer` to `layer + 1`.
    ///
    /// Must depend only on `frontier_i` and fixed problem data.
    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier)
        -> CardResult<Self::Frontier>;

    /// Choose the state the reconstructed path ends in.
    fn terminal_state(&self, frontier_t: &Self::Frontier) -> Self::State;

    /// Predecessor of `state_next` on an optimal path, given the frontier
    /// at `layer`.
    fn backtrack(
        &self,
        layer: usize,
        frontier_i: &Self::Frontier,
        state_next: &Self::State,
    ) -> Self::State;

    /// Objective value of the terminal state.
    fn extract_cost(&self, frontier_t: &Self::Frontier, state_t: &Self::State) -> Self::Cost;
}
