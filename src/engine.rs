//! Checkpointed forward engine for layered dynamic programs.
//!
//! Two phases:
//! 1. A forward pass that advances the frontier layer by layer and keeps a
//!    copy only at the start of every block of `block_size` layers.
//! 2. A backward reconstruction that visits blocks last to first, recomputes
//!    the frontiers inside one block from its checkpoint, and asks the
//!    problem for the predecessor of the current state at each layer.
//!
//! At most `T / block_size` checkpoints plus `block_size` recomputed
//! frontiers are alive at once; the default block size ≈ √T balances the two.
//! [`FrontierEngine::run_cost`] skips phase 2 and keeps a single frontier.

use crate::blocks::BlockCheckpoint;
use crate::error::CardResult;
use crate::traits::LayeredProblem;
use crate::utils::default_block_size;

/// Engine for a given layered problem instance `P`.
///
/// ```
/// use card_dp::{FrontierEngine, solvers::iterative::CardProblem};
///
/// let cards = [4, -4, -1, -2, 9];
/// let engine = FrontierEngine::new(CardProblem::new(&cards));
/// let (count, path) = engine.run().unwrap();
/// assert_eq!(count, 4);
/// assert_eq!(path.len(), cards.len() + 1);
/// ```
pub struct FrontierEngine<P: LayeredProblem> {
    problem: P,
    block_size: usize,
}

impl<P: LayeredProblem> FrontierEngine<P> {
    /// Create an engine with the heuristic block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let b = default_block_size(problem.num_layers());
        Self::with_block_size(problem, b)
    }

    /// Create an engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Forward pass only: the optimal cost with one live frontier.
    pub fn run_cost(&self) -> CardResult<P::Cost> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("frontier_run_cost", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontier = self.problem.init_frontier();
        for layer in 0..self.problem.num_layers() {
            frontier = self.problem.forward_step(layer, &frontier)?;
        }
        let state_t = self.problem.terminal_state(&frontier);
        Ok(self.problem.extract_cost(&frontier, &state_t))
    }

    /// Run both phases.
    ///
    /// Returns `(optimal_cost, path)` where `path[i]` is the state at layer
    /// `i`, so the path holds `T + 1` states.
    pub fn run(&self) -> CardResult<(P::Cost, Vec<P::State>)> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("frontier_run", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (checkpoints, frontier_t) = self.build_checkpoints()?;
        let state_t = self.problem.terminal_state(&frontier_t);
        let cost = self.problem.extract_cost(&frontier_t, &state_t);

        let mut reversed = Vec::with_capacity(self.problem.num_layers() + 1);
        reversed.push(state_t);
        for block in checkpoints.iter().rev() {
            self.reconstruct_block(block, &mut reversed)?;
        }
        reversed.reverse();

        Ok((cost, reversed))
    }

    /// Phase I: checkpoints at the start of each block, plus the frontier at
    /// layer T.
    fn build_checkpoints(&self) -> CardResult<(Vec<BlockCheckpoint<P::Frontier>>, P::Frontier)> {
        let t = self.problem.num_layers();
        let b = self.block_size;
        let num_blocks = if t == 0 { 0 } else { t.div_ceil(b) };

        let mut checkpoints = Vec::with_capacity(num_blocks);
        let mut frontier = self.problem.init_frontier();

        for k in 0..num_blocks {
            let start = k * b;
            let end = ((k + 1) * b).min(t);
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("checkpoint_block", block = k, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let mut next = self.problem.forward_step(start, &frontier)?;
            for layer in start + 1..end {
                next = self.problem.forward_step(layer, &next)?;
            }
            checkpoints.push(BlockCheckpoint {
                start,
                end,
                frontier,
            });
            frontier = next;
        }

        Ok((checkpoints, frontier))
    }

    /// Phase II for one block: extend `reversed` (whose last element is the
    /// state at `block.end`) down to the state at `block.start`.
    fn reconstruct_block(
        &self,
        block: &BlockCheckpoint<P::Frontier>,
        reversed: &mut Vec<P::State>,
    ) -> CardResult<()> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("reconstruct_block", start = block.start, end = block.end);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        // inner[k] is the frontier at layer block.start + k
        let mut inner = Vec::with_capacity(block.len());
        inner.push(block.frontier.clone());
        for layer in block.start..block.end.saturating_sub(1) {
            let next = self.problem.forward_step(layer, &inner[layer - block.start])?;
            inner.push(next);
        }

        for layer in block.layers().rev() {
            let state_next = reversed
                .last()
                .expect("reconstruction always starts from the terminal state");
            let state = self
                .problem
                .backtrack(layer, &inner[layer - block.start], state_next);
            reversed.push(state);
        }
        Ok(())
    }
}
